use super::*;

#[test]
fn serials_start_at_one_and_increase() {
    let mut serials = SerialAllocator::new();
    assert_eq!(serials.current(), 0);
    let first = serials.next();
    assert_eq!(first, 1);
    let second = serials.next();
    assert_eq!(second, 2);
    assert!(second > first);
}

#[test]
fn serials_are_strictly_monotonic_over_a_run() {
    let mut serials = SerialAllocator::new();
    let mut previous = serials.next();
    for _ in 0..1000 {
        let next = serials.next();
        assert!(next > previous, "serial went backwards or stalled");
        previous = next;
    }
}

#[test]
fn clock_uptime_is_monotonic() {
    let clock = Clock::new();
    let a = clock.uptime_ms();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let b = clock.uptime_ms();
    assert!(b >= a);
}

#[test]
fn frame_budget_never_returns_a_negative_sleep() {
    let mut budget = FrameBudget::new(60);
    for _ in 0..5 {
        let sleep = budget.next_sleep();
        assert!(sleep.as_micros() <= 1_000_000 / 60);
    }
}
