// Helpers for budgeting the compositor's per-frame work.
//
// The serial allocator mints the monotonically increasing numbers that
// every event requiring later client acknowledgement carries. The clock
// measures program uptime in milliseconds for frame callbacks; it is
// backed by `Instant` rather than `SystemTime` so that it cannot run
// backwards under a wall-clock adjustment.

use lazy_static::lazy_static;
use std::time::Instant;

#[cfg(test)]
mod tests;

lazy_static! {
    static ref PROCESS_START: Instant = Instant::now();
}

/// Free-standing helper used only by the logging macros, which have no
/// access to a particular `Clock` instance at the call site.
pub fn uptime_ms_for_log() -> u32 {
    PROCESS_START.elapsed().as_millis() as u32
}

/// Monotonic, process-uptime clock. One instance is created at server
/// start and shared by everything that needs `elapsed_ms`.
#[derive(Debug, Clone)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn new() -> Clock {
        Clock {
            start: Instant::now(),
        }
    }

    /// Milliseconds elapsed since this clock was constructed.
    pub fn uptime_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::new()
    }
}

/// Mints the serials attached to configure/enter/leave/button events.
///
/// Starts at 0; the first call to `next()` returns 1, so serial 0 is
/// reserved and never observed on the wire.
#[derive(Debug, Clone, Default)]
pub struct SerialAllocator {
    counter: u32,
}

impl SerialAllocator {
    pub fn new() -> SerialAllocator {
        SerialAllocator { counter: 0 }
    }

    pub fn next(&mut self) -> u32 {
        self.counter = self.counter.wrapping_add(1);
        self.counter
    }

    /// The most recently minted serial, without allocating a new one.
    pub fn current(&self) -> u32 {
        self.counter
    }
}

/// A simple period timer, used to decide when the main loop's next
/// frame deadline has arrived.
pub struct FrameBudget {
    period_us: u64,
    last_deadline: Instant,
}

impl FrameBudget {
    pub fn new(fps: u32) -> FrameBudget {
        FrameBudget {
            period_us: 1_000_000 / fps as u64,
            last_deadline: Instant::now(),
        }
    }

    /// Advances the deadline by one period and returns how long the
    /// caller should sleep to reach it (zero if already overdue).
    pub fn next_sleep(&mut self) -> std::time::Duration {
        self.last_deadline += std::time::Duration::from_micros(self.period_us);
        let now = Instant::now();
        if self.last_deadline > now {
            self.last_deadline - now
        } else {
            self.last_deadline = now;
            std::time::Duration::from_micros(0)
        }
    }
}
