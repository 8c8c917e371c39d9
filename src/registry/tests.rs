use super::*;

#[test]
fn insert_then_remove_leaves_registry_empty() {
    let mut reg: Registry<u32, &'static str> = Registry::new();
    let handle = reg.insert(1, "surface");
    assert_eq!(reg.len(), 1);
    drop(handle);
    reg.remove(&1);
    assert!(reg.is_empty());
}

#[test]
fn lookup_after_destroy_is_invalid() {
    let mut reg: Registry<u32, &'static str> = Registry::new();
    reg.insert(42, "toplevel");
    reg.remove(&42);
    assert!(reg.get(&42).is_none());
    assert!(reg.weak(&42).is_none());
}

#[test]
fn destroy_does_not_disturb_other_entries() {
    let mut reg: Registry<u32, i32> = Registry::new();
    reg.insert(1, 10);
    reg.insert(2, 20);
    reg.remove(&1);
    assert_eq!(reg.len(), 1);
    assert_eq!(*reg.get(&2).unwrap().borrow(), 20);
}

#[test]
fn weak_reference_outlives_removal_from_registry_but_not_the_strong_handle() {
    let mut reg: Registry<u32, i32> = Registry::new();
    let strong = reg.insert(7, 100);
    let weak = reg.weak(&7).unwrap();
    reg.remove(&7);
    // The registry no longer tracks it, but the strong handle (as
    // Dispatch userdata would) keeps the data alive.
    assert!(weak.upgrade().is_some());
    drop(strong);
    assert!(weak.upgrade().is_none());
}

#[test]
fn live_filters_out_expired_weak_refs() {
    let mut reg: Registry<u32, i32> = Registry::new();
    let a = reg.insert(1, 1);
    let _b = reg.insert(2, 2);
    let weak_a = reg.weak(&1).unwrap();
    let weak_b = reg.weak(&2).unwrap();
    drop(a);
    reg.remove(&1);

    let refs = vec![weak_a, weak_b];
    let alive = live(refs.iter());
    assert_eq!(alive.len(), 1);
    assert_eq!(*alive[0].borrow(), 2);
}
