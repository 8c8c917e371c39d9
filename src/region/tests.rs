use super::*;

#[test]
fn empty_region_contains_nothing() {
    let region = Region::new();
    assert!(!region.contains(0, 0));
    assert!(!region.contains(5, 5));
}

#[test]
fn add_then_query_follows_containment() {
    let mut region = Region::new();
    region.add(0, 0, 10, 10);
    assert!(region.contains(0, 0));
    assert!(region.contains(9, 9));
    assert!(!region.contains(10, 10));
    assert!(!region.contains(-1, 0));
}

#[test]
fn union_of_two_rects_contains_both() {
    let mut region = Region::new();
    region.add(0, 0, 5, 5);
    region.add(100, 100, 5, 5);
    assert!(region.contains(2, 2));
    assert!(region.contains(102, 102));
    assert!(!region.contains(50, 50));
}

#[test]
fn subtract_removes_the_overlapping_area() {
    let mut region = Region::new();
    region.add(0, 0, 10, 10);
    region.subtract(0, 0, 5, 10);
    assert!(!region.contains(2, 2));
    assert!(region.contains(7, 2));
}

#[test]
fn subtract_from_empty_region_stays_empty() {
    let mut region = Region::new();
    region.subtract(0, 0, 10, 10);
    assert!(!region.contains(5, 5));
}

#[test]
fn subtract_then_add_back_restores_containment() {
    let mut region = Region::new();
    region.add(0, 0, 10, 10);
    region.subtract(2, 2, 4, 4);
    assert!(!region.contains(3, 3));
    region.add(2, 2, 4, 4);
    assert!(region.contains(3, 3));
}
