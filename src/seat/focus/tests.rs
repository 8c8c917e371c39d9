use super::*;

#[test]
fn first_entry_is_enter() {
    let mut focus: PointerFocus<u32> = PointerFocus::new();
    assert_eq!(focus.transition(1), FocusTransition::Enter);
}

#[test]
fn repeated_entry_to_same_surface_is_motion() {
    let mut focus: PointerFocus<u32> = PointerFocus::new();
    assert_eq!(focus.transition(1), FocusTransition::Enter);
    assert_eq!(focus.transition(1), FocusTransition::Motion);
    assert_eq!(focus.transition(1), FocusTransition::Motion);
}

#[test]
fn moving_to_a_different_surface_is_enter_again() {
    let mut focus: PointerFocus<u32> = PointerFocus::new();
    assert_eq!(focus.transition(1), FocusTransition::Enter);
    assert_eq!(focus.transition(2), FocusTransition::Enter);
    assert_eq!(focus.transition(2), FocusTransition::Motion);
}

#[test]
fn clear_forgets_focus_so_the_next_entry_is_enter() {
    let mut focus: PointerFocus<u32> = PointerFocus::new();
    focus.transition(1);
    assert_eq!(focus.clear(), Some(1));
    assert_eq!(focus.clear(), None);
    assert_eq!(focus.transition(1), FocusTransition::Enter);
}
