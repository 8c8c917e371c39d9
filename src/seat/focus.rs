// The pointer enter/motion/leave decision, pulled out as a pure state
// machine over a generic key so it is unit-testable without a live
// wayland connection (`wl_surface`'s `ObjectId` has no public
// constructor outside the library). `Seat` instantiates this with
// `wayland_server::backend::ObjectId`.

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTransition {
    Enter,
    Motion,
}

/// Tracks which surface last received a `wl_pointer.enter`, so the
/// next motion sample targeting the same surface is a `motion` rather
/// than a redundant `enter`.
#[derive(Debug)]
pub struct PointerFocus<K> {
    last_entered: Option<K>,
}

impl<K: PartialEq + Clone> PointerFocus<K> {
    pub fn new() -> PointerFocus<K> {
        PointerFocus { last_entered: None }
    }

    /// Records `surface` as the newly targeted surface and reports
    /// whether this is a fresh `enter` or a continuing `motion`.
    pub fn transition(&mut self, surface: K) -> FocusTransition {
        let transition = if self.last_entered.as_ref() == Some(&surface) {
            FocusTransition::Motion
        } else {
            FocusTransition::Enter
        };
        self.last_entered = Some(surface);
        transition
    }

    /// Forgets the tracked focus, returning the surface that was
    /// focused (if any) so the caller can address a `leave` to it.
    pub fn clear(&mut self) -> Option<K> {
        self.last_entered.take()
    }
}

impl<K: PartialEq + Clone> Default for PointerFocus<K> {
    fn default() -> Self {
        PointerFocus::new()
    }
}
