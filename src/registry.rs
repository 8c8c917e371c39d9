// Maps wire resource handles to their typed per-object state.
//
// wayland-server already owns the wire resource lifetime (destruction
// via the client's `destroy` request or disconnect calls our
// `Dispatch::destroyed`), so this registry exists to answer one
// question cheaply from anywhere in the crate: "does the data for this
// handle still exist, and if so, what is it". Everything that needs to
// hold on to a resource past the call that created it stores a `Weak`
// into this table rather than a strong reference, so a client-driven
// destroy always wins.
//
// Keyed generically on `K` (in production, `wayland_server::backend::
// ObjectId`) so the bookkeeping can be unit tested without a live
// display.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::{Rc, Weak};

#[cfg(test)]
mod tests;

pub struct Registry<K, T> {
    entries: HashMap<K, Rc<RefCell<T>>>,
}

impl<K: Eq + Hash + Clone, T> Registry<K, T> {
    pub fn new() -> Registry<K, T> {
        Registry {
            entries: HashMap::new(),
        }
    }

    /// Registers `data` under `id`. Returns the strong handle the
    /// caller should stash as Dispatch userdata.
    pub fn insert(&mut self, id: K, data: T) -> Rc<RefCell<T>> {
        let rc = Rc::new(RefCell::new(data));
        self.entries.insert(id, rc.clone());
        rc
    }

    /// A weak reference suitable for long-lived holders (the window
    /// list, a seat's focus tracking) that must not keep the object
    /// alive past its destruction.
    pub fn weak(&self, id: &K) -> Option<Weak<RefCell<T>>> {
        self.entries.get(id).map(Rc::downgrade)
    }

    pub fn get(&self, id: &K) -> Option<Rc<RefCell<T>>> {
        self.entries.get(id).cloned()
    }

    /// Removes the mapping for `id`. Called from `Dispatch::destroyed`.
    /// The underlying data is only actually dropped once every strong
    /// reference (including ones this call removes) goes away.
    pub fn remove(&mut self, id: &K) {
        self.entries.remove(id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash + Clone, T> Default for Registry<K, T> {
    fn default() -> Self {
        Registry::new()
    }
}

/// Filters a collection of weak references down to the ones that still
/// resolve, used identically by the compositor's window list and any
/// registry-backed scan that must skip entries whose owner is gone.
pub fn live<'a, T>(weak_refs: impl Iterator<Item = &'a Weak<RefCell<T>>>) -> Vec<Rc<RefCell<T>>>
where
    T: 'a,
{
    weak_refs.filter_map(Weak::upgrade).collect()
}
