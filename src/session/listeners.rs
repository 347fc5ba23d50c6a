//! Listener registry shared by backends that publish state transitions.

use std::cell::{Cell, RefCell};

use super::state::{Listener, ListenerId, SessionState};

#[cfg(test)]
#[path = "listeners_test.rs"]
mod tests;

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(ListenerId, Listener)>>,
}

impl Listeners {
    pub(crate) fn add(&self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, listener));
        id
    }

    pub(crate) fn remove(&self, id: ListenerId) {
        self.entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
    }

    /// Call every listener registered at the time of the call.
    ///
    /// The list is snapshotted first so a listener may subscribe or
    /// unsubscribe without hitting a `RefCell` double borrow.
    pub(crate) fn notify(&self, state: SessionState) {
        let snapshot: Vec<Listener> = self.entries.borrow().iter().map(|(_, l)| l.clone()).collect();
        for listener in snapshot {
            listener(state);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}
