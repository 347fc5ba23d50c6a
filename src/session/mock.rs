//! In-memory session backend used when no identity provider is configured.
//!
//! SYSTEM CONTEXT
//! ==============
//! Selected at boot when the publishable key is missing or the placeholder.
//! State lives only as long as the application instance: every reload starts
//! signed out. Mock sessions carry no security guarantee at all, which is why
//! selecting this backend always raises the mock-mode advisory.

use std::cell::Cell;
use std::rc::Rc;

use super::compat;
use super::listeners::Listeners;
use super::state::{Listener, ListenerId, SessionModel, SessionState};
use crate::error::SessionError;

#[cfg(test)]
#[path = "mock_test.rs"]
mod tests;

/// Mock backend. Clones share the same state.
#[derive(Clone)]
pub struct MockBackend {
    inner: Rc<MockInner>,
}

struct MockInner {
    signed_in: Cell<bool>,
    /// Set once this backend is the published one; only then does it own the
    /// compatibility slot.
    mirrored: Cell<bool>,
    listeners: Listeners,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Fresh backend, signed out and already loaded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(MockInner {
                signed_in: Cell::new(false),
                mirrored: Cell::new(false),
                listeners: Listeners::default(),
            }),
        }
    }

    /// Take ownership of the compatibility slot and keep it in sync from now
    /// on. Called when this backend is published.
    pub(crate) fn mirror_to_compat_slot(&self) {
        self.inner.mirrored.set(true);
        compat::publish_mock_snapshot(self.state());
    }

    /// Overwrite the signed-in flag and notify every subscriber.
    ///
    /// Used by the demo sign-in action and by tests to simulate a login
    /// without a credential exchange.
    pub fn set_signed_in(&self, value: bool) {
        self.inner.signed_in.set(value);
        let state = self.state();
        if self.inner.mirrored.get() {
            compat::publish_mock_snapshot(state);
        }
        log::debug!("mock session signed_in={value}");
        self.inner.listeners.notify(state);
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }
}

#[async_trait::async_trait(?Send)]
impl SessionModel for MockBackend {
    fn state(&self) -> SessionState {
        SessionState::loaded(self.inner.signed_in.get())
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        self.set_signed_in(false);
        Ok(())
    }

    fn subscribe(&self, listener: Listener) -> ListenerId {
        self.inner.listeners.add(listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.inner.listeners.remove(id);
    }
}
