//! Published session state for one application instance.
//!
//! ARCHITECTURE
//! ============
//! Boot publishes exactly one backend; after that the reference never
//! changes, so reads need no locking. Every consumer (guards, auth panel,
//! header actions) reads through here rather than holding a backend.
//!
//! ERROR HANDLING
//! ==============
//! A second `publish` is a programming error and is reported as
//! [`SessionError::DoublePublish`] without touching the installed backend.
//! Boot treats it as fatal.

use std::cell::OnceCell;
use std::rc::Rc;

use super::backend::{BackendKind, SessionBackend};
use super::state::{Listener, ListenerId, SessionModel, SessionState};
use crate::error::SessionError;

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;

/// Cheap to clone; clones share the same slot.
#[derive(Clone, Default)]
pub struct SessionContext {
    slot: Rc<OnceCell<SessionBackend>>,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the backend chosen at boot.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DoublePublish`] if a backend is already
    /// installed. The rejected backend is dropped and never touches the
    /// compatibility slot.
    pub fn publish(&self, backend: SessionBackend) -> Result<(), SessionError> {
        let kind = backend.kind();
        self.slot.set(backend).map_err(|_rejected| {
            log::error!("refusing to publish a second session backend ({kind:?})");
            SessionError::DoublePublish
        })?;
        if let Some(mock) = self.slot.get().and_then(SessionBackend::as_mock) {
            mock.mirror_to_compat_slot();
        }
        log::debug!("session backend published ({kind:?})");
        Ok(())
    }

    /// Latest state from the installed backend, or the loading state before
    /// boot has published one.
    #[must_use]
    pub fn current(&self) -> SessionState {
        self.slot.get().map_or(SessionState::LOADING, SessionModel::state)
    }

    #[must_use]
    pub fn backend(&self) -> Option<&SessionBackend> {
        self.slot.get()
    }

    #[must_use]
    pub fn kind(&self) -> Option<BackendKind> {
        self.slot.get().map(SessionBackend::kind)
    }

    /// Sign out through the installed backend.
    ///
    /// State is only observed as signed out once this resolves; until then
    /// readers keep seeing the last known state.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotPublished`] before boot, or the backend's
    /// [`SessionError::SignOutFailed`], in which case state is unchanged.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        let backend = self.slot.get().ok_or(SessionError::NotPublished)?;
        backend.sign_out().await?;
        debug_assert!(!backend.state().signed_in, "backend signed in after a successful sign-out");
        Ok(())
    }

    /// Simulate a login or logout in mock mode.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotPublished`] before boot, [`SessionError::NotMockBackend`]
    /// when real sessions are active.
    pub fn set_signed_in(&self, value: bool) -> Result<(), SessionError> {
        let backend = self.slot.get().ok_or(SessionError::NotPublished)?;
        let mock = backend.as_mock().ok_or(SessionError::NotMockBackend)?;
        mock.set_signed_in(value);
        Ok(())
    }

    /// # Errors
    ///
    /// [`SessionError::NotPublished`] before boot.
    pub fn subscribe(&self, listener: Listener) -> Result<ListenerId, SessionError> {
        let backend = self.slot.get().ok_or(SessionError::NotPublished)?;
        Ok(backend.subscribe(listener))
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        if let Some(backend) = self.slot.get() {
            backend.unsubscribe(id);
        }
    }
}
