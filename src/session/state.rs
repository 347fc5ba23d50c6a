//! Session state shape and the capability contract every backend satisfies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the auth panel, and the compatibility slot all read
//! [`SessionState`]; only backends write it. `loaded` flips from `false` to
//! `true` once per backend and never reverts.

use std::rc::Rc;

use serde::Serialize;

use crate::error::SessionError;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

/// "Am I signed in", plus whether the backend has decided yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    #[serde(rename = "isSignedIn")]
    pub signed_in: bool,
    #[serde(rename = "isLoaded")]
    pub loaded: bool,
}

impl SessionState {
    /// Boot-phase state: nothing is known yet.
    pub const LOADING: Self = Self { signed_in: false, loaded: false };

    #[must_use]
    pub const fn loaded(signed_in: bool) -> Self {
        Self { signed_in, loaded: true }
    }
}

/// Callback invoked with the new state after every backend transition.
pub type Listener = Rc<dyn Fn(SessionState)>;

/// Handle returned by `subscribe`, used to detach the listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Capabilities shared by the mock and real session backends.
///
/// The runtime is single-threaded and cooperative, so implementations use
/// `Rc`/`RefCell` and the futures are not `Send`.
#[async_trait::async_trait(?Send)]
pub trait SessionModel {
    /// Latest known state. Pure read.
    fn state(&self) -> SessionState;

    /// Sign the current user out.
    ///
    /// On success the backend reports `signed_in == false`. On failure the
    /// previous state is kept untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SignOutFailed`] when the provider rejects the
    /// request. The mock backend never fails.
    async fn sign_out(&self) -> Result<(), SessionError>;

    /// Register a listener for state transitions.
    fn subscribe(&self, listener: Listener) -> ListenerId;

    /// Detach a listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: ListenerId);
}
