//! Test doubles for the identity-provider boundary.

use std::cell::{Cell, RefCell};

use super::listeners::Listeners;
use super::provider::IdentityProvider;
use super::state::{Listener, ListenerId, SessionState};
use crate::config::{AuthConfig, Credential, PublishableKey};
use crate::error::ProviderError;

/// Scripted provider: sign-out either succeeds or fails with a fixed error.
/// With `lag_sign_out` set, a successful sign-out resolves without emitting
/// the signed-out state, the way a hosted SDK may before its next event.
#[derive(Default)]
pub(crate) struct FakeProvider {
    pub(crate) state: Cell<SessionState>,
    pub(crate) fail_sign_out: RefCell<Option<ProviderError>>,
    pub(crate) lag_sign_out: Cell<bool>,
    pub(crate) sign_out_calls: Cell<u32>,
    listeners: Listeners,
}

impl FakeProvider {
    pub(crate) fn signed_in() -> Self {
        let provider = Self::default();
        provider.state.set(SessionState::loaded(true));
        provider
    }

    pub(crate) fn emit(&self, state: SessionState) {
        self.state.set(state);
        self.listeners.notify(state);
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for FakeProvider {
    fn state(&self) -> SessionState {
        self.state.get()
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.sign_out_calls.set(self.sign_out_calls.get() + 1);
        if let Some(err) = self.fail_sign_out.borrow().clone() {
            return Err(err);
        }
        if !self.lag_sign_out.get() {
            self.emit(SessionState::loaded(false));
        }
        Ok(())
    }

    fn on_change(&self, listener: Listener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn remove_listener(&self, id: ListenerId) {
        self.listeners.remove(id);
    }
}

pub(crate) fn test_key() -> PublishableKey {
    match AuthConfig::new(Some("pk_test_fake")).credential() {
        Credential::Present(key) => key,
        other => panic!("unexpected credential {other:?}"),
    }
}
