//! Session backend delegating to a real identity provider.
//!
//! A successful sign-out is final from the application's point of view even
//! when the provider has not yet pushed its own change event: until it does,
//! the backend reports a loaded, signed-out session.

use std::cell::Cell;
use std::rc::Rc;

use super::listeners::Listeners;
use super::provider::IdentityProvider;
use super::state::{Listener, ListenerId, SessionModel, SessionState};
use crate::config::PublishableKey;
use crate::error::SessionError;

#[cfg(test)]
#[path = "real_test.rs"]
mod tests;

/// Real backend bound to one publishable key for the life of the app.
#[derive(Clone)]
pub struct RealBackend {
    key: PublishableKey,
    provider: Rc<dyn IdentityProvider>,
    inner: Rc<RealInner>,
}

struct RealInner {
    /// Set after a sign-out the provider accepted but has not reflected yet.
    /// Cleared by the provider's next change event.
    signed_out: Cell<bool>,
    listeners: Listeners,
}

impl RealBackend {
    pub fn new(key: PublishableKey, provider: Rc<dyn IdentityProvider>) -> Self {
        let inner = Rc::new(RealInner { signed_out: Cell::new(false), listeners: Listeners::default() });
        let relay = inner.clone();
        provider.on_change(Rc::new(move |state| {
            relay.signed_out.set(false);
            relay.listeners.notify(state);
        }));
        Self { key, provider, inner }
    }

    #[must_use]
    pub fn key(&self) -> &PublishableKey {
        &self.key
    }
}

#[async_trait::async_trait(?Send)]
impl SessionModel for RealBackend {
    fn state(&self) -> SessionState {
        if self.inner.signed_out.get() {
            return SessionState::loaded(false);
        }
        self.provider.state()
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        if let Err(err) = self.provider.sign_out().await {
            log::warn!("sign-out rejected by identity provider ({}): {err}", err.error_code());
            return Err(err.into());
        }
        if self.provider.state().signed_in {
            log::debug!("identity provider has not reported the sign-out yet; holding signed-out state");
            self.inner.signed_out.set(true);
            self.inner.listeners.notify(SessionState::loaded(false));
        }
        Ok(())
    }

    fn subscribe(&self, listener: Listener) -> ListenerId {
        self.inner.listeners.add(listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.inner.listeners.remove(id);
    }
}
