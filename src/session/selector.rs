//! Boot-time choice between the real identity provider and the mock backend.
//!
//! ARCHITECTURE
//! ============
//! The decision is declarative: classify the configured credential, then wire
//! exactly one backend. There is no "try the provider and fall back on error"
//! path, and the selector is consumed by `select` so it cannot run twice.
//!
//! Mock mode always raises [`Advisory::MockAuthentication`]. Operators must be
//! able to see at a glance that sessions carry no real identity check.

use std::rc::Rc;

use super::backend::SessionBackend;
use super::hosted::HostedProvider;
use super::mock::MockBackend;
use super::provider::{IdentityProvider, Navigator};
use super::real::RealBackend;
use crate::config::{AuthConfig, Credential, PublishableKey};

#[cfg(test)]
#[path = "selector_test.rs"]
mod tests;

/// Operator-facing notices raised during boot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advisory {
    MockAuthentication,
}

impl Advisory {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::MockAuthentication => {
                "Using mock authentication. Add your Clerk publishable key to .env.local file."
            }
        }
    }
}

/// Receiver for boot advisories, typically the UI shell's banner.
pub trait AdvisorySink {
    fn raise(&self, advisory: Advisory);
}

impl<F> AdvisorySink for F
where
    F: Fn(Advisory),
{
    fn raise(&self, advisory: Advisory) {
        self(advisory);
    }
}

pub struct ProviderSelector {
    config: AuthConfig,
}

impl ProviderSelector {
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Select a backend, connecting real sessions to the hosted browser SDK.
    pub fn select(self, navigator: Navigator, advisories: &dyn AdvisorySink) -> SessionBackend {
        self.select_with(navigator, advisories, HostedProvider::connect)
    }

    /// Select a backend using `connect` to build the real identity provider.
    ///
    /// `connect` is only called for a usable key, and receives the navigator
    /// so the provider can drive in-app route changes.
    pub fn select_with<F, P>(self, navigator: Navigator, advisories: &dyn AdvisorySink, connect: F) -> SessionBackend
    where
        F: FnOnce(&PublishableKey, Navigator) -> P,
        P: IdentityProvider + 'static,
    {
        let credential = self.config.credential();
        let reason = credential.invalid_reason();
        match credential {
            Credential::Present(key) => {
                log::info!("identity provider configured ({key:?}); using real sessions");
                let provider: Rc<dyn IdentityProvider> = Rc::new(connect(&key, navigator));
                SessionBackend::Real(RealBackend::new(key, provider))
            }
            Credential::Missing | Credential::Placeholder => {
                log::warn!("{}; falling back to mock authentication", reason.unwrap_or("invalid publishable key"));
                advisories.raise(Advisory::MockAuthentication);
                SessionBackend::Mock(MockBackend::new())
            }
        }
    }
}
