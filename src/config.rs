//! Boot configuration for the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read exactly once at boot by the provider selector. The browser bundle has
//! no process environment, so the key is compiled in (see `build.rs`); native
//! builds fall back to the runtime environment.

use std::fmt;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Environment variable carrying the identity-provider publishable key.
pub const PUBLISHABLE_KEY_ENV: &str = "PORTAL_CLERK_PUBLISHABLE_KEY";

/// Value shipped in sample env files; never a usable key.
pub const PLACEHOLDER_KEY: &str = "your_clerk_publishable_key";

/// Publishable key accepted for the real backend.
///
/// Validity is not verified here; a bad key surfaces later as provider errors.
#[derive(Clone, PartialEq, Eq)]
pub struct PublishableKey(String);

impl PublishableKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PublishableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(8).collect();
        write!(f, "PublishableKey({prefix}…)")
    }
}

/// Classification of the configured credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// Absent, empty, or whitespace-only.
    Missing,
    /// The sample placeholder was left in place.
    Placeholder,
    Present(PublishableKey),
}

impl Credential {
    /// Reason string for the mock-mode log line; `None` for a usable key.
    #[must_use]
    pub fn invalid_reason(&self) -> Option<&'static str> {
        match self {
            Self::Missing => Some("publishable key not set"),
            Self::Placeholder => Some("publishable key is the sample placeholder"),
            Self::Present(_) => None,
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthConfig {
    publishable_key: Option<String>,
}

impl AuthConfig {
    #[must_use]
    pub fn new(publishable_key: Option<&str>) -> Self {
        Self { publishable_key: publishable_key.map(str::to_owned) }
    }

    /// Build config from the compile-time key, falling back to the runtime
    /// environment.
    #[must_use]
    pub fn from_env() -> Self {
        let raw = option_env!("PORTAL_CLERK_PUBLISHABLE_KEY")
            .map(str::to_owned)
            .or_else(|| std::env::var(PUBLISHABLE_KEY_ENV).ok());
        Self { publishable_key: raw }
    }

    #[must_use]
    pub fn credential(&self) -> Credential {
        match self.publishable_key.as_deref().map(str::trim) {
            None | Some("") => Credential::Missing,
            Some(PLACEHOLDER_KEY) => Credential::Placeholder,
            Some(key) => Credential::Present(PublishableKey(key.to_owned())),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig").field("credential", &self.credential()).finish()
    }
}
