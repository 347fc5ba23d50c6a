//! Error taxonomy for the session core.
//!
//! ERROR HANDLING
//! ==============
//! An invalid provider configuration is not an error: it selects mock mode
//! and raises an advisory instead. What remains here are the failures a caller
//! has to react to (sign-out rejected by the provider) and programming errors
//! that must abort boot (a second backend published into the context).

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

// =============================================================================
// SESSION
// =============================================================================

/// Errors produced by [`crate::session::context::SessionContext`] and the
/// backends it fronts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A backend was already published for this application instance.
    #[error("a session backend is already published for this application instance")]
    DoublePublish,

    /// An operation needed a backend before boot installed one.
    #[error("no session backend has been published yet")]
    NotPublished,

    /// The identity provider rejected or failed the sign-out request.
    /// Session state is left exactly as it was before the call.
    #[error("sign-out failed: {reason}")]
    SignOutFailed { reason: String },

    /// A mock-only operation was attempted against the real backend.
    #[error("operation requires the mock session backend")]
    NotMockBackend,
}

impl SessionError {
    /// Stable machine-readable code for logs and UI messages.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DoublePublish => "E_DOUBLE_PUBLISH",
            Self::NotPublished => "E_NOT_PUBLISHED",
            Self::SignOutFailed { .. } => "E_SIGN_OUT_FAILED",
            Self::NotMockBackend => "E_NOT_MOCK_BACKEND",
        }
    }

    /// Whether the failed operation may succeed if the user tries again.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::SignOutFailed { .. })
    }
}

// =============================================================================
// PROVIDER
// =============================================================================

/// Errors reported across the external identity-provider boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider SDK is not present or not initialised in this runtime.
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),

    /// The provider received the request and refused or failed it.
    #[error("identity provider rejected request: {0}")]
    Rejected(String),
}

impl ProviderError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "E_PROVIDER_UNAVAILABLE",
            Self::Rejected(_) => "E_PROVIDER_REJECTED",
        }
    }
}

impl From<ProviderError> for SessionError {
    fn from(err: ProviderError) -> Self {
        Self::SignOutFailed { reason: err.to_string() }
    }
}
