//! Boundary to the external identity provider.
//!
//! The provider's protocol is opaque to this crate. Anything that can report
//! whether a user is signed in, sign them out, and announce changes can back
//! the real session.

use std::rc::Rc;

use super::state::{Listener, ListenerId, SessionState};
use crate::error::ProviderError;

/// In-app navigation hook handed to the provider so its own sign-in and
/// sign-up flows can move the user between routes when they finish.
pub type Navigator = Rc<dyn Fn(&str)>;

#[async_trait::async_trait(?Send)]
pub trait IdentityProvider {
    /// Provider-reported state; `loaded` stays false until the SDK is ready.
    fn state(&self) -> SessionState;

    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the provider is unreachable or refuses.
    async fn sign_out(&self) -> Result<(), ProviderError>;

    fn on_change(&self, listener: Listener) -> ListenerId;

    fn remove_listener(&self, id: ListenerId);
}
