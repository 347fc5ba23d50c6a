//! Session core: state contract, backends, boot-time selection, and the
//! per-instance published context.
//!
//! ARCHITECTURE
//! ============
//! `ProviderSelector` reads [`crate::config::AuthConfig`] once at boot and
//! builds either a [`real::RealBackend`] over an identity provider or a
//! [`mock::MockBackend`]. The result is published once into
//! [`context::SessionContext`], which everything else reads.

pub mod backend;
pub mod compat;
pub mod context;
pub mod hosted;
mod listeners;
pub mod mock;
pub mod provider;
pub mod real;
pub mod selector;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{BackendKind, SessionBackend};
pub use context::SessionContext;
pub use selector::{Advisory, AdvisorySink, ProviderSelector};
pub use state::{SessionModel, SessionState};
