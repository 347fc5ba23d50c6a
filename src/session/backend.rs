//! The backend installed at boot: mock or real.

use super::mock::MockBackend;
use super::real::RealBackend;
use super::state::{Listener, ListenerId, SessionModel, SessionState};
use crate::error::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    Mock,
    Real,
}

#[derive(Clone)]
pub enum SessionBackend {
    Mock(MockBackend),
    Real(RealBackend),
}

impl SessionBackend {
    #[must_use]
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Mock(_) => BackendKind::Mock,
            Self::Real(_) => BackendKind::Real,
        }
    }

    /// The mock backend, for developer tooling that simulates logins.
    #[must_use]
    pub fn as_mock(&self) -> Option<&MockBackend> {
        match self {
            Self::Mock(mock) => Some(mock),
            Self::Real(_) => None,
        }
    }

    fn model(&self) -> &dyn SessionModel {
        match self {
            Self::Mock(mock) => mock,
            Self::Real(real) => real,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl SessionModel for SessionBackend {
    fn state(&self) -> SessionState {
        self.model().state()
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        self.model().sign_out().await
    }

    fn subscribe(&self, listener: Listener) -> ListenerId {
        self.model().subscribe(listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.model().unsubscribe(id);
    }
}
