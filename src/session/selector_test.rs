use std::cell::{Cell, RefCell};

use super::*;
use crate::config::PLACEHOLDER_KEY;
use crate::session::backend::BackendKind;
use crate::session::state::{SessionModel, SessionState};
use crate::session::testing::FakeProvider;

#[derive(Default)]
struct RecordingSink {
    raised: RefCell<Vec<Advisory>>,
}

impl AdvisorySink for RecordingSink {
    fn raise(&self, advisory: Advisory) {
        self.raised.borrow_mut().push(advisory);
    }
}

fn noop_navigator() -> Navigator {
    Rc::new(|_: &str| {})
}

fn select(raw: Option<&str>, sink: &RecordingSink) -> SessionBackend {
    ProviderSelector::new(AuthConfig::new(raw)).select_with(noop_navigator(), sink, |_, _| FakeProvider::default())
}

// =============================================================================
// mock mode
// =============================================================================

#[test]
fn invalid_credentials_select_mock_with_single_advisory() {
    for raw in [None, Some(""), Some("  "), Some(PLACEHOLDER_KEY)] {
        let sink = RecordingSink::default();
        let backend = select(raw, &sink);
        assert_eq!(backend.kind(), BackendKind::Mock, "credential {raw:?}");
        assert_eq!(*sink.raised.borrow(), vec![Advisory::MockAuthentication], "credential {raw:?}");
    }
}

#[test]
fn mock_mode_never_calls_connect() {
    let sink = RecordingSink::default();
    let called = Cell::new(false);
    let backend = ProviderSelector::new(AuthConfig::new(None)).select_with(noop_navigator(), &sink, |_, _| {
        called.set(true);
        FakeProvider::default()
    });
    assert_eq!(backend.kind(), BackendKind::Mock);
    assert!(!called.get());
}

#[test]
fn mock_backend_starts_signed_out() {
    let backend = select(None, &RecordingSink::default());
    assert_eq!(backend.state(), SessionState::loaded(false));
}

#[test]
fn closure_sink_receives_advisory() {
    let count = Cell::new(0);
    let sink = |_: Advisory| count.set(count.get() + 1);
    let _ = ProviderSelector::new(AuthConfig::new(Some(PLACEHOLDER_KEY))).select(noop_navigator(), &sink);
    assert_eq!(count.get(), 1);
}

#[test]
fn advisory_message_points_at_env_file() {
    assert!(Advisory::MockAuthentication.message().contains(".env.local"));
}

// =============================================================================
// real mode
// =============================================================================

#[test]
fn valid_credentials_select_real_without_advisory() {
    for raw in ["pk_test_abc", "pk_live_xyz", "anything-else"] {
        let sink = RecordingSink::default();
        let backend = select(Some(raw), &sink);
        assert_eq!(backend.kind(), BackendKind::Real, "credential {raw}");
        assert!(sink.raised.borrow().is_empty(), "credential {raw}");
    }
}

#[test]
fn connect_receives_key_and_navigator() {
    let sink = RecordingSink::default();
    let seen_key = RefCell::new(String::new());
    let navigated = Rc::new(RefCell::new(Vec::<String>::new()));
    let log = navigated.clone();
    let navigator: Navigator = Rc::new(move |to: &str| log.borrow_mut().push(to.to_owned()));

    let backend = ProviderSelector::new(AuthConfig::new(Some("pk_test_nav"))).select_with(navigator, &sink, |key, nav| {
        *seen_key.borrow_mut() = key.as_str().to_owned();
        nav("/dashboard");
        FakeProvider::default()
    });

    assert_eq!(backend.kind(), BackendKind::Real);
    assert_eq!(*seen_key.borrow(), "pk_test_nav");
    assert_eq!(*navigated.borrow(), vec!["/dashboard".to_owned()]);
}

#[test]
fn real_backend_has_no_mock_handle() {
    let backend = select(Some("pk_test_abc"), &RecordingSink::default());
    assert!(backend.as_mock().is_none());
}

#[test]
fn hosted_select_stays_loading_natively() {
    let sink = RecordingSink::default();
    let backend = ProviderSelector::new(AuthConfig::new(Some("pk_test_abc"))).select(noop_navigator(), &sink);
    assert_eq!(backend.kind(), BackendKind::Real);
    assert_eq!(backend.state(), SessionState::LOADING);
}
