use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::session::testing::test_key;

fn provider() -> HostedProvider {
    HostedProvider::connect(&test_key(), Rc::new(|_: &str| {}))
}

#[test]
fn stays_loading_without_browser_sdk() {
    assert_eq!(provider().state(), SessionState::LOADING);
}

#[test]
fn sign_out_is_unavailable_without_browser_sdk() {
    let err = block_on(provider().sign_out()).unwrap_err();
    assert!(matches!(err, ProviderError::Unavailable(_)));
}

#[test]
fn first_report_marks_loaded_and_notifies() {
    let provider = provider();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    provider.on_change(Rc::new(move |s| sink.borrow_mut().push(s)));

    provider.record_identity(false);

    assert_eq!(provider.state(), SessionState::loaded(false));
    assert_eq!(*seen.borrow(), vec![SessionState::loaded(false)]);
}

#[test]
fn repeated_identical_reports_do_not_renotify() {
    let provider = provider();
    let count = Rc::new(Cell::new(0));
    let counter = count.clone();
    provider.on_change(Rc::new(move |_| counter.set(counter.get() + 1)));

    provider.record_identity(true);
    provider.record_identity(true);
    provider.record_identity(false);

    assert_eq!(count.get(), 2);
}

#[test]
fn loaded_never_reverts() {
    let provider = provider();
    provider.record_identity(true);
    provider.record_identity(false);
    assert!(provider.state().loaded);
}
