//! Root application component with session boot, routing, and contexts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Boot order: the router comes up, the provider selector reads the
//! configuration once, the chosen backend is published into a fresh
//! [`SessionContext`], and its state is mirrored into a signal that every
//! guarded route reads.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::guarded::Guarded;
use crate::components::mock_banner::MockModeBanner;
use crate::config::AuthConfig;
use crate::guard::PortalRoute;
use crate::pages::{home::HomePage, login::LoginPage, portal::PortalPage, register::RegisterPage};
use crate::session::provider::Navigator;
use crate::session::{Advisory, BackendKind, ProviderSelector, SessionBackend, SessionContext, SessionState};

/// Handle to the published [`SessionContext`], provided via Leptos context.
///
/// The context holds `Rc`s, so it lives in thread-local arena storage and is
/// cloned out for each use.
#[derive(Clone, Copy)]
pub struct SessionHandle(StoredValue<SessionContext, LocalStorage>);

impl SessionHandle {
    #[must_use]
    pub fn context(&self) -> SessionContext {
        self.0.get_value()
    }

    #[must_use]
    pub fn kind(&self) -> Option<BackendKind> {
        self.0.with_value(SessionContext::kind)
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="portal" href="/pkg/portal.css"/>
        <Title text="Medical Office Portal"/>

        <Router>
            <SessionRoot>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Guarded route=PortalRoute::Home><HomePage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <Guarded route=PortalRoute::Login><LoginPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <Guarded route=PortalRoute::Register><RegisterPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Guarded route=PortalRoute::Dashboard><PortalPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), WildcardSegment("section"))
                        view=|| view! { <Guarded route=PortalRoute::Dashboard><PortalPage/></Guarded> }
                    />
                </Routes>
            </SessionRoot>
        </Router>
    }
}

/// Select and publish the session backend, then provide session contexts to
/// everything below. Must sit inside `<Router>` for the navigation hook.
#[component]
fn SessionRoot(children: Children) -> impl IntoView {
    let advisory = RwSignal::new(None::<Advisory>);
    let navigate = use_navigate();
    let navigator: Navigator = Rc::new(move |to: &str| navigate(to, NavigateOptions::default()));

    let raise = move |notice: Advisory| advisory.set(Some(notice));
    let backend = ProviderSelector::new(AuthConfig::from_env()).select(navigator, &raise);
    let (context, state) = publish_session(backend);

    provide_context(advisory);
    provide_context(state);
    provide_context(SessionHandle(StoredValue::new_local(context)));

    view! {
        <MockModeBanner/>
        {children()}
    }
}

/// Publish `backend` into a fresh context and mirror its state into a signal.
fn publish_session(backend: SessionBackend) -> (SessionContext, RwSignal<SessionState>) {
    let context = SessionContext::new();
    if let Err(err) = context.publish(backend) {
        // Two live backends would disagree about who is signed in.
        panic!("session boot aborted ({}): {err}", err.error_code());
    }

    let state = RwSignal::new(context.current());
    if let Err(err) = context.subscribe(Rc::new(move |next| state.set(next))) {
        log::error!("session state will not update: {err}");
    }
    (context, state)
}
