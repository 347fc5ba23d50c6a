use super::*;

const ORIGIN: &str = "/dashboard/appointments";

fn loaded(signed_in: bool) -> SessionState {
    SessionState::loaded(signed_in)
}

// =============================================================================
// decide
// =============================================================================

#[test]
fn not_loaded_is_always_loading() {
    for requirement in [RouteRequirement::RequireAuth, RouteRequirement::RequireAnonymous, RouteRequirement::Public] {
        for signed_in in [false, true] {
            let state = SessionState { signed_in, loaded: false };
            assert_eq!(decide(state, requirement, ORIGIN), GuardResult::Loading);
        }
    }
}

#[test]
fn decision_table_when_loaded() {
    let cases = [
        (RouteRequirement::RequireAuth, false, GuardResult::RedirectLogin { from: ORIGIN.to_owned() }),
        (RouteRequirement::RequireAuth, true, GuardResult::Permitted),
        (RouteRequirement::RequireAnonymous, true, GuardResult::RedirectHome),
        (RouteRequirement::RequireAnonymous, false, GuardResult::Permitted),
        (RouteRequirement::Public, false, GuardResult::Permitted),
        (RouteRequirement::Public, true, GuardResult::Permitted),
    ];
    for (requirement, signed_in, expected) in cases {
        assert_eq!(decide(loaded(signed_in), requirement, ORIGIN), expected, "{requirement:?} signed_in={signed_in}");
    }
}

#[test]
fn undeclared_requirement_fails_closed() {
    let requirement = RouteRequirement::declared(None);
    assert_eq!(decide(loaded(false), requirement, ORIGIN), GuardResult::RedirectLogin { from: ORIGIN.to_owned() });
}

// =============================================================================
// redirect paths
// =============================================================================

#[test]
fn login_redirect_encodes_origin() {
    assert_eq!(login_redirect_path("/dashboard/appointments"), "/login?from=%2Fdashboard%2Fappointments");
}

#[test]
fn login_redirect_drops_unsafe_origin() {
    assert_eq!(login_redirect_path("https://evil.example"), "/login");
    assert_eq!(login_redirect_path("//evil.example"), "/login");
    assert_eq!(login_redirect_path("/login"), "/login");
}

#[test]
fn return_target_accepts_same_origin_paths() {
    assert_eq!(return_target(Some("/dashboard/profile")), "/dashboard/profile");
    assert_eq!(return_target(Some("/")), "/");
}

#[test]
fn return_target_defaults_home() {
    assert_eq!(return_target(None), HOME_PATH);
    assert_eq!(return_target(Some("")), HOME_PATH);
    assert_eq!(return_target(Some("https://evil.example/phish")), HOME_PATH);
    assert_eq!(return_target(Some("//evil.example")), HOME_PATH);
    assert_eq!(return_target(Some("/\\evil.example")), HOME_PATH);
    assert_eq!(return_target(Some("/login?from=%2Fdashboard")), HOME_PATH);
}

#[test]
fn visited_origin_keeps_query_and_fragment() {
    assert_eq!(visited_origin("/dashboard/records", "tab=2", ""), "/dashboard/records?tab=2");
    assert_eq!(visited_origin("/dashboard/records", "?tab=2", "#notes"), "/dashboard/records?tab=2#notes");
    assert_eq!(visited_origin("/dashboard", "", "notes"), "/dashboard#notes");
    assert_eq!(visited_origin("/dashboard", "?", "#"), "/dashboard");
}

#[test]
fn query_survives_the_login_round_trip() {
    let origin = visited_origin("/dashboard/records", "tab=2", "");
    let GuardResult::RedirectLogin { from } = decide(loaded(false), RouteRequirement::RequireAuth, &origin) else {
        panic!("expected a login redirect");
    };
    assert_eq!(from, "/dashboard/records?tab=2");

    let redirect = login_redirect_path(&from);
    assert_eq!(redirect, "/login?from=%2Fdashboard%2Frecords%3Ftab%3D2");

    let encoded = redirect.split_once("from=").map(|(_, v)| v).unwrap();
    let decoded = urlencoding::decode(encoded).unwrap();
    assert_eq!(return_target(Some(decoded.as_ref())), "/dashboard/records?tab=2");
}

// =============================================================================
// boot scenarios
// =============================================================================

mod scenarios {
    use std::rc::Rc;

    use super::*;
    use crate::config::AuthConfig;
    use crate::session::testing::{FakeProvider, test_key};
    use crate::session::SessionBackend;
    use crate::session::real::RealBackend;
    use crate::session::{Advisory, ProviderSelector, SessionContext};

    fn boot(raw: Option<&str>) -> SessionContext {
        let backend = ProviderSelector::new(AuthConfig::new(raw)).select(Rc::new(|_: &str| {}), &|_: Advisory| {});
        let ctx = SessionContext::new();
        ctx.publish(backend).unwrap();
        ctx
    }

    #[test]
    fn empty_credential_protected_route_redirects_to_login_with_origin() {
        let ctx = boot(Some(""));
        let origin = "/dashboard/records";

        let result = decide(ctx.current(), PortalRoute::Dashboard.requirement(), origin);

        assert_eq!(result, GuardResult::RedirectLogin { from: origin.to_owned() });
        assert_eq!(login_redirect_path(origin), "/login?from=%2Fdashboard%2Frecords");
        assert_eq!(return_target(Some(origin)), origin);
    }

    #[test]
    fn mock_sign_in_sends_login_page_home() {
        let ctx = boot(None);
        ctx.set_signed_in(true).unwrap();

        assert_eq!(decide(ctx.current(), PortalRoute::Login.requirement(), "/login"), GuardResult::RedirectHome);
        assert_eq!(decide(ctx.current(), PortalRoute::Register.requirement(), "/register"), GuardResult::RedirectHome);
    }

    #[test]
    fn public_route_permitted_in_every_session_state() {
        let ctx = boot(None);
        assert_eq!(decide(ctx.current(), PortalRoute::Home.requirement(), "/"), GuardResult::Permitted);
        ctx.set_signed_in(true).unwrap();
        assert_eq!(decide(ctx.current(), PortalRoute::Home.requirement(), "/"), GuardResult::Permitted);
    }

    #[test]
    fn real_backend_before_sdk_ready_is_loading() {
        let ctx = boot(Some("pk_test_abc"));
        assert_eq!(decide(ctx.current(), PortalRoute::Dashboard.requirement(), "/dashboard"), GuardResult::Loading);
    }

    #[test]
    fn guard_keeps_last_state_until_sign_out_resolves() {
        let ctx = boot(None);
        ctx.set_signed_in(true).unwrap();

        let pending = ctx.sign_out();
        assert_eq!(decide(ctx.current(), RouteRequirement::RequireAuth, "/dashboard"), GuardResult::Permitted);

        futures::executor::block_on(pending).unwrap();
        assert_eq!(
            decide(ctx.current(), RouteRequirement::RequireAuth, "/dashboard"),
            GuardResult::RedirectLogin { from: "/dashboard".to_owned() }
        );
    }

    #[test]
    fn lagging_provider_sign_out_redirects_protected_route() {
        let provider = Rc::new(FakeProvider::signed_in());
        provider.lag_sign_out.set(true);
        let ctx = SessionContext::new();
        ctx.publish(SessionBackend::Real(RealBackend::new(test_key(), provider.clone()))).unwrap();

        futures::executor::block_on(ctx.sign_out()).unwrap();

        assert_eq!(provider.state.get(), SessionState::loaded(true));
        assert_eq!(
            decide(ctx.current(), RouteRequirement::RequireAuth, "/dashboard"),
            GuardResult::RedirectLogin { from: "/dashboard".to_owned() }
        );
    }
}
