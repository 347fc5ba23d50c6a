//! Route gating: who may see which screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route render calls [`decide`] with the current session state and the
//! route's requirement. The result either renders the route or replaces it
//! with a redirect; the two never appear together in one render pass.
//!
//! DESIGN
//! ======
//! "Not loaded yet" is a first-class [`GuardResult::Loading`] outcome rather
//! than a boolean that could be mistaken for permit or deny. The decision is
//! a total match with no catch-all arm.

pub mod routes;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use crate::session::SessionState;

pub use routes::{PortalRoute, RouteRequirement};

/// Login screen path.
pub const LOGIN_PATH: &str = "/login";

/// Authenticated landing screen.
pub const HOME_PATH: &str = "/dashboard";

/// Query parameter carrying the path to return to after login.
pub const RETURN_PARAM: &str = "from";

/// Outcome of a guard evaluation for one render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardResult {
    /// Session status is still being determined; show a neutral indicator.
    Loading,
    Permitted,
    /// Send the visitor to login, remembering where they were headed.
    RedirectLogin { from: String },
    RedirectHome,
}

/// Decide whether a route may render.
///
/// `origin` is the path being visited, carried into
/// [`GuardResult::RedirectLogin`] so login can send the user back.
#[must_use]
pub fn decide(state: SessionState, requirement: RouteRequirement, origin: &str) -> GuardResult {
    if !state.loaded {
        return GuardResult::Loading;
    }
    match (requirement, state.signed_in) {
        (RouteRequirement::RequireAuth, false) => GuardResult::RedirectLogin { from: origin.to_owned() },
        (RouteRequirement::RequireAuth, true) => GuardResult::Permitted,
        (RouteRequirement::RequireAnonymous, true) => GuardResult::RedirectHome,
        (RouteRequirement::RequireAnonymous, false) => GuardResult::Permitted,
        (RouteRequirement::Public, _) => GuardResult::Permitted,
    }
}

/// Reassemble the visited location as a same-origin reference: path, then
/// query, then fragment. Accepts `search` and `hash` with or without their
/// leading `?`/`#`.
#[must_use]
pub fn visited_origin(pathname: &str, search: &str, hash: &str) -> String {
    let search = search.strip_prefix('?').unwrap_or(search);
    let hash = hash.strip_prefix('#').unwrap_or(hash);
    let mut origin = pathname.to_owned();
    if !search.is_empty() {
        origin.push('?');
        origin.push_str(search);
    }
    if !hash.is_empty() {
        origin.push('#');
        origin.push_str(hash);
    }
    origin
}

/// `/login?from=<origin>`, or plain `/login` when there is nothing useful to
/// return to.
#[must_use]
pub fn login_redirect_path(from: &str) -> String {
    match safe_return_path(from) {
        Some(path) => format!("{LOGIN_PATH}?{RETURN_PARAM}={}", urlencoding::encode(path)),
        None => LOGIN_PATH.to_owned(),
    }
}

/// Where to go after a successful login.
///
/// Only same-origin absolute paths are honoured; anything else (missing,
/// external URLs, protocol-relative `//host`, the login page itself) lands on
/// [`HOME_PATH`].
#[must_use]
pub fn return_target(from: Option<&str>) -> String {
    from.and_then(safe_return_path).unwrap_or(HOME_PATH).to_owned()
}

fn safe_return_path(path: &str) -> Option<&str> {
    let same_origin = path.starts_with('/') && !path.starts_with("//") && !path.contains('\\');
    let is_login =
        path == LOGIN_PATH || path.starts_with("/login?") || path.starts_with("/login/") || path.starts_with("/login#");
    (same_origin && !is_login).then_some(path)
}
