//! Route table and per-route auth requirements.

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

/// Auth requirement attached to a route. Fixed once the table is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteRequirement {
    /// Signed-in users only.
    RequireAuth,
    /// Signed-out users only (sign-in and registration screens).
    RequireAnonymous,
    Public,
}

impl RouteRequirement {
    /// Resolve a possibly-missing declaration.
    ///
    /// A route without a declared requirement is a configuration defect and
    /// fails closed to [`RouteRequirement::RequireAuth`].
    #[must_use]
    pub fn declared(requirement: Option<Self>) -> Self {
        requirement.unwrap_or_else(|| {
            log::warn!("route has no declared auth requirement; requiring auth");
            Self::RequireAuth
        })
    }
}

/// Screens of the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortalRoute {
    Home,
    Login,
    Register,
    /// Patient portal, including every `/dashboard/...` sub-screen.
    Dashboard,
}

impl PortalRoute {
    pub const ALL: [Self; 4] = [Self::Home, Self::Login, Self::Register, Self::Dashboard];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }

    #[must_use]
    pub fn requirement(self) -> RouteRequirement {
        match self {
            Self::Home => RouteRequirement::Public,
            Self::Login | Self::Register => RouteRequirement::RequireAnonymous,
            Self::Dashboard => RouteRequirement::RequireAuth,
        }
    }

    /// Match a location pathname to a route. Query strings are ignored and
    /// trailing slashes tolerated.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        match trimmed {
            "/" => Some(Self::Home),
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/dashboard" => Some(Self::Dashboard),
            other if other.starts_with("/dashboard/") => Some(Self::Dashboard),
            _ => None,
        }
    }
}
