//! Dashboard route table.
//!
//! Public routes are always admitted; protected routes go through
//! [`authorize_route`] with their allow-list.

use serde::Serialize;

use crate::{Role, RouteDenied, SessionSnapshot, authorize_route};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSpec {
    pub path: &'static str,
    /// Requires a valid session.
    pub protected: bool,
    /// Roles admitted; empty means any authenticated session.
    pub allowed_roles: Vec<Role>,
}

impl RouteSpec {
    pub fn public(path: &'static str) -> Self {
        Self {
            path,
            protected: false,
            allowed_roles: Vec::new(),
        }
    }

    pub fn protected(path: &'static str, allowed_roles: Vec<Role>) -> Self {
        Self {
            path,
            protected: true,
            allowed_roles,
        }
    }

    pub fn authorize(&self, session: &SessionSnapshot) -> Result<(), RouteDenied> {
        if !self.protected {
            return Ok(());
        }
        authorize_route(session, &self.allowed_roles)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteSpec>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, route: RouteSpec) -> Self {
        self.routes.push(route);
        self
    }

    /// Routes of the Sheltra dashboard.
    pub fn sheltra() -> Self {
        Self::new()
            .with(RouteSpec::public("/"))
            .with(RouteSpec::public("/login"))
            .with(RouteSpec::public("/unauthorized"))
            .with(RouteSpec::protected("/dashboard", vec![Role::REFUGEE]))
            .with(RouteSpec::protected("/profile", vec![Role::REFUGEE]))
            .with(RouteSpec::protected("/opportunities", vec![Role::REFUGEE]))
            .with(RouteSpec::protected("/placements", vec![Role::REFUGEE]))
            .with(RouteSpec::protected("/talent-pool", vec![Role::EMPLOYER]))
            .with(RouteSpec::protected(
                "/admin",
                vec![Role::ADMIN, Role::new("Administrator")],
            ))
    }

    pub fn routes(&self) -> &[RouteSpec] {
        &self.routes
    }

    /// Exact-path lookup; a trailing slash is ignored except on `/`.
    pub fn find(&self, path: &str) -> Option<&RouteSpec> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        self.routes.iter().find(|r| r.path == path)
    }

    /// `None` when the path is not a known route.
    pub fn evaluate(&self, path: &str, session: &SessionSnapshot) -> Option<Result<(), RouteDenied>> {
        let route = self.find(path)?;
        let decision = route.authorize(session);
        if let Err(denied) = &decision {
            tracing::debug!(path = route.path, reason = %denied, "route denied");
        }
        Some(decision)
    }
}
