use serde::Serialize;
use thiserror::Error;

use crate::{Role, SessionConfig};

/// What the route policy needs to know about the current session.
///
/// Produced by [`crate::SessionGate::snapshot_at`]; constructed directly in
/// tests and by callers that keep their own session bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl SessionSnapshot {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(role: Option<Role>) -> Self {
        Self {
            authenticated: true,
            role,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteDenied {
    #[error("no valid session")]
    Unauthenticated,

    #[error("role {} is not on the route allow-list", .role.as_ref().map_or("<none>", |r| r.as_str()))]
    Unauthorized { role: Option<Role> },
}

impl RouteDenied {
    /// Where the navigation should be redirected.
    pub fn redirect_target<'a>(&self, config: &'a SessionConfig) -> &'a str {
        match self {
            RouteDenied::Unauthenticated => &config.login_route,
            RouteDenied::Unauthorized { .. } => &config.unauthorized_route,
        }
    }
}

/// Admission decision for a protected route.
///
/// - not authenticated: denied, regardless of the allow-list
/// - empty allow-list: any authenticated session is admitted
/// - otherwise the session role must equal an entry, ignoring case
///
/// Pure: no IO, no panics.
pub fn authorize_route(session: &SessionSnapshot, allowed: &[Role]) -> Result<(), RouteDenied> {
    if !session.authenticated {
        return Err(RouteDenied::Unauthenticated);
    }

    if allowed.is_empty() {
        return Ok(());
    }

    match &session.role {
        Some(role) if allowed.iter().any(|a| role.matches(a.as_str())) => Ok(()),
        role => Err(RouteDenied::Unauthorized { role: role.clone() }),
    }
}
