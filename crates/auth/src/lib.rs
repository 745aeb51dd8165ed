//! `sheltra-auth`: client-side session gate and route authorization.
//!
//! Everything here is pure or reads through an injected [`SessionStore`].
//! Token signatures are NOT verified: the backend is the authority, and the
//! answers given here only decide what the dashboard shows.

pub mod authorize;
pub mod claims;
pub mod config;
pub mod gate;
pub mod menu;
pub mod roles;
pub mod routes;
pub mod session;

pub use authorize::{RouteDenied, SessionSnapshot, authorize_route};
pub use claims::{Claims, Identity, TokenError, decode_token, get_identity, get_role, is_expired, try_decode_token};
pub use config::{ConfigError, SessionConfig};
pub use gate::{SessionGate, SessionState};
pub use menu::{MenuItem, menu_for_role};
pub use roles::Role;
pub use routes::{RouteSpec, RouteTable};
pub use session::{InMemorySessionStore, JsonFileSessionStore, SessionStore, SessionStoreError};
