//! Session configuration: storage keys and redirect routes.

use thiserror::Error;

pub const TOKEN_KEY_VAR: &str = "SHELTRA_TOKEN_KEY";
pub const USER_KEY_VAR: &str = "SHELTRA_USER_KEY";
pub const LOGIN_ROUTE_VAR: &str = "SHELTRA_LOGIN_ROUTE";
pub const UNAUTHORIZED_ROUTE_VAR: &str = "SHELTRA_UNAUTHORIZED_ROUTE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },

    #[error("{var} must be an absolute route starting with '/', got '{value}'")]
    InvalidRoute { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Storage key holding the bearer token.
    pub token_key: String,
    /// Storage key holding the cached user object written at login.
    pub user_key: String,
    /// Redirect target for unauthenticated navigation.
    pub login_route: String,
    /// Redirect target for authenticated navigation with the wrong role.
    pub unauthorized_route: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: "authToken".to_string(),
            user_key: "user".to_string(),
            login_route: "/login".to_string(),
            unauthorized_route: "/unauthorized".to_string(),
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by `SHELTRA_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = lookup(TOKEN_KEY_VAR) {
            config.token_key = non_empty(TOKEN_KEY_VAR, v)?;
        }
        if let Some(v) = lookup(USER_KEY_VAR) {
            config.user_key = non_empty(USER_KEY_VAR, v)?;
        }
        if let Some(v) = lookup(LOGIN_ROUTE_VAR) {
            config.login_route = route(LOGIN_ROUTE_VAR, v)?;
        }
        if let Some(v) = lookup(UNAUTHORIZED_ROUTE_VAR) {
            config.unauthorized_route = route(UNAUTHORIZED_ROUTE_VAR, v)?;
        }

        Ok(config)
    }
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(value)
}

fn route(var: &'static str, value: String) -> Result<String, ConfigError> {
    let value = non_empty(var, value)?;
    if !value.starts_with('/') {
        return Err(ConfigError::InvalidRoute { var, value });
    }
    Ok(value)
}
