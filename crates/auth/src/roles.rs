use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier carried in a session token.
///
/// Roles stay opaque strings with their original casing; comparison for
/// access decisions is case-insensitive (see [`Role::matches`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const REFUGEE: Role = Role(Cow::Borrowed("refugee"));
    pub const EMPLOYER: Role = Role(Cow::Borrowed("employer"));
    pub const NGO: Role = Role(Cow::Borrowed("ngo"));
    pub const ADMIN: Role = Role(Cow::Borrowed("admin"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used for lookups.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }

    /// Case-insensitive equality, e.g. `ADMIN` matches `admin`.
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
