//! Bearer token claims (decode only, no verification).
//!
//! A token is three dot-separated base64url segments. Only the middle one,
//! the payload, is read. Malformed tokens never raise to the caller: the
//! public entry point [`decode_token`] returns `None` and logs the reason.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use sheltra_core::unix_seconds;

use crate::Role;

/// base64url, padding optional (issuers disagree on `=`).
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Subject identifier claims, highest precedence first.
pub const SUBJECT_CLAIMS: &[&str] = &["sub", "user_id", "id"];

/// Display-name claims, highest precedence first.
pub const NAME_CLAIMS: &[&str] = &["name", "given_name"];

/// Role claim emitted by older WS-Federation style issuers.
pub const LEGACY_ROLE_CLAIM: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

/// Reads one candidate value out of the claims.
pub type ClaimAccessor = fn(&Claims) -> Option<String>;

/// Role resolution chain: `role`, then `roles[0]`, then the legacy claim.
pub const ROLE_PRECEDENCE: &[ClaimAccessor] = &[role_claim, first_roles_entry, legacy_role_claim];

fn role_claim(claims: &Claims) -> Option<String> {
    claims.role_text("role")
}

fn first_roles_entry(claims: &Claims) -> Option<String> {
    match claims.get("roles")? {
        Value::Array(items) => items.first().and_then(non_empty_str),
        _ => None,
    }
}

fn legacy_role_claim(claims: &Claims) -> Option<String> {
    claims.role_text(LEGACY_ROLE_CLAIM)
}

/// Try each accessor in order, stopping at the first hit.
pub fn resolve(claims: &Claims, chain: &[ClaimAccessor]) -> Option<String> {
    chain.iter().find_map(|accessor| accessor(claims))
}

/// Why a token was rejected. Only surfaced through [`try_decode_token`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("expected 3 dot-separated segments, found {0}")]
    SegmentCount(usize),

    #[error("payload is not valid base64url: {0}")]
    Base64(String),

    #[error("payload is not valid JSON: {0}")]
    Json(String),

    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Decoded token payload.
///
/// The raw JSON object is kept so that claims this crate doesn't know about
/// survive a round trip; typed accessors below read the ones it does.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new(payload: Map<String, Value>) -> Self {
        Self(payload)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Expiry in seconds since the epoch. Non-numeric values count as absent.
    pub fn exp(&self) -> Option<f64> {
        self.get("exp").and_then(Value::as_f64)
    }

    pub fn email(&self) -> Option<String> {
        self.get("email").and_then(non_empty_str)
    }

    /// First present subject claim. Numeric ids are rendered as text.
    pub fn subject(&self) -> Option<String> {
        SUBJECT_CLAIMS.iter().find_map(|key| self.get(key).and_then(scalar_text))
    }

    pub fn name(&self) -> Option<String> {
        NAME_CLAIMS.iter().find_map(|key| self.get(key).and_then(non_empty_str))
    }

    /// A role-bearing claim may be a string or a list of strings.
    fn role_text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::Array(items) => items.first().and_then(non_empty_str),
            other => non_empty_str(other),
        }
    }
}

fn non_empty_str(value: &Value) -> Option<String> {
    value.as_str().filter(|s| !s.is_empty()).map(str::to_owned)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        other => non_empty_str(other),
    }
}

/// Identity projected from the claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
}

/// Decode a bearer token, reporting why it was rejected.
pub fn try_decode_token(token: &str) -> Result<Claims, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::SegmentCount(segments.len()));
    }

    let bytes = PAYLOAD_ENGINE
        .decode(segments[1])
        .map_err(|e| TokenError::Base64(e.to_string()))?;

    match serde_json::from_slice::<Value>(&bytes).map_err(|e| TokenError::Json(e.to_string()))? {
        Value::Object(payload) => Ok(Claims(payload)),
        _ => Err(TokenError::NotAnObject),
    }
}

/// Decode a bearer token. Any failure is logged and yields `None`.
pub fn decode_token(token: &str) -> Option<Claims> {
    match try_decode_token(token) {
        Ok(claims) => Some(claims),
        Err(err) => {
            tracing::debug!(error = %err, "discarding malformed bearer token");
            None
        }
    }
}

/// `true` when `exp` is missing or strictly before `now`.
pub fn is_expired(claims: &Claims, now: DateTime<Utc>) -> bool {
    match claims.exp() {
        Some(exp) => exp < unix_seconds(now),
        None => true,
    }
}

/// Role carried by the token, case preserved.
pub fn get_role(claims: &Claims) -> Option<Role> {
    resolve(claims, ROLE_PRECEDENCE).map(Role::new)
}

/// Project the identity claims. `None` when the token identifies nobody.
pub fn get_identity(claims: &Claims) -> Option<Identity> {
    let identity = Identity {
        id: claims.subject(),
        email: claims.email(),
        name: claims.name(),
        role: get_role(claims),
    };

    let empty = identity.id.is_none()
        && identity.email.is_none()
        && identity.name.is_none()
        && identity.role.is_none();

    (!empty).then_some(identity)
}
