//! Session gate: "is there a usable session, and who is it?".
//!
//! The gate re-reads and re-decodes the stored token on every question;
//! there is no background expiry timer. Storage failures and malformed
//! tokens degrade to "no session" and are only logged.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::claims::{Claims, Identity, decode_token, get_identity, get_role, is_expired};
use crate::{Role, SessionConfig, SessionSnapshot, SessionStore, SessionStoreError};

/// Session lifecycle as observed at check time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Nothing stored, storage unreadable, or the stored token is malformed.
    NoToken,
    Valid,
    Expired,
}

pub struct SessionGate<S> {
    store: S,
    config: SessionConfig,
}

impl<S: SessionStore> SessionGate<S> {
    pub fn new(store: S, config: SessionConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist a token (and the user object returned alongside it).
    ///
    /// Unlike the read side this reports storage failures: a login that did
    /// not stick must be visible to whoever performed it. A failed login
    /// leaves no session behind, not even a previous one.
    pub fn login(&self, token: &str, user: Option<&serde_json::Value>) -> Result<(), SessionStoreError> {
        if let Err(err) = self.store_entries(token, user) {
            tracing::warn!(error = %err, "login not persisted; clearing partial session");
            self.clear_session();
            return Err(err);
        }
        tracing::debug!("session token stored");
        Ok(())
    }

    fn store_entries(&self, token: &str, user: Option<&serde_json::Value>) -> Result<(), SessionStoreError> {
        match user {
            Some(user) => self.store.set(&self.config.user_key, &user.to_string())?,
            None => self.store.remove(&self.config.user_key)?,
        }
        self.store.set(&self.config.token_key, token)
    }

    /// Raw stored token, if storage is readable and a token is present.
    pub fn token(&self) -> Option<String> {
        match self.store.get(&self.config.token_key) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(err) => {
                tracing::warn!(error = %err, "session storage unreadable; treating as signed out");
                None
            }
        }
    }

    /// Decoded claims of the stored token, expired or not.
    pub fn claims(&self) -> Option<Claims> {
        self.token().as_deref().and_then(decode_token)
    }

    /// Claims of the stored token only if it has not expired at `now`.
    fn live_claims(&self, now: DateTime<Utc>) -> Option<Claims> {
        self.claims().filter(|claims| !is_expired(claims, now))
    }

    pub fn state_at(&self, now: DateTime<Utc>) -> SessionState {
        match self.claims() {
            None => SessionState::NoToken,
            Some(claims) if is_expired(&claims, now) => SessionState::Expired,
            Some(_) => SessionState::Valid,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state_at(Utc::now())
    }

    pub fn is_authenticated_at(&self, now: DateTime<Utc>) -> bool {
        self.state_at(now) == SessionState::Valid
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(Utc::now())
    }

    /// Role of a live session, case preserved.
    pub fn role_at(&self, now: DateTime<Utc>) -> Option<Role> {
        self.live_claims(now).as_ref().and_then(get_role)
    }

    pub fn role(&self) -> Option<Role> {
        self.role_at(Utc::now())
    }

    pub fn identity_at(&self, now: DateTime<Utc>) -> Option<Identity> {
        self.live_claims(now).as_ref().and_then(get_identity)
    }

    pub fn identity(&self) -> Option<Identity> {
        self.identity_at(Utc::now())
    }

    /// Input for [`crate::authorize_route`], taken from a single decode.
    pub fn snapshot_at(&self, now: DateTime<Utc>) -> SessionSnapshot {
        match self.live_claims(now) {
            Some(claims) => SessionSnapshot::authenticated(get_role(&claims)),
            None => SessionSnapshot::anonymous(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_at(Utc::now())
    }

    /// Drop the token and cached user. Idempotent; never fails.
    pub fn clear_session(&self) {
        for key in [&self.config.token_key, &self.config.user_key] {
            if let Err(err) = self.store.remove(key) {
                tracing::warn!(key = %key, error = %err, "failed to clear session entry");
            }
        }
    }
}
