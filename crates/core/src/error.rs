//! Errors raised by Sheltra's placement and profile rules.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// A placement move, profile form or identifier the rules refused.
///
/// Token and storage problems never end up here: the session gate turns
/// them into "signed out", and session storage has its own error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input the rules cannot work with, such as an unknown placement
    /// status or an incomplete profile form.
    #[error("rejected input: {0}")]
    Validation(String),

    /// A placement move or record that breaks the stage order.
    #[error("placement lifecycle violated: {0}")]
    LifecycleViolation(String),

    #[error("unusable {kind} id: {reason}")]
    InvalidId { kind: &'static str, reason: &'static str },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn lifecycle(msg: impl Into<String>) -> Self {
        Self::LifecycleViolation(msg.into())
    }

    pub fn invalid_id(kind: &'static str, reason: &'static str) -> Self {
        Self::InvalidId { kind, reason }
    }
}
