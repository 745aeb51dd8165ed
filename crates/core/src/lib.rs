//! `sheltra-core`: shared domain primitives.
//!
//! Pure types only: no storage, no transport, no logging setup.

pub mod error;
pub mod id;
pub mod time;

pub use error::{DomainError, DomainResult};
pub use id::PlacementId;
pub use time::{display_date, parse_timestamp, unix_seconds};
