//! Refugee profile and sign-in form validation.
//!
//! Field-level checks run before a profile is submitted; every problem is
//! reported at once, keyed by the wire field name.

pub mod login;
pub mod profile;
pub mod validation;

pub use login::{LoginForm, MIN_PASSWORD_LEN, validate_login};
pub use profile::{ProfileData, Skill};
pub use validation::{ValidationErrors, is_valid_email, is_valid_phone, validate_profile};
