use serde::{Deserialize, Serialize};

use crate::validation::{ValidationErrors, is_valid_email, is_valid_phone};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Sign-in form: one identifier field that takes either an email or a phone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginForm {
    pub email_or_phone: String,
    pub password: String,
}

/// Check the sign-in form before it is posted.
///
/// The identifier is matched as typed; only the emptiness checks trim.
pub fn validate_login(form: &LoginForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let id = form.email_or_phone.as_str();
    if id.trim().is_empty() {
        errors.add("emailOrPhone", "Email or phone is required");
    } else if !is_valid_email(id) && !is_valid_phone(id) {
        errors.add("emailOrPhone", "Please enter a valid email or phone number");
    }

    if form.password.trim().is_empty() {
        errors.add("password", "Password is required");
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.add("password", "Password must be at least 6 characters");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email_or_phone: &str, password: &str) -> LoginForm {
        LoginForm {
            email_or_phone: email_or_phone.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn email_or_phone_signs_in() {
        assert!(validate_login(&form("amina@example.org", "secret1")).is_empty());
        assert!(validate_login(&form("+1 (555) 010-2030", "secret1")).is_empty());
    }

    #[test]
    fn blank_form_reports_both_fields() {
        let errors = validate_login(&form("   ", "  "));
        assert_eq!(errors.get("emailOrPhone"), Some("Email or phone is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn identifier_must_look_like_email_or_phone() {
        let errors = validate_login(&form("amina", "secret1"));
        assert_eq!(
            errors.get("emailOrPhone"),
            Some("Please enter a valid email or phone number")
        );
        assert_eq!(errors.len(), 1);
        assert!(validate_login(&form("555-0102", "secret1")).get("emailOrPhone").is_some());
    }

    #[test]
    fn short_password_is_rejected() {
        let errors = validate_login(&form("amina@example.org", "abc12"));
        assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
        assert!(validate_login(&form("amina@example.org", "abc123")).is_empty());
    }

    #[test]
    fn deserializes_camel_case_form() {
        let parsed: LoginForm =
            serde_json::from_str(r#"{"emailOrPhone":"amina@example.org","password":"secret1"}"#).unwrap();
        assert_eq!(parsed, form("amina@example.org", "secret1"));
    }
}
