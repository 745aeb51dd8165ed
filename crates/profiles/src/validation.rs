use std::collections::BTreeMap;

use serde::Serialize;

use crate::profile::{ProfileData, Skill};

/// Field name → message, ordered by field name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub(crate) fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// `local@domain.tld`: no whitespace, one `@`, a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// At least 10 characters, each a digit, whitespace, `+`, `-`, `(` or `)`.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().count() >= 10
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '(' | ')'))
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

fn skill_is_complete(skill: &Skill) -> bool {
    !blank(&skill.skill_name)
        && !blank(&skill.proficiency)
        && skill.years_of_experience.is_some_and(|years| years >= 0.0)
}

/// Check every field and report all problems.
pub fn validate_profile(data: &ProfileData) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if blank(&data.first_name) {
        errors.add("firstName", "First name is required");
    }
    if blank(&data.last_name) {
        errors.add("lastName", "Last name is required");
    }
    match data.email.as_deref().map(str::trim) {
        None | Some("") => errors.add("email", "Email is required"),
        Some(email) if !is_valid_email(email) => errors.add("email", "Please enter a valid email address"),
        Some(_) => {}
    }
    if blank(&data.date_of_birth) {
        errors.add("dateOfBirth", "Date of birth is required");
    }
    if blank(&data.gender) {
        errors.add("gender", "Gender is required");
    }
    if let Some(phone) = data.phone_number.as_deref().filter(|p| !p.is_empty()) {
        if !is_valid_phone(phone) {
            errors.add("phoneNumber", "Please enter a valid phone number (at least 10 digits)");
        }
    }

    if blank(&data.current_location) {
        errors.add("currentLocation", "Current location is required");
    }
    if blank(&data.nationality) {
        errors.add("nationality", "Nationality is required");
    }
    if blank(&data.country_of_origin) {
        errors.add("countryOfOrigin", "Country of origin is required");
    }

    if data.languages.iter().all(|l| l.trim().is_empty()) {
        errors.add("languages", "At least one language is required");
    }

    // skills are optional, but each listed one must be complete
    if !data.skills.iter().all(skill_is_complete) {
        errors.add(
            "skills",
            "All skills must have a name, proficiency level, and valid years of experience",
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn complete_profile() -> ProfileData {
        serde_json::from_value(json!({
            "firstName": "Amina",
            "lastName": "Haddad",
            "email": "amina.haddad@example.org",
            "dateOfBirth": "1994-06-02",
            "gender": "female",
            "phoneNumber": "+1 (555) 010-2030",
            "currentLocation": "Chicago, IL",
            "nationality": "Syrian",
            "countryOfOrigin": "Syria",
            "languages": ["Arabic", "English"],
            "skills": [{"skillName": "Bookkeeping", "proficiency": "advanced", "yearsOfExperience": 4}]
        }))
        .unwrap()
    }

    #[test]
    fn complete_profile_is_valid() {
        let profile = complete_profile();
        assert!(validate_profile(&profile).is_empty());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn empty_profile_reports_every_required_field() {
        let errors = validate_profile(&ProfileData::default());
        let fields: Vec<&str> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![
                "countryOfOrigin",
                "currentLocation",
                "dateOfBirth",
                "email",
                "firstName",
                "gender",
                "languages",
                "lastName",
                "nationality",
            ]
        );
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn whitespace_only_names_are_missing() {
        let profile = ProfileData {
            first_name: Some("   ".into()),
            ..complete_profile()
        };
        assert_eq!(validate_profile(&profile).get("firstName"), Some("First name is required"));
    }

    #[test]
    fn malformed_email_and_phone() {
        let profile = ProfileData {
            email: Some("amina@example".into()),
            phone_number: Some("555-0102".into()),
            ..complete_profile()
        };
        let errors = validate_profile(&profile);
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert!(errors.get("phoneNumber").is_some());
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn incomplete_skill_is_reported_once() {
        let profile = ProfileData {
            skills: vec![
                Skill {
                    skill_name: Some("Welding".into()),
                    proficiency: None,
                    years_of_experience: Some(2.0),
                },
                Skill {
                    skill_name: Some("Driving".into()),
                    proficiency: Some("basic".into()),
                    years_of_experience: Some(-1.0),
                },
            ],
            ..complete_profile()
        };
        let errors = validate_profile(&profile);
        assert_eq!(errors.len(), 1);
        assert!(errors.get("skills").is_some());
    }

    #[test]
    fn validate_folds_errors_into_domain_error() {
        let err = ProfileData::default().validate().unwrap_err();
        assert!(err.to_string().contains("firstName: First name is required"));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.co"));
    }

    proptest! {
        #[test]
        fn ten_or_more_phone_characters_pass(phone in "[0-9 +()-]{10,20}") {
            prop_assert!(is_valid_phone(&phone));
        }

        #[test]
        fn letters_never_pass_as_phone(prefix in "[0-9]{10}", letter in "[a-zA-Z]") {
            let phone = format!("{prefix}{letter}");
            prop_assert!(!is_valid_phone(&phone));
        }
    }
}
