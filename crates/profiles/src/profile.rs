use serde::{Deserialize, Serialize};

use sheltra_core::{DomainError, DomainResult};

use crate::validation::validate_profile;

/// Profile form as submitted by a refugee.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub phone_number: Option<String>,
    pub current_location: Option<String>,
    pub nationality: Option<String>,
    pub country_of_origin: Option<String>,
    pub languages: Vec<String>,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub skill_name: Option<String>,
    pub proficiency: Option<String>,
    pub years_of_experience: Option<f64>,
}

impl ProfileData {
    /// Validate, folding every field error into one `DomainError`.
    pub fn validate(&self) -> DomainResult<()> {
        let errors = validate_profile(self);
        if errors.is_empty() {
            return Ok(());
        }
        Err(DomainError::validation(errors.to_string()))
    }
}
