//! Signup and login forms
//!
//! The forms collect raw strings. Emptiness is checked through the `validator`
//! derive, the domain rules (email suffix, password confirmation, bag number)
//! by the validators in this module's parent.

use super::validators::{validate_bag_number, validate_university_email};
use crate::core::error::ValidationError;
use crate::core::order::BagNumber;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// First signup step: credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SignupCredentials {
    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,

    #[validate(length(min = 1))]
    pub confirm_password: String,
}

/// Second signup step: the student's profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct StudentProfileForm {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub enrollment_no: String,

    #[validate(length(min = 1))]
    pub bag_no: String,

    #[validate(length(min = 1))]
    pub phone_no: String,

    #[validate(length(min = 1))]
    pub residency_no: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Login for either role
///
/// `identifier` is the student's email or the service worker's username.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub identifier: String,

    #[validate(length(min = 1))]
    pub password: String,
}

fn require_all<T: Validate>(form: &T) -> Result<(), ValidationError> {
    form.validate().map_err(|errors| {
        tracing::debug!(
            fields = ?errors.field_errors().keys().collect::<Vec<_>>(),
            "form has empty fields"
        );
        ValidationError::MissingFields
    })
}

/// Validate the first signup step
///
/// Checks run in order: every field present, email under `email_suffix`,
/// password equal to its confirmation (case-sensitive).
pub fn validate_signup_fields(
    fields: &SignupCredentials,
    email_suffix: &str,
) -> Result<(), ValidationError> {
    require_all(fields)?;
    validate_university_email(&fields.email, email_suffix)?;
    if fields.password != fields.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Validate the second signup step and return the normalized bag number
pub fn validate_student_profile(form: &StudentProfileForm) -> Result<BagNumber, ValidationError> {
    require_all(form)?;
    validate_bag_number(&form.bag_no)
}

/// Validate a login form
pub fn validate_login(form: &LoginForm) -> Result<(), ValidationError> {
    require_all(form)
}
