//! Validation of raw form input
//!
//! Every validator is a pure, synchronous, total function: it takes the raw
//! string a screen collected and returns either the normalized value or a
//! [`ValidationError`](crate::core::error::ValidationError) naming the reason.

pub mod filters;
pub mod forms;
pub mod validators;

pub use forms::{
    LoginForm, SignupCredentials, StudentProfileForm, validate_login, validate_signup_fields,
    validate_student_profile,
};
pub use validators::{
    normalize_bag_number_draft, validate_bag_number, validate_clothes_count,
    validate_university_email,
};
