//! Field validators
//!
//! Used by the forms, the transition engine and the order desk

use super::filters;
use crate::core::error::ValidationError;
use crate::core::order::BagNumber;
use regex::Regex;
use std::sync::OnceLock;

fn bag_number_regex() -> &'static Regex {
    static BAG_REGEX: OnceLock<Regex> = OnceLock::new();
    BAG_REGEX.get_or_init(|| Regex::new(r"^[BG]-[0-9]+$").expect("bag number pattern is valid"))
}

fn bag_number_draft_regex() -> &'static Regex {
    static DRAFT_REGEX: OnceLock<Regex> = OnceLock::new();
    DRAFT_REGEX
        .get_or_init(|| Regex::new(r"^[BG](-[0-9]*)?$").expect("bag draft pattern is valid"))
}

fn integer_regex() -> &'static Regex {
    static INT_REGEX: OnceLock<Regex> = OnceLock::new();
    INT_REGEX.get_or_init(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern is valid"))
}

/// Validator: clothes count must be an integer >= 1
///
/// Surrounding whitespace is ignored. Anything that is not a plain integer
/// (including values too large for a `u32`) is `NotANumber`.
pub fn validate_clothes_count(raw: &str) -> Result<u32, ValidationError> {
    let value = filters::trim()(raw);
    if !integer_regex().is_match(&value) {
        tracing::debug!(raw, "clothes count rejected: not a number");
        return Err(ValidationError::NotANumber);
    }

    let digits = value.trim_start_matches(['+', '-']);
    let is_zero = digits.bytes().all(|b| b == b'0');
    if value.starts_with('-') || is_zero {
        tracing::debug!(raw, "clothes count rejected: non positive");
        return Err(ValidationError::NonPositive);
    }

    digits.parse::<u32>().map_err(|_| {
        tracing::debug!(raw, "clothes count rejected: out of range");
        ValidationError::NotANumber
    })
}

/// Validator: bag number must be `B-<digits>` or `G-<digits>`, any case
///
/// The accepted value is normalized to uppercase.
pub fn validate_bag_number(raw: &str) -> Result<BagNumber, ValidationError> {
    let normalized = filters::uppercase()(raw);
    if bag_number_regex().is_match(&normalized) {
        Ok(BagNumber::new_unchecked(normalized))
    } else {
        tracing::debug!(raw, "bag number rejected");
        Err(ValidationError::BadFormat)
    }
}

/// Accept a bag number that is still being typed
///
/// Empty input, a lone `B`/`G`, or the prefix followed by a dash and zero or
/// more digits are all fine while editing; the uppercased draft is returned.
/// The draft still has to pass [`validate_bag_number`] on submission.
pub fn normalize_bag_number_draft(raw: &str) -> Result<String, ValidationError> {
    let formatted = filters::uppercase()(raw);
    if formatted.is_empty() || bag_number_draft_regex().is_match(&formatted) {
        Ok(formatted)
    } else {
        Err(ValidationError::BadFormat)
    }
}

/// Validator: email must end with the institution's domain suffix
pub fn validate_university_email(email: &str, suffix: &str) -> Result<(), ValidationError> {
    if email.ends_with(suffix) {
        Ok(())
    } else {
        Err(ValidationError::InvalidUniversityEmail)
    }
}
