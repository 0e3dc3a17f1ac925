//! Reusable input filters
//!
//! These filters normalize raw field values before they are validated

/// Filter: trim surrounding whitespace
pub fn trim() -> impl Fn(&str) -> String + Send + Sync + Clone {
    |value: &str| value.trim().to_string()
}

/// Filter: convert to uppercase
pub fn uppercase() -> impl Fn(&str) -> String + Send + Sync + Clone {
    |value: &str| value.to_uppercase()
}

/// Filter: convert to lowercase
pub fn lowercase() -> impl Fn(&str) -> String + Send + Sync + Clone {
    |value: &str| value.to_lowercase()
}
