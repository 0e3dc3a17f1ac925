//! Typed error handling for the laundry desk
//!
//! Every fallible operation in this crate returns one of the category errors
//! below, or the umbrella [`LaundryError`] that wraps them. Nothing in the
//! core panics on bad input: callers match on the variant and decide what to
//! show the user.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: raw form input that failed a validator
//! - [`TransitionError`]: a status change the order's current state forbids
//! - [`OrderError`]: collection-level problems (unknown id, duplicates, service closed)
//! - [`ConfigError`]: configuration parsing and validation
//!
//! # Example
//!
//! ```rust,ignore
//! match desk.mark_ready(&id, Utc::now()).await {
//!     Ok(order) => render(order),
//!     Err(LaundryError::Transition(TransitionError::InvalidTransition { .. })) => {
//!         // stale view, re-fetch and re-render
//!     }
//!     Err(e) => show_error(e.to_response()),
//! }
//! ```

use crate::core::order::{OrderId, OrderStatus};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The main error type for the crate
#[derive(Debug, Error)]
pub enum LaundryError {
    /// Input validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Forbidden status changes
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// Order collection errors
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Storage backend errors (lock poisoning and the like)
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Serializable error payload handed to UI collaborators
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl LaundryError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            LaundryError::Validation(_) => "VALIDATION_ERROR",
            LaundryError::Transition(e) => e.error_code(),
            LaundryError::Order(e) => e.error_code(),
            LaundryError::Config(_) => "CONFIG_ERROR",
            LaundryError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            LaundryError::Validation(e) => Some(serde_json::json!({ "kind": e.kind() })),
            LaundryError::Transition(TransitionError::InvalidTransition {
                order_id,
                from,
                action,
            }) => Some(serde_json::json!({
                "order_id": order_id.as_str(),
                "status": from.as_str(),
                "action": action.as_str(),
            })),
            LaundryError::Order(OrderError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id.as_str() }))
            }
            _ => None,
        }
    }

    /// Whether the caller should re-fetch the order before retrying
    pub fn is_stale_view(&self) -> bool {
        matches!(
            self,
            LaundryError::Transition(TransitionError::InvalidTransition { .. })
        )
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised by the input validators
///
/// All of them are recoverable by correcting the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("clothes count is not a number")]
    NotANumber,

    #[error("clothes count must be at least 1")]
    NonPositive,

    #[error("bag number must be B- or G- followed by digits")]
    BadFormat,

    #[error("one or more required fields are empty")]
    MissingFields,

    #[error("email does not belong to the university domain")]
    InvalidUniversityEmail,

    #[error("password and confirmation differ")]
    PasswordMismatch,

    #[error("search term is empty")]
    EmptySearchTerm,
}

impl ValidationError {
    /// Machine-readable reason
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::NotANumber => "not_a_number",
            ValidationError::NonPositive => "non_positive",
            ValidationError::BadFormat => "bad_format",
            ValidationError::MissingFields => "missing_fields",
            ValidationError::InvalidUniversityEmail => "invalid_university_email",
            ValidationError::PasswordMismatch => "password_mismatch",
            ValidationError::EmptySearchTerm => "empty_search_term",
        }
    }

    /// Message shown next to the offending form
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::NotANumber | ValidationError::NonPositive => {
                "Please enter a valid positive number of clothes"
            }
            ValidationError::BadFormat => {
                "Invalid bag number format. Use B- or G- followed by numbers"
            }
            ValidationError::MissingFields => "Please fill in all fields",
            ValidationError::InvalidUniversityEmail => {
                "Please use your Rishihood University email"
            }
            ValidationError::PasswordMismatch => "Passwords do not match",
            ValidationError::EmptySearchTerm => "Please enter a search term",
        }
    }
}

// =============================================================================
// Transition Errors
// =============================================================================

/// The operation a caller attempted on an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionAction {
    MarkReceived,
    MarkReady,
    EditClothesCount,
}

impl TransitionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionAction::MarkReceived => "mark_received",
            TransitionAction::MarkReady => "mark_ready",
            TransitionAction::EditClothesCount => "edit_clothes_count",
        }
    }
}

impl fmt::Display for TransitionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the transition engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The order's current status forbids the requested change
    #[error("cannot {action} order '{order_id}' while it is {}", .from.label())]
    InvalidTransition {
        order_id: OrderId,
        from: OrderStatus,
        action: TransitionAction,
    },

    /// The new value was rejected by a validator
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl TransitionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            TransitionError::InvalidTransition { .. } => "INVALID_TRANSITION",
            TransitionError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

// =============================================================================
// Order Errors
// =============================================================================

/// Errors related to the order collection and its neighbours
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("order with id '{id}' not found")]
    NotFound { id: OrderId },

    #[error("order with id '{id}' already exists")]
    AlreadyExists { id: OrderId },

    #[error("bag '{bag}' is already registered")]
    DuplicateBag { bag: String },

    #[error("laundry service is closed")]
    ServiceClosed,
}

impl OrderError {
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::NotFound { .. } => "ORDER_NOT_FOUND",
            OrderError::AlreadyExists { .. } => "ORDER_ALREADY_EXISTS",
            OrderError::DuplicateBag { .. } => "DUPLICATE_BAG",
            OrderError::ServiceClosed => "SERVICE_CLOSED",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" file '{f}'")).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

/// Result alias used throughout the crate
pub type LaundryResult<T> = std::result::Result<T, LaundryError>;
