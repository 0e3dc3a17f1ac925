//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::schedule::ServiceSchedule;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Email suffix accepted at signup when none is configured
pub const DEFAULT_EMAIL_SUFFIX: &str = "rishihood.edu.in";

/// Settings shared by every screen
///
/// # Example
///
/// ```yaml
/// institution_email_suffix: rishihood.edu.in
/// enforce_service_hours: true
/// schedule:
///   days: [Mon, Tue, Wed, Thu, Fri, Sat]
///   windows:
///     - { start: "08:30:00", end: "10:00:00" }
///     - { start: "16:30:00", end: "19:00:00" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaundryConfig {
    /// Domain suffix a signup email must end with
    pub institution_email_suffix: String,

    /// Opening hours
    pub schedule: ServiceSchedule,

    /// Reject new submissions while the service is closed
    pub enforce_service_hours: bool,
}

impl Default for LaundryConfig {
    fn default() -> Self {
        Self {
            institution_email_suffix: DEFAULT_EMAIL_SUFFIX.to_string(),
            schedule: ServiceSchedule::standard(),
            enforce_service_hours: false,
        }
    }
}

impl LaundryConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(path, "configuration loaded");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.institution_email_suffix.trim().is_empty() {
            return Err(invalid(
                "institution_email_suffix",
                &self.institution_email_suffix,
                "must not be empty",
            ));
        }

        if self.schedule.days.is_empty() {
            return Err(invalid("schedule.days", "[]", "at least one open day is required"));
        }

        if self.schedule.windows.is_empty() {
            return Err(invalid(
                "schedule.windows",
                "[]",
                "at least one time window is required",
            ));
        }

        if let Some(window) = self.schedule.windows.iter().find(|w| w.start >= w.end) {
            return Err(invalid(
                "schedule.windows",
                &format!("{}-{}", window.start, window.end),
                "start must be before end",
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, value: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}
