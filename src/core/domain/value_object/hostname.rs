use crate::core::domain::{
    error::{GridResult, ValidationError},
    value_object::base_value_object::ValueObject,
};
use std::fmt;

/// Represents the configuration for a hostname value object
#[derive(Debug, Clone)]
pub struct HostnameConfig {
    min_length: usize,
}

impl Default for HostnameConfig {
    fn default() -> Self {
        Self { min_length: 3 }
    }
}

/// A host name entered in the publish form.
///
/// The value is trimmed before validation. It may be a bare label
/// (`"site"`) or already carry a zone (`"site.grid.lab"`); the backend
/// appends the zone to bare labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostname {
    value: String,
}

impl Hostname {
    /// Trims the raw input and validates it
    ///
    /// Rules are checked in order: not empty, no whitespace, minimum length.
    pub fn parse(raw: &str) -> GridResult<Self> {
        <Self as ValueObject>::new(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl ValueObject for Hostname {
    type Value = String;
    type ValidationConfig = HostnameConfig;

    fn value(&self) -> &Self::Value {
        &self.value
    }

    fn validation_config() -> Self::ValidationConfig {
        HostnameConfig::default()
    }

    fn validate(
        value: &Self::Value,
        config: &Self::ValidationConfig,
    ) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Empty { field: "hostname" });
        }

        if value.chars().any(char::is_whitespace) {
            return Err(ValidationError::Whitespace { field: "hostname" });
        }

        if value.chars().count() < config.min_length {
            return Err(ValidationError::TooShort {
                field: "hostname",
                min: config.min_length,
            });
        }

        Ok(())
    }

    fn create(value: Self::Value) -> Self {
        Self { value }
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
