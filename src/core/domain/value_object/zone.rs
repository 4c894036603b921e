use crate::core::domain::{
    error::{GridResult, ValidationError},
    value_object::base_value_object::ValueObject,
};
use std::fmt;

/// Represents the configuration for a DNS zone value object
#[derive(Debug, Clone)]
pub struct ZoneConfig {
    max_zone_length: usize,
    max_label_length: usize,
}

impl ZoneConfig {
    fn validate_label(&self, label: &str) -> Result<(), ValidationError> {
        if label.is_empty() || label.len() > self.max_label_length {
            return Err(ValidationError::Format(format!(
                "Label must be between 1 and {} characters",
                self.max_label_length
            )));
        }

        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ValidationError::Format(
                "Label can only contain alphanumeric characters and hyphens".to_string(),
            ));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(ValidationError::Format(
                "Label cannot start or end with hyphen".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            max_zone_length: 253,
            max_label_length: 63,
        }
    }
}

/// The DNS suffix appended to bare host names (e.g. `grid.lab`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    value: String,
}

impl Zone {
    /// Validates a zone, ignoring a trailing root dot
    pub fn parse(raw: &str) -> GridResult<Self> {
        <Self as ValueObject>::new(raw.trim().trim_end_matches('.').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Places a bare host under this zone; names that already contain a
    /// dot are returned untouched
    pub fn qualify(&self, host: &str) -> String {
        if host.contains('.') {
            host.to_string()
        } else {
            format!("{}.{}", host, self.value)
        }
    }
}

impl Default for Zone {
    fn default() -> Self {
        Self::create("grid.lab".to_string())
    }
}

impl ValueObject for Zone {
    type Value = String;
    type ValidationConfig = ZoneConfig;

    fn value(&self) -> &Self::Value {
        &self.value
    }

    fn validation_config() -> Self::ValidationConfig {
        ZoneConfig::default()
    }

    fn validate(
        value: &Self::Value,
        config: &Self::ValidationConfig,
    ) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Empty { field: "zone" });
        }

        if value.len() > config.max_zone_length {
            return Err(ValidationError::Field {
                field: "zone".to_string(),
                message: format!(
                    "Zone length exceeds maximum of {} characters",
                    config.max_zone_length
                ),
            });
        }

        for label in value.split('.') {
            config.validate_label(label)?;
        }

        Ok(())
    }

    fn create(value: Self::Value) -> Self {
        Self { value }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::error::GridError;

    #[test]
    fn test_valid_zones() {
        for zone in ["grid.lab", "lab", "sub.grid-01.lab", "grid.lab."] {
            assert!(Zone::parse(zone).is_ok(), "Zone {} should be valid", zone);
        }
        assert_eq!(Zone::parse("grid.lab.").unwrap().as_str(), "grid.lab");
    }

    #[test]
    fn test_invalid_zones() {
        let long_zone = "a".repeat(254);
        let test_cases = vec![
            ("", "empty zone"),
            (long_zone.as_str(), "zone too long"),
            ("-grid.lab", "starts with hyphen"),
            ("grid-.lab", "ends with hyphen"),
            ("gr@id.lab", "invalid character"),
            ("grid..lab", "consecutive dots"),
        ];

        for (zone, case) in test_cases {
            assert!(
                matches!(Zone::parse(zone), Err(GridError::Validation { .. })),
                "Case '{}' should fail validation: {}",
                case,
                zone
            );
        }
    }

    #[test]
    fn test_qualify() {
        let zone = Zone::default();
        assert_eq!(zone.qualify("foo"), "foo.grid.lab");
        assert_eq!(zone.qualify("foo.bar"), "foo.bar");
    }
}
