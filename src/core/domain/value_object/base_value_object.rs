use crate::core::domain::error::{GridResult, ValidationError};
use std::fmt::Display;

/// A trait representing a domain value object with built-in validation.
///
/// Implementors describe how a raw value is checked and how a validated
/// value is wrapped; `new` ties both together so that an instance can only
/// exist once its value passed validation.
///
/// # Type Parameters
///
/// * `Value`: The underlying type of the value object
pub trait ValueObject: Sized {
    /// The underlying type of the value
    type Value: Clone + Display;

    /// The configuration type for validation
    type ValidationConfig;

    /// Returns a reference to the wrapped value
    fn value(&self) -> &Self::Value;

    /// Returns the validation configuration for the value object
    fn validation_config() -> Self::ValidationConfig;

    /// Validates the value according to domain rules
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation passes
    /// * `Err(ValidationError)` naming the first rule that failed
    fn validate(value: &Self::Value, config: &Self::ValidationConfig)
    -> Result<(), ValidationError>;

    /// Wraps an already validated value
    fn create(value: Self::Value) -> Self;

    /// Creates a new validated instance
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` if validation succeeds
    /// * `Err(GridError::Validation)` otherwise
    fn new(value: Self::Value) -> GridResult<Self> {
        let config = Self::validation_config();
        Self::validate(&value, &config)?;
        Ok(Self::create(value))
    }
}
