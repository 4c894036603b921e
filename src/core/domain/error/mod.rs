use thiserror::Error;

/// The main error type for grid.lab client operations.
///
/// This enum represents every failure the client can surface: transport
/// problems, non-success responses, payloads that do not match the expected
/// schema, and local validation or configuration failures.
#[derive(Error, Debug)]
pub enum GridError {
    /// The request never produced a response (DNS, connect, timeout, ...)
    ///
    /// # Fields
    /// * `0` - A description of what went wrong while talking to the backend
    #[error("Connection error: {0}")]
    Connection(String),

    /// The backend answered with a non-success status
    ///
    /// # Fields
    /// * `status` - The HTTP status code
    /// * `message` - The `error` field of the body, the body text, or the status reason
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The backend answered successfully but the body carried an `error` field
    #[error("Backend error: {0}")]
    Backend(String),

    /// The payload did not match the expected shape
    #[error("Invalid payload: {0}")]
    Payload(String),

    /// Represents validation failures with detailed context
    #[error("Validation error: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },

    /// The client configuration is unusable
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GridError {
    /// The text shown to a user when this error ends up in a status line
    /// or a placeholder panel.
    pub fn reason(&self) -> String {
        match self {
            GridError::Api { message, .. } => message.clone(),
            GridError::Backend(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Specialized error type for validation failures.
///
/// Every rule has its own variant so callers can map a violation to a
/// distinct user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required value was empty after trimming
    #[error("Field '{field}' cannot be empty")]
    Empty { field: &'static str },

    /// The value contains whitespace
    #[error("Field '{field}' cannot contain whitespace")]
    Whitespace { field: &'static str },

    /// The value is shorter than the allowed minimum
    #[error("Field '{field}' must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },

    /// A file name does not carry the required extension
    #[error("Field '{field}' must be a .{expected} file")]
    Extension {
        field: &'static str,
        expected: &'static str,
    },

    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),
}

/// Type alias for Results that may fail with a GridError
pub type GridResult<T> = Result<T, GridError>;
