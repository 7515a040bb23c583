//! Error types for snowddl

use thiserror::Error;

/// Result type alias for snowddl operations
pub type DdlResult<T> = Result<T, DdlError>;

/// Error types for SQL statement building
#[derive(Debug, Error)]
pub enum DdlError {
    /// A field directive names an unknown kind, or its kind does not fit the field value
    #[error("Malformed directive on field '{field}': {message}")]
    MalformedDirective { field: String, message: String },

    /// Unknown modifier designator (only raised when strict modifiers are enabled)
    #[error("Unknown modifier '{designator}' in directive '{tag}'")]
    UnknownModifier { tag: String, designator: String },

    /// Identifier could not be parsed or constructed
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Statement options failed validation
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DdlError {
    /// Create a malformed directive error for a specific field
    pub fn malformed(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedDirective {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a malformed directive error
    pub fn is_malformed_directive(&self) -> bool {
        matches!(self, Self::MalformedDirective { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
