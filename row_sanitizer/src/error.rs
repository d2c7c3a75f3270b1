//! Error types for row sanitizing operations.

use std::fmt;

/// Result type for sanitizing operations
pub type SanitizeResult<T> = Result<T, SanitizeError>;

/// Numeric type a field was expected to coerce into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Integer,
    Float,
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::Integer => write!(f, "integer"),
            NumericKind::Float => write!(f, "float"),
        }
    }
}

/// Error type for sanitizing operations.
///
/// `row` is always the zero-based position of the offending record in the
/// input slice. A single error aborts the whole batch.
#[derive(Debug, thiserror::Error)]
pub enum SanitizeError {
    #[error("Format error at row {row}: field '{field}' value {value:?} is not a valid {expected}")]
    Format {
        row: usize,
        field: String,
        value: String,
        expected: NumericKind,
    },

    #[error("Missing field '{field}' at row {row}")]
    MissingField { row: usize, field: String },

    #[error("Field '{field}' is empty at row {row} and no earlier row supplied a value")]
    EmptyField { row: usize, field: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SanitizeError {
    /// Zero-based record index the error refers to, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            SanitizeError::Format { row, .. }
            | SanitizeError::MissingField { row, .. }
            | SanitizeError::EmptyField { row, .. } => Some(*row),
            SanitizeError::Configuration(_) => None,
        }
    }

    /// Whether this is a numeric [`SanitizeError::Format`] failure.
    pub fn is_format(&self) -> bool {
        matches!(self, SanitizeError::Format { .. })
    }
}
