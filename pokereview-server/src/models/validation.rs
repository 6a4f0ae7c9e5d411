//! Validation error types

use std::fmt;

/// Input rejected before it reaches a service
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Request body is not valid JSON or lacks a required field
    MalformedBody { reason: String },

    /// Path or query value doesn't parse (e.g., non-numeric id)
    InvalidFormat { field: &'static str, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBody { reason } => write!(f, "malformed request body: {}", reason),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "path",
            reason: "expected an integer id".into(),
        };
        assert_eq!(err.to_string(), "path: expected an integer id");

        let err = ValidationError::MalformedBody {
            reason: "missing field `name`".into(),
        };
        assert!(err.to_string().contains("missing field `name`"));
    }
}
