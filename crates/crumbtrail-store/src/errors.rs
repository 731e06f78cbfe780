//! Error handling for crumbtrail-store
//!
//! Wraps crumbtrail-core ExError with store-specific helpers

use crumbtrail_core::errors::{ExError, ExErrorKind};
use crumbtrail_core::rules::Violation;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a serialization error
pub fn serialization_error(operation: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an error listing taxonomy invariant violations
pub fn invariant_violation(violations: &[Violation]) -> ExError {
    let listed: Vec<String> = violations.iter().map(ToString::to_string).collect();
    ExError::new(ExErrorKind::InvariantViolation)
        .with_op("seed_load")
        .with_message(format!(
            "{} taxonomy violation(s): {}",
            violations.len(),
            listed.join("; ")
        ))
}
