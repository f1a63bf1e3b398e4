// ABOUTME: Unified error type and error codes for the training report
// ABOUTME: Defines ErrorCode, AppError and the AppResult alias used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. The
//! [`ErrorCode`] carries the failure class (unknown activity code, arity
//! mismatch, value out of range, ...) and [`AppError`] adds a human-readable
//! message plus an optional chained source.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Session model (1000-1999)
    /// A training variant does not define one of its formulas
    #[serde(rename = "UNSUPPORTED_OPERATION")]
    UnsupportedOperation = 1000,

    // Dispatch (2000-2999)
    /// Activity code outside the recognized set
    #[serde(rename = "UNKNOWN_ACTIVITY_CODE")]
    UnknownActivityCode = 2000,
    /// Positional argument count differs from the constructor arity
    #[serde(rename = "ARITY_MISMATCH")]
    ArityMismatch = 2001,

    // Validation (3000-3999)
    /// Malformed input value
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Input value outside its physical range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Internal Errors (9000-9999)
    /// Writing a report to its output failed
    #[serde(rename = "OUTPUT_ERROR")]
    OutputError = 9002,
    /// Report serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnsupportedOperation => "The operation is not implemented for this training",
            Self::UnknownActivityCode => "The activity code is not recognized",
            Self::ArityMismatch => "The number of training parameters is wrong",
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::OutputError => "Writing the report failed",
            Self::SerializationError => "Data serialization failed",
        }
    }

    /// Stable machine-readable name, identical to the serde representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedOperation => "UNSUPPORTED_OPERATION",
            Self::UnknownActivityCode => "UNKNOWN_ACTIVITY_CODE",
            Self::ArityMismatch => "ARITY_MISMATCH",
            Self::InvalidInput => "INVALID_INPUT",
            Self::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            Self::OutputError => "OUTPUT_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// A training variant left one of its formulas undefined
    #[must_use]
    pub fn unsupported_operation(operation: &str, training_type: &str) -> Self {
        Self::new(
            ErrorCode::UnsupportedOperation,
            format!("Define {operation} in {training_type}"),
        )
    }

    /// Activity code not in the recognized set
    #[must_use]
    pub fn unknown_activity_code(code: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::UnknownActivityCode,
            format!("Unknown activity code '{}'", code.into()),
        )
    }

    /// Argument count does not match the constructor arity
    #[must_use]
    pub fn arity_mismatch(training_type: &str, expected: usize, actual: usize) -> Self {
        Self::new(
            ErrorCode::ArityMismatch,
            format!("{training_type} expects {expected} parameters, got {actual}"),
        )
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its acceptable range
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Report output failure
    #[must_use]
    pub fn output(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::OutputError, message)
    }

    /// Serialization failure
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::output(error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serde_names() {
        let json = serde_json::to_string(&ErrorCode::UnknownActivityCode).unwrap();
        assert_eq!(json, "\"UNKNOWN_ACTIVITY_CODE\"");
        let code: ErrorCode = serde_json::from_str("\"ARITY_MISMATCH\"").unwrap();
        assert_eq!(code, ErrorCode::ArityMismatch);
        assert_eq!(code.as_str(), "ARITY_MISMATCH");
    }

    #[test]
    fn test_unsupported_operation_names_training() {
        let error = AppError::unsupported_operation("get_spent_calories", "Rowing");
        assert_eq!(error.code, ErrorCode::UnsupportedOperation);
        assert!(error.to_string().contains("Define get_spent_calories in Rowing"));
    }

    #[test]
    fn test_io_error_conversion_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error = AppError::from(io);
        assert_eq!(error.code, ErrorCode::OutputError);
        assert!(std::error::Error::source(&error).is_some());
    }
}
