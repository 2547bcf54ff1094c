//! Custom error types for theology-enroll
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::submission::SubmissionError;

/// The main error type for theology-enroll operations
#[derive(Error, Debug)]
pub enum EnrollError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// A step of the form did not validate
    #[error("Validation error: {0}")]
    Validation(String),

    /// A field path that does not name any form field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// The remote endpoint rejected or never received the registration
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}

impl EnrollError {
    /// Create an "unknown field" error
    pub fn unknown_field(path: impl Into<String>) -> Self {
        Self::UnknownField(path.into())
    }
}

impl From<std::io::Error> for EnrollError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EnrollError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for EnrollError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for theology-enroll operations
pub type EnrollResult<T> = Result<T, EnrollError>;
