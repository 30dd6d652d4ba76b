//! Error types for the test harness.
//!
//! Every failure is terminal for the scenario that hit it; nothing is
//! retried.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | StatusMismatch | response specification, status check |
//! | ContentTypeMismatch | response specification, content type check |
//! | UnexpectedBody | response specification, empty body check |
//! | MissingField | response specification, schema check |
//! | FieldMismatch / EmptyField | field assertions |
//! | Transport | the HTTP client (DNS, connect, timeout) |
//! | Decode | extraction of a model from the body |
//! | InvalidConfig | building a request specification |

// Variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The error type for every harness operation.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("expected status {expected}, got {actual} (body: {body})")]
    StatusMismatch {
        expected: u16,
        actual: u16,
        body: String,
    },

    #[error("expected content type {expected}, got {actual}")]
    ContentTypeMismatch { expected: String, actual: String },

    #[error("expected an empty body, got {len} bytes")]
    UnexpectedBody { len: usize },

    #[error("response body has no field at {path}")]
    MissingField { path: String },

    #[error("field {field}: expected {expected:?}, got {actual:?}")]
    FieldMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("field {field} is empty")]
    EmptyField { field: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl HarnessError {
    /// Returns the actual status for a status mismatch.
    pub fn actual_status(&self) -> Option<u16> {
        match self {
            HarnessError::StatusMismatch { actual, .. } => Some(*actual),
            _ => None,
        }
    }
}

/// Result type for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
