//! Error types for the serbench harness
//!
//! This module provides a unified error handling system using `thiserror` for
//! the codecs, the configuration layer and the result reporter.

use thiserror::Error;

/// The main error type for the benchmark harness
#[derive(Error, Debug)]
pub enum Error {
    /// A codec could not encode a record
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    /// A codec could not decode a payload
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The final result dump could not be rendered
    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong with the configuration
        message: String,
    },

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raised when a codec cannot turn a record into bytes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The underlying encoder reported a failure
    #[error("{format} serialization failed: {reason}")]
    Failed {
        /// Format name of the failing codec
        format: &'static str,
        /// Message from the underlying library
        reason: String,
    },

    /// The record holds a value the format has no representation for
    #[error("{format} cannot represent field `{field}`: {reason}")]
    Unrepresentable {
        /// Format name of the failing codec
        format: &'static str,
        /// Offending record field
        field: &'static str,
        /// Why the value cannot be written
        reason: String,
    },
}

/// Raised when a payload cannot be turned back into a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload is malformed or truncated
    #[error("{format} payload is malformed: {reason}")]
    Malformed {
        /// Format name of the failing codec
        format: &'static str,
        /// Message from the underlying library
        reason: String,
    },

    /// The payload parsed but a required field is absent
    #[error("{format} payload is missing field `{field}`")]
    MissingField {
        /// Format name of the failing codec
        format: &'static str,
        /// Missing record field
        field: &'static str,
    },
}

/// Raised when the result list cannot be rendered
#[derive(Error, Debug)]
pub enum AggregationError {
    /// The structured dump could not be produced
    #[error("Failed to render results: {reason}")]
    Render {
        /// Message from the underlying encoder
        reason: String,
    },
}

impl From<serde_json::Error> for AggregationError {
    fn from(err: serde_json::Error) -> Self {
        AggregationError::Render {
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

/// Convenience type alias for encode Results
pub type EncodeResult<T> = std::result::Result<T, EncodeError>;

/// Convenience type alias for decode Results
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
