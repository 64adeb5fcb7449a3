//! # Error Types
//!
//! Defines the error types used at the boundaries of the Compact Licensure
//! Stack. All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! Errors exist only at ingestion boundaries (payload deserialization,
//! configuration loading, file IO). The query surface of the domain types
//! never returns an error: missing or malformed data degrades to `None`,
//! `false`, or an empty string instead.

use thiserror::Error;

/// Top-level error type for the Compact Licensure Stack.
#[derive(Error, Debug)]
pub enum CompactError {
    /// A server payload document was structurally malformed.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// A date string did not match any accepted format.
    #[error("invalid date {value:?}: expected {expected}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// Human-readable description of the accepted format.
        expected: &'static str,
    },

    /// A status string matched no known enum variant.
    #[error("unrecognized status value: {0:?}")]
    InvalidStatus(String),

    /// Configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
