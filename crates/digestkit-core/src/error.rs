//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout digestkit. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Parsing errors carry the offending input or the expected and actual
//!   sizes.
//! - Policy errors name the rejected algorithm.
//! - Streaming I/O errors are passed through unchanged.

use thiserror::Error;

/// Top-level error type for digest operations.
#[derive(Error, Debug)]
pub enum DigestError {
    /// A hex digest string contained invalid characters or an odd length.
    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// A digest string was empty.
    #[error("digest is empty")]
    Empty,

    /// A digest has the wrong size for the algorithm it is checked against.
    #[error("digest length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Byte length the algorithm produces.
        expected: usize,
        /// Byte length that was supplied.
        actual: usize,
    },

    /// An algorithm name did not match any supported algorithm.
    #[error("unknown digest algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// An algorithm is supported but excluded by the active algorithm set.
    #[error("digest algorithm {0} is not allowed by the active algorithm set")]
    AlgorithmNotAllowed(String),

    /// Canonicalization of a structured value failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// IO error while streaming input.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Amounts must be strings or integers.
    #[error("float values are not permitted in canonical representations; use string or integer: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
