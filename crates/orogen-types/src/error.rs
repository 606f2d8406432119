//! Error types for the Orogen toolkit.
//!
//! All crates return `OrogenResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Orogen toolkit.
#[derive(Debug, Error)]
pub enum OrogenError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// A generation parameter is out of its valid range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Geometry collapsed to a degenerate configuration
    /// (zero-area triangle, repeated indices).
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// A model file could not be parsed.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, OrogenError>`.
pub type OrogenResult<T> = Result<T, OrogenError>;
