//! # Vector Error Types
//!
//! All errors that can occur when reading, printing or configuring vectors.

use thiserror::Error;

/// Errors that can occur in the vector system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Component access on an exclusive vector whose buffer was moved out.
    #[error("component access on a moved-from vector")]
    MovedFrom,

    /// Writing the textual rendering failed.
    #[error("failed to write vector: {0}")]
    Output(String),

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for vector operations.
pub type VectorResult<T> = Result<T, VectorError>;
