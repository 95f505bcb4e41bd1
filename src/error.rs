//! Error types for the reelrank recommendation engine.
//!
//! The scoring core is total over well-formed input and returns plain
//! values; errors only surface at the catalog loading boundary.

use thiserror::Error;

/// Main error type for reelrank operations.
#[derive(Debug, Error)]
pub enum ReelrankError {
    /// Catalog validation errors (empty titles, malformed records)
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for reelrank operations
pub type Result<T> = std::result::Result<T, ReelrankError>;
