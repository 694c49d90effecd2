//! Error types for gridlsh.

use thiserror::Error;

/// Errors that can occur during hashing, indexing, or random generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Index, row, or column outside the valid range. Never silently clamped.
    #[error("index {index} out of bounds (limit {limit})")]
    Bounds { index: i64, limit: i64 },

    /// Input length does not match the configured dimensionality.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Mutation attempted on a structurally read-only type. This is a
    /// permanent contract violation, not a transient failure.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// A generated value broke its declared bound, or equivalent
    /// representations disagreed. Signals a defect in the generator or the
    /// equality contract; must not be caught and ignored.
    #[error("internal invariant violated: {0}")]
    Invariant(String),

    /// Malformed corpus line. The whole load aborts; no partial index is
    /// returned.
    #[error("corpus load failed at line {line}: {reason}")]
    Load { line: usize, reason: String },

    /// Unrecognized hasher selector at startup.
    #[error("unknown hasher '{name}': expected a selector starting with 'ortho' or 'vertex'")]
    UnknownHasher { name: String },
}

/// Result type for gridlsh operations.
pub type Result<T> = std::result::Result<T, GridError>;
