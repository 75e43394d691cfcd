//! Error types for coordinate-to-grid operations.

use thiserror::Error;

/// Result type alias using GridError.
pub type GridResult<T> = Result<T, GridError>;

/// Primary error type for grid location.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("Invalid value for '{param}': {message}")]
    InvalidCoordinate { param: String, message: String },

    #[error("Projection failed: {0}")]
    Projection(String),
}
