//! Error types for the bio component.

use thiserror::Error;

/// Result type for bio operations.
pub type BioResult<T> = Result<T, BioError>;

/// Errors raised around the component.
///
/// Building a fragment never fails; only parsing author records and
/// serializing fragments can.
#[derive(Debug, Error)]
pub enum BioError {
    /// The author document is not valid JSON or has the wrong shape.
    #[error("Invalid author record: {0}")]
    InvalidInput(#[from] serde_json::Error),

    /// The HTML template failed to render.
    #[error("Failed to render bio fragment: {0}")]
    Render(#[from] askama::Error),
}
