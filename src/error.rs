//! Error types for Self-Organizing Map training.

use thiserror::Error;

/// The main error type for SOM operations.
#[derive(Error, Debug)]
pub enum SomError {
    /// Invalid training configuration, detected before training starts.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two vectors that must share a dimension do not.
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The dimension required by the grid.
        expected: usize,
        /// The dimension actually supplied.
        found: usize,
    },

    /// Empty input.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image encoding error.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for SOM operations.
pub type Result<T> = std::result::Result<T, SomError>;
