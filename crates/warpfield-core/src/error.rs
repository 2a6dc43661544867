//! Error types for field construction.
//!
//! Errors are only ever raised while building a field or a transform.
//! Applying a transform to a coordinate never fails; shape contracts on
//! the per-coordinate path are the caller's responsibility.

use thiserror::Error;

/// Main error type for field and transform construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The raster or builder configuration cannot describe a vector field.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Two construction arguments disagree on a dimensionality.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Sample buffer does not match the declared raster shape.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// A coordinate pre-transform has no inverse.
    #[error("Singular transform: {0}")]
    SingularTransform(String),
}

/// Result type for field operations.
pub type Result<T> = std::result::Result<T, FieldError>;

impl FieldError {
    /// Create an invalid configuration error.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Create a dimension mismatch error.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    /// Create a singular transform error.
    pub fn singular_transform(msg: impl Into<String>) -> Self {
        Self::SingularTransform(msg.into())
    }
}
