//! Continuous spatial transforms backed by sampled vector fields.
//!
//! A vector raster of shape `[K, n1, ..., nD]` is turned into a continuous
//! field over D axes by N-linear interpolation with border extension. A
//! [`PositionFieldTransform`] uses the field value as the target
//! coordinate; a [`DisplacementFieldTransform`] adds it to the source.

pub mod coordinate;
pub mod error;
pub mod field;
pub mod interpolation;
pub mod transform;

pub use coordinate::{Localizable, Positionable};
pub use error::{FieldError, Result};
pub use field::{FieldSampler, RasterField, RasterFieldBuilder, VectorField};
pub use transform::{
    AffineTransform, DisplacementFieldTransform, FieldTransform, PositionFieldTransform,
    RealTransform,
};
