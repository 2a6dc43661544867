//! Transform types and operations.
//!
//! This module provides the per-coordinate transform trait, the position
//! and displacement field transforms, and the affine transform used as a
//! pixel to physical map.

pub mod trait_;
pub mod affine;
pub mod field;

pub use trait_::RealTransform;
pub use affine::AffineTransform;
pub use field::{
    Displacement, DisplacementFieldTransform, FieldSemantics, FieldTransform, Position,
    PositionFieldTransform,
};
