//! Interpolation policies for vector rasters.
//!
//! This module provides the interpolator trait and the kernels used to
//! turn a discrete grid of K-vectors into a continuous field.

pub mod trait_;
pub mod linear;
pub mod nearest;

pub use trait_::{Interpolator, Neighborhood};
pub use linear::LinearInterpolator;
pub use nearest::NearestNeighborInterpolator;
