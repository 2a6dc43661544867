//! Continuous vector fields and their samplers.
//!
//! This module turns interleaved vector rasters into continuous fields
//! and provides the cursor types that field transforms evaluate.

pub mod trait_;
pub mod config;
pub mod grid;
pub mod raster;
pub mod affine;

pub use trait_::{FieldSampler, VectorField};
pub use config::{AxisOrder, RasterFieldConfig};
pub use grid::SampleGrid;
pub use raster::{RasterField, RasterFieldBuilder, RasterSampler};
pub use affine::{AffineField, AffineSampler};
