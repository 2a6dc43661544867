//! Interpolator trait for sampling vector rasters at continuous coordinates.

use std::fmt::Debug;

use crate::field::grid::SampleGrid;

/// Per-axis scratch reused between interpolations.
///
/// Owned by a sampler so the per-coordinate path never allocates.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighborhood {
    /// Clamped lower neighbor index per axis.
    pub lower: Vec<usize>,
    /// Clamped upper neighbor index per axis.
    pub upper: Vec<usize>,
    /// Fractional position between `lower` and `upper` per axis.
    pub fractions: Vec<f64>,
}

impl Neighborhood {
    /// Create scratch for a grid with `num_dimensions` axes.
    pub fn new(num_dimensions: usize) -> Self {
        Self {
            lower: vec![0; num_dimensions],
            upper: vec![0; num_dimensions],
            fractions: vec![0.0; num_dimensions],
        }
    }
}

/// Interpolator trait for sampling K-vectors at continuous grid indices.
///
/// Implementations must treat out-of-range neighbors with border
/// extension, i.e. clamp each neighbor index to the grid.
pub trait Interpolator: Debug + Clone + Send + Sync {
    /// Short name used in log output.
    const NAME: &'static str;

    /// Interpolate the grid at `position` and write K components into `value`.
    ///
    /// # Arguments
    /// * `grid` - The sample grid
    /// * `position` - Continuous index, at least `grid.num_dimensions()` long
    /// * `neighborhood` - Scratch sized for the grid
    /// * `value` - Output, at least `grid.num_components()` long
    fn interpolate(
        &self,
        grid: &SampleGrid,
        position: &[f64],
        neighborhood: &mut Neighborhood,
        value: &mut [f64],
    );
}
