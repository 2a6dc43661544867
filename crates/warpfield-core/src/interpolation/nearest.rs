//! Nearest neighbor interpolation implementation.

use serde::{Deserialize, Serialize};

use super::trait_::{Interpolator, Neighborhood};
use crate::field::grid::SampleGrid;

/// Nearest Neighbor Interpolator.
///
/// Rounds each axis half up to the nearest grid index, then clamps it to the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestNeighborInterpolator;

impl NearestNeighborInterpolator {
    /// Create a new nearest neighbor interpolator.
    pub fn new() -> Self {
        Self
    }
}

impl Interpolator for NearestNeighborInterpolator {
    const NAME: &'static str = "nearest";

    fn interpolate(
        &self,
        grid: &SampleGrid,
        position: &[f64],
        _neighborhood: &mut Neighborhood,
        value: &mut [f64],
    ) {
        let mut offset = 0;
        for (axis, &p) in position[..grid.num_dimensions()].iter().enumerate() {
            let index = grid.clamp_index(axis, (p + 0.5).floor() as i64);
            offset += grid.offset(axis, index);
        }
        grid.read_vector(offset, value);
    }
}
