//! Linear interpolation implementation.
//!
//! This module provides N-linear interpolation of vector rasters for any
//! number of spatial axes (bilinear for 2D, trilinear for 3D, ...).

use serde::{Deserialize, Serialize};

use super::trait_::{Interpolator, Neighborhood};
use crate::field::grid::SampleGrid;

/// Linear Interpolator.
///
/// Blends the 2^D grid points surrounding a position. All K components
/// share the same per-axis weights. Corners with zero weight are skipped,
/// so positions exactly on a grid point return the stored vector unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearInterpolator;

impl LinearInterpolator {
    /// Create a new linear interpolator.
    pub fn new() -> Self {
        Self
    }
}

impl Interpolator for LinearInterpolator {
    const NAME: &'static str = "n-linear";

    fn interpolate(
        &self,
        grid: &SampleGrid,
        position: &[f64],
        neighborhood: &mut Neighborhood,
        value: &mut [f64],
    ) {
        let n = grid.num_dimensions();

        // Floor, weight and clamped neighbor pair per axis
        for (axis, &p) in position[..n].iter().enumerate() {
            // Clamping first keeps infinite coordinates on the border
            let p = p.clamp(0.0, (grid.dims()[axis] - 1) as f64);
            let floor = p.floor();
            let index = floor as i64;
            neighborhood.fractions[axis] = p - floor;
            neighborhood.lower[axis] = grid.clamp_index(axis, index);
            neighborhood.upper[axis] = grid.clamp_index(axis, index.saturating_add(1));
        }

        value[..grid.num_components()].fill(0.0);

        // Bit `axis` of `corner` selects the upper neighbor on that axis
        for corner in 0..(1usize << n) {
            let mut weight = 1.0;
            let mut offset = 0;
            for axis in 0..n {
                let t = neighborhood.fractions[axis];
                if (corner >> axis) & 1 == 1 {
                    weight *= t;
                    offset += grid.offset(axis, neighborhood.upper[axis]);
                } else {
                    weight *= 1.0 - t;
                    offset += grid.offset(axis, neighborhood.lower[axis]);
                }
            }
            if weight != 0.0 {
                grid.accumulate_vector(offset, weight, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::config::AxisOrder;

    fn sample(grid: &SampleGrid, position: &[f64]) -> Vec<f64> {
        let mut neighborhood = Neighborhood::new(grid.num_dimensions());
        let mut value = vec![0.0; grid.num_components()];
        LinearInterpolator::new().interpolate(grid, position, &mut neighborhood, &mut value);
        value
    }

    #[test]
    fn test_linear_interpolator_2d() {
        // Shape [K=1, 2, 2]
        let grid =
            SampleGrid::new(vec![0.0, 1.0, 10.0, 11.0], &[1, 2, 2], AxisOrder::Natural).unwrap();

        // Average of all 4 corners
        let center = sample(&grid, &[0.5, 0.5]);
        let expected = (0.0 + 1.0 + 10.0 + 11.0) / 4.0;
        assert!((center[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_linear_interpolation_at_grid_points() {
        let grid =
            SampleGrid::new(vec![0.0, 1.0, 2.0, 3.0], &[1, 2, 2], AxisOrder::Natural).unwrap();

        assert_eq!(sample(&grid, &[0.0, 0.0]), vec![0.0]);
        assert_eq!(sample(&grid, &[0.0, 1.0]), vec![1.0]);
        assert_eq!(sample(&grid, &[1.0, 0.0]), vec![2.0]);
        assert_eq!(sample(&grid, &[1.0, 1.0]), vec![3.0]);
    }

    #[test]
    fn test_linear_interpolator_out_of_bounds() {
        let grid =
            SampleGrid::new(vec![0.0, 1.0, 2.0, 3.0], &[1, 2, 2], AxisOrder::Natural).unwrap();

        // Should be clamped to valid region
        assert_eq!(sample(&grid, &[-1.0, -1.0]), vec![0.0]);
        assert_eq!(sample(&grid, &[5.0, 5.0]), vec![3.0]);
        // Clamped on one axis only
        assert_eq!(sample(&grid, &[-2.0, 0.5]), vec![0.5]);
    }

    #[test]
    fn test_linear_interpolator_infinite_coordinates() {
        let grid =
            SampleGrid::new(vec![0.0, 1.0, 2.0, 3.0], &[1, 2, 2], AxisOrder::Natural).unwrap();

        assert_eq!(sample(&grid, &[f64::INFINITY, 1.0]), sample(&grid, &[1.0, 1.0]));
        assert_eq!(sample(&grid, &[f64::NEG_INFINITY, 0.5]), vec![0.5]);
        assert_eq!(sample(&grid, &[f64::INFINITY, f64::NEG_INFINITY]), vec![2.0]);
    }

    #[test]
    fn test_components_share_weights() {
        // Shape [K=2, 2]: component 0 goes 0 -> 4, component 1 goes 10 -> -10
        let grid =
            SampleGrid::new(vec![0.0, 4.0, 10.0, -10.0], &[2, 2], AxisOrder::Natural).unwrap();

        let value = sample(&grid, &[0.25]);
        assert!((value[0] - 1.0).abs() < 1e-12);
        assert!((value[1] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_interpolator_4d() {
        // Shape [K=1, 2, 2, 2, 2], only the last corner set
        let mut samples = vec![0.0; 16];
        samples[15] = 100.0;
        let grid = SampleGrid::new(samples, &[1, 2, 2, 2, 2], AxisOrder::Natural).unwrap();

        assert_eq!(sample(&grid, &[1.0, 1.0, 1.0, 1.0]), vec![100.0]);

        // Weight of the set corner at the center is 1/16
        let center = sample(&grid, &[0.5, 0.5, 0.5, 0.5]);
        assert!((center[0] - 6.25).abs() < 1e-12);
    }
}
