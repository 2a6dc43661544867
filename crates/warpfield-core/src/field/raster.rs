//! Continuous vector fields built from interleaved rasters.
//!
//! A raster of shape `[K, n1, ..., nD]` holds one K-vector per grid point,
//! with the component on axis 0. [`RasterFieldBuilder`] groups the
//! components per grid point, extends the grid with border replication and
//! wraps it with an [`Interpolator`], yielding a [`RasterField`] over D axes.

use std::sync::Arc;

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use super::affine::AffineField;
use super::config::{AxisOrder, RasterFieldConfig};
use super::grid::SampleGrid;
use super::trait_::{FieldSampler, VectorField};
use crate::error::Result;
use crate::interpolation::{Interpolator, LinearInterpolator, Neighborhood};
use crate::transform::AffineTransform;

/// Builder for [`RasterField`].
///
/// # Examples
/// ```rust
/// use warpfield_core::field::{RasterFieldBuilder, VectorField};
///
/// // K = 2 components on a 3 x 3 grid, constant (1, -1)
/// let mut samples = vec![1.0; 9];
/// samples.extend(vec![-1.0; 9]);
///
/// let field = RasterFieldBuilder::new(samples, [2, 3, 3]).build().unwrap();
/// assert_eq!(field.num_dimensions(), 2);
/// assert_eq!(field.num_components(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RasterFieldBuilder<I = LinearInterpolator> {
    samples: Vec<f64>,
    shape: Vec<usize>,
    config: RasterFieldConfig,
    interpolator: I,
}

impl RasterFieldBuilder<LinearInterpolator> {
    /// Start from a row-major sample buffer with the component axis first.
    ///
    /// # Arguments
    /// * `samples` - Raster samples in row-major order
    /// * `shape` - Raster shape `[K, n1, ..., nD]`
    pub fn new(samples: Vec<f64>, shape: impl Into<Vec<usize>>) -> Self {
        Self {
            samples,
            shape: shape.into(),
            config: RasterFieldConfig::default(),
            interpolator: LinearInterpolator::new(),
        }
    }

    /// Start from a tensor of shape `[K, n1, ..., nD]`.
    ///
    /// The tensor data is read back to the host once.
    pub fn from_tensor<B: Backend, const R: usize>(tensor: Tensor<B, R>) -> Self {
        let shape = tensor.dims().to_vec();
        let samples = tensor.into_data().iter::<f64>().collect();
        Self::new(samples, shape)
    }
}

impl<I: Interpolator> RasterFieldBuilder<I> {
    /// Replace the whole configuration.
    pub fn with_config(mut self, config: RasterFieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Set how coordinate axes map onto raster axes.
    pub fn with_axis_order(mut self, axis_order: AxisOrder) -> Self {
        self.config.axis_order = axis_order;
        self
    }

    /// Use a different interpolation policy.
    pub fn with_interpolator<J: Interpolator>(self, interpolator: J) -> RasterFieldBuilder<J> {
        RasterFieldBuilder {
            samples: self.samples,
            shape: self.shape,
            config: self.config,
            interpolator,
        }
    }

    /// Build the field over raster index space.
    ///
    /// # Errors
    /// Fails if the shape has fewer than 2 axes, an empty axis, or does
    /// not match the sample count.
    pub fn build(self) -> Result<RasterField<I>> {
        let grid = SampleGrid::new(self.samples, &self.shape, self.config.axis_order)?;
        tracing::debug!(
            "Built raster field: shape {:?}, {} axes -> {} components, {:?} axis order, {} interpolation",
            grid.shape(),
            grid.num_dimensions(),
            grid.num_components(),
            self.config.axis_order,
            I::NAME
        );
        Ok(RasterField {
            grid: Arc::new(grid),
            interpolator: self.interpolator,
        })
    }

    /// Build the field over physical space.
    ///
    /// `pixel_to_physical` maps raster indices to physical coordinates;
    /// the returned field is sampled at physical coordinates, which are
    /// mapped back to indices before the raster lookup.
    ///
    /// # Errors
    /// Fails as [`build`](Self::build), or if the affine does not match the
    /// raster's spatial axis count or is singular.
    pub fn build_with_pixel_to_physical(
        self,
        pixel_to_physical: AffineTransform,
    ) -> Result<AffineField<RasterField<I>>> {
        AffineField::new(self.build()?, pixel_to_physical)
    }
}

/// Continuous field obtained by interpolating a border-extended raster.
#[derive(Debug, Clone)]
pub struct RasterField<I = LinearInterpolator> {
    grid: Arc<SampleGrid>,
    interpolator: I,
}

impl<I: Interpolator> RasterField<I> {
    /// The shared sample grid.
    pub fn grid(&self) -> &Arc<SampleGrid> {
        &self.grid
    }

    /// The interpolation policy.
    pub fn interpolator(&self) -> &I {
        &self.interpolator
    }
}

impl<I: Interpolator> VectorField for RasterField<I> {
    type Sampler = RasterSampler<I>;

    fn num_dimensions(&self) -> usize {
        self.grid.num_dimensions()
    }

    fn num_components(&self) -> usize {
        self.grid.num_components()
    }

    fn sampler(&self) -> RasterSampler<I> {
        let n = self.grid.num_dimensions();
        RasterSampler {
            grid: Arc::clone(&self.grid),
            interpolator: self.interpolator.clone(),
            position: vec![0.0; n],
            value: vec![0.0; self.grid.num_components()],
            neighborhood: Neighborhood::new(n),
        }
    }
}

/// Sampler over a [`RasterField`].
#[derive(Debug, Clone)]
pub struct RasterSampler<I = LinearInterpolator> {
    grid: Arc<SampleGrid>,
    interpolator: I,
    position: Vec<f64>,
    value: Vec<f64>,
    neighborhood: Neighborhood,
}

impl<I> RasterSampler<I> {
    /// The shared sample grid.
    pub fn grid(&self) -> &Arc<SampleGrid> {
        &self.grid
    }
}

impl<I: Interpolator> FieldSampler for RasterSampler<I> {
    #[inline]
    fn num_dimensions(&self) -> usize {
        self.position.len()
    }

    #[inline]
    fn num_components(&self) -> usize {
        self.value.len()
    }

    #[inline]
    fn position(&self) -> &[f64] {
        &self.position
    }

    #[inline]
    fn position_mut(&mut self) -> &mut [f64] {
        &mut self.position
    }

    #[inline]
    fn get(&mut self) -> &[f64] {
        self.interpolator.interpolate(
            &self.grid,
            &self.position,
            &mut self.neighborhood,
            &mut self.value,
        );
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::interpolation::NearestNeighborInterpolator;

    // Shape [K=2, 2, 2]; component 0 stores 10 * i + j, component 1 stores -(10 * i + j)
    fn ramp_builder() -> RasterFieldBuilder {
        let base = [0.0, 1.0, 10.0, 11.0];
        let mut samples = base.to_vec();
        samples.extend(base.iter().map(|v| -v));
        RasterFieldBuilder::new(samples, [2, 2, 2])
    }

    #[test]
    fn test_sampler_dimensions() {
        let field = ramp_builder().build().unwrap();
        let sampler = field.sampler();
        assert_eq!(sampler.num_dimensions(), 2);
        assert_eq!(sampler.num_components(), 2);
        assert_eq!(sampler.position(), &[0.0, 0.0]);
    }

    #[test]
    fn test_set_position_and_get() {
        let field = ramp_builder().build().unwrap();
        let mut sampler = field.sampler();

        assert_eq!(sampler.set_position_and_get(&[1.0, 0.0]), &[10.0, -10.0]);
        let mid = sampler.set_position_and_get(&[0.5, 0.5]).to_vec();
        assert!((mid[0] - 5.5).abs() < 1e-12);
        assert!((mid[1] + 5.5).abs() < 1e-12);
    }

    #[test]
    fn test_extra_position_entries_ignored() {
        let field = ramp_builder().build().unwrap();
        let mut sampler = field.sampler();
        assert_eq!(sampler.set_position_and_get(&[0.0, 1.0, 99.0]), &[1.0, -1.0]);
    }

    #[test]
    fn test_clones_do_not_alias() {
        let field = ramp_builder().build().unwrap();
        let mut a = field.sampler();
        a.set_position(&[1.0, 1.0]);
        let mut b = a.clone();
        b.set_position(&[0.0, 0.0]);

        assert_eq!(a.position(), &[1.0, 1.0]);
        assert_eq!(a.get(), &[11.0, -11.0]);
        assert!(Arc::ptr_eq(a.grid(), b.grid()));
    }

    #[test]
    fn test_nearest_builder() {
        let field = ramp_builder()
            .with_interpolator(NearestNeighborInterpolator::new())
            .build()
            .unwrap();
        assert_eq!(field.interpolator(), &NearestNeighborInterpolator::new());
        let mut sampler = field.sampler();
        assert_eq!(sampler.set_position_and_get(&[0.6, 0.4]), &[10.0, -10.0]);
    }

    #[test]
    fn test_reversed_builder() {
        let field = ramp_builder()
            .with_axis_order(AxisOrder::Reversed)
            .build()
            .unwrap();
        let mut sampler = field.sampler();
        // (x=1, y=0) addresses raster (i=0, j=1)
        assert_eq!(sampler.set_position_and_get(&[1.0, 0.0]), &[1.0, -1.0]);
    }

    #[test]
    fn test_with_config() {
        let config = RasterFieldConfig::new().with_axis_order(AxisOrder::Reversed);
        let field = ramp_builder().with_config(config).build().unwrap();
        assert_eq!(field.grid().shape(), &[2, 2, 2]);

        let mut sampler = field.sampler();
        assert_eq!(sampler.set_position_and_get(&[1.0, 0.0]), &[1.0, -1.0]);
    }

    #[test]
    fn test_rank_one_raster_rejected() {
        let err = RasterFieldBuilder::new(vec![1.0, 2.0, 3.0], [3]).build().unwrap_err();
        assert!(matches!(err, FieldError::InvalidConfiguration(_)));
    }
}
