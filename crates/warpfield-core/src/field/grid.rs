//! Host-side sample storage for vector rasters.
//!
//! A raster of shape `[K, n1, ..., nD]` is kept in its original row-major
//! layout. Grouping the K components of a grid point is done purely through
//! strides: component `c` of the grid point at `offset` lives at
//! `offset + c * component_stride`.

use super::config::AxisOrder;
use crate::error::{FieldError, Result};

/// Immutable grid of K-vectors addressed by D integer indices.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    samples: Vec<f64>,
    shape: Vec<usize>,
    /// Length of each coordinate axis.
    dims: Vec<usize>,
    /// Sample stride of each coordinate axis.
    strides: Vec<usize>,
    num_components: usize,
    component_stride: usize,
}

impl SampleGrid {
    /// Wrap a row-major sample buffer of the given raster shape.
    ///
    /// # Errors
    /// * `InvalidConfiguration` if the shape has fewer than 2 axes, any
    ///   empty axis, more spatial axes than corner masks can address, or
    ///   a sample count that overflows `usize`.
    /// * `ShapeMismatch` if the buffer length is not the product of the shape.
    pub fn new(samples: Vec<f64>, shape: &[usize], axis_order: AxisOrder) -> Result<Self> {
        if shape.len() < 2 {
            return Err(FieldError::invalid_configuration(format!(
                "raster needs a component axis and at least one spatial axis, got shape {:?}",
                shape
            )));
        }
        if shape.iter().any(|&n| n == 0) {
            return Err(FieldError::invalid_configuration(format!(
                "raster has an empty axis: {:?}",
                shape
            )));
        }

        let num_dimensions = shape.len() - 1;
        if num_dimensions >= usize::BITS as usize {
            return Err(FieldError::invalid_configuration(format!(
                "{} spatial axes exceed the supported maximum of {}",
                num_dimensions,
                usize::BITS - 1
            )));
        }

        let expected = shape
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .ok_or_else(|| {
                FieldError::invalid_configuration(format!(
                    "raster shape {:?} has more samples than fit in memory",
                    shape
                ))
            })?;
        if samples.len() != expected {
            return Err(FieldError::ShapeMismatch {
                expected: vec![expected],
                actual: vec![samples.len()],
            });
        }

        // Row-major strides over the full raster shape.
        let mut raster_strides = vec![1usize; shape.len()];
        for axis in (0..shape.len() - 1).rev() {
            raster_strides[axis] = raster_strides[axis + 1] * shape[axis + 1];
        }

        let raster_axis = |d: usize| match axis_order {
            AxisOrder::Natural => d + 1,
            AxisOrder::Reversed => num_dimensions - d,
        };
        let dims = (0..num_dimensions).map(|d| shape[raster_axis(d)]).collect();
        let strides = (0..num_dimensions)
            .map(|d| raster_strides[raster_axis(d)])
            .collect();

        Ok(Self {
            samples,
            shape: shape.to_vec(),
            dims,
            strides,
            num_components: shape[0],
            component_stride: raster_strides[0],
        })
    }

    /// Number of spatial axes (D).
    pub fn num_dimensions(&self) -> usize {
        self.dims.len()
    }

    /// Number of vector components per grid point (K).
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Raster shape as supplied, component axis first.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Grid length along each coordinate axis.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Clamp an index on `axis` to the valid range (border extension).
    #[inline]
    pub fn clamp_index(&self, axis: usize, index: i64) -> usize {
        let last = self.dims[axis] - 1;
        if index <= 0 {
            0
        } else if index as u64 >= last as u64 {
            last
        } else {
            index as usize
        }
    }

    /// Sample offset contributed by an in-range `index` on `axis`.
    #[inline]
    pub fn offset(&self, axis: usize, index: usize) -> usize {
        index * self.strides[axis]
    }

    /// Write the K-vector at `offset` into `value`.
    #[inline]
    pub fn read_vector(&self, offset: usize, value: &mut [f64]) {
        for (c, v) in value[..self.num_components].iter_mut().enumerate() {
            *v = self.samples[offset + c * self.component_stride];
        }
    }

    /// Add `weight` times the K-vector at `offset` to `value`.
    #[inline]
    pub fn accumulate_vector(&self, offset: usize, weight: f64, value: &mut [f64]) {
        for (c, v) in value[..self.num_components].iter_mut().enumerate() {
            *v += weight * self.samples[offset + c * self.component_stride];
        }
    }
}
