//! Position and displacement field transforms.
//!
//! Both transforms hold one [`FieldSampler`] and differ only in how the
//! sampled K-vector becomes the target coordinate:
//! * [`Position`]: the vector is the target.
//! * [`Displacement`]: the vector is added to the source.
//!
//! The choice is a zero-sized type parameter, so the per-coordinate path
//! is statically dispatched.

use std::fmt::Debug;
use std::marker::PhantomData;

use burn::tensor::backend::Backend;
use burn::tensor::{Tensor, TensorData};
use rayon::prelude::*;

use super::affine::AffineTransform;
use super::trait_::RealTransform;
use crate::coordinate::{Localizable, Positionable};
use crate::error::{FieldError, Result};
use crate::field::{AffineSampler, FieldSampler, RasterFieldBuilder, RasterSampler, VectorField};

/// How a sampled field vector is turned into a target coordinate.
pub trait FieldSemantics: Debug + Clone + Copy + Default + Send + Sync + 'static {
    /// Short name used in log output.
    const NAME: &'static str;

    /// Source axes read for a field with `num_dimensions` axes and
    /// `num_components` components.
    fn required_source_dimensions(num_dimensions: usize, num_components: usize) -> usize;

    /// Write the target coordinate from the sampled `value`.
    fn write<L, P>(value: &[f64], source: &L, target: &mut P)
    where
        L: Localizable + ?Sized,
        P: Positionable + ?Sized;
}

/// The sampled vector is the target coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position;

impl FieldSemantics for Position {
    const NAME: &'static str = "position";

    fn required_source_dimensions(num_dimensions: usize, _num_components: usize) -> usize {
        num_dimensions
    }

    #[inline]
    fn write<L, P>(value: &[f64], _source: &L, target: &mut P)
    where
        L: Localizable + ?Sized,
        P: Positionable + ?Sized,
    {
        for (d, &v) in value.iter().enumerate() {
            target.set_coordinate(d, v);
        }
    }
}

/// The sampled vector is an offset added to the source coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Displacement;

impl FieldSemantics for Displacement {
    const NAME: &'static str = "displacement";

    fn required_source_dimensions(num_dimensions: usize, num_components: usize) -> usize {
        num_dimensions.max(num_components)
    }

    #[inline]
    fn write<L, P>(value: &[f64], source: &L, target: &mut P)
    where
        L: Localizable + ?Sized,
        P: Positionable + ?Sized,
    {
        for (d, &v) in value.iter().enumerate() {
            target.set_coordinate(d, v + source.coordinate(d));
        }
    }
}

/// Transform by continuous lookup in a vector field.
///
/// # Type Parameters
/// * `S` - The field sampler
/// * `M` - [`Position`] or [`Displacement`]
///
/// # Examples
/// ```rust
/// use warpfield_core::field::RasterFieldBuilder;
/// use warpfield_core::transform::{DisplacementFieldTransform, RealTransform};
///
/// // Constant offset (1, -1) on a 3 x 3 grid
/// let mut samples = vec![1.0; 9];
/// samples.extend(vec![-1.0; 9]);
/// let field = RasterFieldBuilder::new(samples, [2, 3, 3]).build().unwrap();
///
/// let mut transform = DisplacementFieldTransform::from_field(&field);
/// let mut target = [0.0; 2];
/// transform.apply(&[0.5, 0.5], &mut target);
/// assert_eq!(target, [1.5, -0.5]);
/// ```
#[derive(Debug, Clone)]
pub struct FieldTransform<S, M> {
    sampler: S,
    _semantics: PhantomData<M>,
}

/// Field transform whose sampled vectors are target coordinates.
pub type PositionFieldTransform<S = RasterSampler> = FieldTransform<S, Position>;

/// Field transform whose sampled vectors are offsets from the source.
pub type DisplacementFieldTransform<S = RasterSampler> = FieldTransform<S, Displacement>;

impl<S: FieldSampler, M: FieldSemantics> FieldTransform<S, M> {
    /// Create a transform driving an existing sampler.
    pub fn new(sampler: S) -> Self {
        let d = sampler.num_dimensions();
        let k = sampler.num_components();
        tracing::debug!("Created {} field transform: {} -> {} dimensions", M::NAME, d, k);
        if M::required_source_dimensions(d, k) > d {
            tracing::warn!(
                "{} field has {} components but only {} source dimensions; sources must provide {} entries",
                M::NAME,
                k,
                d,
                k
            );
        }
        Self {
            sampler,
            _semantics: PhantomData,
        }
    }

    /// Create a transform over a continuous field.
    pub fn from_field<F: VectorField<Sampler = S>>(field: &F) -> Self {
        Self::new(field.sampler())
    }

    /// Get the sampler.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Apply the transform to a batch of points.
    ///
    /// Rows are processed in parallel; each worker owns a [`copy`](RealTransform::copy).
    ///
    /// # Arguments
    /// * `points` - Tensor of shape `[Batch, D]`
    ///
    /// # Returns
    /// Tensor of shape `[Batch, K]`
    ///
    /// # Errors
    /// `DimensionMismatch` if the point width is not D, or if the
    /// semantics need more source axes than the points provide.
    pub fn transform_points<B: Backend>(&self, points: Tensor<B, 2>) -> Result<Tensor<B, 2>> {
        let [count, width] = points.dims();
        let d = self.sampler.num_dimensions();
        let k = self.sampler.num_components();

        if width != d {
            return Err(FieldError::dimension_mismatch(format!(
                "points have {} columns but the field domain has {} dimensions",
                width, d
            )));
        }
        let required = M::required_source_dimensions(d, k);
        if required > width {
            return Err(FieldError::dimension_mismatch(format!(
                "{} field with {} components needs {} source columns, got {}",
                M::NAME,
                k,
                required,
                width
            )));
        }

        let device = points.device();
        let source: Vec<f64> = points.into_data().iter::<f64>().collect();
        let mut target = vec![0.0f64; count * k];

        tracing::debug!("Transforming {} points through {} field", count, M::NAME);
        if count > 0 && d > 0 && k > 0 {
            target
                .par_chunks_mut(k)
                .zip(source.par_chunks(d))
                .for_each_init(|| self.copy(), |worker, (t, s)| worker.apply(s, t));
        }

        let data = TensorData::new(target, [count, k]).convert::<B::FloatElem>();
        Ok(Tensor::from_data(data, &device))
    }
}

impl<M: FieldSemantics> FieldTransform<RasterSampler, M> {
    /// Create a transform from a raster of shape `[K, n1, ..., nD]`.
    ///
    /// Coordinates are raster indices; the field is N-linear with border extension.
    pub fn from_tensor<B: Backend, const R: usize>(tensor: Tensor<B, R>) -> Result<Self> {
        let field = RasterFieldBuilder::from_tensor(tensor).build()?;
        Ok(Self::from_field(&field))
    }
}

impl<M: FieldSemantics> FieldTransform<AffineSampler<RasterSampler>, M> {
    /// Create a transform from a raster of shape `[K, n1, ..., nD]` sampled in physical space.
    ///
    /// # Arguments
    /// * `tensor` - The interleaved raster
    /// * `pixel_to_physical` - Map from raster indices to physical coordinates
    pub fn from_tensor_with_pixel_to_physical<B: Backend, const R: usize>(
        tensor: Tensor<B, R>,
        pixel_to_physical: AffineTransform,
    ) -> Result<Self> {
        let field = RasterFieldBuilder::from_tensor(tensor).build_with_pixel_to_physical(pixel_to_physical)?;
        Ok(Self::from_field(&field))
    }
}

impl<S: FieldSampler, M: FieldSemantics> RealTransform for FieldTransform<S, M> {
    #[inline]
    fn num_source_dimensions(&self) -> usize {
        self.sampler.num_dimensions()
    }

    #[inline]
    fn num_target_dimensions(&self) -> usize {
        self.sampler.num_components()
    }

    /// # Panics
    /// Panics if `source` is shorter than the required source dimensions
    /// or `target` is shorter than K.
    #[inline]
    fn apply(&mut self, source: &[f64], target: &mut [f64]) {
        self.apply_to(source, target);
    }

    #[inline]
    fn apply_f32(&mut self, source: &[f32], target: &mut [f32]) {
        self.apply_to(source, target);
    }

    #[inline]
    fn apply_to<L, P>(&mut self, source: &L, target: &mut P)
    where
        L: Localizable + ?Sized,
        P: Positionable + ?Sized,
    {
        self.sampler.set_position_from(source);
        M::write(self.sampler.get(), source, target);
    }

    fn copy(&self) -> Self {
        Self {
            sampler: self.sampler.clone(),
            _semantics: PhantomData,
        }
    }
}
