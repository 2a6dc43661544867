//! Vector fields viewed through an affine coordinate map.

use std::sync::Arc;

use super::trait_::{FieldSampler, VectorField};
use crate::error::{FieldError, Result};
use crate::transform::AffineTransform;

/// A field re-parameterized by an affine map.
///
/// If `A` is the supplied map (e.g. pixel to physical), sampling this
/// field at `A(x)` returns the inner field at `x`. Positions are mapped
/// through `A⁻¹` before they reach the inner sampler.
#[derive(Debug, Clone)]
pub struct AffineField<F> {
    inner: F,
    transform: AffineTransform,
    inverse: Arc<AffineTransform>,
}

impl<F: VectorField> AffineField<F> {
    /// View `inner` through `transform`.
    ///
    /// # Errors
    /// * `DimensionMismatch` if the affine dimensionality differs from the
    ///   inner field's domain.
    /// * `SingularTransform` if the affine cannot be inverted.
    pub fn new(inner: F, transform: AffineTransform) -> Result<Self> {
        if transform.num_dimensions() != inner.num_dimensions() {
            return Err(FieldError::dimension_mismatch(format!(
                "affine has {} dimensions but the field domain has {}",
                transform.num_dimensions(),
                inner.num_dimensions()
            )));
        }
        let inverse = transform.inverse()?;
        Ok(Self {
            inner,
            transform,
            inverse: Arc::new(inverse),
        })
    }

    /// The wrapped field.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// The map from inner coordinates to this field's coordinates.
    pub fn transform(&self) -> &AffineTransform {
        &self.transform
    }
}

impl<F: VectorField> VectorField for AffineField<F> {
    type Sampler = AffineSampler<F::Sampler>;

    fn num_dimensions(&self) -> usize {
        self.transform.num_dimensions()
    }

    fn num_components(&self) -> usize {
        self.inner.num_components()
    }

    fn sampler(&self) -> Self::Sampler {
        AffineSampler {
            inner: self.inner.sampler(),
            inverse: Arc::clone(&self.inverse),
            position: vec![0.0; self.transform.num_dimensions()],
        }
    }
}

/// Sampler over an [`AffineField`].
#[derive(Debug, Clone)]
pub struct AffineSampler<S> {
    inner: S,
    inverse: Arc<AffineTransform>,
    position: Vec<f64>,
}

impl<S: FieldSampler> FieldSampler for AffineSampler<S> {
    #[inline]
    fn num_dimensions(&self) -> usize {
        self.position.len()
    }

    #[inline]
    fn num_components(&self) -> usize {
        self.inner.num_components()
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
        self.inverse.apply_into(&self.position, self.inner.position_mut());
        self.inner.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::RasterFieldBuilder;
    use nalgebra::DMatrix;

    // Shape [K=1, 3]: values 0, 10, 20 along one axis
    fn line_builder() -> RasterFieldBuilder {
        RasterFieldBuilder::new(vec![0.0, 10.0, 20.0], [1, 3])
    }

    #[test]
    fn test_physical_lookup() {
        // index -> 2 * index + 5
        let affine = AffineTransform::from_geometry(&[5.0], &[2.0], &DMatrix::identity(1, 1)).unwrap();
        let field = line_builder().build_with_pixel_to_physical(affine.clone()).unwrap();
        assert_eq!(field.transform(), &affine);
        assert_eq!(field.inner().num_dimensions(), 1);
        assert_eq!(field.num_components(), 1);
        let mut sampler = field.sampler();

        assert_eq!(sampler.set_position_and_get(&[5.0]), &[0.0]);
        assert_eq!(sampler.set_position_and_get(&[9.0]), &[20.0]);
        let between = sampler.set_position_and_get(&[6.0])[0];
        assert!((between - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = line_builder()
            .build_with_pixel_to_physical(AffineTransform::identity(2))
            .unwrap_err();
        assert!(matches!(err, FieldError::DimensionMismatch(_)));
    }

    #[test]
    fn test_singular_affine() {
        let affine = AffineTransform::new(DMatrix::zeros(1, 1), nalgebra::DVector::zeros(1)).unwrap();
        let err = line_builder().build_with_pixel_to_physical(affine).unwrap_err();
        assert!(matches!(err, FieldError::SingularTransform(_)));
    }
}
