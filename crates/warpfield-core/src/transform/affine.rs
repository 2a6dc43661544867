//! Affine transform implementation.
//!
//! This module provides an affine transform (linear transformation + translation)
//! of runtime dimensionality, used to map raster indices to physical space.

use nalgebra::{DMatrix, DVector};

use super::trait_::RealTransform;
use crate::coordinate::{Localizable, Positionable};
use crate::error::{FieldError, Result};

/// Affine Transform (Linear transformation + Translation).
///
/// T(x) = A x + t
///
/// where:
/// * A is an n×n matrix (rotation, scale, shear)
/// * t is an n-dimensional translation vector
#[derive(Debug, Clone, PartialEq)]
pub struct AffineTransform {
    matrix: DMatrix<f64>,
    translation: DVector<f64>,
}

impl AffineTransform {
    /// Create a new affine transform.
    ///
    /// # Errors
    /// `DimensionMismatch` if the matrix is not square or the translation
    /// length differs from the matrix size.
    pub fn new(matrix: DMatrix<f64>, translation: DVector<f64>) -> Result<Self> {
        if !matrix.is_square() || matrix.nrows() != translation.len() {
            return Err(FieldError::dimension_mismatch(format!(
                "affine needs an n x n matrix and n translations, got {}x{} and {}",
                matrix.nrows(),
                matrix.ncols(),
                translation.len()
            )));
        }
        Ok(Self { matrix, translation })
    }

    /// Create an identity transform.
    pub fn identity(n: usize) -> Self {
        Self {
            matrix: DMatrix::identity(n, n),
            translation: DVector::zeros(n),
        }
    }

    /// Create the index to physical map of an image grid.
    ///
    /// `point = origin + direction * (index * spacing)`
    ///
    /// # Arguments
    /// * `origin` - Physical coordinate of index zero
    /// * `spacing` - Physical distance between samples along each axis
    /// * `direction` - Orientation of the image axes
    pub fn from_geometry(origin: &[f64], spacing: &[f64], direction: &DMatrix<f64>) -> Result<Self> {
        if spacing.len() != origin.len() || direction.ncols() != spacing.len() {
            return Err(FieldError::dimension_mismatch(format!(
                "geometry needs matching sizes, got origin {}, spacing {}, direction {}x{}",
                origin.len(),
                spacing.len(),
                direction.nrows(),
                direction.ncols()
            )));
        }
        let scale = DMatrix::from_diagonal(&DVector::from_column_slice(spacing));
        Self::new(direction * scale, DVector::from_column_slice(origin))
    }

    /// Dimensionality of source and target.
    pub fn num_dimensions(&self) -> usize {
        self.translation.len()
    }

    /// Get the transformation matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Get the translation vector.
    pub fn translation(&self) -> &DVector<f64> {
        &self.translation
    }

    /// Get the inverse transform.
    ///
    /// # Errors
    /// `SingularTransform` if the matrix is not invertible.
    pub fn inverse(&self) -> Result<Self> {
        let inv = self
            .matrix
            .clone()
            .try_inverse()
            .ok_or_else(|| FieldError::singular_transform("affine matrix is not invertible"))?;
        let translation = -(&inv * &self.translation);
        Ok(Self {
            matrix: inv,
            translation,
        })
    }

    /// Apply without touching any state; `target` must not alias `source`.
    #[inline]
    pub fn apply_into<L, P>(&self, source: &L, target: &mut P)
    where
        L: Localizable + ?Sized,
        P: Positionable + ?Sized,
    {
        let n = self.num_dimensions();
        for row in 0..n {
            let mut sum = self.translation[row];
            for col in 0..n {
                sum += self.matrix[(row, col)] * source.coordinate(col);
            }
            target.set_coordinate(row, sum);
        }
    }
}

impl RealTransform for AffineTransform {
    fn num_source_dimensions(&self) -> usize {
        self.num_dimensions()
    }

    fn num_target_dimensions(&self) -> usize {
        self.num_dimensions()
    }

    fn apply(&mut self, source: &[f64], target: &mut [f64]) {
        self.apply_into(source, target);
    }

    fn apply_f32(&mut self, source: &[f32], target: &mut [f32]) {
        self.apply_into(source, target);
    }

    fn apply_to<L, P>(&mut self, source: &L, target: &mut P)
    where
        L: Localizable + ?Sized,
        P: Positionable + ?Sized,
    {
        self.apply_into(source, target);
    }

    fn copy(&self) -> Self {
        self.clone()
    }
}
