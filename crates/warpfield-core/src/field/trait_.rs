//! Vector field and sampler traits.
//!
//! A [`VectorField`] is an immutable continuous function from D real
//! coordinates to K real components. A [`FieldSampler`] is a cursor over
//! such a field: it owns a mutable position and yields the field value
//! there. Cloning a sampler duplicates the position but shares the field.

use crate::coordinate::Localizable;

/// Continuous, stateful cursor over a vector field.
///
/// Samplers must be cheap to clone: the position, value buffer and any
/// scratch are owned, the field data is shared behind an `Arc`.
pub trait FieldSampler: Clone + Send + Sync {
    /// Domain dimensionality (D).
    fn num_dimensions(&self) -> usize;

    /// Codomain dimensionality (K).
    fn num_components(&self) -> usize;

    /// Current position, D entries.
    fn position(&self) -> &[f64];

    /// Mutable access to the current position, D entries.
    fn position_mut(&mut self) -> &mut [f64];

    /// Evaluate the field at the current position and return K components.
    fn get(&mut self) -> &[f64];

    /// Move to the first D entries of `position`.
    ///
    /// # Panics
    /// Panics if `position` has fewer than D entries.
    #[inline]
    fn set_position(&mut self, position: &[f64]) {
        let n = self.num_dimensions();
        self.position_mut().copy_from_slice(&position[..n]);
    }

    /// Move to the first D axes of any localizable coordinate.
    #[inline]
    fn set_position_from<L: Localizable + ?Sized>(&mut self, source: &L) {
        source.localize(self.position_mut());
    }

    /// Move to `position` and evaluate.
    #[inline]
    fn set_position_and_get(&mut self, position: &[f64]) -> &[f64] {
        self.set_position(position);
        self.get()
    }
}

/// Immutable continuous vector field that hands out samplers.
pub trait VectorField {
    /// Cursor type over this field.
    type Sampler: FieldSampler;

    /// Domain dimensionality (D).
    fn num_dimensions(&self) -> usize;

    /// Codomain dimensionality (K).
    fn num_components(&self) -> usize;

    /// Create a new sampler bound to this field's data.
    fn sampler(&self) -> Self::Sampler;
}
