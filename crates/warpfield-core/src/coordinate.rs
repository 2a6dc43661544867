//! Coordinate access traits.
//!
//! Transforms read source coordinates through [`Localizable`] and write
//! target coordinates through [`Positionable`]. Both are implemented for
//! `f64`/`f32` slices, vectors and arrays, and for nalgebra points and
//! vectors, so every entry point funnels into the same `f64` code path.

use nalgebra::{DVector, Point, SVector};

/// Read access to a real coordinate, one axis at a time.
pub trait Localizable {
    /// Number of axes this coordinate provides.
    fn num_dimensions(&self) -> usize;

    /// Value along `axis` as `f64`.
    ///
    /// # Panics
    /// May panic if `axis >= self.num_dimensions()`.
    fn coordinate(&self, axis: usize) -> f64;

    /// Copy the first `out.len()` axes into `out`.
    fn localize(&self, out: &mut [f64]) {
        for (axis, value) in out.iter_mut().enumerate() {
            *value = self.coordinate(axis);
        }
    }
}

/// Write access to a real coordinate, one axis at a time.
pub trait Positionable {
    /// Number of axes this coordinate accepts.
    fn num_dimensions(&self) -> usize;

    /// Set the value along `axis`.
    ///
    /// # Panics
    /// May panic if `axis >= self.num_dimensions()`.
    fn set_coordinate(&mut self, axis: usize, value: f64);
}

macro_rules! impl_slice_coordinate {
    ($($t:ty),*) => {$(
        impl Localizable for [$t] {
            #[inline]
            fn num_dimensions(&self) -> usize {
                self.len()
            }

            #[inline]
            fn coordinate(&self, axis: usize) -> f64 {
                self[axis] as f64
            }
        }

        impl Positionable for [$t] {
            #[inline]
            fn num_dimensions(&self) -> usize {
                self.len()
            }

            #[inline]
            fn set_coordinate(&mut self, axis: usize, value: f64) {
                self[axis] = value as $t;
            }
        }

        impl Localizable for Vec<$t> {
            #[inline]
            fn num_dimensions(&self) -> usize {
                self.len()
            }

            #[inline]
            fn coordinate(&self, axis: usize) -> f64 {
                self[axis] as f64
            }
        }

        impl Positionable for Vec<$t> {
            #[inline]
            fn num_dimensions(&self) -> usize {
                self.len()
            }

            #[inline]
            fn set_coordinate(&mut self, axis: usize, value: f64) {
                self[axis] = value as $t;
            }
        }

        impl<const N: usize> Localizable for [$t; N] {
            #[inline]
            fn num_dimensions(&self) -> usize {
                N
            }

            #[inline]
            fn coordinate(&self, axis: usize) -> f64 {
                self[axis] as f64
            }
        }

        impl<const N: usize> Positionable for [$t; N] {
            #[inline]
            fn num_dimensions(&self) -> usize {
                N
            }

            #[inline]
            fn set_coordinate(&mut self, axis: usize, value: f64) {
                self[axis] = value as $t;
            }
        }
    )*};
}

impl_slice_coordinate!(f64, f32);

impl<const D: usize> Localizable for Point<f64, D> {
    #[inline]
    fn num_dimensions(&self) -> usize {
        D
    }

    #[inline]
    fn coordinate(&self, axis: usize) -> f64 {
        self.coords[axis]
    }
}

impl<const D: usize> Positionable for Point<f64, D> {
    #[inline]
    fn num_dimensions(&self) -> usize {
        D
    }

    #[inline]
    fn set_coordinate(&mut self, axis: usize, value: f64) {
        self.coords[axis] = value;
    }
}

impl<const D: usize> Localizable for SVector<f64, D> {
    #[inline]
    fn num_dimensions(&self) -> usize {
        D
    }

    #[inline]
    fn coordinate(&self, axis: usize) -> f64 {
        self[axis]
    }
}

impl<const D: usize> Positionable for SVector<f64, D> {
    #[inline]
    fn num_dimensions(&self) -> usize {
        D
    }

    #[inline]
    fn set_coordinate(&mut self, axis: usize, value: f64) {
        self[axis] = value;
    }
}

impl Localizable for DVector<f64> {
    #[inline]
    fn num_dimensions(&self) -> usize {
        self.len()
    }

    #[inline]
    fn coordinate(&self, axis: usize) -> f64 {
        self[axis]
    }
}

impl Positionable for DVector<f64> {
    #[inline]
    fn num_dimensions(&self) -> usize {
        self.len()
    }

    #[inline]
    fn set_coordinate(&mut self, axis: usize, value: f64) {
        self[axis] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point2, Vector3};

    #[test]
    fn test_slice_roundtrip() {
        let mut target = [0.0f32; 3];
        target.set_coordinate(1, 2.5);
        assert_eq!(target, [0.0, 2.5, 0.0]);
        assert_eq!(target[..].coordinate(1), 2.5);
        assert_eq!(Localizable::num_dimensions(&target[..]), 3);
    }

    #[test]
    fn test_localize_prefix() {
        let source = vec![1.0, 2.0, 3.0];
        let mut out = [0.0; 2];
        source.localize(&mut out);
        assert_eq!(out, [1.0, 2.0]);
    }

    #[test]
    fn test_nalgebra_types() {
        let mut p = Point2::new(1.0, 2.0);
        assert_eq!(p.coordinate(1), 2.0);
        p.set_coordinate(0, -4.0);
        assert_eq!(p, Point2::new(-4.0, 2.0));

        let v = Vector3::new(7.0, 8.0, 9.0);
        assert_eq!(Localizable::num_dimensions(&v), 3);
        assert_eq!(v.coordinate(2), 9.0);

        let mut dv = DVector::<f64>::zeros(2);
        dv.set_coordinate(1, 3.0);
        assert_eq!(dv[1], 3.0);
    }
}
