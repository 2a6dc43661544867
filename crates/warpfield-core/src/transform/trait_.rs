//! Transform trait for per-coordinate spatial transformations.
//!
//! This module defines the core RealTransform trait that all transforms implement.

use crate::coordinate::{Localizable, Positionable};

/// Transform trait for spatial coordinate transformations.
///
/// Maps a coordinate with `num_source_dimensions()` axes to one with
/// `num_target_dimensions()` axes. `apply` takes `&mut self` because
/// transforms may keep a cursor; use [`copy`](Self::copy) to get an
/// independent instance per thread.
///
/// The three `apply` variants produce the same result up to the
/// precision of the coordinate representation. Slice lengths are a caller
/// contract and are not checked beyond Rust's own bounds checks.
pub trait RealTransform: Send {
    /// Number of source axes read by `apply`.
    fn num_source_dimensions(&self) -> usize;

    /// Number of target axes written by `apply`.
    fn num_target_dimensions(&self) -> usize;

    /// Transform a double precision coordinate.
    fn apply(&mut self, source: &[f64], target: &mut [f64]);

    /// Transform a single precision coordinate.
    fn apply_f32(&mut self, source: &[f32], target: &mut [f32]);

    /// Transform any localizable coordinate into any positionable one.
    fn apply_to<L, P>(&mut self, source: &L, target: &mut P)
    where
        L: Localizable + ?Sized,
        P: Positionable + ?Sized,
        Self: Sized;

    /// Create an independent instance sharing immutable data with `self`.
    fn copy(&self) -> Self
    where
        Self: Sized;
}
