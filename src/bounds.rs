//! Input contract for interval sources.
//!
//! The index is polymorphic over anything exposing a `(lower, upper)` pair;
//! [`SimpleBounds`] is the plain-pair convenience implementation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A source of one-dimensional interval limits.
///
/// Implementors must uphold `lower <= upper` with both values finite; the
/// index trusts this precondition (see [`crate::IntervalIndex::validated`]
/// for a checking entry point).
pub trait Bounds {
    /// The `(lower, upper)` limits of the interval. Both endpoints are
    /// inclusive.
    fn limits(&self) -> (f64, f64);
}

/// A plain pair of inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimpleBounds {
    /// Lower limit (inclusive).
    pub lower: f64,
    /// Upper limit (inclusive).
    pub upper: f64,
}

impl SimpleBounds {
    /// Create a new bounds pair.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

impl Bounds for SimpleBounds {
    fn limits(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl Bounds for (f64, f64) {
    fn limits(&self) -> (f64, f64) {
        *self
    }
}

impl<B: Bounds + ?Sized> Bounds for &B {
    fn limits(&self) -> (f64, f64) {
        (**self).limits()
    }
}
