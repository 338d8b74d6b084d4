//! Scalar types accepted as vector components.
//!
//! ## Purpose
//!
//! This module defines the `Scalar` capability trait that every component type
//! must satisfy, plus the small comparison helpers shared by the elementwise
//! and geometry layers.
//!
//! ## Design notes
//!
//! * **Blanket**: `Scalar` is implemented for every type with the required
//!   `num-traits` capabilities; no per-type registration is needed.
//! * **Partial order**: Helpers use `PartialOrd` so floats are accepted. When
//!   two values are incomparable (NaN), the first argument wins.
//!
//! ## Invariants
//!
//! * `absolute_difference` never subtracts the larger value from the smaller,
//!   so it is well-defined for unsigned types.

// External dependencies
use core::fmt::{Debug, Display};
use num_traits::{Bounded, Num, NumCast};

// ============================================================================
// Scalar Trait
// ============================================================================

/// Arithmetic component type of a vector.
///
/// Satisfied by all primitive integer and floating-point types.
pub trait Scalar: Copy + PartialOrd + Num + NumCast + Bounded + Debug + Display {}

impl<T> Scalar for T where T: Copy + PartialOrd + Num + NumCast + Bounded + Debug + Display {}

// ============================================================================
// Scalar Helpers
// ============================================================================

/// Smaller of two values under `PartialOrd`.
#[inline]
pub fn partial_min<T: PartialOrd>(lhs: T, rhs: T) -> T {
    if rhs < lhs { rhs } else { lhs }
}

/// Larger of two values under `PartialOrd`.
#[inline]
pub fn partial_max<T: PartialOrd>(lhs: T, rhs: T) -> T {
    if lhs < rhs { rhs } else { lhs }
}

/// Absolute difference `max(a, b) - min(a, b)`.
#[inline]
pub fn absolute_difference<T>(lhs: T, rhs: T) -> T
where
    T: Copy + PartialOrd + core::ops::Sub<Output = T>,
{
    if lhs < rhs { rhs - lhs } else { lhs - rhs }
}
