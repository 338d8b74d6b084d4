//! Geometric measures over vectors.
//!
//! ## Purpose
//!
//! This module provides dot product, magnitude and the distance metrics
//! (Euclidean, Chebyshev, Manhattan). Each measure is a fold over an
//! elementwise expression, so no difference vector is materialized.
//!
//! ## Design notes
//!
//! * **Exactness**: Squared measures stay in `T`'s arithmetic. Only
//!   `magnitude` and `distance` leave it, always returning `f64`.
//! * **Unsigned safety**: Every distance is built on the absolute difference
//!   `max(a, b) - min(a, b)`, which never underflows.
//!
//! ## Invariants
//!
//! * `magnitude_squared(a) == dot_product(a, a)`.
//! * `chebyshev_distance(a, b) <= manhattan_distance(a, b)`.

// External dependencies
use num_traits::{Float, ToPrimitive, Zero};

// Internal dependencies
use super::vector::Vector;
use crate::elementwise::expression::{make_absolute_difference_expression, make_product_expression};
use crate::elementwise::operand::Operand;
use crate::primitives::scalar::{Scalar, partial_max};

// ============================================================================
// Folds
// ============================================================================

/// Sum of the first `N` elements of `operand`.
#[inline]
pub fn element_sum<O, const N: usize>(operand: &O) -> O::Item
where
    O: Operand + ?Sized,
    O::Item: Scalar,
{
    (0..N).fold(<O::Item as Zero>::zero(), |sum, i| sum + operand.element(i))
}

/// Largest of the first `N` elements of `operand`; zero when `N == 0`.
#[inline]
pub fn max_element<O, const N: usize>(operand: &O) -> O::Item
where
    O: Operand + ?Sized,
    O::Item: Scalar,
{
    if N == 0 {
        return <O::Item as Zero>::zero();
    }
    (1..N).fold(operand.element(0), |max, i| partial_max(max, operand.element(i)))
}

// ============================================================================
// Products and Magnitudes
// ============================================================================

/// Sum of componentwise products.
#[inline]
pub fn dot_product<T: Scalar, const N: usize>(lhs: &Vector<T, N>, rhs: &Vector<T, N>) -> T {
    element_sum::<_, N>(&make_product_expression(lhs, rhs))
}

/// Sum of squared components.
#[inline]
pub fn magnitude_squared<T: Scalar, const N: usize>(vector: &Vector<T, N>) -> T {
    dot_product(vector, vector)
}

/// Euclidean length, as `f64`.
#[inline]
pub fn magnitude<T: Scalar, const N: usize>(vector: &Vector<T, N>) -> f64 {
    to_length(magnitude_squared(vector))
}

// ============================================================================
// Distances
// ============================================================================

/// Squared Euclidean distance, in `T`'s arithmetic.
#[inline]
pub fn distance_squared<T: Scalar, const N: usize>(lhs: &Vector<T, N>, rhs: &Vector<T, N>) -> T {
    let difference = make_absolute_difference_expression(lhs, rhs);
    element_sum::<_, N>(&make_product_expression(&difference, &difference))
}

/// Euclidean distance, as `f64`.
#[inline]
pub fn distance<T: Scalar, const N: usize>(lhs: &Vector<T, N>, rhs: &Vector<T, N>) -> f64 {
    to_length(distance_squared(lhs, rhs))
}

/// Largest absolute componentwise difference.
#[inline]
pub fn chebyshev_distance<T: Scalar, const N: usize>(
    lhs: &Vector<T, N>,
    rhs: &Vector<T, N>,
) -> T {
    max_element::<_, N>(&make_absolute_difference_expression(lhs, rhs))
}

/// Sum of absolute componentwise differences.
#[inline]
pub fn manhattan_distance<T: Scalar, const N: usize>(
    lhs: &Vector<T, N>,
    rhs: &Vector<T, N>,
) -> T {
    element_sum::<_, N>(&make_absolute_difference_expression(lhs, rhs))
}

// Square root of a squared length, promoted to f64.
#[inline]
fn to_length<T: Scalar>(squared: T) -> f64 {
    Float::sqrt(squared.to_f64().unwrap_or(f64::NAN))
}
