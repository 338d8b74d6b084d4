//! Per-dimension extents over collections of vectors.
//!
//! ## Purpose
//!
//! This module provides the minimum and maximum of one dimension, and the
//! axis-aligned bounding corners, across any iterable of vectors.
//!
//! ## Design notes
//!
//! * **Inputs**: Anything `IntoIterator` whose items are vectors or references
//!   to vectors (`&[Vector]`, `&Vec<Vector>`, `iter::once(v)`, ...).
//! * **Single pass**: Every helper walks the input exactly once.
//! * **Seeds**: Folds start from the first vector, so a reported value is
//!   always a component of the input.
//!
//! ## Invariants
//!
//! * An empty input yields `None`; a non-empty input always yields `Some`.
//! * Extents are computed per dimension: the corners need not be elements of
//!   the input.
//!
//! ## Non-goals
//!
//! * NaN components are reported only when every value of a dimension is NaN;
//!   otherwise they never win a comparison.

// External dependencies
use core::borrow::Borrow;

// Internal dependencies
use super::vector::{FixedVector, Vector};
use crate::primitives::dimension::{X, Y, Z};
use crate::primitives::scalar::{Scalar, partial_max, partial_min};

// ============================================================================
// Single Dimension
// ============================================================================

/// Minimum of dimension `D` across `vectors`, or `None` if there are none.
pub fn min<const D: usize, I>(vectors: I) -> Option<<I::Item as FixedVector>::Scalar>
where
    I: IntoIterator,
    I::Item: FixedVector,
{
    const {
        assert!(
            D < <I::Item as FixedVector>::DIMENSIONS,
            "dimension index out of range for vector size"
        )
    };
    let mut vectors = vectors.into_iter();
    let seed = vectors.next()?.component(D);
    Some(vectors.fold(seed, |min, vector| partial_min_known(min, vector.component(D))))
}

/// Maximum of dimension `D` across `vectors`, or `None` if there are none.
pub fn max<const D: usize, I>(vectors: I) -> Option<<I::Item as FixedVector>::Scalar>
where
    I: IntoIterator,
    I::Item: FixedVector,
{
    const {
        assert!(
            D < <I::Item as FixedVector>::DIMENSIONS,
            "dimension index out of range for vector size"
        )
    };
    let mut vectors = vectors.into_iter();
    let seed = vectors.next()?.component(D);
    Some(vectors.fold(seed, |max, vector| partial_max_known(max, vector.component(D))))
}

/// Minimum `x` component.
#[inline]
pub fn min_x<I>(vectors: I) -> Option<<I::Item as FixedVector>::Scalar>
where
    I: IntoIterator,
    I::Item: FixedVector,
{
    min::<X, I>(vectors)
}

/// Minimum `y` component.
#[inline]
pub fn min_y<I>(vectors: I) -> Option<<I::Item as FixedVector>::Scalar>
where
    I: IntoIterator,
    I::Item: FixedVector,
{
    min::<Y, I>(vectors)
}

/// Minimum `z` component.
#[inline]
pub fn min_z<I>(vectors: I) -> Option<<I::Item as FixedVector>::Scalar>
where
    I: IntoIterator,
    I::Item: FixedVector,
{
    min::<Z, I>(vectors)
}

/// Maximum `x` component.
#[inline]
pub fn max_x<I>(vectors: I) -> Option<<I::Item as FixedVector>::Scalar>
where
    I: IntoIterator,
    I::Item: FixedVector,
{
    max::<X, I>(vectors)
}

/// Maximum `y` component.
#[inline]
pub fn max_y<I>(vectors: I) -> Option<<I::Item as FixedVector>::Scalar>
where
    I: IntoIterator,
    I::Item: FixedVector,
{
    max::<Y, I>(vectors)
}

/// Maximum `z` component.
#[inline]
pub fn max_z<I>(vectors: I) -> Option<<I::Item as FixedVector>::Scalar>
where
    I: IntoIterator,
    I::Item: FixedVector,
{
    max::<Z, I>(vectors)
}

// ============================================================================
// Bounding Corners
// ============================================================================

/// Vector of per-dimension minimums, or `None` if `vectors` is empty.
pub fn min_extent<I, V, T, const N: usize>(vectors: I) -> Option<Vector<T, N>>
where
    I: IntoIterator<Item = V>,
    V: Borrow<Vector<T, N>>,
    T: Scalar,
{
    let mut vectors = vectors.into_iter();
    let mut min: Vector<T, N> = *vectors.next()?.borrow();
    for vector in vectors {
        let vector: &Vector<T, N> = vector.borrow();
        for i in 0..N {
            min[i] = partial_min_known(min[i], vector[i]);
        }
    }
    Some(min)
}

/// Vector of per-dimension maximums, or `None` if `vectors` is empty.
pub fn max_extent<I, V, T, const N: usize>(vectors: I) -> Option<Vector<T, N>>
where
    I: IntoIterator<Item = V>,
    V: Borrow<Vector<T, N>>,
    T: Scalar,
{
    let mut vectors = vectors.into_iter();
    let mut max: Vector<T, N> = *vectors.next()?.borrow();
    for vector in vectors {
        let vector: &Vector<T, N> = vector.borrow();
        for i in 0..N {
            max[i] = partial_max_known(max[i], vector[i]);
        }
    }
    Some(max)
}

/// `(min_extent, max_extent)` in one pass, or `None` if `vectors` is empty.
pub fn extents<I, V, T, const N: usize>(vectors: I) -> Option<(Vector<T, N>, Vector<T, N>)>
where
    I: IntoIterator<Item = V>,
    V: Borrow<Vector<T, N>>,
    T: Scalar,
{
    let mut vectors = vectors.into_iter();
    let first: Vector<T, N> = *vectors.next()?.borrow();
    let (mut min, mut max) = (first, first);
    for vector in vectors {
        let vector: &Vector<T, N> = vector.borrow();
        for i in 0..N {
            min[i] = partial_min_known(min[i], vector[i]);
            max[i] = partial_max_known(max[i], vector[i]);
        }
    }
    Some((min, max))
}

// ============================================================================
// Folding Helpers
// ============================================================================

// An accumulator that is incomparable with itself (NaN) is replaced.
#[inline]
fn partial_min_known<T: PartialOrd>(accumulator: T, value: T) -> T {
    if accumulator.partial_cmp(&accumulator).is_none() {
        value
    } else {
        partial_min(accumulator, value)
    }
}

#[inline]
fn partial_max_known<T: PartialOrd>(accumulator: T, value: T) -> T {
    if accumulator.partial_cmp(&accumulator).is_none() {
        value
    } else {
        partial_max(accumulator, value)
    }
}
