//! Operands of elementwise expressions.
//!
//! ## Purpose
//!
//! `Operand` is the "indexable" capability: a value that can produce one
//! component per index. Arrays, slices, vectors and expressions are indexable;
//! primitive scalars are broadcast, returning the same value at every index.
//!
//! ## Design notes
//!
//! * **Borrowing**: References to operands are operands too, so an expression
//!   can hold `&Vector` without copying it. The borrow checker then keeps the
//!   expression from outliving what it references.
//! * **Dimensions hint**: Indexable operands report their length; scalars
//!   report `None` because they fit any length.
//!
//! ## Invariants
//!
//! * `element(i)` on an indexable operand requires `i` below its length and
//!   panics otherwise, like slice indexing.

/// A value that yields one component per index.
pub trait Operand {
    /// Component type produced at each index.
    type Item: Copy;

    /// Component at index `i`.
    fn element(&self, i: usize) -> Self::Item;

    /// Number of indexable components, or `None` for a broadcast scalar.
    #[inline]
    fn dimensions(&self) -> Option<usize> {
        None
    }
}

impl<O: Operand + ?Sized> Operand for &O {
    type Item = O::Item;

    #[inline]
    fn element(&self, i: usize) -> Self::Item {
        (**self).element(i)
    }

    #[inline]
    fn dimensions(&self) -> Option<usize> {
        (**self).dimensions()
    }
}

impl<T: Copy, const N: usize> Operand for [T; N] {
    type Item = T;

    #[inline]
    fn element(&self, i: usize) -> T {
        self[i]
    }

    #[inline]
    fn dimensions(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T: Copy> Operand for [T] {
    type Item = T;

    #[inline]
    fn element(&self, i: usize) -> T {
        self[i]
    }

    #[inline]
    fn dimensions(&self) -> Option<usize> {
        Some(self.len())
    }
}

// ============================================================================
// Scalar Broadcast
// ============================================================================

/// A value repeated at every index.
///
/// Primitive scalars are operands on their own; this wrapper broadcasts a
/// value whose type is only known through generic bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Broadcast<T>(pub T);

impl<T: Copy> Operand for Broadcast<T> {
    type Item = T;

    #[inline]
    fn element(&self, _i: usize) -> T {
        self.0
    }
}

macro_rules! impl_broadcast_operand {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Operand for $scalar {
                type Item = $scalar;

                #[inline]
                fn element(&self, _i: usize) -> $scalar {
                    *self
                }
            }
        )*
    };
}

impl_broadcast_operand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Invokes `$callback!` with the list of primitive scalar types that broadcast.
///
/// Used by the layers above to write one impl per scalar where coherence
/// rules forbid a blanket impl (scalar on the left of an operator).
macro_rules! for_each_scalar {
    ($callback:ident) => {
        $callback!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
    };
}

pub(crate) use for_each_scalar;
