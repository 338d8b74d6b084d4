//! Fixed-size numeric vectors.
//!
//! ## Purpose
//!
//! This module provides `Vector<T, N>`, a stack-allocated sequence of `N`
//! scalar components with componentwise arithmetic, lexicographic ordering,
//! named accessors and unit/repeated factories.
//!
//! ## Design notes
//!
//! * **Const generics**: `N` is part of the type, so adding a 2-D vector to a
//!   3-D vector does not compile.
//! * **Eager operators**: `+ - * /` on vectors return a new vector. Each one is
//!   built by collecting the matching elementwise expression, so chained lazy
//!   arithmetic and eager arithmetic share one definition.
//! * **Compile-time axes**: `x`, `y`, `z` and the unit factories assert their
//!   axis against `N` when instantiated.
//!
//! ## Invariants
//!
//! * Length is always `N`.
//! * Ordering is lexicographic: the first differing component decides.
//! * `Display` renders `<c0, c1, ..., cN-1>`.
//!
//! ## Non-goals
//!
//! * No dynamic dimensionality, cross product or matrix operations.

// External dependencies
use core::array;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use core::slice;
use num_traits::{NumCast, ToPrimitive};

// Internal dependencies
use super::metric;
use crate::elementwise::expression::{
    make_difference_expression, make_negate_expression, make_product_expression,
    make_quotient_expression, make_sum_expression,
};
use crate::elementwise::operand::{Broadcast, Operand, for_each_scalar};
use crate::primitives::dimension::{X, Y, Z};
use crate::primitives::errors::VectorError;
use crate::primitives::scalar::Scalar;

// ============================================================================
// Vector Type
// ============================================================================

/// An `N`-dimensional vector of `T` components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector<T, const N: usize> {
    components: [T; N],
}

/// Two-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;

/// Three-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;

impl<T, const N: usize> Vector<T, N> {
    /// Number of dimensions.
    pub const DIMENSIONS: usize = N;

    /// Create a vector from its components.
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self { components }
    }

    /// Number of dimensions.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether this is the zero-dimensional vector.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Components as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.components
    }

    /// Components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    /// Iterate over the components.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.components.iter()
    }

    /// Iterate mutably over the components.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.components.iter_mut()
    }

    /// Mutable reference to the `x` component. Requires `N >= 1`.
    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        const { assert!(X < N, "dimension index out of range for vector size") };
        &mut self.components[X]
    }

    /// Mutable reference to the `y` component. Requires `N >= 2`.
    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        const { assert!(Y < N, "dimension index out of range for vector size") };
        &mut self.components[Y]
    }

    /// Mutable reference to the `z` component. Requires `N >= 3`.
    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        const { assert!(Z < N, "dimension index out of range for vector size") };
        &mut self.components[Z]
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// The `x` component. Requires `N >= 1`.
    #[inline]
    pub fn x(&self) -> T {
        const { assert!(X < N, "dimension index out of range for vector size") };
        self.components[X]
    }

    /// The `y` component. Requires `N >= 2`.
    #[inline]
    pub fn y(&self) -> T {
        const { assert!(Y < N, "dimension index out of range for vector size") };
        self.components[Y]
    }

    /// The `z` component. Requires `N >= 3`.
    #[inline]
    pub fn z(&self) -> T {
        const { assert!(Z < N, "dimension index out of range for vector size") };
        self.components[Z]
    }

    /// Vector with every component set to `value`.
    #[inline]
    pub fn make_repeated(value: T) -> Self {
        Self {
            components: [value; N],
        }
    }

    /// Collect an elementwise expression into a new vector.
    ///
    /// Evaluates the expression once per index, `0..N`.
    #[inline]
    pub fn from_expression<E>(expression: &E) -> Self
    where
        E: Operand<Item = T> + ?Sized,
    {
        debug_assert!(
            expression.dimensions().is_none_or(|dims| dims >= N),
            "from_expression: expression has fewer than N components"
        );
        Self {
            components: array::from_fn(|i| expression.element(i)),
        }
    }

    /// Overwrite every component with the matching element of `expression`.
    #[inline]
    pub fn assign<E>(&mut self, expression: &E) -> &mut Self
    where
        E: Operand<Item = T> + ?Sized,
    {
        for (i, component) in self.components.iter_mut().enumerate() {
            *component = expression.element(i);
        }
        self
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Unit vector along axis `D`. Fails to compile when `D >= N`.
    #[inline]
    pub fn unit<const D: usize>() -> Self {
        const { assert!(D < N, "dimension index out of range for vector size") };
        let mut components = [T::zero(); N];
        components[D] = T::one();
        Self { components }
    }

    /// Unit vector along the `x` axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self::unit::<X>()
    }

    /// Unit vector along the `y` axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self::unit::<Y>()
    }

    /// Unit vector along the `z` axis.
    #[inline]
    pub fn unit_z() -> Self {
        Self::unit::<Z>()
    }

    /// Unit vector along an axis chosen at runtime.
    pub fn make_unit(dimension: usize) -> Result<Self, VectorError> {
        if dimension >= N {
            return Err(VectorError::InvalidDimension {
                dimension,
                dimensions: N,
            });
        }
        let mut components = [T::zero(); N];
        components[dimension] = T::one();
        Ok(Self { components })
    }

    /// Sum of squared components, in `T`'s own arithmetic.
    #[inline]
    pub fn magnitude_squared(&self) -> T {
        metric::magnitude_squared(self)
    }

    /// Euclidean length as `f64`, whatever `T` is.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        metric::magnitude(self)
    }

    /// Divide every component by the magnitude, in place.
    ///
    /// The vector must be non-zero. The quotient is computed in `f64` and cast
    /// back to `T`; a quotient `T` cannot represent (NaN for an integer zero
    /// vector) becomes zero.
    pub fn normalize(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        for component in self.components.iter_mut() {
            let value = component.to_f64().unwrap_or(f64::NAN);
            *component = <T as NumCast>::from(value / magnitude).unwrap_or_else(T::zero);
        }
        self
    }

    /// Copy of this vector scaled to unit length. See [`Vector::normalize`].
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::make_repeated(T::zero())
    }
}

// ============================================================================
// Fixed-Vector Trait
// ============================================================================

/// Anything that reads as a fixed-size vector: `Vector` itself or a reference
/// to one.
///
/// Lets collection helpers name a component type and dimension count through
/// a single generic parameter.
pub trait FixedVector {
    /// Component type.
    type Scalar: Scalar;

    /// Number of dimensions.
    const DIMENSIONS: usize;

    /// Component at index `i`.
    fn component(&self, i: usize) -> Self::Scalar;
}

impl<T: Scalar, const N: usize> FixedVector for Vector<T, N> {
    type Scalar = T;

    const DIMENSIONS: usize = N;

    #[inline]
    fn component(&self, i: usize) -> T {
        self.components[i]
    }
}

impl<V: FixedVector + ?Sized> FixedVector for &V {
    type Scalar = V::Scalar;

    const DIMENSIONS: usize = V::DIMENSIONS;

    #[inline]
    fn component(&self, i: usize) -> Self::Scalar {
        (**self).component(i)
    }
}

impl<T: Copy, const N: usize> Operand for Vector<T, N> {
    type Item = T;

    #[inline]
    fn element(&self, i: usize) -> T {
        self.components[i]
    }

    #[inline]
    fn dimensions(&self) -> Option<usize> {
        Some(N)
    }
}

// ============================================================================
// Indexing and Conversions
// ============================================================================

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.components[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.components[i]
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self { components }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: Vector<T, N>) -> [T; N] {
        vector.components
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = VectorError;

    fn try_from(components: &[T]) -> Result<Self, VectorError> {
        let components =
            <[T; N]>::try_from(components).map_err(|_| VectorError::DimensionMismatch {
                expected: N,
                got: components.len(),
            })?;
        Ok(Self { components })
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.iter_mut()
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_expression(&make_negate_expression(&self))
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_expression(&make_sum_expression(&self, &rhs))
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_expression(&make_difference_expression(&self, &rhs))
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::from_expression(&make_product_expression(&self, Broadcast(rhs)))
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::from_expression(&make_quotient_expression(&self, Broadcast(rhs)))
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl<const N: usize> Mul<Vector<$scalar, N>> for $scalar {
                type Output = Vector<$scalar, N>;

                #[inline]
                fn mul(self, rhs: Vector<$scalar, N>) -> Vector<$scalar, N> {
                    rhs * self
                }
            }
        )*
    };
}

for_each_scalar!(impl_scalar_lhs_mul);

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Display, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("<")?;
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(component, f)?;
        }
        f.write_str(">")
    }
}
