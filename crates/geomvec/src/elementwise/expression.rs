//! Lazy elementwise expressions.
//!
//! ## Purpose
//!
//! This module provides the expression nodes that compose operands and
//! operators into a tree evaluated one index at a time.
//!
//! ## Design notes
//!
//! * **Lazy**: Building an expression does no arithmetic. `element(i)` walks
//!   the tree for index `i` only.
//! * **Non-owning**: Indexable operands are usually passed by reference
//!   (`&vector`), so an expression borrows them and cannot outlive them.
//!   Nested expressions and scalars are small and are held by value.
//! * **Operators**: `+ - * /` and unary `-` on an expression build a larger
//!   expression. The right-hand side may be any `Operand` with the same item
//!   type; a primitive scalar may also appear on the left.
//!
//! ## Key concepts
//!
//! * **Broadcast**: A scalar operand contributes the same value at every index.
//! * **Lift**: `lazy(&v)` wraps a plain operand so the operator syntax can start
//!   from it: `lazy(&a) + &b - &c`.
//!
//! ## Invariants
//!
//! * For every valid index `i`, evaluating a nested expression gives the same
//!   value as applying each step eagerly.
//! * The reported dimensions are those of the leftmost indexable operand.

// External dependencies
use core::ops::{Add, Div, Mul, Neg, Sub};

// Internal dependencies
use super::operand::{Operand, for_each_scalar};
use super::operator::{
    AbsoluteDifference, BinaryOperator, Difference, Identity, Negate, Product, Quotient, Sum,
    UnaryOperator,
};

// ============================================================================
// Expression Nodes
// ============================================================================

/// A unary operator applied to one operand.
#[derive(Debug, Clone, Copy)]
pub struct UnaryExpression<Op, O> {
    operator: Op,
    operand: O,
}

impl<Op, O> UnaryExpression<Op, O> {
    /// Create a node applying `operator` to `operand`.
    #[inline]
    pub fn new(operator: Op, operand: O) -> Self {
        Self { operator, operand }
    }
}

impl<Op, O> Operand for UnaryExpression<Op, O>
where
    O: Operand,
    Op: UnaryOperator<O::Item>,
{
    type Item = O::Item;

    #[inline]
    fn element(&self, i: usize) -> Self::Item {
        self.operator.apply(self.operand.element(i))
    }

    #[inline]
    fn dimensions(&self) -> Option<usize> {
        self.operand.dimensions()
    }
}

/// A binary operator applied to two operands.
#[derive(Debug, Clone, Copy)]
pub struct BinaryExpression<Op, L, R> {
    operator: Op,
    lhs: L,
    rhs: R,
}

impl<Op, L, R> BinaryExpression<Op, L, R> {
    /// Create a node applying `operator` to `lhs` and `rhs`.
    #[inline]
    pub fn new(operator: Op, lhs: L, rhs: R) -> Self {
        Self { operator, lhs, rhs }
    }
}

impl<Op, L, R> Operand for BinaryExpression<Op, L, R>
where
    L: Operand,
    R: Operand<Item = L::Item>,
    Op: BinaryOperator<L::Item>,
{
    type Item = L::Item;

    #[inline]
    fn element(&self, i: usize) -> Self::Item {
        self.operator
            .apply(self.lhs.element(i), self.rhs.element(i))
    }

    #[inline]
    fn dimensions(&self) -> Option<usize> {
        self.lhs.dimensions().or_else(|| self.rhs.dimensions())
    }
}

// ============================================================================
// Expression Constructors
// ============================================================================

/// Lift an operand into an expression node without changing its values.
#[inline]
pub fn lazy<O: Operand>(operand: O) -> UnaryExpression<Identity, O> {
    UnaryExpression::new(Identity, operand)
}

/// `-operand` at every index.
#[inline]
pub fn make_negate_expression<O>(operand: O) -> UnaryExpression<Negate, O>
where
    O: Operand,
    O::Item: Neg<Output = O::Item>,
{
    UnaryExpression::new(Negate, operand)
}

/// `lhs + rhs` at every index.
#[inline]
pub fn make_sum_expression<L, R>(lhs: L, rhs: R) -> BinaryExpression<Sum, L, R>
where
    L: Operand,
    R: Operand<Item = L::Item>,
    L::Item: Add<Output = L::Item>,
{
    BinaryExpression::new(Sum, lhs, rhs)
}

/// `lhs - rhs` at every index.
#[inline]
pub fn make_difference_expression<L, R>(lhs: L, rhs: R) -> BinaryExpression<Difference, L, R>
where
    L: Operand,
    R: Operand<Item = L::Item>,
    L::Item: Sub<Output = L::Item>,
{
    BinaryExpression::new(Difference, lhs, rhs)
}

/// `max(lhs, rhs) - min(lhs, rhs)` at every index.
#[inline]
pub fn make_absolute_difference_expression<L, R>(
    lhs: L,
    rhs: R,
) -> BinaryExpression<AbsoluteDifference, L, R>
where
    L: Operand,
    R: Operand<Item = L::Item>,
    L::Item: PartialOrd + Sub<Output = L::Item>,
{
    BinaryExpression::new(AbsoluteDifference, lhs, rhs)
}

/// `lhs * rhs` at every index.
#[inline]
pub fn make_product_expression<L, R>(lhs: L, rhs: R) -> BinaryExpression<Product, L, R>
where
    L: Operand,
    R: Operand<Item = L::Item>,
    L::Item: Mul<Output = L::Item>,
{
    BinaryExpression::new(Product, lhs, rhs)
}

/// `lhs / rhs` at every index.
#[inline]
pub fn make_quotient_expression<L, R>(lhs: L, rhs: R) -> BinaryExpression<Quotient, L, R>
where
    L: Operand,
    R: Operand<Item = L::Item>,
    L::Item: Div<Output = L::Item>,
{
    BinaryExpression::new(Quotient, lhs, rhs)
}

// ============================================================================
// Operator Overloads: Expression on the Left
// ============================================================================

macro_rules! impl_expression_binary_operator {
    ($trait:ident, $method:ident, $operator:ident) => {
        impl<Op, O, Rhs> $trait<Rhs> for UnaryExpression<Op, O>
        where
            Self: Operand,
            Rhs: Operand<Item = <Self as Operand>::Item>,
            <Self as Operand>::Item: $trait<Output = <Self as Operand>::Item>,
        {
            type Output = BinaryExpression<$operator, Self, Rhs>;

            #[inline]
            fn $method(self, rhs: Rhs) -> Self::Output {
                BinaryExpression::new($operator, self, rhs)
            }
        }

        impl<Op, L, R, Rhs> $trait<Rhs> for BinaryExpression<Op, L, R>
        where
            Self: Operand,
            Rhs: Operand<Item = <Self as Operand>::Item>,
            <Self as Operand>::Item: $trait<Output = <Self as Operand>::Item>,
        {
            type Output = BinaryExpression<$operator, Self, Rhs>;

            #[inline]
            fn $method(self, rhs: Rhs) -> Self::Output {
                BinaryExpression::new($operator, self, rhs)
            }
        }
    };
}

impl_expression_binary_operator!(Add, add, Sum);
impl_expression_binary_operator!(Sub, sub, Difference);
impl_expression_binary_operator!(Mul, mul, Product);
impl_expression_binary_operator!(Div, div, Quotient);

impl<Op, O> Neg for UnaryExpression<Op, O>
where
    Self: Operand,
    <Self as Operand>::Item: Neg<Output = <Self as Operand>::Item>,
{
    type Output = UnaryExpression<Negate, Self>;

    #[inline]
    fn neg(self) -> Self::Output {
        UnaryExpression::new(Negate, self)
    }
}

impl<Op, L, R> Neg for BinaryExpression<Op, L, R>
where
    Self: Operand,
    <Self as Operand>::Item: Neg<Output = <Self as Operand>::Item>,
{
    type Output = UnaryExpression<Negate, Self>;

    #[inline]
    fn neg(self) -> Self::Output {
        UnaryExpression::new(Negate, self)
    }
}

// ============================================================================
// Operator Overloads: Scalar on the Left
// ============================================================================

macro_rules! impl_scalar_lhs_operator {
    ($scalar:ty, $trait:ident, $method:ident, $operator:ident) => {
        impl<Op, O> $trait<UnaryExpression<Op, O>> for $scalar
        where
            UnaryExpression<Op, O>: Operand<Item = $scalar>,
        {
            type Output = BinaryExpression<$operator, $scalar, UnaryExpression<Op, O>>;

            #[inline]
            fn $method(self, rhs: UnaryExpression<Op, O>) -> Self::Output {
                BinaryExpression::new($operator, self, rhs)
            }
        }

        impl<Op, L, R> $trait<BinaryExpression<Op, L, R>> for $scalar
        where
            BinaryExpression<Op, L, R>: Operand<Item = $scalar>,
        {
            type Output = BinaryExpression<$operator, $scalar, BinaryExpression<Op, L, R>>;

            #[inline]
            fn $method(self, rhs: BinaryExpression<Op, L, R>) -> Self::Output {
                BinaryExpression::new($operator, self, rhs)
            }
        }
    };
}

macro_rules! impl_scalar_lhs_operators {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl_scalar_lhs_operator!($scalar, Add, add, Sum);
            impl_scalar_lhs_operator!($scalar, Sub, sub, Difference);
            impl_scalar_lhs_operator!($scalar, Mul, mul, Product);
            impl_scalar_lhs_operator!($scalar, Div, div, Quotient);
        )*
    };
}

for_each_scalar!(impl_scalar_lhs_operators);
