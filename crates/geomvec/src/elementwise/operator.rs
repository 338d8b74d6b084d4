//! Elementwise operators.
//!
//! Each operator is a zero-sized type applied to one or two components at a
//! time. Expression nodes store an operator by value, so an expression tree
//! carries no function pointers and inlines down to plain arithmetic.

// External dependencies
use core::ops::{Add, Div, Mul, Neg, Sub};

// Internal dependencies
use crate::primitives::scalar::absolute_difference;

/// Operator taking one component.
pub trait UnaryOperator<T> {
    /// Apply the operator to a single component.
    fn apply(&self, value: T) -> T;
}

/// Operator combining two components.
pub trait BinaryOperator<T> {
    /// Apply the operator to a pair of components.
    fn apply(&self, lhs: T, rhs: T) -> T;
}

// ============================================================================
// Unary Operators
// ============================================================================

/// `-value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Negate;

impl<T: Neg<Output = T>> UnaryOperator<T> for Negate {
    #[inline]
    fn apply(&self, value: T) -> T {
        -value
    }
}

/// `value`, unchanged. Lifts an operand into an expression node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T> UnaryOperator<T> for Identity {
    #[inline]
    fn apply(&self, value: T) -> T {
        value
    }
}

// ============================================================================
// Binary Operators
// ============================================================================

/// `lhs + rhs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sum;

impl<T: Add<Output = T>> BinaryOperator<T> for Sum {
    #[inline]
    fn apply(&self, lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}

/// `lhs - rhs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Difference;

impl<T: Sub<Output = T>> BinaryOperator<T> for Difference {
    #[inline]
    fn apply(&self, lhs: T, rhs: T) -> T {
        lhs - rhs
    }
}

/// `max(lhs, rhs) - min(lhs, rhs)`; safe for unsigned components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsoluteDifference;

impl<T> BinaryOperator<T> for AbsoluteDifference
where
    T: Copy + PartialOrd + Sub<Output = T>,
{
    #[inline]
    fn apply(&self, lhs: T, rhs: T) -> T {
        absolute_difference(lhs, rhs)
    }
}

/// `lhs * rhs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Product;

impl<T: Mul<Output = T>> BinaryOperator<T> for Product {
    #[inline]
    fn apply(&self, lhs: T, rhs: T) -> T {
        lhs * rhs
    }
}

/// `lhs / rhs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quotient;

impl<T: Div<Output = T>> BinaryOperator<T> for Quotient {
    #[inline]
    fn apply(&self, lhs: T, rhs: T) -> T {
        lhs / rhs
    }
}
