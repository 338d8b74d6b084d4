//! Layer 2: Elementwise
//!
//! # Purpose
//!
//! This layer provides lazy, composable elementwise computations over
//! indexable operands and broadcast scalars:
//! - The `Operand` capability trait (anything that yields a value per index)
//! - Zero-sized unary and binary operators
//! - Expression nodes and their constructors, with `+ - * /` overloads
//!
//! Evaluation happens one index at a time and only when an expression is
//! collected into a concrete vector; no intermediate vector is built.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Geometry
//!   ↓
//! Layer 2: Elementwise ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Indexable operands and scalar broadcast.
pub mod operand;

/// Elementwise operators.
pub mod operator;

/// Expression nodes, constructors and operator overloads.
pub mod expression;
