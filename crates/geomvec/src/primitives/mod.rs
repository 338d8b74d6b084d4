//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the scalar abstraction, named axis indices,
//! and error types used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Geometry
//!   ↓
//! Layer 2: Elementwise
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Scalar capability trait and scalar helpers.
pub mod scalar;

/// Named axis indices.
pub mod dimension;

/// Shared error types.
pub mod errors;
