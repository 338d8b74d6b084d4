//! Layer 3: Geometry
//!
//! # Purpose
//!
//! This layer provides the user-facing vector type and the operations built
//! on it:
//! - `Vector<T, N>` with arithmetic, ordering and named accessors
//! - Geometric measures (dot product, magnitude, distance metrics)
//! - Per-dimension extents over collections of vectors
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Geometry ← You are here
//!   ↓
//! Layer 2: Elementwise
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fixed-size vector type.
pub mod vector;

/// Dot product, magnitude and distance metrics.
pub mod metric;

/// Per-dimension extents over collections.
pub mod extent;
