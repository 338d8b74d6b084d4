//! # geomvec — fixed-size numeric vectors for Rust
//!
//! A small generic `Vector<T, N>` for any primitive numeric `T` and any
//! compile-time dimension count `N`, with componentwise arithmetic, geometric
//! measures, per-dimension extents over collections, and a lazy elementwise
//! expression layer that evaluates chained arithmetic without building
//! intermediate vectors.
//!
//! ## Quick Start
//!
//! ```rust
//! use geomvec::prelude::*;
//!
//! let a = Vec3::new([-3i32, -4, -5]);
//! let b = Vec3::new([3, 4, 5]);
//!
//! assert_eq!(a + b, Vec3::default());
//! assert_eq!(2 * a, Vec3::new([-6, -8, -10]));
//! assert_eq!(manhattan_distance(&a, &b), 24);
//! assert_eq!(chebyshev_distance(&a, &b), 10);
//! assert_eq!(a.to_string(), "<-3, -4, -5>");
//! ```
//!
//! ### Lazy Expressions
//!
//! Operators on expression nodes build a tree; nothing is computed until the
//! tree is collected into a vector.
//!
//! ```rust
//! use geomvec::prelude::*;
//!
//! let a = Vec2::new([1.0, 2.0]);
//! let b = Vec2::new([0.5, 0.5]);
//!
//! // (a - b) * 2, evaluated once per component
//! let expr = lazy(&a) - &b;
//! let scaled = Vec2::from_expression(&(expr * 2.0));
//!
//! assert_eq!(scaled, Vec2::new([1.0, 3.0]));
//! assert_eq!(make_sum_expression(&a, &a).element(1), 4.0);
//! ```
//!
//! ### Extents
//!
//! ```rust
//! use geomvec::prelude::*;
//!
//! let points = [Vec3::new([1, 5, 3]), Vec3::new([4, 2, 6])];
//!
//! assert_eq!(min_x(&points), Some(1));
//! assert_eq!(max_y(&points), Some(5));
//! assert_eq!(
//!     extents(&points),
//!     Some((Vec3::new([1, 2, 3]), Vec3::new([4, 5, 6])))
//! );
//! assert_eq!(extents::<_, _, i32, 3>(&[] as &[Vec3<i32>]), None);
//! ```
//!
//! ### Result and Error Handling
//!
//! Dimension mismatches between vectors and out-of-range named axes are
//! compile errors. The entry points that take a runtime length or axis return
//! `Result<_, VectorError>`:
//!
//! ```rust
//! use geomvec::prelude::*;
//!
//! let from_slice = Vec3::<i32>::try_from(&[1, 2][..]);
//! assert_eq!(
//!     from_slice,
//!     Err(VectorError::DimensionMismatch { expected: 3, got: 2 })
//! );
//!
//! let unit = Vec2::<i32>::make_unit(1)?;
//! assert_eq!(unit, Vec2::unit_y());
//! # Result::<(), VectorError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate allocates nothing and supports `no_std`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! geomvec = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - scalar trait, dimension checks, errors.
mod primitives;

// Layer 2: Elementwise - lazy expressions over operands.
mod elementwise;

// Layer 3: Geometry - vector type, metrics, extents.
mod geom;

// Standard geomvec prelude.
pub mod prelude {
    pub use crate::elementwise::expression::{
        BinaryExpression, UnaryExpression, lazy, make_absolute_difference_expression,
        make_difference_expression, make_negate_expression, make_product_expression,
        make_quotient_expression, make_sum_expression,
    };
    pub use crate::elementwise::operand::{Broadcast, Operand};
    pub use crate::geom::extent::{
        extents, max, max_extent, max_x, max_y, max_z, min, min_extent, min_x, min_y, min_z,
    };
    pub use crate::geom::metric::{
        chebyshev_distance, distance, distance_squared, dot_product, magnitude,
        magnitude_squared, manhattan_distance,
    };
    pub use crate::geom::vector::{FixedVector, Vec2, Vec3, Vector};
    pub use crate::primitives::errors::VectorError;
    pub use crate::primitives::scalar::Scalar;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod elementwise {
        pub use crate::elementwise::*;
    }
    pub mod geom {
        pub use crate::geom::*;
    }
}
