//! Error types for vector operations.
//!
//! ## Purpose
//!
//! Most invariants of this crate are enforced by the type system: vector
//! dimensions are const generics and named axes are checked at compile time.
//! This module covers the few entry points that accept a dimension or length
//! only known at runtime.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending value and the valid bound.
//! * **No-std**: `Display` is always available; `std::error::Error` is
//!   implemented when `std` is enabled.
//!
//! ## Non-goals
//!
//! * Empty-collection queries are not errors; they return `None`.
//! * Scalar division by zero is not intercepted.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for runtime-checked vector construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// A slice did not contain exactly as many components as the vector has dimensions.
    DimensionMismatch {
        /// Number of dimensions of the target vector.
        expected: usize,
        /// Number of components supplied.
        got: usize,
    },

    /// A dimension index was not below the vector's number of dimensions.
    InvalidDimension {
        /// The dimension index provided.
        dimension: usize,
        /// Number of dimensions of the vector.
        dimensions: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DimensionMismatch { expected, got } => {
                write!(f, "Dimension mismatch: expected {expected} components, got {got}")
            }
            Self::InvalidDimension {
                dimension,
                dimensions,
            } => {
                write!(
                    f,
                    "Invalid dimension: {dimension} (must be less than {dimensions})"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for VectorError {}
