//! Named axes.
//!
//! Named accessors (`x`, `y`, `z`) and unit-vector factories index a fixed
//! axis. They check the axis with an inline `const` assertion, so an
//! out-of-range axis is a build error when the function is instantiated and
//! no runtime check is emitted.

/// Axis index of the `x` component.
pub const X: usize = 0;

/// Axis index of the `y` component.
pub const Y: usize = 1;

/// Axis index of the `z` component.
pub const Z: usize = 2;
