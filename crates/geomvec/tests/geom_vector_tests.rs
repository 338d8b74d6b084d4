//! Tests for the fixed-size vector type.
//!
//! These tests verify `Vector<T, N>` behavior for:
//! - Equality and lexicographic ordering
//! - Named accessors and unit/repeated factories
//! - Componentwise arithmetic and compound assignment
//! - Text rendering and conversions
//!
//! ## Test Organization
//!
//! 1. **Comparison** - equality, ordering in 2-D and 3-D
//! 2. **Accessors and Factories** - x/y/z, unit vectors, repeated values
//! 3. **Arithmetic** - operators and algebraic properties
//! 4. **Magnitude and Normalization**
//! 5. **Output and Conversions**

use approx::assert_relative_eq;

use geomvec::prelude::*;

type Vec2i = Vec2<i32>;
type Vec3i = Vec3<i32>;

// ============================================================================
// Comparison Tests
// ============================================================================

/// Test structural equality.
#[test]
fn test_equal() {
    assert_eq!(Vec2i::new([1, 2]), Vec2i::new([1, 2]));
    assert_eq!(Vec3i::new([1, 2, 3]), Vec3i::new([1, 2, 3]));
}

/// Test structural inequality.
#[test]
fn test_not_equal() {
    assert_ne!(Vec2i::new([1, 2]), Vec2i::new([2, 1]));
    assert_ne!(Vec3i::new([1, 2, 3]), Vec3i::new([3, 2, 1]));
}

/// Test lexicographic ordering.
///
/// Verifies that the first differing component decides.
#[test]
fn test_lexicographic_ordering() {
    assert!(Vec2i::new([1, 2]) < Vec2i::new([2, 1]));
    assert!(Vec3i::new([1, 2, 1]) < Vec3i::new([1, 2, 2]));
    assert!(Vec3i::new([2, 1, 1]) > Vec3i::new([1, 2, 2]));
    assert!(Vec3i::new([1, 3, 0]) > Vec3i::new([1, 2, 9]));
    assert!(Vec3i::new([1, 2, 3]) <= Vec3i::new([1, 2, 3]));
    assert!(Vec3i::new([1, 2, 3]) >= Vec3i::new([1, 2, 3]));
    assert!(!(Vec3i::new([1, 2, 3]) < Vec3i::new([1, 2, 3])));
}

/// Test sorting integer vectors.
///
/// Verifies that `Ord` orders vectors lexicographically.
#[test]
fn test_sort() {
    let mut vectors = vec![
        Vec3i::new([2, 0, 0]),
        Vec3i::new([1, 5, 0]),
        Vec3i::new([1, 2, 7]),
        Vec3i::new([1, 2, 3]),
    ];
    vectors.sort();

    assert_eq!(
        vectors,
        vec![
            Vec3i::new([1, 2, 3]),
            Vec3i::new([1, 2, 7]),
            Vec3i::new([1, 5, 0]),
            Vec3i::new([2, 0, 0]),
        ]
    );
}

/// Test float ordering with NaN.
///
/// Verifies that a NaN component makes vectors incomparable.
#[test]
fn test_float_ordering_with_nan() {
    let a = Vec2::new([1.0, f64::NAN]);
    let b = Vec2::new([1.0, 2.0]);

    assert_eq!(a.partial_cmp(&b), None);
    assert!(Vec2::new([0.5, f64::NAN]) < b);
}

// ============================================================================
// Accessor and Factory Tests
// ============================================================================

/// Test named accessors.
#[test]
fn test_named_accessors() {
    assert_eq!(Vec2i::new([1, 2]).x(), 1);
    assert_eq!(Vec2i::new([1, 2]).y(), 2);

    let v = Vec3i::new([1, 2, 3]);
    assert_eq!((v.x(), v.y(), v.z()), (1, 2, 3));
}

/// Test mutable accessors and indexing.
#[test]
fn test_mutable_accessors() {
    let mut v = Vec3i::new([1, 2, 3]);
    *v.x_mut() = 10;
    *v.y_mut() += 5;
    *v.z_mut() *= 2;
    v[0] -= 1;

    assert_eq!(v, Vec3i::new([9, 7, 6]));
    assert_eq!(v[1], 7);
}

/// Test unit vectors.
#[test]
fn test_unit_vectors() {
    assert_eq!(Vec2i::unit_x(), Vec2i::new([1, 0]));
    assert_eq!(Vec2i::unit_y(), Vec2i::new([0, 1]));
    assert_eq!(Vec3i::unit_x(), Vec3i::new([1, 0, 0]));
    assert_eq!(Vec3i::unit_y(), Vec3i::new([0, 1, 0]));
    assert_eq!(Vec3i::unit_z(), Vec3i::new([0, 0, 1]));
    assert_eq!(Vector::<u8, 5>::unit::<4>(), Vector::new([0, 0, 0, 0, 1]));
}

/// Test runtime unit vectors.
///
/// Verifies the error for an out-of-range dimension.
#[test]
fn test_make_unit() {
    assert_eq!(Vec3i::make_unit(1), Ok(Vec3i::unit_y()));
    assert_eq!(
        Vec3i::make_unit(3),
        Err(VectorError::InvalidDimension {
            dimension: 3,
            dimensions: 3,
        })
    );
}

/// Test repeated-value factory and default.
#[test]
fn test_make_repeated_and_default() {
    assert_eq!(Vec3i::make_repeated(7), Vec3i::new([7, 7, 7]));
    assert_eq!(Vec3i::default(), Vec3i::make_repeated(0));
    assert_eq!(Vector::<f32, 4>::default().len(), 4);
    assert_eq!(Vec3i::DIMENSIONS, 3);
}

// ============================================================================
// Arithmetic Tests
// ============================================================================

/// Test addition and subtraction.
#[test]
fn test_add_subtract() {
    assert_eq!(
        Vec2i::new([-15, 10]) + Vec2i::new([-15, 10]),
        Vec2i::new([-30, 20])
    );
    assert_eq!(
        Vec2i::new([-15, 10]) - Vec2i::new([-15, 10]),
        Vec2i::new([0, 0])
    );
    assert_eq!(
        Vec3i::new([-15, 10, 5]) + Vec3i::new([-15, 10, 5]),
        Vec3i::new([-30, 20, 10])
    );
}

/// Test scalar multiplication and division.
#[test]
fn test_multiply_divide() {
    assert_eq!(Vec2i::new([-3, 2]) * 5, Vec2i::new([-15, 10]));
    assert_eq!(5 * Vec2i::new([-3, 2]), Vec2i::new([-15, 10]));
    assert_eq!(Vec2i::new([-15, 10]) / 5, Vec2i::new([-3, 2]));
    assert_eq!(0.5f64 * Vec2::new([4.0, -2.0]), Vec2::new([2.0, -1.0]));
}

/// Test compound assignment operators.
#[test]
fn test_compound_assignment() {
    let mut a = Vec3i::new([-3, 2, 1]);
    a *= 5;
    assert_eq!(a, Vec3i::new([-15, 10, 5]));

    a /= 5;
    assert_eq!(a, Vec3i::new([-3, 2, 1]));

    a += Vec3i::new([3, 3, 3]);
    assert_eq!(a, Vec3i::new([0, 5, 4]));

    a -= Vec3i::new([1, 1, 1]);
    assert_eq!(a, Vec3i::new([-1, 4, 3]));
}

/// Test negation.
#[test]
fn test_negate() {
    let a = Vec3i::new([-3, 0, 7]);
    assert_eq!(-a, Vec3i::new([3, 0, -7]));
    assert_eq!(-(-a), a);
}

/// Test algebraic properties of addition.
///
/// Verifies commutativity, associativity and the additive inverse.
#[test]
fn test_addition_properties() {
    let a = Vec3i::new([1, -2, 3]);
    let b = Vec3i::new([-4, 5, 6]);
    let c = Vec3i::new([7, 8, -9]);

    assert_eq!(a + b, b + a);
    assert_eq!((a + b) + c, a + (b + c));
    assert_eq!(a - a, Vec3i::default());
}

/// Test scalar round trip.
///
/// Verifies `(a * s) / s == a` for non-zero `s`.
#[test]
fn test_scalar_round_trip() {
    let a = Vec3i::new([1, -2, 3]);
    for s in [1, -1, 3, 17] {
        assert_eq!((a * s) / s, a);
    }

    let f = Vec3::new([0.25f64, -8.0, 3.5]);
    assert_eq!((f * 4.0) / 4.0, f);
}

/// Test unsigned vectors.
#[test]
fn test_unsigned_arithmetic() {
    let a = Vector::new([10u32, 20, 30]);
    let b = Vector::new([1u32, 2, 3]);

    assert_eq!(a - b, Vector::new([9, 18, 27]));
    assert_eq!(a / 10, Vector::new([1, 2, 3]));
}

// ============================================================================
// Magnitude and Normalization Tests
// ============================================================================

/// Test magnitude and squared magnitude.
#[test]
fn test_magnitude() {
    let v = Vec2i::new([3, 4]);

    assert_eq!(v.magnitude_squared(), 25);
    assert_relative_eq!(v.magnitude(), 5.0);
    assert_relative_eq!(Vec3::new([1.0f32, 2.0, 2.0]).magnitude(), 3.0);
}

/// Test normalization of a float vector.
///
/// Verifies the result has unit length and keeps direction.
#[test]
fn test_normalize() {
    let mut v = Vec3::new([3.0, 0.0, 4.0]);
    v.normalize();

    assert_relative_eq!(v.x(), 0.6, epsilon = 1e-12);
    assert_relative_eq!(v.y(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(v.z(), 0.8, epsilon = 1e-12);
    assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-12);

    let u = Vec2::new([0.0f32, -2.0]).normalized();
    assert_eq!(u, Vec2::new([0.0, -1.0]));
}

/// Test normalization of integer vectors.
///
/// Verifies truncation and the zero-vector fallback.
#[test]
fn test_normalize_integer() {
    let mut axis = Vec3i::new([0, 0, -9]);
    axis.normalize();
    assert_eq!(axis, Vec3i::new([0, 0, -1]));

    let mut zero = Vec2i::default();
    zero.normalize();
    assert_eq!(zero, Vec2i::default());
}

/// Test normalization of a float zero vector.
///
/// Verifies that the native NaN result is not intercepted.
#[test]
fn test_normalize_float_zero() {
    let mut zero = Vec2::new([0.0f64, 0.0]);
    zero.normalize();
    assert!(zero.x().is_nan() && zero.y().is_nan());
}

// ============================================================================
// Output and Conversion Tests
// ============================================================================

/// Test text rendering.
#[test]
fn test_display() {
    assert_eq!(Vec2i::new([-3, 2]).to_string(), "<-3, 2>");
    assert_eq!(Vec3i::new([-3, 2, 1]).to_string(), "<-3, 2, 1>");
    assert_eq!(Vector::<i32, 1>::new([7]).to_string(), "<7>");
    assert_eq!(Vector::<i32, 0>::new([]).to_string(), "<>");
}

/// Test that format precision is forwarded to each component.
#[test]
fn test_display_precision() {
    let v = Vec2::new([1.0f64, 2.5]);
    assert_eq!(format!("{v:.2}"), "<1.00, 2.50>");
}

/// Test conversions from and into arrays and slices.
#[test]
fn test_conversions() {
    let v: Vec3i = [1, 2, 3].into();
    let array: [i32; 3] = v.into();
    assert_eq!(array, [1, 2, 3]);
    assert_eq!(v.as_array(), &[1, 2, 3]);
    assert_eq!(v.as_slice(), &[1, 2, 3]);

    assert_eq!(Vec3i::try_from(&[4, 5, 6][..]), Ok(Vec3i::new([4, 5, 6])));
    assert_eq!(
        Vec3i::try_from(&[4, 5][..]),
        Err(VectorError::DimensionMismatch {
            expected: 3,
            got: 2,
        })
    );
}

/// Test iteration over components.
#[test]
fn test_iteration() {
    let mut v = Vec3i::new([1, 2, 3]);
    for component in &mut v {
        *component *= 10;
    }

    assert_eq!(v.iter().sum::<i32>(), 60);
    assert_eq!(v.into_iter().collect::<Vec<_>>(), vec![10, 20, 30]);
}
