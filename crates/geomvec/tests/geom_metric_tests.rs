//! Tests for geometric measures.
//!
//! These tests verify the metric functions used for:
//! - Dot product and magnitude
//! - Euclidean, Chebyshev and Manhattan distances
//!
//! ## Test Organization
//!
//! 1. **Reference Values** - hand-computed distances
//! 2. **Properties** - symmetry, identity, metric inequality
//! 3. **Scalar Types** - unsigned and floating-point components

use approx::assert_relative_eq;

use geomvec::prelude::*;

type Vec3i = Vec3<i32>;

// ============================================================================
// Reference Value Tests
// ============================================================================

/// Test Euclidean distance against a hand-computed value.
#[test]
fn test_distance() {
    let a = Vec3i::new([-3, -4, -5]);
    let b = Vec3i::new([3, 4, 5]);

    assert_eq!(distance_squared(&a, &b), 6 * 6 + 8 * 8 + 10 * 10);
    assert_relative_eq!(distance(&a, &b), 200.0f64.sqrt());
}

/// Test Chebyshev distance.
#[test]
fn test_chebyshev_distance() {
    assert_eq!(
        chebyshev_distance(&Vec3i::new([11, -7, 1]), &Vec3i::new([4, 10, 2])),
        17
    );
}

/// Test Manhattan distance.
#[test]
fn test_manhattan_distance() {
    assert_eq!(
        manhattan_distance(&Vec3i::new([-7, 11, 1]), &Vec3i::new([10, 4, 2])),
        25
    );
}

/// Test dot product and magnitude.
#[test]
fn test_dot_product_and_magnitude() {
    let a = Vec3i::new([1, 2, 3]);
    let b = Vec3i::new([4, -5, 6]);

    assert_eq!(dot_product(&a, &b), 4 - 10 + 18);
    assert_eq!(magnitude_squared(&a), 14);
    assert_relative_eq!(magnitude(&a), 14.0f64.sqrt());
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test that squared magnitude equals the self dot product.
#[test]
fn test_magnitude_squared_is_self_dot() {
    let vectors = [
        Vec3i::new([0, 0, 0]),
        Vec3i::new([1, -1, 1]),
        Vec3i::new([-12, 5, 33]),
    ];
    for v in &vectors {
        assert_eq!(magnitude_squared(v), dot_product(v, v));
        assert_eq!(v.magnitude_squared(), dot_product(v, v));
    }
}

/// Test symmetry and identity of distances.
#[test]
fn test_distance_symmetry_and_identity() {
    let a = Vec3::new([1.5, -2.0, 0.25]);
    let b = Vec3::new([-4.0, 8.0, 3.0]);

    assert_relative_eq!(distance(&a, &b), distance(&b, &a));
    assert_relative_eq!(distance(&a, &a), 0.0);
    assert_eq!(manhattan_distance(&a, &b), manhattan_distance(&b, &a));
    assert_eq!(chebyshev_distance(&a, &a), 0.0);
}

/// Test that Chebyshev distance never exceeds Manhattan distance.
#[test]
fn test_chebyshev_le_manhattan() {
    let points = [
        Vec3i::new([0, 0, 0]),
        Vec3i::new([1, -9, 4]),
        Vec3i::new([-20, 3, 3]),
        Vec3i::new([7, 7, -7]),
    ];
    for a in &points {
        for b in &points {
            assert!(chebyshev_distance(a, b) <= manhattan_distance(a, b));
        }
    }
}

// ============================================================================
// Scalar Type Tests
// ============================================================================

/// Test distances on unsigned components.
///
/// Verifies that no subtraction underflows when `a < b`.
#[test]
fn test_unsigned_distances() {
    let a = Vector::new([1u8, 200, 50]);
    let b = Vector::new([10u8, 100, 50]);

    assert_eq!(manhattan_distance(&a, &b), 109);
    assert_eq!(chebyshev_distance(&a, &b), 100);

    let origin = Vec2::new([0u32, 0]);
    let corner = Vec2::new([3u32, 4]);
    assert_eq!(distance_squared(&origin, &corner), 25);
    assert_eq!(distance_squared(&corner, &origin), 25);
    assert_relative_eq!(distance(&origin, &corner), 5.0);
    assert_relative_eq!(distance(&corner, &origin), 5.0);

    let mixed = Vec2::new([10u32, 0]);
    assert_eq!(distance_squared(&mixed, &corner), 65);
    assert_eq!(distance_squared(&corner, &mixed), 65);
}

/// Test that magnitude is promoted to f64 for every scalar type.
#[test]
fn test_magnitude_promotes_to_f64() {
    let v = Vec2::new([3u16, 4]);
    let m: f64 = v.magnitude();
    assert_relative_eq!(m, 5.0);

    let f = Vec2::new([0.5f32, 0.5]);
    assert_relative_eq!(f.magnitude(), 0.5f64.sqrt(), epsilon = 1e-7);
}

/// Test Euclidean distance in higher dimensions.
#[test]
fn test_high_dimensional_distance() {
    let a = Vector::<i64, 8>::make_repeated(1);
    let b = Vector::<i64, 8>::make_repeated(3);

    assert_eq!(distance_squared(&a, &b), 32);
    assert_relative_eq!(distance(&a, &b), 32.0f64.sqrt());
    assert_eq!(manhattan_distance(&a, &b), 16);
    assert_eq!(chebyshev_distance(&a, &b), 2);
}
