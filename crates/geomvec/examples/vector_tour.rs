//! A walk through the geomvec API.
//!
//! This example demonstrates:
//! - Building vectors and using the named accessors
//! - Eager arithmetic and lazy elementwise expressions
//! - Distance metrics
//! - Bounding extents of a point cloud
//! - Runtime-checked construction and its errors

#[cfg(feature = "std")]
use geomvec::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), VectorError> {
    println!("{}", "=".repeat(60));
    println!("geomvec - Vector Tour");
    println!("{}", "=".repeat(60));
    println!();

    example_1_arithmetic();
    example_2_expressions();
    example_3_metrics();
    example_4_extents();
    example_5_checked_construction()?;

    Ok(())
}

#[cfg(feature = "std")]
fn example_1_arithmetic() {
    println!("Example 1: Arithmetic");
    println!("{}", "-".repeat(60));

    let mut a = Vec3::new([-3, 2, 1]);
    let b = Vec3::unit_x();
    println!("a = {a}, b = {b}");
    println!("a + b = {}", a + b);
    println!("a * 5 = {}", a * 5);
    println!("-a    = {}", -a);

    a *= 5;
    *a.z_mut() = 0;
    println!("a after *= 5 and z = 0: {a} (x = {}, y = {})", a.x(), a.y());
    println!("a < b: {}", a < b);
    println!();
}

#[cfg(feature = "std")]
fn example_2_expressions() {
    println!("Example 2: Lazy Expressions");
    println!("{}", "-".repeat(60));

    let a = Vec3::new([1.0, 2.0, 3.0]);
    let b = Vec3::new([0.5, 0.5, 0.5]);
    let c = Vec3::make_repeated(10.0);

    // Nothing is computed until the expression is collected
    let expr = (lazy(&a) - &b) * 2.0 + &c;
    let result = Vec3::from_expression(&expr);

    println!("(a - b) * 2 + c = {result:.2}");
    println!("element 1 alone  = {}", expr.element(1));
    println!();
}

#[cfg(feature = "std")]
fn example_3_metrics() {
    println!("Example 3: Distance Metrics");
    println!("{}", "-".repeat(60));

    let p = Vec3::new([-3, -4, -5]);
    let q = Vec3::new([3, 4, 5]);
    println!("p = {p}, q = {q}");
    println!("  distance           {:.4}", distance(&p, &q));
    println!("  distance_squared   {}", distance_squared(&p, &q));
    println!("  manhattan_distance {}", manhattan_distance(&p, &q));
    println!("  chebyshev_distance {}", chebyshev_distance(&p, &q));
    println!("  dot_product        {}", dot_product(&p, &q));

    let mut direction = Vec2::new([3.0, 4.0]);
    direction.normalize();
    println!("normalized <3, 4> = {direction:.3}");
    println!();
}

#[cfg(feature = "std")]
fn example_4_extents() {
    println!("Example 4: Extents");
    println!("{}", "-".repeat(60));

    let cloud = vec![
        Vec3::new([1, 5, 3]),
        Vec3::new([4, 2, 6]),
        Vec3::new([-2, 7, 0]),
    ];

    if let Some((low, high)) = extents(&cloud) {
        println!("bounding box: {low} .. {high}");
    }
    println!("min x = {:?}, max y = {:?}", min_x(&cloud), max_y(&cloud));

    let nothing: Vec<Vec3<i32>> = Vec::new();
    println!("extents of an empty cloud: {:?}", extents(&nothing));
    println!();
}

#[cfg(feature = "std")]
fn example_5_checked_construction() -> Result<(), VectorError> {
    println!("Example 5: Checked Construction");
    println!("{}", "-".repeat(60));

    let readings = [0.25_f32, 0.5, 0.75];
    let v = Vec3::try_from(&readings[..])?;
    println!("from slice: {v}");

    match Vec2::<f32>::try_from(&readings[..]) {
        Ok(v) => println!("unexpected: {v}"),
        Err(e) => println!("rejected: {e}"),
    }

    let unit = Vector::<i32, 4>::make_unit(3)?;
    println!("make_unit(3) in 4-D: {unit}");
    if let Err(e) = Vector::<i32, 4>::make_unit(4) {
        println!("make_unit(4) in 4-D: {e}");
    }

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}
