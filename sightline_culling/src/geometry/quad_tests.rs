use glam::Vec3;
use super::*;

/// Unit quad in the XY plane, wound lower-left, upper-left, upper-right,
/// lower-right (the lens corner order)
fn xy_quad() -> Quad {
    Quad::new([
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(-1.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
    ])
}

// ============================================================================
// normal_from_points
// ============================================================================

#[test]
fn test_normal_from_points_direction() {
    let n = normal_from_points(
        Vec3::ZERO,
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
    )
    .unwrap();

    assert!((n - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
}

#[test]
fn test_normal_from_points_unit_length() {
    // Large triangle, normal still unit length
    let n = normal_from_points(
        Vec3::new(100.0, 0.0, 0.0),
        Vec3::new(0.0, 250.0, 0.0),
        Vec3::new(0.0, 0.0, 500.0),
    )
    .unwrap();

    assert!((n.length() - 1.0).abs() < 1e-5);
}

#[test]
fn test_normal_from_collinear_points_is_none() {
    let n = normal_from_points(
        Vec3::ZERO,
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(2.0, 2.0, 2.0),
    );

    assert!(n.is_none());
}

#[test]
fn test_normal_from_coincident_points_is_none() {
    let p = Vec3::new(3.0, 4.0, 5.0);
    assert!(normal_from_points(p, p, p).is_none());
}

// ============================================================================
// Quad
// ============================================================================

#[test]
fn test_quad_normal_matches_winding() {
    let n = xy_quad().normal();
    assert!((n - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
}

#[test]
fn test_quad_normal_unit_length() {
    // A quad far from the origin with unequal edge lengths
    let quad = Quad::new([
        Vec3::new(10.0, 20.0, 30.0),
        Vec3::new(10.0, 26.0, 30.0),
        Vec3::new(18.0, 26.0, 30.0),
        Vec3::new(18.0, 20.0, 30.0),
    ]);

    assert!((quad.normal().length() - 1.0).abs() < 1e-5);
}

#[test]
fn test_degenerate_quad_normal_is_zero() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    let quad = Quad::new([p, p, p, p]);

    assert_eq!(quad.normal(), Vec3::ZERO);
}

#[test]
fn test_quad_centroid() {
    assert_eq!(xy_quad().centroid(), Vec3::ZERO);

    let quad = Quad::new([
        Vec3::new(0.0, 0.0, 4.0),
        Vec3::new(2.0, 0.0, 4.0),
        Vec3::new(2.0, 2.0, 4.0),
        Vec3::new(0.0, 2.0, 4.0),
    ]);
    assert_eq!(quad.centroid(), Vec3::new(1.0, 1.0, 4.0));
}

#[test]
fn test_quad_transformed() {
    let moved = xy_quad().transformed(&Transform::from_position(Vec3::new(1.0, 2.0, 3.0)));

    assert_eq!(moved.corners[0], Vec3::new(0.0, 1.0, 3.0));
    assert_eq!(moved.centroid(), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_quad_edges_close_loop() {
    let quad = xy_quad();
    let edges = quad.edges();

    assert_eq!(edges[0], (quad.corners[0], quad.corners[1]));
    assert_eq!(edges[3], (quad.corners[3], quad.corners[0]));
}
