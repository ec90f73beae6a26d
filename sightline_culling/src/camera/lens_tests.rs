use std::f32::consts::{FRAC_PI_2, PI};
use glam::Vec3;
use crate::error::Error;
use super::*;

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_new_accepts_valid_parameters() {
    let lens = CameraLens::new(0.1, 100.0, FRAC_PI_2, 16.0 / 9.0).unwrap();

    assert_eq!(lens.near_clip(), 0.1);
    assert_eq!(lens.far_clip(), 100.0);
    assert_eq!(lens.fov_y(), FRAC_PI_2);
    assert_eq!(lens.aspect(), 16.0 / 9.0);
}

#[test]
fn test_new_rejects_non_positive_near() {
    for near in [0.0, -1.0] {
        let result = CameraLens::new(near, 100.0, FRAC_PI_2, 1.0);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}

#[test]
fn test_new_rejects_far_not_beyond_near() {
    for far in [1.0, 0.5] {
        let result = CameraLens::new(1.0, far, FRAC_PI_2, 1.0);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}

#[test]
fn test_new_rejects_degenerate_fov() {
    for fov in [0.0, PI, 4.0] {
        let result = CameraLens::new(1.0, 100.0, fov, 1.0);
        assert!(matches!(result, Err(Error::InvalidConfig(_))), "fov {}", fov);
    }
}

#[test]
fn test_new_rejects_non_positive_aspect() {
    let result = CameraLens::new(1.0, 100.0, FRAC_PI_2, 0.0);
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

// ============================================================================
// corners_at
// ============================================================================

#[test]
fn test_corners_at_90_degree_fov() {
    // tan(45°) = 1: half extents equal the distance
    let lens = CameraLens::new(1.0, 10.0, FRAC_PI_2, 1.0).unwrap();
    let corners = lens.corners_at(10.0);

    let expected = [
        Vec3::new(-10.0, -10.0, 10.0),
        Vec3::new(-10.0, 10.0, 10.0),
        Vec3::new(10.0, 10.0, 10.0),
        Vec3::new(10.0, -10.0, 10.0),
    ];

    for (corner, want) in corners.iter().zip(&expected) {
        assert!((*corner - *want).length() < 1e-4, "{} vs {}", corner, want);
    }
}

#[test]
fn test_corners_order_is_ll_ul_ur_lr() {
    let lens = CameraLens::new(1.0, 10.0, FRAC_PI_2, 1.0).unwrap();
    let corners = lens.corners_at(5.0);

    // lower-left
    assert!(corners[0].x < 0.0 && corners[0].y < 0.0);
    // upper-left
    assert!(corners[1].x < 0.0 && corners[1].y > 0.0);
    // upper-right
    assert!(corners[2].x > 0.0 && corners[2].y > 0.0);
    // lower-right
    assert!(corners[3].x > 0.0 && corners[3].y < 0.0);
}

#[test]
fn test_corners_aspect_scales_width() {
    let lens = CameraLens::new(1.0, 10.0, FRAC_PI_2, 2.0).unwrap();
    let corners = lens.corners_at(10.0);

    // Width = aspect × height
    assert!((corners[2].x - 20.0).abs() < 1e-3);
    assert!((corners[2].y - 10.0).abs() < 1e-3);
}

#[test]
fn test_near_corners_proportional_to_far() {
    let lens = CameraLens::new(1.0, 10.0, FRAC_PI_2, 1.0).unwrap();
    let near = lens.corners_at(lens.near_clip());
    let far = lens.corners_at(lens.far_clip());

    // Same view cone: near corners are the far corners scaled by near/far
    let ratio = lens.near_clip() / lens.far_clip();
    for (n, f) in near.iter().zip(&far) {
        assert!((*n - *f * ratio).length() < 1e-4);
    }
}
