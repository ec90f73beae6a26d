/// Frustum — the camera's view volume as six world-space bounding quads.
///
/// The far and near faces come straight from the lens corner extraction;
/// the four side faces reuse those corners in a fixed rotation, so all
/// six faces share edges and the volume is closed. The shared winding
/// makes each face normal point into the volume — except the near face,
/// which winds the same way as the far face and whose inside direction
/// is therefore its negated normal.
///
/// Rebuilt from the camera state every tick; never cached across frames.

use glam::Vec3;
use crate::geometry::{Quad, Transform};
use super::lens::CameraLens;

/// Six bounding quads of a camera view volume, in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Far face
    pub far: Quad,
    /// Near face
    pub near: Quad,
    /// Left face
    pub left: Quad,
    /// Right face
    pub right: Quad,
    /// Top face
    pub up: Quad,
    /// Bottom face
    pub down: Quad,
}

impl Frustum {
    /// Build the world-space frustum for a camera.
    ///
    /// Corner quadruples for the far and near clip distances are taken
    /// from the lens (lower-left, upper-left, upper-right, lower-right);
    /// each side face recombines one near pair with one far pair. All
    /// corners are then mapped local→world through the camera transform
    /// (scale, rotate, translate — in that order).
    pub fn from_camera(lens: &CameraLens, camera: &Transform) -> Self {
        let far = lens.corners_at(lens.far_clip());
        let near = lens.corners_at(lens.near_clip());

        let left = [near[1], far[1], far[0], near[0]];
        let right = [near[3], far[3], far[2], near[2]];
        let up = [near[2], far[2], far[1], near[1]];
        let down = [near[0], far[0], far[3], near[3]];

        let to_world =
            |corners: [Vec3; 4]| Quad::new(corners.map(|c| camera.transform_point(c)));

        Self {
            far: to_world(far),
            near: to_world(near),
            left: to_world(left),
            right: to_world(right),
            up: to_world(up),
            down: to_world(down),
        }
    }

    /// The six faces in a fixed order: far, near, left, right, up, down.
    pub fn quads(&self) -> [&Quad; 6] {
        [
            &self.far,
            &self.near,
            &self.left,
            &self.right,
            &self.up,
            &self.down,
        ]
    }

    /// Center of the volume: midpoint of the far and near centroids
    /// (equivalently, the mean of the eight defining corners).
    pub fn center(&self) -> Vec3 {
        (self.far.centroid() + self.near.centroid()) * 0.5
    }

    /// Test whether a world-space point lies inside the view volume.
    ///
    /// The point must pass the half-space test of all six faces. A point
    /// exactly on a face (dot product zero) counts as outside. The near
    /// face tests against its negated winding normal; the other five
    /// windings already point inward.
    pub fn contains_point(&self, point: Vec3) -> bool {
        on_inner_side(point, &self.far, self.far.normal())
            && on_inner_side(point, &self.near, -self.near.normal())
            && on_inner_side(point, &self.left, self.left.normal())
            && on_inner_side(point, &self.right, self.right.normal())
            && on_inner_side(point, &self.up, self.up.normal())
            && on_inner_side(point, &self.down, self.down.normal())
    }
}

/// Strict half-space test: is the point on the side of the face's plane
/// that `inside_normal` points toward?
///
/// The direction from the face centroid to the point is normalized
/// before the dot product, matching the containment convention; the sign
/// is all that matters. A zero direction (point at the centroid exactly)
/// or a zero normal (degenerate face) yields dot zero → outside.
fn on_inner_side(point: Vec3, face: &Quad, inside_normal: Vec3) -> bool {
    (point - face.centroid()).normalize_or_zero().dot(inside_normal) > 0.0
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
