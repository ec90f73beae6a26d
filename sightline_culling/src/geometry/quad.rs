/// Quad — an ordered 4-corner polygon representing one bounding face.
///
/// Corner order is significant: the normal comes from the cross product
/// of the two edges leaving corner 0, so consistent winding across the
/// six frustum faces yields consistently oriented (inward) normals.

use glam::Vec3;
use super::transform::Transform;

/// Normal of the plane through three points.
///
/// Normalized `cross(b − a, c − a)`. Returns `None` when the points are
/// collinear or coincident (the cross product has near-zero length and
/// cannot be normalized).
pub fn normal_from_points(a: Vec3, b: Vec3, c: Vec3) -> Option<Vec3> {
    (b - a).cross(c - a).try_normalize()
}

/// An ordered 4-corner plane polygon.
///
/// Used for the six bounding faces of a [`Frustum`](crate::camera::Frustum)
/// and as the sampling region of the directional grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// The four corners, in winding order
    pub corners: [Vec3; 4],
}

impl Quad {
    /// Create a quad from four corners in winding order.
    pub const fn new(corners: [Vec3; 4]) -> Self {
        Self { corners }
    }

    /// Plane normal by winding.
    ///
    /// Cross product of the edges from corner 0 to corners 1 and 2,
    /// normalized; the fourth corner does not participate. Returns the
    /// zero vector for a degenerate quad, which downstream half-space
    /// tests classify as "outside" (dot product zero).
    pub fn normal(&self) -> Vec3 {
        normal_from_points(self.corners[0], self.corners[1], self.corners[2])
            .unwrap_or(Vec3::ZERO)
    }

    /// Centroid: arithmetic mean of the four corners.
    pub fn centroid(&self) -> Vec3 {
        (self.corners[0] + self.corners[1] + self.corners[2] + self.corners[3]) / 4.0
    }

    /// Apply a transform to all four corners, returning a new quad.
    pub fn transformed(&self, transform: &Transform) -> Quad {
        Quad {
            corners: self.corners.map(|c| transform.transform_point(c)),
        }
    }

    /// The four edges in winding order as (start, end) pairs.
    ///
    /// The last edge closes the loop from corner 3 back to corner 0.
    pub fn edges(&self) -> [(Vec3, Vec3); 4] {
        let c = &self.corners;
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }
}

#[cfg(test)]
#[path = "quad_tests.rs"]
mod tests;
