//! Per-tick debug visualization export.
//!
//! The debug collaborator (gizmo renderer, editor overlay, etc.) reads
//! the current tick's frustum, sampling grid, and triangle normals as
//! plain point buffers ready for line rendering. The view borrows the
//! [`CullingContext`], so it cannot outlive the tick that produced it —
//! non-persistence is enforced by the borrow, not by clearing state.

use glam::Vec3;
use crate::camera::CullingContext;
use crate::geometry::{normal_from_points, Transform};
use crate::scene::MeshData;

/// Read-only view over one tick's culling data, for debug rendering.
///
/// All methods return line-list point buffers: consecutive point pairs
/// form one segment. Use [`vertex_bytes`] to hand a buffer to a GPU
/// vertex upload without copying.
pub struct DebugView<'a> {
    context: &'a CullingContext,
}

impl<'a> DebugView<'a> {
    /// Create a view over the given tick's context.
    pub fn new(context: &'a CullingContext) -> Self {
        Self { context }
    }

    /// Outline segments of the six frustum faces (48 points).
    ///
    /// Shared edges are emitted once per adjoining face; line rendering
    /// does not care about the duplication.
    pub fn frustum_edges(&self) -> Vec<Vec3> {
        let mut points = Vec::with_capacity(48);
        for quad in self.context.frustum().quads() {
            for (start, end) in quad.edges() {
                points.push(start);
                points.push(end);
            }
        }
        points
    }

    /// One arrow segment per face, from its centroid along its inside
    /// direction (the near face negated, exactly as the containment
    /// test uses it).
    pub fn plane_normal_arrows(&self, length: f32) -> Vec<Vec3> {
        let frustum = self.context.frustum();
        let faces = [
            (&frustum.far, 1.0),
            (&frustum.near, -1.0),
            (&frustum.left, 1.0),
            (&frustum.right, 1.0),
            (&frustum.up, 1.0),
            (&frustum.down, 1.0),
        ];

        let mut points = Vec::with_capacity(12);
        for (quad, sign) in faces {
            let origin = quad.centroid();
            points.push(origin);
            points.push(origin + quad.normal() * sign * length);
        }
        points
    }

    /// Sampling-grid ray segments, one far→near pair per sample.
    pub fn grid_rays(&self) -> Vec<Vec3> {
        let grid = self.context.sample_grid();
        let mut points = Vec::with_capacity(grid.len() * 2);
        for (far, near) in grid.far_points().iter().zip(grid.near_points()) {
            points.push(*far);
            points.push(*near);
        }
        points
    }

    /// Direction arrows anchored at the far-plane sample points.
    pub fn direction_arrows(&self, length: f32) -> Vec<Vec3> {
        let grid = self.context.sample_grid();
        let mut points = Vec::with_capacity(grid.len() * 2);
        for (far, dir) in grid.far_points().iter().zip(grid.directions()) {
            points.push(*far);
            points.push(*far + *dir * length);
        }
        points
    }
}

/// World-space triangle normal arrows for one mesh, anchored at the
/// triangle centroids. Degenerate triangles are skipped, so the buffer
/// can be shorter than `2 * mesh.triangle_count()` points.
pub fn triangle_normal_arrows(
    mesh: &MeshData,
    transform: &Transform,
    length: f32,
) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(mesh.triangle_count() * 2);
    for tri in mesh.triangles_world(transform) {
        if let Some(normal) = normal_from_points(tri[0], tri[1], tri[2]) {
            let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
            points.push(centroid);
            points.push(centroid + normal * length);
        }
    }
    points
}

/// Reinterpret a point buffer as raw bytes for vertex upload.
pub fn vertex_bytes(points: &[Vec3]) -> &[u8] {
    bytemuck::cast_slice(points)
}

#[cfg(test)]
#[path = "debug_view_tests.rs"]
mod tests;
