//! Mesh geometry for culling.
//!
//! `MeshData` holds local-space vertex positions and triangle indices.
//! It is the CPU-side shape the evaluator walks; GPU buffers, materials,
//! and LODs are the host engine's business.

use glam::Vec3;
use crate::error::{Error, Result};
use crate::geometry::Transform;

/// Vertex positions and triangle indices of a candidate mesh.
///
/// Indices are grouped in triples, one triple per triangle, wound
/// counter-clockwise as seen from the front face. Both invariants are
/// validated at construction so iteration never re-checks them.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Local-space vertex positions
    vertices: Vec<Vec3>,
    /// Triangle indices, grouped in triples
    indices: Vec<u32>,
}

impl MeshData {
    /// Create a mesh, validating the index buffer.
    ///
    /// Fails if the index count is not a multiple of 3 or any index is
    /// out of range for the vertex buffer.
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(Error::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }

        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(Error::InvalidMesh(format!(
                "index {} out of range for {} vertices",
                bad,
                vertices.len()
            )));
        }

        Ok(Self { vertices, indices })
    }

    /// Local-space vertex positions.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Triangle indices, grouped in triples.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate triangles as local-space vertex triples, in index order.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Iterate triangles transformed to world space.
    pub fn triangles_world<'a>(
        &'a self,
        transform: &'a Transform,
    ) -> impl Iterator<Item = [Vec3; 3]> + 'a {
        self.triangles()
            .map(move |tri| tri.map(|v| transform.transform_point(v)))
    }

    // ===== GENERATORS =====

    /// A quad on the XY plane, centered at the origin, front face
    /// toward −Z.
    ///
    /// Two triangles; with an identity transform and a camera looking
    /// down +Z, the quad faces the camera.
    pub fn quad(half_width: f32, half_height: f32) -> Self {
        let vertices = vec![
            Vec3::new(-half_width, -half_height, 0.0),
            Vec3::new(half_width, -half_height, 0.0),
            Vec3::new(half_width, half_height, 0.0),
            Vec3::new(-half_width, half_height, 0.0),
        ];
        let indices = vec![0, 3, 2, 0, 2, 1];

        Self { vertices, indices }
    }

    /// The same quad with reversed winding: front face toward +Z,
    /// back face toward the −Z viewer.
    pub fn quad_reversed(half_width: f32, half_height: f32) -> Self {
        let mut mesh = Self::quad(half_width, half_height);
        for tri in mesh.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        mesh
    }

    /// An axis-aligned cube centered at the origin, faces wound outward.
    pub fn cube(half_extent: f32) -> Self {
        let h = half_extent;
        let vertices = vec![
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(-h, -h, h),
            Vec3::new(h, -h, h),
            Vec3::new(h, h, h),
            Vec3::new(-h, h, h),
        ];
        let indices = vec![
            0, 3, 2, 0, 2, 1, // -Z
            4, 5, 6, 4, 6, 7, // +Z
            0, 4, 7, 0, 7, 3, // -X
            1, 2, 6, 1, 6, 5, // +X
            0, 1, 5, 0, 5, 4, // -Y
            3, 7, 6, 3, 6, 2, // +Y
        ];

        Self { vertices, indices }
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
