/// Mesh culling strategies.
///
/// A MeshCuller decides whether one mesh is visible given the per-tick
/// CullingContext. Implementations range from brute-force (always
/// visible) to the two-stage frustum + facing composition.

use crate::camera::{CullingContext, Frustum, SampleGrid};
use crate::error::Result;
use crate::geometry::{normal_from_points, Transform};
use super::mesh::MeshData;

/// Strategy for deciding mesh visibility.
///
/// Called once per mesh per tick by the pipeline. The context is the
/// same read-only value for every mesh that tick.
///
/// `&mut self` allows stateful implementations (e.g. per-strategy
/// statistics) to maintain state across calls.
pub trait MeshCuller: Send + Sync {
    /// Decide whether the mesh is visible from the context's camera.
    fn is_visible(
        &mut self,
        mesh: &MeshData,
        transform: &Transform,
        context: &CullingContext,
    ) -> Result<bool>;
}

/// Brute-force culler — every mesh is visible (no actual culling).
///
/// Baseline for comparison, and adequate for scenes small enough
/// not to care.
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl MeshCuller for BruteForceCuller {
    fn is_visible(
        &mut self,
        _mesh: &MeshData,
        _transform: &Transform,
        _context: &CullingContext,
    ) -> Result<bool> {
        Ok(true)
    }
}

/// Frustum culler — visible when any vertex lies inside the view volume.
pub struct FrustumCuller;

impl FrustumCuller {
    pub fn new() -> Self {
        Self
    }
}

impl MeshCuller for FrustumCuller {
    fn is_visible(
        &mut self,
        mesh: &MeshData,
        transform: &Transform,
        context: &CullingContext,
    ) -> Result<bool> {
        Ok(frustum_pass(mesh, transform, context.frustum()))
    }
}

/// Back-face culler — visible when any triangle faces the viewer along
/// at least one sampled ray direction.
pub struct BackFaceCuller;

impl BackFaceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl MeshCuller for BackFaceCuller {
    fn is_visible(
        &mut self,
        mesh: &MeshData,
        transform: &Transform,
        context: &CullingContext,
    ) -> Result<bool> {
        facing_pass(mesh, transform, context.sample_grid())
    }
}

/// Two-stage culler — frustum containment AND front-facing.
///
/// The composition rule for final visibility: a mesh must both reach
/// into the view volume and present at least one front face to it.
/// The cheap frustum pass runs first and short-circuits the facing
/// pass for meshes that are entirely outside.
pub struct TwoStageCuller;

impl TwoStageCuller {
    pub fn new() -> Self {
        Self
    }
}

impl MeshCuller for TwoStageCuller {
    fn is_visible(
        &mut self,
        mesh: &MeshData,
        transform: &Transform,
        context: &CullingContext,
    ) -> Result<bool> {
        if !frustum_pass(mesh, transform, context.frustum()) {
            return Ok(false);
        }
        facing_pass(mesh, transform, context.sample_grid())
    }
}

// ===== CULLING PASSES =====

/// Frustum pass: is any vertex of any triangle inside the frustum?
///
/// Vertices are consumed through the index triples, so vertices no
/// triangle references never vote. Short-circuits on the first inside
/// vertex. An empty mesh is vacuously invisible.
pub fn frustum_pass(mesh: &MeshData, transform: &Transform, frustum: &Frustum) -> bool {
    mesh.triangles_world(transform)
        .any(|tri| tri.iter().any(|&v| frustum.contains_point(v)))
}

/// Facing pass: does any triangle's outward normal have a strictly
/// positive dot product with any sampled ray direction?
///
/// Degenerate (near-zero-area) triangles have no outward normal and do
/// not contribute; an empty grid means nothing can face the viewer.
/// Stops at the first front-facing pairing.
pub fn facing_pass(mesh: &MeshData, transform: &Transform, grid: &SampleGrid) -> Result<bool> {
    grid.validate()?;

    for tri in mesh.triangles_world(transform) {
        let normal = match normal_from_points(tri[0], tri[1], tri[2]) {
            Some(n) => n,
            None => continue,
        };

        if grid.directions().iter().any(|dir| normal.dot(*dir) > 0.0) {
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
