/// SampleGrid — ray directions sampled through the frustum interior.
///
/// A cheap stand-in for per-pixel view rays: the far and near faces are
/// each sampled on the same interior lattice, and every far/near point
/// pair yields one unit direction (near − far). The facing test compares
/// triangle normals against these directions instead of casting real
/// rays, trading sampling density for accuracy: resolution R costs
/// O(R²) samples and catches proportionally thinner back-facing
/// silhouettes.

use glam::Vec3;
use crate::{cull_bail, cull_warn};
use crate::error::Result;
use crate::geometry::Quad;

/// Far-plane samples, near-plane samples, and one unit direction per
/// pair, all index-aligned 1:1.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    far_points: Vec<Vec3>,
    near_points: Vec<Vec3>,
    directions: Vec<Vec3>,
}

impl SampleGrid {
    /// Sample both faces and derive one direction per point pair.
    ///
    /// Each face gets exactly (R−1)² interior points in identical order,
    /// so index i on the far face corresponds to index i on the near
    /// face. Resolutions below 2 have no interior lattice: the grid
    /// comes back empty and the facing test can never report visible.
    pub fn build(far: &Quad, near: &Quad, resolution: u32) -> Self {
        if resolution < 2 {
            cull_warn!(
                "sightline::SampleGrid",
                "resolution {} is below 2, sampling grid is empty",
                resolution
            );
            return Self {
                far_points: Vec::new(),
                near_points: Vec::new(),
                directions: Vec::new(),
            };
        }

        let far_points = plane_grid(far, resolution);
        let near_points = plane_grid(near, resolution);

        let directions = far_points
            .iter()
            .zip(&near_points)
            .map(|(f, n)| (*n - *f).normalize_or_zero())
            .collect();

        Self {
            far_points,
            near_points,
            directions,
        }
    }

    /// Interior sample points on the far face.
    pub fn far_points(&self) -> &[Vec3] {
        &self.far_points
    }

    /// Interior sample points on the near face.
    pub fn near_points(&self) -> &[Vec3] {
        &self.near_points
    }

    /// Unit direction per far/near pair (near − far, normalized).
    pub fn directions(&self) -> &[Vec3] {
        &self.directions
    }

    /// Number of samples (per face, and of directions).
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    /// True when the grid holds no samples.
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Defensive check of the far/near/direction index alignment the
    /// facing test relies on. Construction guarantees it; a mismatch
    /// here is an internal-consistency error, never a user mistake.
    pub fn validate(&self) -> Result<()> {
        if self.far_points.len() != self.near_points.len()
            || self.far_points.len() != self.directions.len()
        {
            cull_bail!(
                "sightline::SampleGrid",
                "sample arrays misaligned: {} far, {} near, {} directions",
                self.far_points.len(),
                self.near_points.len(),
                self.directions.len()
            );
        }
        Ok(())
    }
}

/// Interior lattice of one face.
///
/// The left edge runs corner[1] → corner[0] and the right edge
/// corner[2] → corner[3], each sampled at R+1 points; interior rows and
/// columns (indices 1..R) interpolate between the edges. The boundary
/// ring is excluded.
fn plane_grid(face: &Quad, resolution: u32) -> Vec<Vec3> {
    let r = resolution as usize;
    let step = 1.0 / resolution as f32;

    let mut left_edge = Vec::with_capacity(r + 1);
    let mut right_edge = Vec::with_capacity(r + 1);
    for i in 0..=r {
        let t = i as f32 * step;
        left_edge.push(face.corners[1].lerp(face.corners[0], t));
        right_edge.push(face.corners[2].lerp(face.corners[3], t));
    }

    let mut points = Vec::with_capacity((r - 1) * (r - 1));
    for j in 1..r {
        for k in 1..r {
            points.push(left_edge[j].lerp(right_edge[j], k as f32 * step));
        }
    }

    points
}

#[cfg(test)]
#[path = "sample_grid_tests.rs"]
mod tests;
