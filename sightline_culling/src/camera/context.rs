/// CullingContext — the typed hand-off between the two pipeline stages.
///
/// Stage one builds it from the camera state once per tick; stage two
/// (and the debug view) read it. Ephemeral: valid for the tick it was
/// built in, then dropped. No Arc, no Mutex, no hidden mutable fields.

use crate::config::CullingConfig;
use crate::error::Result;
use crate::geometry::Transform;
use super::frustum::Frustum;
use super::lens::CameraLens;
use super::sample_grid::SampleGrid;

/// Read-only per-tick culling data: the world-space frustum and the
/// directional sampling grid derived from its far and near faces.
#[derive(Debug, Clone, PartialEq)]
pub struct CullingContext {
    frustum: Frustum,
    sample_grid: SampleGrid,
}

impl CullingContext {
    /// Build the context for the current tick.
    ///
    /// Validates the configuration, rebuilds the frustum from the camera
    /// state, and samples the grid between its far and near faces.
    pub fn build(
        lens: &CameraLens,
        camera: &Transform,
        config: &CullingConfig,
    ) -> Result<Self> {
        config.validate()?;

        let frustum = Frustum::from_camera(lens, camera);
        let sample_grid =
            SampleGrid::build(&frustum.far, &frustum.near, config.grid_resolution);

        Ok(Self {
            frustum,
            sample_grid,
        })
    }

    /// The world-space frustum for this tick.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// The directional sampling grid for this tick.
    pub fn sample_grid(&self) -> &SampleGrid {
        &self.sample_grid
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
