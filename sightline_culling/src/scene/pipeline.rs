/// Per-tick culling pipeline.
///
/// Stage one rebuilds the CullingContext from the current camera state;
/// stage two runs the configured strategy over every instance and
/// writes the resulting visibility flags through the scene. The two
/// stages only ever communicate through the context value — there is
/// no state carried between ticks.

use crate::camera::{CameraLens, CullingContext};
use crate::config::CullingConfig;
use crate::{cull_debug, cull_info};
use crate::error::Result;
use crate::geometry::Transform;
use super::culler::MeshCuller;
use super::scene::Scene;

/// Result of one pipeline tick.
///
/// Carries the context the tick was evaluated against so the debug
/// visualization can read it. Ephemeral: consumed and dropped with the
/// tick, never retained into later ticks.
#[derive(Debug)]
pub struct TickReport {
    /// Frustum and sampling grid the tick used
    pub context: CullingContext,
    /// Instances marked visible
    pub visible: usize,
    /// Instances marked invisible
    pub hidden: usize,
}

/// Two-stage visibility culling pipeline.
///
/// Owns the validated configuration and the per-mesh strategy. The host
/// engine calls [`tick`](Self::tick) once per simulation tick with the
/// current camera state.
pub struct CullingPipeline {
    config: CullingConfig,
    culler: Box<dyn MeshCuller>,
}

impl CullingPipeline {
    /// Create a pipeline from a configuration and a strategy.
    ///
    /// The configuration is validated here, once, before any tick runs.
    pub fn new(config: CullingConfig, culler: Box<dyn MeshCuller>) -> Result<Self> {
        config.validate()?;

        cull_info!(
            "sightline::CullingPipeline",
            "Pipeline created, grid resolution {}",
            config.grid_resolution
        );

        Ok(Self { config, culler })
    }

    /// The pipeline configuration.
    pub fn config(&self) -> &CullingConfig {
        &self.config
    }

    /// Run one tick: rebuild the per-tick context, evaluate every
    /// instance sequentially, and write the visibility flags.
    ///
    /// Instances flagged cull-exempt skip evaluation and stay visible.
    /// Re-running with unchanged camera and scene state yields identical
    /// flags — the flag write is idempotent and the change set only
    /// records actual flips.
    pub fn tick(
        &mut self,
        scene: &mut Scene,
        lens: &CameraLens,
        camera: &Transform,
    ) -> Result<TickReport> {
        let context = CullingContext::build(lens, camera, &self.config)?;

        let keys: Vec<_> = scene.keys().collect();
        let mut visible = 0usize;
        let mut hidden = 0usize;

        for key in keys {
            let decision = {
                let instance = match scene.instance(key) {
                    Some(instance) => instance,
                    None => continue,
                };

                if instance.is_cull_exempt() {
                    true
                } else {
                    self.culler
                        .is_visible(instance.mesh(), instance.transform(), &context)?
                }
            };

            scene.set_instance_visible(key, decision);
            if decision {
                visible += 1;
            } else {
                hidden += 1;
            }
        }

        cull_debug!(
            "sightline::CullingPipeline",
            "Tick: {} visible, {} hidden of {}",
            visible,
            hidden,
            visible + hidden
        );

        Ok(TickReport {
            context,
            visible,
            hidden,
        })
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
