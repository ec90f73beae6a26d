//! Culling configuration.
//!
//! The sampling-grid resolution is the only tunable of the algorithm.
//! It is configuration, not derived state: the host sets it once and the
//! pipeline validates it at construction time.

use std::ops::RangeInclusive;
use crate::cull_warn;
use crate::error::{Error, Result};

/// Default sampling-grid resolution.
pub const DEFAULT_GRID_RESOLUTION: u32 = 20;

/// Resolution range the facing test is tuned for. Values outside it are
/// accepted but logged: below, thin silhouettes slip through; above, the
/// O(R²) facing cost grows with little accuracy gain.
const TUNED_RESOLUTION_RANGE: RangeInclusive<u32> = 8..=64;

/// Configuration for the culling pipeline.
///
/// `grid_resolution` R controls the directional sampling grid: each
/// frustum plane is sampled at (R−1)² interior points, giving (R−1)²
/// ray directions for the facing test. Must be at least 2; below that
/// the grid is empty and the facing test can never report visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CullingConfig {
    /// Sampling-grid resolution R (cells per frustum-plane edge)
    pub grid_resolution: u32,
}

impl Default for CullingConfig {
    fn default() -> Self {
        Self {
            grid_resolution: DEFAULT_GRID_RESOLUTION,
        }
    }
}

impl CullingConfig {
    /// Create a configuration with the given grid resolution.
    ///
    /// The value is checked by [`validate`](Self::validate), not here,
    /// so a config can be built freely and validated where it is used.
    pub fn new(grid_resolution: u32) -> Self {
        Self { grid_resolution }
    }

    /// Check that this configuration can drive the pipeline.
    ///
    /// Resolutions below 2 produce an empty sampling grid and are
    /// rejected. Resolutions outside the tuned range are accepted with
    /// a warning.
    pub fn validate(&self) -> Result<()> {
        if self.grid_resolution < 2 {
            return Err(Error::InvalidConfig(format!(
                "grid_resolution must be >= 2, got {}",
                self.grid_resolution
            )));
        }

        if !TUNED_RESOLUTION_RANGE.contains(&self.grid_resolution) {
            cull_warn!(
                "sightline::CullingConfig",
                "grid_resolution {} is outside the tuned range {}..={}",
                self.grid_resolution,
                TUNED_RESOLUTION_RANGE.start(),
                TUNED_RESOLUTION_RANGE.end()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
