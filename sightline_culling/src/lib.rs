/*!
# Sightline Culling

Two-stage visibility culling for 3D scene geometry.

The crate decides, per simulation tick, which meshes in a scene are
visible from a camera:

- **Stage one** rebuilds the camera frustum as six world-space bounding
  quads and samples a grid of ray directions through its interior.
- **Stage two** evaluates each candidate mesh against that data: frustum
  containment (any vertex inside the view volume) and a facing test
  (any triangle whose outward normal points along at least one sampled
  ray direction).

The stages communicate through a typed per-tick value
([`camera::CullingContext`]) rather than hidden mutable state, and the
per-mesh decision strategy is pluggable via [`scene::MeshCuller`].

## Architecture

- **geometry**: `Transform` and `Quad` primitives shared by both stages
- **camera**: `CameraLens`, `Frustum`, `SampleGrid`, `CullingContext`
- **scene**: `MeshData`, `Scene`, culling strategies, `CullingPipeline`
- **debug_view**: per-tick read-only export for debug rendering

The crate renders nothing and owns no engine objects. The host engine
supplies camera parameters, transforms, and meshes each tick, and applies
the resulting visibility flags.
*/

// Internal modules
mod error;
mod config;
pub mod log;
pub mod geometry;
pub mod camera;
pub mod scene;
pub mod debug_view;

// Main sightline namespace module
pub mod sightline {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::{CullingConfig, DEFAULT_GRID_RESOLUTION};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger,
        };
        // Note: cull_* macros are NOT re-exported here - they are internal only
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Camera sub-module with frustum and sampling types
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Debug visualization export
    pub mod debug {
        pub use crate::debug_view::{DebugView, triangle_normal_arrows, vertex_bytes};
    }
}

// Re-export math library at crate root
pub use glam;
