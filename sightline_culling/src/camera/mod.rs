//! Camera-side culling data.
//!
//! Provides the projection parameters (lens), the six-quad frustum, the
//! directional sampling grid, and the per-tick [`CullingContext`] handed
//! from stage one of the pipeline to the mesh evaluators.

mod lens;
mod frustum;
mod sample_grid;
mod context;

pub use lens::CameraLens;
pub use frustum::Frustum;
pub use sample_grid::SampleGrid;
pub use context::CullingContext;
