//! Scene management module
//!
//! Provides the candidate-mesh scene, the per-mesh culling strategies,
//! and the per-tick pipeline that drives them.

mod mesh;
mod mesh_instance;
mod scene;
mod culler;
mod pipeline;

pub use mesh::MeshData;
pub use mesh_instance::{
    MeshInstance, MeshInstanceKey,
    FLAG_VISIBLE, FLAG_CULL_EXEMPT,
};
pub use scene::Scene;
pub use culler::{
    MeshCuller, BruteForceCuller, FrustumCuller, BackFaceCuller, TwoStageCuller,
    frustum_pass, facing_pass,
};
pub use pipeline::{CullingPipeline, TickReport};
