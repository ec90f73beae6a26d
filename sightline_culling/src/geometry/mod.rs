//! Geometry primitives shared by both culling stages.
//!
//! Provides the object transform and the 4-corner bounding quad, plus
//! the plane-normal helper both the frustum and the facing test build on.

mod transform;
mod quad;

pub use transform::Transform;
pub use quad::{Quad, normal_from_points};
