/// Transform — position, rotation, and non-uniform scale of a scene object.
///
/// Owned by the host engine and read-only to the culling core. The same
/// type describes the camera and every candidate mesh; the core only
/// ever maps local-space points into world space with it.

use glam::{Quat, Vec3};

/// Position, rotation, and non-uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position
    pub position: Vec3,
    /// Orientation (unit quaternion)
    pub rotation: Quat,
    /// Non-uniform scale, applied component-wise in local space
    pub scale: Vec3,
}

impl Transform {
    /// The identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a transform from its three components.
    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Create a translation-only transform.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Map a local-space point to world space.
    ///
    /// Applies the scale component-wise, then the rotation, then the
    /// translation. The order is significant: rotating before scaling
    /// shears the result under non-uniform scale.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * (point * self.scale) + self.position
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
