/// CameraLens — the camera's projection parameters.
///
/// A passive value type: the host engine computes or stores these
/// however it likes and hands them to the pipeline each tick. The lens
/// performs the standard full-viewport frustum-corner extraction that
/// everything downstream builds on.

use glam::Vec3;
use crate::error::{Error, Result};

/// Perspective projection parameters.
///
/// Camera-local space puts +Z along the view direction and +Y up, so
/// the corners returned by [`corners_at`](Self::corners_at) lie on the
/// positive-Z side of the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLens {
    /// Near clip distance (world units, > 0)
    near_clip: f32,
    /// Far clip distance (world units, > near_clip)
    far_clip: f32,
    /// Vertical field of view (radians, in (0, π))
    fov_y: f32,
    /// Viewport width / height
    aspect: f32,
}

impl CameraLens {
    /// Create a lens, validating the projection parameters.
    pub fn new(near_clip: f32, far_clip: f32, fov_y: f32, aspect: f32) -> Result<Self> {
        if near_clip <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "near_clip must be positive, got {}",
                near_clip
            )));
        }
        if far_clip <= near_clip {
            return Err(Error::InvalidConfig(format!(
                "far_clip {} must exceed near_clip {}",
                far_clip, near_clip
            )));
        }
        if fov_y <= 0.0 || fov_y >= std::f32::consts::PI {
            return Err(Error::InvalidConfig(format!(
                "fov_y must be in (0, PI) radians, got {}",
                fov_y
            )));
        }
        if aspect <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "aspect must be positive, got {}",
                aspect
            )));
        }

        Ok(Self {
            near_clip,
            far_clip,
            fov_y,
            aspect,
        })
    }

    /// Near clip distance.
    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    /// Far clip distance.
    pub fn far_clip(&self) -> f32 {
        self.far_clip
    }

    /// Vertical field of view in radians.
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Viewport aspect ratio (width / height).
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// The four view-rectangle corners at a clip distance, camera-local.
    ///
    /// Covers the full viewport. Order: lower-left, upper-left,
    /// upper-right, lower-right. This order drives the winding of every
    /// frustum face, so it must not change.
    pub fn corners_at(&self, distance: f32) -> [Vec3; 4] {
        let half_h = distance * (self.fov_y * 0.5).tan();
        let half_w = half_h * self.aspect;

        [
            Vec3::new(-half_w, -half_h, distance),
            Vec3::new(-half_w, half_h, distance),
            Vec3::new(half_w, half_h, distance),
            Vec3::new(half_w, -half_h, distance),
        ]
    }
}

#[cfg(test)]
#[path = "lens_tests.rs"]
mod tests;
