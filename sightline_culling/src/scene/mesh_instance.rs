/// Scene instance types for the culling system.
///
/// A MeshInstance pairs shared mesh data with a world transform and the
/// per-object state flags the evaluator writes.

use std::sync::Arc;
use slotmap::new_key_type;
use crate::geometry::Transform;
use super::mesh::MeshData;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a MeshInstance within a Scene.
    ///
    /// Keys remain valid even after other instances are removed.
    /// A key becomes invalid only when its own instance is removed.
    pub struct MeshInstanceKey;
}

// ===== FLAGS =====

/// Instance is visible (the evaluator's output bit)
pub const FLAG_VISIBLE: u64     = 1 << 0;
/// Instance bypasses culling and always stays visible
pub const FLAG_CULL_EXEMPT: u64 = 1 << 1;
// Bits 2-63 reserved for future extensions

// ===== MESH INSTANCE =====

/// A candidate object: shared mesh data, world transform, state flags.
///
/// The mesh data is shared via Arc — one MeshData can back any number
/// of instances at different transforms. The visibility flag is written
/// by the pipeline through [`Scene::set_instance_visible`](super::Scene::set_instance_visible)
/// so flips are recorded.
pub struct MeshInstance {
    /// Shared vertex/index data
    mesh: Arc<MeshData>,
    /// World transform (position, rotation, non-uniform scale)
    transform: Transform,
    /// Bit flags (visibility, culling exemption)
    flags: u64,
}

impl MeshInstance {
    /// Create an instance. New instances start visible; the first tick
    /// decides their real state.
    pub(crate) fn new(mesh: Arc<MeshData>, transform: Transform) -> Self {
        Self {
            mesh,
            transform,
            flags: FLAG_VISIBLE,
        }
    }

    // ===== ACCESSORS =====

    /// Get the shared mesh data
    pub fn mesh(&self) -> &Arc<MeshData> {
        &self.mesh
    }

    /// Get the world transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Set the world transform
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Get the flags
    pub fn flags(&self) -> u64 {
        self.flags
    }

    /// Set the flags
    pub fn set_flags(&mut self, flags: u64) {
        self.flags = flags;
    }

    /// Set visibility flag
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.flags |= FLAG_VISIBLE;
        } else {
            self.flags &= !FLAG_VISIBLE;
        }
    }

    /// Check if visible
    pub fn is_visible(&self) -> bool {
        self.flags & FLAG_VISIBLE != 0
    }

    /// Set the culling exemption flag
    pub fn set_cull_exempt(&mut self, exempt: bool) {
        if exempt {
            self.flags |= FLAG_CULL_EXEMPT;
        } else {
            self.flags &= !FLAG_CULL_EXEMPT;
        }
    }

    /// Check if exempt from culling
    pub fn is_cull_exempt(&self) -> bool {
        self.flags & FLAG_CULL_EXEMPT != 0
    }
}

#[cfg(test)]
#[path = "mesh_instance_tests.rs"]
mod tests;
