/// Scene — the candidate set for visibility culling.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. Visibility
/// writes go through the scene so that actual flips are recorded and
/// the host engine can apply them (activate/deactivate rendering)
/// without diffing every instance itself.

use rustc_hash::FxHashSet;
use std::sync::Arc;
use slotmap::SlotMap;
use crate::geometry::Transform;
use super::mesh::MeshData;
use super::mesh_instance::{MeshInstance, MeshInstanceKey};

/// A scene of candidate mesh instances.
///
/// Instances are managed via stable keys (MeshInstanceKey).
/// Keys remain valid even after other instances are removed.
pub struct Scene {
    /// Mesh instances stored in a slot map for O(1) insert/remove
    instances: SlotMap<MeshInstanceKey, MeshInstance>,
    /// Instances whose visibility flipped since last take_visibility_changes()
    visibility_changes: FxHashSet<MeshInstanceKey>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            instances: SlotMap::with_key(),
            visibility_changes: FxHashSet::default(),
        }
    }

    /// Add a mesh instance to the scene.
    ///
    /// The mesh data is shared: clone the Arc to place the same mesh at
    /// several transforms. Returns a stable key that remains valid until
    /// the instance is removed. New instances start visible.
    pub fn add_instance(&mut self, mesh: Arc<MeshData>, transform: Transform) -> MeshInstanceKey {
        self.instances.insert(MeshInstance::new(mesh, transform))
    }

    /// Remove an instance from the scene.
    ///
    /// Returns false if the key is invalid.
    pub fn remove_instance(&mut self, key: MeshInstanceKey) -> bool {
        self.visibility_changes.remove(&key);
        self.instances.remove(key).is_some()
    }

    /// Get an instance by key.
    pub fn instance(&self, key: MeshInstanceKey) -> Option<&MeshInstance> {
        self.instances.get(key)
    }

    /// Replace an instance's world transform.
    ///
    /// Returns false if the key is invalid.
    pub fn set_instance_transform(&mut self, key: MeshInstanceKey, transform: Transform) -> bool {
        match self.instances.get_mut(key) {
            Some(instance) => {
                instance.set_transform(transform);
                true
            }
            None => false,
        }
    }

    /// Set or clear an instance's culling exemption.
    ///
    /// Exempt instances skip evaluation and stay visible.
    /// Returns false if the key is invalid.
    pub fn set_instance_cull_exempt(&mut self, key: MeshInstanceKey, exempt: bool) -> bool {
        match self.instances.get_mut(key) {
            Some(instance) => {
                instance.set_cull_exempt(exempt);
                true
            }
            None => false,
        }
    }

    /// Write an instance's visibility flag.
    ///
    /// Idempotent: only an actual flip is recorded in the change set.
    /// Returns false if the key is invalid.
    pub fn set_instance_visible(&mut self, key: MeshInstanceKey, visible: bool) -> bool {
        match self.instances.get_mut(key) {
            Some(instance) => {
                if instance.is_visible() != visible {
                    instance.set_visible(visible);
                    self.visibility_changes.insert(key);
                }
                true
            }
            None => false,
        }
    }

    /// Drain the set of instances whose visibility flipped since the
    /// last drain.
    ///
    /// The host engine applies the new flags to exactly these instances
    /// (e.g. enabling/disabling their rendering) after each tick.
    pub fn take_visibility_changes(&mut self) -> Vec<MeshInstanceKey> {
        self.visibility_changes.drain().collect()
    }

    /// Iterate over all instance keys.
    pub fn keys(&self) -> impl Iterator<Item = MeshInstanceKey> + '_ {
        self.instances.keys()
    }

    /// Iterate over all instances with their keys.
    pub fn instances(&self) -> impl Iterator<Item = (MeshInstanceKey, &MeshInstance)> {
        self.instances.iter()
    }

    /// Number of instances in the scene.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// True when the scene holds no instances.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Remove all instances.
    pub fn clear(&mut self) {
        self.instances.clear();
        self.visibility_changes.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
