use std::sync::Arc;
use glam::Vec3;
use crate::geometry::Transform;
use super::*;
use super::super::mesh::MeshData;

fn quad_mesh() -> Arc<MeshData> {
    Arc::new(MeshData::quad(1.0, 1.0))
}

// ============================================================================
// Instance management
// ============================================================================

#[test]
fn test_add_and_get_instance() {
    let mut scene = Scene::new();
    let key = scene.add_instance(quad_mesh(), Transform::from_position(Vec3::Z));

    assert_eq!(scene.len(), 1);
    let instance = scene.instance(key).unwrap();
    assert_eq!(instance.transform().position, Vec3::Z);
    assert!(instance.is_visible());
}

#[test]
fn test_remove_instance() {
    let mut scene = Scene::new();
    let key = scene.add_instance(quad_mesh(), Transform::IDENTITY);

    assert!(scene.remove_instance(key));
    assert!(scene.instance(key).is_none());
    assert!(scene.is_empty());

    // Second removal of the same key fails
    assert!(!scene.remove_instance(key));
}

#[test]
fn test_keys_stable_after_removal() {
    let mut scene = Scene::new();
    let first = scene.add_instance(quad_mesh(), Transform::from_position(Vec3::X));
    let second = scene.add_instance(quad_mesh(), Transform::from_position(Vec3::Y));
    let third = scene.add_instance(quad_mesh(), Transform::from_position(Vec3::Z));

    scene.remove_instance(second);

    assert_eq!(scene.instance(first).unwrap().transform().position, Vec3::X);
    assert_eq!(scene.instance(third).unwrap().transform().position, Vec3::Z);
    assert_eq!(scene.len(), 2);
}

#[test]
fn test_set_instance_transform() {
    let mut scene = Scene::new();
    let key = scene.add_instance(quad_mesh(), Transform::IDENTITY);

    assert!(scene.set_instance_transform(key, Transform::from_position(Vec3::Y)));
    assert_eq!(scene.instance(key).unwrap().transform().position, Vec3::Y);

    scene.remove_instance(key);
    assert!(!scene.set_instance_transform(key, Transform::IDENTITY));
}

#[test]
fn test_set_instance_cull_exempt() {
    let mut scene = Scene::new();
    let key = scene.add_instance(quad_mesh(), Transform::IDENTITY);

    assert!(scene.set_instance_cull_exempt(key, true));
    assert!(scene.instance(key).unwrap().is_cull_exempt());
}

#[test]
fn test_clear() {
    let mut scene = Scene::new();
    let key = scene.add_instance(quad_mesh(), Transform::IDENTITY);
    scene.set_instance_visible(key, false);

    scene.clear();

    assert!(scene.is_empty());
    assert!(scene.take_visibility_changes().is_empty());
}

// ============================================================================
// Visibility change tracking
// ============================================================================

#[test]
fn test_visibility_flip_is_recorded_once() {
    let mut scene = Scene::new();
    let key = scene.add_instance(quad_mesh(), Transform::IDENTITY);

    // New instances start visible: writing true is not a flip
    scene.set_instance_visible(key, true);
    assert!(scene.take_visibility_changes().is_empty());

    // An actual flip is recorded
    scene.set_instance_visible(key, false);
    assert_eq!(scene.take_visibility_changes(), vec![key]);

    // Re-writing the same value is not a flip
    scene.set_instance_visible(key, false);
    assert!(scene.take_visibility_changes().is_empty());
}

#[test]
fn test_take_visibility_changes_drains() {
    let mut scene = Scene::new();
    let key = scene.add_instance(quad_mesh(), Transform::IDENTITY);

    scene.set_instance_visible(key, false);
    assert_eq!(scene.take_visibility_changes().len(), 1);
    assert!(scene.take_visibility_changes().is_empty());
}

#[test]
fn test_set_visible_unknown_key_returns_false() {
    let mut scene = Scene::new();
    let key = scene.add_instance(quad_mesh(), Transform::IDENTITY);
    scene.remove_instance(key);

    assert!(!scene.set_instance_visible(key, false));
    assert!(scene.take_visibility_changes().is_empty());
}

#[test]
fn test_remove_clears_pending_change() {
    let mut scene = Scene::new();
    let key = scene.add_instance(quad_mesh(), Transform::IDENTITY);

    scene.set_instance_visible(key, false);
    scene.remove_instance(key);

    assert!(scene.take_visibility_changes().is_empty());
}

// ============================================================================
// Iteration
// ============================================================================

#[test]
fn test_keys_and_instances_iterate_all() {
    let mut scene = Scene::new();
    scene.add_instance(quad_mesh(), Transform::IDENTITY);
    scene.add_instance(quad_mesh(), Transform::IDENTITY);

    assert_eq!(scene.keys().count(), 2);
    assert_eq!(scene.instances().count(), 2);
}
