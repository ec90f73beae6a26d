use crate::{cull_bail, cull_err};
use super::*;

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_invalid_config_display() {
    let err = Error::InvalidConfig("grid_resolution must be >= 2, got 0".to_string());
    assert_eq!(
        err.to_string(),
        "Invalid configuration: grid_resolution must be >= 2, got 0"
    );
}

#[test]
fn test_invalid_mesh_display() {
    let err = Error::InvalidMesh("index 9 out of range for 4 vertices".to_string());
    assert_eq!(
        err.to_string(),
        "Invalid mesh: index 9 out of range for 4 vertices"
    );
}

#[test]
fn test_inconsistency_display() {
    let err = Error::Inconsistency("sample arrays misaligned".to_string());
    assert_eq!(
        err.to_string(),
        "Internal inconsistency: sample arrays misaligned"
    );
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(Error::InvalidMesh("bad".to_string()));
    assert!(err.to_string().contains("bad"));
}

// ============================================================================
// cull_err! / cull_bail!
// ============================================================================

#[test]
fn test_cull_err_builds_inconsistency() {
    let err = cull_err!("sightline::ErrorTest", "value {} out of range", 7);
    match err {
        Error::Inconsistency(msg) => assert_eq!(msg, "value 7 out of range"),
        other => panic!("unexpected variant: {:?}", other),
    }
}

#[test]
fn test_cull_bail_returns_early() {
    fn failing() -> Result<u32> {
        cull_bail!("sightline::ErrorTest", "forced failure");
    }

    assert!(matches!(failing(), Err(Error::Inconsistency(_))));
}
