//! Tests for the engine configuration value.

use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = EngineConfig::default();
    assert!(cfg.convergence_tolerance > 0.0);
    assert_eq!(cfg.face_walk_limit, None);
    assert_eq!(
        EngineConfig::new(cfg.convergence_tolerance, cfg.face_walk_limit),
        Ok(cfg)
    );
}

#[test]
fn new_validates_inputs() {
    assert_eq!(
        EngineConfig::new(0.0, None).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        EngineConfig::new(-1.0, None).unwrap_err(),
        ConfigError::InvalidTolerance(-1.0)
    );
    assert!(EngineConfig::new(f64::NAN, None).is_err());
    assert!(EngineConfig::new(f64::INFINITY, None).is_err());
    assert_eq!(
        EngineConfig::new(1.0e-9, Some(0)).unwrap_err(),
        ConfigError::InvalidWalkLimit(0)
    );
}

#[test]
fn walk_cap_is_optional() {
    assert_eq!(EngineConfig::new(1.0e-9, Some(1)).unwrap().face_walk_limit, Some(1));
    assert_eq!(EngineConfig::new(1.0e-9, None).unwrap().face_walk_limit, None);
}

#[test]
fn config_error_display() {
    let err = ConfigError::InvalidWalkLimit(0);
    assert_eq!(err.to_string(), "face walk limit must be >= 1: 0");
}
