//! Configuration Validation Tests.
//!
//! Verifies the geometry invariants (`s + b <= 64`, `E >= 1`) and the JSON
//! intake path used by embedding callers.

use cachesim_core::{CacheConfig, SimError};

// ──────────────────────────────────────────────────────────
// Invariants
// ──────────────────────────────────────────────────────────

#[test]
fn accepts_typical_geometry() {
    let config = CacheConfig::new(4, 2, 4, false).unwrap();
    assert_eq!(config.set_bits, 4);
    assert_eq!(config.ways, 2);
    assert_eq!(config.block_bits, 4);
    assert!(!config.verbose);
}

/// The boundary itself is legal: s + b may equal the address width.
#[test]
fn accepts_full_address_width() {
    assert!(CacheConfig::new(32, 1, 32, false).is_ok());
    assert!(CacheConfig::new(64, 1, 0, false).is_ok());
}

#[test]
fn rejects_geometry_past_address_width() {
    let err = CacheConfig::new(33, 1, 32, false).unwrap_err();
    assert!(matches!(
        err,
        SimError::Geometry {
            set_bits: 33,
            block_bits: 32
        }
    ));
}

/// Huge bit counts must not overflow the invariant check itself.
#[test]
fn rejects_geometry_near_u32_max() {
    let err = CacheConfig::new(u32::MAX, 1, u32::MAX, false).unwrap_err();
    assert!(matches!(err, SimError::Geometry { .. }));
}

#[test]
fn rejects_zero_associativity() {
    let err = CacheConfig::new(4, 0, 4, false).unwrap_err();
    assert!(matches!(err, SimError::ZeroAssociativity));
}

// ──────────────────────────────────────────────────────────
// JSON intake
// ──────────────────────────────────────────────────────────

#[test]
fn json_roundtrip_with_default_verbose() {
    let config = CacheConfig::from_json(r#"{"set_bits":4,"ways":2,"block_bits":4}"#).unwrap();
    assert_eq!(config, CacheConfig::new(4, 2, 4, false).unwrap());
}

#[test]
fn json_verbose_flag() {
    let config =
        CacheConfig::from_json(r#"{"set_bits":1,"ways":1,"block_bits":1,"verbose":true}"#).unwrap();
    assert!(config.verbose);
}

#[test]
fn json_document_errors_are_distinct() {
    let err = CacheConfig::from_json("not json").unwrap_err();
    assert!(matches!(err, SimError::ConfigFormat(_)));
}

/// A well-formed document still goes through invariant validation.
#[test]
fn json_document_is_validated() {
    let err = CacheConfig::from_json(r#"{"set_bits":4,"ways":0,"block_bits":4}"#).unwrap_err();
    assert!(matches!(err, SimError::ZeroAssociativity));
}
