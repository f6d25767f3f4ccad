// Host-side tests for constants and preset relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
}

use crate::core::config::{Backdrop, Distribution, Facing, GalleryConfig};
use crate::core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Projection
    assert!(CAMERA_FOV_Y_RAD > 0.0 && CAMERA_FOV_Y_RAD < std::f32::consts::PI);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);

    // Pointer interaction
    assert!(POINTER_THROTTLE_MS > 0);
    assert!(IDLE_POINTER_THRESHOLD > 0.0 && IDLE_POINTER_THRESHOLD < 1.0);
    assert!(ROTATION_TARGET_LIMIT > 0.0);

    // Time constants should be positive
    assert!(ROTATION_TAU_SEC > 0.0);
    assert!(CAMERA_TAU_SEC > 0.0);

    // Emphasis grows rather than shrinks
    assert!(HOVER_SCALE > 1.0);
    assert!(HOVER_BRIGHTEN >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn media_resolution_constants_hold() {
    assert!(RESOLVE_TIMEOUT_MS == 5_000);
    assert!(PLACEHOLDER_WIDTH > 0 && PLACEHOLDER_HEIGHT > 0);
    assert!(SURFACE_WIDTH >= PLACEHOLDER_WIDTH);
    assert!(SURFACE_HEIGHT >= PLACEHOLDER_HEIGHT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn outline_constants_have_logical_relationships() {
    // The outline shell hugs the item sphere from outside the anchors
    assert!(OUTLINE_SHELL_FACTOR > 0.0 && OUTLINE_SHELL_FACTOR < 1.0);
    assert!(OUTLINE_RING_COUNT > 0);
    assert!(OUTLINE_SEGMENTS >= 3);
    assert!(OUTLINE_DRIFT_YAW_RATE > 0.0);
    assert!(OUTLINE_DRIFT_PITCH_RATE > 0.0);

    // The pulse never drives the outline fully opaque or negative
    assert!(OUTLINE_OPACITY_BASE + OUTLINE_OPACITY_PULSE <= 1.0);
    assert!(OUTLINE_OPACITY_BASE - OUTLINE_OPACITY_PULSE >= 0.0);
    assert!(OUTLINE_PULSE_RATE > 0.0);
}

#[test]
fn presets_are_coherent() {
    for config in [GalleryConfig::curation(), GalleryConfig::compact()] {
        assert!(config.radius > 0.0);
        assert!(config.packing > 0.0 && config.packing <= 1.0);
        // the camera always rests outside the sphere
        assert!(config.shell_radius() < config.camera_distance);
        assert!(config.quad_size.x > 0.0 && config.quad_size.y > 0.0);
        assert!(config.quad_size.x < config.radius);
        assert!(config.rotate_sensitivity > 0.0);
        assert!(config.auto_rotate_rate >= 0.0);
        assert!(config.focus_distance > 0.0);
        assert!(config.focus_scale > 1.0);
        assert!(config.item_tau > 0.0);
    }
}

#[test]
fn presets_differ_where_it_matters() {
    let curation = GalleryConfig::curation();
    let compact = GalleryConfig::compact();
    assert_eq!(curation.distribution, Distribution::GoldenSpiral);
    assert_eq!(curation.facing, Facing::Inward);
    assert_eq!(curation.backdrop, Backdrop::LiquidCrt);
    assert_eq!(compact.backdrop, Backdrop::Plain);
    assert!(compact.radius < curation.radius);
    assert!(compact.camera_distance < curation.camera_distance);
    // the default preset is the curation page
    assert_eq!(GalleryConfig::default().camera_distance, curation.camera_distance);
}
