// Host-side tests for scene constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn staging_thresholds_are_sane() {
    assert!(ENGINE_START_THRESHOLD > 0.0 && ENGINE_START_THRESHOLD < 1.0);
    // The launch-progress denominator must never vanish
    assert!((1.0 - ENGINE_START_THRESHOLD) > 0.0);
    // Smoke cycles exactly while the engines warm up
    assert_eq!(SMOKE_MAX_SCROLL, ENGINE_START_THRESHOLD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn flight_path_endpoints_are_ordered() {
    assert!(ROCKET_START_Y < ROCKET_END_Y);
    assert!(PAD_DESCENT_RANGE > 0.0);
    // Fully-launched pad position quoted throughout the scenario tests
    assert_eq!(PAD_BASE_Y - PAD_DESCENT_RANGE, -34.0);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoke_parameter_ranges_are_well_formed() {
    assert!(SMOKE_PARTICLE_COUNT > 0);
    assert!(SMOKE_TARGET_XZ_RANGE > 0.0);
    assert!(SMOKE_TARGET_Y_MIN > 0.0 && SMOKE_TARGET_Y_MIN < SMOKE_TARGET_Y_MAX);
    assert!(SMOKE_DURATION_MIN_SEC > 0.0 && SMOKE_DURATION_MIN_SEC < SMOKE_DURATION_MAX_SEC);
    assert!(SMOKE_END_SCALE > 0.0);
    assert!(SMOKE_SPRING_SETTLE_FACTOR > 0.0);
    assert!(SCROLL_QUIESCENCE_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn flame_band_bounds_are_monotonic_within_unit_height() {
    let mut prev = 0.0;
    for b in FLAME_BAND_BOUNDS {
        assert!(b > prev && b < 1.0, "band bound {b} out of order");
        prev = b;
    }
    for c in FLAME_BAND_COLORS {
        for ch in c {
            assert!((0.0..=1.0).contains(&ch));
        }
    }
    assert!(FLAME_TAPER_AMOUNT < 1.0, "taper must not pinch to zero");
    assert!(FLAME_CURL_START < 1.0);
    assert!(FLAME_TURBULENCE_START < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn star_shell_sits_far_outside_the_scene() {
    assert!(STAR_COUNT > 0);
    assert!(STAR_RADIUS_MIN > CAMERA_EYE_BASE.length());
    assert!(STAR_RADIUS_SPAN > 0.0);
    // At least the near part of the shell must sit inside the far plane
    assert!(STAR_RADIUS_MIN < CAMERA_ZFAR);
    assert!(STAR_OPACITY > 0.0 && STAR_OPACITY <= 1.0);
}
