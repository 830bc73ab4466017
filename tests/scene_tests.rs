// Host-side tests for the progress-to-pose mapper.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/scene.rs"]
mod scene;

use constants::*;
use scene::*;

#[test]
fn rocket_holds_base_pose_through_warmup() {
    // Engines fire but nothing moves until the threshold is crossed
    for p in [0.0, 0.01, 0.03, ENGINE_START_THRESHOLD] {
        let rocket = rocket_pose(p);
        assert_eq!(rocket.y, ROCKET_START_Y, "rocket moved at p={p}");
        assert_eq!(rocket.rot_x, 0.0);
        assert_eq!(rocket.rot_z, 0.0);
        assert_eq!(pad_pose(p).y, PAD_BASE_Y, "pad moved at p={p}");
    }
}

#[test]
fn fixed_points_at_progress_extremes() {
    let start = map_progress(0.0);
    assert_eq!(start.rocket.y, ROCKET_START_Y);
    assert_eq!(start.pad.y, PAD_BASE_Y);
    assert_eq!(start.camera.eye, CAMERA_EYE_BASE);

    let end = map_progress(1.0);
    assert!((end.rocket.y - ROCKET_END_Y).abs() < 1e-5);
    assert!((end.pad.y - (PAD_BASE_Y - PAD_DESCENT_RANGE)).abs() < 1e-5);
    assert_eq!(end.camera.eye, CAMERA_EYE_BASE + CAMERA_EYE_SHIFT);
}

#[test]
fn launch_scenario_checkpoints() {
    // p = 0.03: still on the pad, no tilt
    let p003 = map_progress(0.03);
    assert_eq!(p003.rocket.y, -3.0);
    assert_eq!(p003.rocket.rot_x, 0.0);
    assert_eq!(p003.rocket.rot_z, 0.0);

    // p = 0.05: exactly at threshold, launch progress is 0 by construction
    let p005 = map_progress(0.05);
    assert_eq!(p005.rocket.y, -3.0);
    assert_eq!(p005.rocket.rot_x, 0.0);

    // p = 0.525: launch progress (0.525 - 0.05) / 0.95 = 0.5, rocket halfway up
    let p0525 = map_progress(0.525);
    assert!((p0525.rocket.y - (-1.5)).abs() < 1e-5, "got {}", p0525.rocket.y);

    // p = 1.0: fully launched
    let p1 = map_progress(1.0);
    assert!((p1.rocket.y - 0.0).abs() < 1e-5);
    assert!((p1.pad.y - (-34.0)).abs() < 1e-4);
}

#[test]
fn mapping_is_continuous_across_the_threshold() {
    let eps = 1e-4_f32;
    let below = map_progress(ENGINE_START_THRESHOLD - eps);
    let above = map_progress(ENGINE_START_THRESHOLD + eps);
    assert!((below.rocket.y - above.rocket.y).abs() < 1e-2);
    assert!((below.pad.y - above.pad.y).abs() < 1e-2);
    assert!(above.rocket.rot_z.abs() < 1e-2);
}

#[test]
fn mapping_is_monotonic_in_the_launch_direction() {
    let mut prev = map_progress(0.0);
    for i in 1..=200 {
        let p = i as f32 / 200.0;
        let pose = map_progress(p);
        assert!(pose.rocket.y >= prev.rocket.y, "rocket reversed at p={p}");
        assert!(pose.pad.y <= prev.pad.y, "pad reversed at p={p}");
        assert!(pose.camera.eye.y >= prev.camera.eye.y);
        if p > ENGINE_START_THRESHOLD + 0.01 {
            // Strict within the launch stage
            assert!(pose.rocket.y > prev.rocket.y);
            assert!(pose.pad.y < prev.pad.y);
        }
        prev = pose;
    }
}

#[test]
fn out_of_range_progress_clamps_to_the_extremes() {
    assert_eq!(map_progress(-0.5), map_progress(0.0));
    assert_eq!(map_progress(-1000.0), map_progress(0.0));
    assert_eq!(map_progress(1.5), map_progress(1.0));
    assert_eq!(map_progress(42.0), map_progress(1.0));
}

#[test]
fn camera_moves_without_threshold_gating() {
    // The camera is progress-weighted from the very first scrolled pixel,
    // unlike the staged rocket and pad
    let idle = camera_rig(0.0);
    let warming = camera_rig(0.03);
    assert_ne!(idle.eye, warming.eye);
    assert_eq!(rocket_pose(0.03).y, rocket_pose(0.0).y);

    // Linear in progress: midpoint of endpoints
    let mid = camera_rig(0.5);
    let expected = CAMERA_EYE_BASE + CAMERA_EYE_SHIFT * 0.5;
    assert!((mid.eye - expected).length() < 1e-5);
}

#[test]
fn rocket_tilt_only_past_threshold_and_proportional() {
    let tilted = rocket_pose(0.5);
    let expected = 0.5 * ROCKET_TILT_BASE;
    assert!((tilted.rot_z - expected * ROCKET_TILT_Z_FACTOR).abs() < 1e-6);
    assert!((tilted.rot_x - expected * ROCKET_TILT_X_FACTOR).abs() < 1e-6);
}

#[test]
fn stage_partition_matches_threshold() {
    assert_eq!(stage(0.0), Stage::Warmup);
    assert_eq!(stage(ENGINE_START_THRESHOLD), Stage::Warmup);
    assert_eq!(stage(ENGINE_START_THRESHOLD + 0.001), Stage::Launch);
    assert_eq!(stage(1.0), Stage::Launch);
    // Raw inputs are clamped before staging
    assert_eq!(stage(-2.0), Stage::Warmup);
    assert_eq!(stage(2.0), Stage::Launch);
}

#[test]
fn camera_matrices_are_finite() {
    let rig = camera_rig(0.7);
    let camera = Camera {
        eye: rig.eye,
        target: rig.target,
        up: glam::Vec3::Y,
        aspect: 16.0 / 9.0,
        fovy_radians: rig.fovy_radians,
        znear: CAMERA_ZNEAR,
        zfar: CAMERA_ZFAR,
    };
    let vp = camera.projection_matrix() * camera.view_matrix();
    assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
}
