// Host-side tests for the CPU reference of the flame shader math and the
// tapered-cone geometry. The main crate is wasm-only, so we include the
// pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/geometry.rs"]
mod geometry;
#[path = "../src/core/flame.rs"]
mod flame;

use constants::*;
use flame::*;
use glam::{Vec2, Vec3};

#[test]
fn band_boundaries_yield_pure_endpoint_colors() {
    let expect = [
        (0.0, FLAME_BAND_COLORS[0]),
        (FLAME_BAND_BOUNDS[0], FLAME_BAND_COLORS[1]),
        (FLAME_BAND_BOUNDS[1], FLAME_BAND_COLORS[2]),
        (FLAME_BAND_BOUNDS[2], FLAME_BAND_COLORS[3]),
        (FLAME_BAND_BOUNDS[3], FLAME_BAND_COLORS[4]),
        (1.0, FLAME_BAND_COLORS[5]),
    ];
    for (height, color) in expect {
        let ramp = color_ramp(height);
        assert!(
            (ramp - Vec3::from(color)).length() < 1e-5,
            "band endpoint mismatch at height {height}: {ramp:?}"
        );
    }
}

#[test]
fn ramp_interpolates_linearly_between_bands() {
    // Midway through the yellow -> orange band
    let mid = (FLAME_BAND_BOUNDS[1] + FLAME_BAND_BOUNDS[2]) / 2.0;
    let expected = (Vec3::from(FLAME_BAND_COLORS[2]) + Vec3::from(FLAME_BAND_COLORS[3])) * 0.5;
    assert!((color_ramp(mid) - expected).length() < 1e-5);
}

#[test]
fn ramp_is_continuous_over_height() {
    let mut prev = color_ramp(0.0);
    for i in 1..=1000 {
        let h = i as f32 / 1000.0;
        let c = color_ramp(h);
        assert!((c - prev).length() < 0.02, "ramp jump at height {h}");
        prev = c;
    }
}

#[test]
fn lattice_hash_is_deterministic_and_bounded() {
    for x in -10..10 {
        for y in -10..10 {
            let st = Vec2::new(x as f32 * 0.7, y as f32 * 1.3);
            let a = hash_lattice(st);
            let b = hash_lattice(st);
            assert_eq!(a, b);
            assert!((0.0..1.0).contains(&a), "hash out of range: {a}");
        }
    }
}

#[test]
fn value_noise_stays_in_unit_range() {
    for i in 0..500 {
        let p = Vec3::new(
            (i as f32 * 0.37).sin() * 8.0,
            (i as f32 * 0.11).cos() * 8.0,
            i as f32 * 0.05,
        );
        let n = value_noise(p);
        assert!((0.0..=1.0).contains(&n), "noise out of range at {p:?}: {n}");
    }
}

#[test]
fn octave_noise_is_deterministic_and_bounded() {
    let u = FlameUniforms::update(3.2, 1.0, 2.0, 3.0);
    for i in 0..200 {
        let p = Vec3::new((i as f32).sin(), i as f32 * 0.01 - 1.0, (i as f32).cos());
        let a = flame_noise(p, &u);
        let b = flame_noise(p, &u);
        assert_eq!(a, b);
        // Three octaves with amplitudes 1 + 0.5 + 0.25
        assert!((0.0..=1.75).contains(&a));
    }
}

#[test]
fn displacement_vanishes_at_the_base() {
    let u = FlameUniforms::update(5.0, 1.5, 2.0, 3.0);
    for theta in 0..8 {
        let angle = theta as f32 * std::f32::consts::TAU / 8.0;
        let pos = Vec3::new(angle.cos() * FLAME_RADIUS, -1.0, angle.sin() * FLAME_RADIUS);
        let normal = Vec3::new(angle.cos(), 0.0, angle.sin());
        let noise = flame_noise(pos, &u);
        let d = vertex_displacement(pos, normal, noise, &u);
        assert!(d.length() < 1e-6, "base vertex displaced: {d:?}");
    }
}

#[test]
fn displacement_scales_with_intensity_below_the_turbulence_band() {
    // Height 0.5 keeps the vertex out of the tip turbulence, which is the
    // one term that does not scale with intensity
    let pos = Vec3::new(0.1, 0.0, 0.05);
    let normal = Vec3::new(0.7, 0.2, 0.7).normalize();
    let weak = FlameUniforms::update(2.0, 0.5, 2.0, 3.0);
    let strong = FlameUniforms::update(2.0, 2.0, 2.0, 3.0);
    let n = flame_noise(pos, &weak);
    let d_weak = vertex_displacement(pos, normal, n, &weak);
    let d_strong = vertex_displacement(pos, normal, n, &strong);
    assert!((d_strong - d_weak * 4.0).length() < 1e-5);
}

fn sway_only(pos: Vec3, u: &FlameUniforms) -> Vec3 {
    let height = (pos.y + 1.0) * 0.5;
    let hf = height * height * (3.0 - 2.0 * height);
    Vec3::new(
        (u.time * u.speed + pos.y * 3.0).sin() * hf * u.intensity * 0.4,
        0.0,
        (u.time * u.speed * 1.3 + pos.y * 2.5).cos() * hf * u.intensity * 0.3,
    )
}

#[test]
fn turbulence_only_affects_the_flame_tips() {
    let u = FlameUniforms::update(1.0, 1.0, 2.0, 3.0);
    // With normal and noise zeroed, displacement below the band is exactly
    // the lateral sway; inside the band the turbulence term appears
    let below = Vec3::new(0.2, FLAME_TURBULENCE_START * 2.0 - 1.0 - 0.04, 0.1);
    let above = Vec3::new(0.2, FLAME_TURBULENCE_START * 2.0 - 1.0 + 0.04, 0.1);
    let d_below = vertex_displacement(below, Vec3::ZERO, 0.0, &u);
    let d_above = vertex_displacement(above, Vec3::ZERO, 0.0, &u);
    assert!((d_below - sway_only(below, &u)).length() < 1e-6);
    assert!((d_above - sway_only(above, &u)).length() > 1e-4);
    assert!(d_above.y.abs() < 1e-6, "turbulence has no vertical term");
}

#[test]
fn uniforms_update_clamps_intensity() {
    let u = FlameUniforms::update(1.0, -2.0, 2.0, 3.0);
    assert_eq!(u.intensity, 0.0);
    let v = FlameUniforms::update(1.0, 1.25, 2.0, 3.0);
    assert_eq!(v.intensity, 1.25);
    assert_eq!(v.time, 1.0);
    assert_eq!(v.speed, 2.0);
    assert_eq!(v.noise_scale, 3.0);
}

#[test]
fn fragment_output_is_deterministic_with_bounded_alpha() {
    let u = FlameUniforms::default();
    for i in 0..100 {
        let h = i as f32 / 100.0;
        let pos = Vec3::new((i as f32 * 0.3).sin() * 0.4, h * 2.0 - 1.0, 0.1);
        let noise = flame_noise(pos, &u);
        let (rgb_a, alpha_a) = fragment_rgba(pos, h, noise, &u);
        let (rgb_b, alpha_b) = fragment_rgba(pos, h, noise, &u);
        assert_eq!(rgb_a, rgb_b);
        assert_eq!(alpha_a, alpha_b);
        assert!((0.0..=1.0).contains(&alpha_a));
    }
}

#[test]
fn fragment_alpha_falls_off_radially() {
    let u = FlameUniforms::default();
    let (_, core_alpha) = fragment_rgba(Vec3::new(0.0, 0.0, 0.0), 0.5, 0.5, &u);
    let (_, edge_alpha) = fragment_rgba(Vec3::new(0.9, 0.0, 0.0), 0.5, 0.5, &u);
    let (_, outside_alpha) = fragment_rgba(Vec3::new(1.2, 0.0, 0.0), 0.5, 0.5, &u);
    assert!(core_alpha > edge_alpha);
    assert_eq!(outside_alpha, 0.0);
}

#[test]
fn taper_narrows_nonlinearly_toward_the_tip() {
    assert!((taper(0.0) - 1.0).abs() < 1e-6);
    assert!((taper(1.0) - (1.0 - FLAME_TAPER_AMOUNT)).abs() < 1e-6);
    let mut prev = taper(0.0);
    for i in 1..=100 {
        let t = taper(i as f32 / 100.0);
        assert!(t < prev, "taper not strictly decreasing");
        prev = t;
    }
}

#[test]
fn tip_curl_applies_only_above_its_threshold() {
    assert_eq!(tip_curl(0.0), 0.0);
    assert_eq!(tip_curl(FLAME_CURL_START), 0.0);
    assert!(tip_curl(0.9) > 0.0);
    let full = tip_curl(1.0);
    assert!((full - (1.0 - FLAME_CURL_START) * FLAME_CURL_AMOUNT).abs() < 1e-6);
}

#[test]
fn flame_mesh_matches_the_cone_parameterization() {
    let mesh = build_flame_mesh();
    let expected_vertices =
        ((FLAME_RADIAL_SEGMENTS + 1) * (FLAME_HEIGHT_SEGMENTS + 1)) as usize;
    assert_eq!(mesh.vertex_count(), expected_vertices);
    assert_eq!(
        mesh.indices.len(),
        (FLAME_RADIAL_SEGMENTS * FLAME_HEIGHT_SEGMENTS * 6) as usize
    );

    let half = FLAME_HEIGHT * 0.5;
    for p in &mesh.positions {
        let radial = (p.x * p.x + p.z * p.z).sqrt();
        assert!(radial <= FLAME_RADIUS + 1e-4, "radius {radial} too wide");
        assert!(p.y >= -half - 1e-4);
        assert!(p.y <= half + tip_curl(1.0) + 1e-4);
    }
    // The tip curls upward past the nominal cone height
    let top = mesh
        .positions
        .iter()
        .map(|p| p.y)
        .fold(f32::MIN, f32::max);
    assert!(top > half, "tip did not curl above the cone: {top}");
    assert_eq!(mesh.normals.len(), mesh.vertex_count());
}
