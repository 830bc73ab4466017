//! Procedural flame: uniform block, CPU reference of the shader math, and
//! the tapered-cone mesh the shader displaces.
//!
//! The WGSL in `shaders/flame.wgsl` implements exactly these formulas on the
//! GPU; the functions here exist so the ramp, noise, and displacement stay
//! host-testable. Everything is a deterministic function of (position, time,
//! intensity, speed, noise scale); the noise hash is a fixed function of
//! 2D lattice coordinates, not a random number generator.

use super::constants::*;
use super::geometry::{cone, MeshData};
use glam::{Vec2, Vec3};

/// Per-frame flame shader parameters, bound as a GPU uniform block.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FlameUniforms {
    pub time: f32,
    pub intensity: f32,
    pub speed: f32,
    pub noise_scale: f32,
}

impl FlameUniforms {
    /// Rebuild the block for one frame. Pure; the render layer owns the GPU
    /// binding.
    pub fn update(time: f32, intensity: f32, speed: f32, noise_scale: f32) -> Self {
        Self {
            time,
            intensity: intensity.max(0.0),
            speed,
            noise_scale,
        }
    }
}

impl Default for FlameUniforms {
    fn default() -> Self {
        Self::update(
            0.0,
            FLAME_DEFAULT_INTENSITY,
            FLAME_DEFAULT_SPEED,
            FLAME_DEFAULT_NOISE_SCALE,
        )
    }
}

fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn mix3(a: [f32; 3], b: [f32; 3], t: f32) -> Vec3 {
    Vec3::new(mix(a[0], b[0], t), mix(a[1], b[1], t), mix(a[2], b[2], t))
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fixed hash of 2D lattice coordinates. `fract` here matches the GPU
/// definition (`x - floor(x)`), which stays in [0, 1) for negative inputs.
pub fn hash_lattice(st: Vec2) -> f32 {
    let s = (st.dot(Vec2::new(12.9898, 78.233))).sin() * 43758.5453123;
    s - s.floor()
}

/// Bilinear value noise over the xy lattice of `pos` (z rides along via the
/// advection applied by the caller).
pub fn value_noise(pos: Vec3) -> f32 {
    let i = pos.floor();
    let f = pos - i;
    let a = hash_lattice(Vec2::new(i.x, i.y));
    let b = hash_lattice(Vec2::new(i.x + 1.0, i.y));
    let c = hash_lattice(Vec2::new(i.x, i.y + 1.0));
    let d = hash_lattice(Vec2::new(i.x + 1.0, i.y + 1.0));
    let ux = f.x * f.x * (3.0 - 2.0 * f.x);
    let uy = f.y * f.y * (3.0 - 2.0 * f.y);
    mix(a, b, ux) + (c - a) * uy * (1.0 - ux) + (d - b) * ux * uy
}

/// Three octaves of value noise advected upward along time.
pub fn flame_noise(position: Vec3, u: &FlameUniforms) -> f32 {
    let p = position * u.noise_scale + Vec3::new(0.0, u.time * u.speed, 0.0);
    value_noise(p) + value_noise(p * 2.0) * 0.5 + value_noise(p * 4.0) * 0.25
}

/// Height of a local-space vertex normalized to [0, 1].
pub fn normalized_height(y: f32) -> f32 {
    (y + 1.0) * 0.5
}

/// Radius multiplier at a normalized height; shrinks nonlinearly toward the
/// tip.
pub fn taper(height: f32) -> f32 {
    1.0 - height.powf(FLAME_TAPER_POWER) * FLAME_TAPER_AMOUNT
}

/// Upward curl applied to vertices near the tip.
pub fn tip_curl(height: f32) -> f32 {
    if height > FLAME_CURL_START {
        (height - FLAME_CURL_START) * FLAME_CURL_AMOUNT
    } else {
        0.0
    }
}

/// Vertex-stage displacement: lateral sway, noise along the normal, and
/// high-frequency turbulence near the tip. Zero at the base where the
/// height factor vanishes.
pub fn vertex_displacement(position: Vec3, normal: Vec3, noise: f32, u: &FlameUniforms) -> Vec3 {
    let height = normalized_height(position.y);
    let height_factor = smoothstep(0.0, 1.0, height);

    let mut displacement = Vec3::ZERO;
    displacement.x +=
        (u.time * u.speed + position.y * 3.0).sin() * height_factor * u.intensity * 0.4;
    displacement.z +=
        (u.time * u.speed * 1.3 + position.y * 2.5).cos() * height_factor * u.intensity * 0.3;
    displacement += normal * noise * height_factor * u.intensity * 0.2;

    if height > FLAME_TURBULENCE_START {
        let turbulence = (u.time * u.speed * 3.0 + position.x * 10.0).sin()
            * (u.time * u.speed * 2.5 + position.z * 8.0).cos();
        displacement += Vec3::new(turbulence * 0.1, 0.0, turbulence * 0.08)
            * (height - FLAME_TURBULENCE_START)
            * 3.0;
    }
    displacement
}

/// Height-keyed color ramp; boundary heights yield the pure band endpoint
/// colors before any modulation.
pub fn color_ramp(height: f32) -> Vec3 {
    let c = &FLAME_BAND_COLORS;
    let b = &FLAME_BAND_BOUNDS;
    if height < b[0] {
        mix3(c[0], c[1], height / b[0])
    } else if height < b[1] {
        mix3(c[1], c[2], (height - b[0]) / (b[1] - b[0]))
    } else if height < b[2] {
        mix3(c[2], c[3], (height - b[1]) / (b[2] - b[1]))
    } else if height < b[3] {
        mix3(c[3], c[4], (height - b[2]) / (b[3] - b[2]))
    } else {
        mix3(c[4], c[5], (height - b[3]) / (1.0 - b[3]))
    }
}

/// Fragment-stage color and alpha for a local-space position, its
/// normalized height, and the vertex-stage noise value.
pub fn fragment_rgba(position: Vec3, height: f32, noise: f32, u: &FlameUniforms) -> (Vec3, f32) {
    let mut rgb = color_ramp(height);

    let variation = 0.8 + noise * 0.4;
    rgb *= variation;

    let flicker = (u.time * 8.0 + position.x * 15.0 + position.z * 12.0).sin() * 0.1 + 0.9;
    rgb *= flicker;

    let temperature = 1.0 - height * 0.3;
    rgb *= temperature;

    let radial = Vec2::new(position.x, position.z).length();
    let mut alpha = 1.0 - height * 0.8;
    alpha *= smoothstep(0.0, 0.3, 1.0 - radial);
    alpha *= 0.7 + noise * 0.3;
    (rgb, alpha.clamp(0.0, 1.0))
}

/// Cone geometry reshaped into a flame: nonlinear taper toward the tip and
/// an upward curl above the curl threshold.
pub fn build_flame_mesh() -> MeshData {
    let mut mesh = cone(
        FLAME_RADIUS,
        FLAME_HEIGHT,
        FLAME_RADIAL_SEGMENTS,
        FLAME_HEIGHT_SEGMENTS,
    );
    for p in &mut mesh.positions {
        let height = normalized_height(p.y);
        let t = taper(height);
        p.x *= t;
        p.z *= t;
        p.y += tip_curl(height);
    }
    mesh.recompute_normals();
    mesh
}
