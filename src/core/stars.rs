use super::constants::*;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

/// One star: a point on a spherical shell around the scene with a
/// white-to-blue-tinted color.
#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub position: Vec3,
    pub color: Vec3,
}

/// Distribute `count` stars in a shell of radius
/// [STAR_RADIUS_MIN, STAR_RADIUS_MIN + STAR_RADIUS_SPAN].
pub fn generate_stars(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let radius = STAR_RADIUS_MIN + rng.gen::<f32>() * STAR_RADIUS_SPAN;
            let theta = rng.gen::<f32>() * TAU;
            let phi = rng.gen::<f32>() * PI;
            let position = Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.cos(),
                radius * phi.sin() * theta.sin(),
            );
            let intensity = 0.5 + rng.gen::<f32>() * 0.5;
            let color = Vec3::new(
                intensity,
                intensity,
                intensity * (0.8 + rng.gen::<f32>() * 0.4),
            );
            Star { position, color }
        })
        .collect()
}
