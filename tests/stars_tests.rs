// Host-side tests for star-shell generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/stars.rs"]
mod stars;

use constants::*;
use stars::*;

#[test]
fn stars_fill_the_documented_shell() {
    let stars = generate_stars(500, 42);
    assert_eq!(stars.len(), 500);
    for s in &stars {
        let r = s.position.length();
        assert!(r >= STAR_RADIUS_MIN - 1e-3, "star too close: {r}");
        assert!(r <= STAR_RADIUS_MIN + STAR_RADIUS_SPAN + 1e-3, "star too far: {r}");
    }
}

#[test]
fn star_colors_are_white_to_blue_tinted() {
    for s in generate_stars(200, 7) {
        assert_eq!(s.color.x, s.color.y, "red and green channels match");
        assert!(s.color.x >= 0.5 && s.color.x <= 1.0);
        // Blue channel is the intensity scaled by 0.8..1.2
        assert!(s.color.z >= s.color.x * 0.8 - 1e-6);
        assert!(s.color.z <= s.color.x * 1.2 + 1e-6);
    }
}

#[test]
fn generation_is_deterministic_per_seed() {
    let a = generate_stars(64, 9);
    let b = generate_stars(64, 9);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.color, y.color);
    }
    let c = generate_stars(64, 10);
    assert!(a.iter().zip(&c).any(|(x, y)| x.position != y.position));
}
