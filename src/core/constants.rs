use glam::Vec3;

// Shared scene tuning constants used by the web frontend.

// Launch staging
// Engines fire from the first scrolled pixel; the rocket itself only moves
// once progress passes this threshold.
pub const ENGINE_START_THRESHOLD: f32 = 0.05;

// Rocket flight path
pub const ROCKET_START_Y: f32 = -3.0; // resting on the pad
pub const ROCKET_END_Y: f32 = 0.0; // center of the viewable area
pub const ROCKET_TILT_BASE: f32 = std::f32::consts::PI * 0.1; // tilt = progress * this
pub const ROCKET_TILT_Z_FACTOR: f32 = 0.1;
pub const ROCKET_TILT_X_FACTOR: f32 = 0.05;

// Launch pad
pub const PAD_BASE_Y: f32 = -4.0;
pub const PAD_DESCENT_RANGE: f32 = 30.0; // falls away as the rocket climbs

// Camera rig (progress-weighted, independent of launch staging)
pub const CAMERA_EYE_BASE: Vec3 = Vec3::new(10.0, 0.0, 10.0);
pub const CAMERA_EYE_SHIFT: Vec3 = Vec3::new(-3.0, 15.0, -2.0); // applied * progress
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;

// Scroll signal
pub const SCROLL_QUIESCENCE_SEC: f64 = 0.150; // active window after the last event

// Smoke particles
pub const SMOKE_MAX_SCROLL: f32 = ENGINE_START_THRESHOLD; // cycling range is [0, this]
pub const SMOKE_PARTICLE_COUNT: usize = 10;
pub const SMOKE_TARGET_XZ_RANGE: f32 = 1.0; // target x/z drawn from [-range, range]
pub const SMOKE_TARGET_Y_MIN: f32 = 0.1;
pub const SMOKE_TARGET_Y_MAX: f32 = 0.3;
pub const SMOKE_DURATION_MIN_SEC: f32 = 1.0;
pub const SMOKE_DURATION_MAX_SEC: f32 = 1.5;
pub const SMOKE_END_SCALE: f32 = 0.5; // uniform scale at cycle end
pub const SMOKE_EMITTER: Vec3 = Vec3::new(0.0, -3.6, 0.0);
// A critically damped spring with omega = factor / duration settles to ~99%
// of its target within the cycle duration.
pub const SMOKE_SPRING_SETTLE_FACTOR: f32 = 7.0;

// Flame mesh
pub const FLAME_RADIUS: f32 = 0.5;
pub const FLAME_HEIGHT: f32 = 2.0;
pub const FLAME_RADIAL_SEGMENTS: u32 = 8;
pub const FLAME_HEIGHT_SEGMENTS: u32 = 16;
pub const FLAME_TAPER_POWER: f32 = 1.5;
pub const FLAME_TAPER_AMOUNT: f32 = 0.8;
pub const FLAME_CURL_START: f32 = 0.8; // normalized height where tips curl up
pub const FLAME_CURL_AMOUNT: f32 = 0.3;
pub const FLAME_TURBULENCE_START: f32 = 0.7; // extra turbulence above this height
pub const FLAME_ANCHOR_Y: f32 = -1.0; // relative to the rocket origin
pub const FLAME_SCALE: f32 = 0.6;

// Flame shader defaults
pub const FLAME_DEFAULT_INTENSITY: f32 = 1.0;
pub const FLAME_DEFAULT_SPEED: f32 = 2.0;
pub const FLAME_DEFAULT_NOISE_SCALE: f32 = 3.0;

// Height-keyed flame color ramp; bands interpolate linearly between
// consecutive entries at the boundary heights below.
pub const FLAME_BAND_COLORS: [[f32; 3]; 6] = [
    [0.1, 0.3, 1.0],   // hot blue core
    [1.0, 1.0, 0.95],  // white hot
    [1.0, 0.9, 0.2],   // yellow
    [1.0, 0.5, 0.1],   // orange
    [1.0, 0.2, 0.05],  // red tips
    [0.8, 0.1, 0.0],   // dark red edges
];
pub const FLAME_BAND_BOUNDS: [f32; 4] = [0.15, 0.4, 0.7, 0.9];

// Star field
pub const STAR_COUNT: usize = 1000;
pub const STAR_RADIUS_MIN: f32 = 100.0;
pub const STAR_RADIUS_SPAN: f32 = 200.0;
pub const STAR_SPRITE_SCALE: f32 = 0.5;
pub const STAR_OPACITY: f32 = 0.8;
pub const STAR_ROT_Y_PER_SEC: f32 = 0.012;
pub const STAR_ROT_X_PER_SEC: f32 = 0.006;

// Placeholder mesh palette
pub const ROCKET_COLOR: [f32; 4] = [0.82, 0.84, 0.88, 1.0];
pub const PAD_COLOR: [f32; 4] = [0.35, 0.33, 0.38, 1.0];

// Background
pub const SPACE_CLEAR_COLOR: [f64; 3] = [0.059, 0.059, 0.137]; // #0f0f23
pub const SKY_TOP_COLOR: [f32; 3] = [0.35, 0.48, 0.72]; // dawn blue
pub const SKY_HORIZON_COLOR: [f32; 3] = [0.94, 0.73, 0.54]; // dawn amber
