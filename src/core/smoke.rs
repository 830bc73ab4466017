//! Exhaust smoke: a group-level phase machine over independent per-particle
//! spring cycles.
//!
//! The group cycles while progress sits in the warm-up range and winds down
//! once the rocket lifts off; each particle eases scale, position, and
//! opacity over its own randomized duration.

use super::constants::*;
use glam::Vec3;
use rand::prelude::*;

/// Group-level animation phase.
///
/// `Idle` is initial-only: once the group starts looping it only ever moves
/// between `Looping` and `Stopping`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Looping,
    Stopping,
}

/// Explicit transition function for the group phase.
pub fn next_phase(phase: AnimationPhase, in_cycling_range: bool) -> AnimationPhase {
    match (phase, in_cycling_range) {
        (AnimationPhase::Idle, true) => AnimationPhase::Looping,
        (AnimationPhase::Looping, false) => AnimationPhase::Stopping,
        (AnimationPhase::Stopping, true) => AnimationPhase::Looping,
        (p, _) => p,
    }
}

/// Critically damped spring easing toward 1.0 from rest.
#[derive(Clone, Copy, Debug, Default)]
struct Spring {
    value: f32,
    velocity: f32,
}

impl Spring {
    fn reset(&mut self) {
        self.value = 0.0;
        self.velocity = 0.0;
    }

    fn step(&mut self, dt_sec: f32, omega: f32) {
        let k = omega * omega;
        let c = 2.0 * omega;
        let accel = k * (1.0 - self.value) - c * self.velocity;
        self.velocity += accel * dt_sec;
        self.value += self.velocity * dt_sec;
    }
}

/// Interpolated per-particle render values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleVisual {
    pub position: Vec3,
    pub scale: f32,
    pub opacity: f32,
}

/// One smoke puff with its own target, duration, and spring integrator.
///
/// Particles share no state; starting or stopping one never affects another.
#[derive(Clone, Debug)]
pub struct SmokeParticle {
    target: Vec3,
    duration_sec: f32,
    elapsed_sec: f32,
    spring: Spring,
    looping: bool,
    animating: bool,
    finished: bool,
}

impl SmokeParticle {
    fn spawn(rng: &mut StdRng) -> Self {
        let mut p = Self {
            target: Vec3::ZERO,
            duration_sec: SMOKE_DURATION_MIN_SEC,
            elapsed_sec: 0.0,
            spring: Spring::default(),
            looping: false,
            animating: false,
            finished: false,
        };
        p.rerandomize(rng);
        p
    }

    /// Draw a fresh target offset and duration. Only called on phase
    /// transitions into `Looping`; restarts within a continuous loop reuse
    /// the previous draw.
    fn rerandomize(&mut self, rng: &mut StdRng) {
        self.target = Vec3::new(
            rng.gen_range(-SMOKE_TARGET_XZ_RANGE..=SMOKE_TARGET_XZ_RANGE),
            rng.gen_range(SMOKE_TARGET_Y_MIN..=SMOKE_TARGET_Y_MAX),
            rng.gen_range(-SMOKE_TARGET_XZ_RANGE..=SMOKE_TARGET_XZ_RANGE),
        );
        self.duration_sec = rng.gen_range(SMOKE_DURATION_MIN_SEC..=SMOKE_DURATION_MAX_SEC);
    }

    /// Begin a cycle from the origin pose, cancelling any in-flight one.
    fn restart(&mut self, looping: bool) {
        self.elapsed_sec = 0.0;
        self.spring.reset();
        self.looping = looping;
        self.animating = true;
        self.finished = false;
    }

    fn tick(&mut self, dt_sec: f32) {
        if !self.animating || self.finished {
            return;
        }
        self.elapsed_sec += dt_sec;
        let omega = SMOKE_SPRING_SETTLE_FACTOR / self.duration_sec;
        self.spring.step(dt_sec, omega);
        if self.elapsed_sec >= self.duration_sec {
            if self.looping {
                self.elapsed_sec = 0.0;
                self.spring.reset();
            } else {
                // One final cycle complete; hold the faded-out pose.
                self.finished = true;
            }
        }
    }

    /// Eased cycle fraction in [0, 1].
    pub fn fraction(&self) -> f32 {
        if self.finished {
            1.0
        } else if self.animating {
            self.spring.value.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn duration_sec(&self) -> f32 {
        self.duration_sec
    }

    /// Current pose: scale 0 -> 0.5, position origin -> target, opacity
    /// 1 -> 0 over the cycle.
    pub fn visual(&self) -> ParticleVisual {
        let u = self.fraction();
        ParticleVisual {
            position: self.target * u,
            scale: SMOKE_END_SCALE * u,
            opacity: 1.0 - u,
        }
    }
}

/// The particle group: a phase machine plus its member particles.
pub struct SmokeSystem {
    particles: Vec<SmokeParticle>,
    phase: AnimationPhase,
    rng: StdRng,
}

impl SmokeSystem {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count).map(|_| SmokeParticle::spawn(&mut rng)).collect();
        Self {
            particles,
            phase: AnimationPhase::Idle,
            rng,
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn particles(&self) -> &[SmokeParticle] {
        &self.particles
    }

    /// Apply the phase transition for the current progress value. Takes
    /// effect immediately: entering `Looping` restarts every particle with
    /// fresh random parameters, entering `Stopping` lets each finish one
    /// last non-looping cycle.
    pub fn update_phase(&mut self, progress: f32) {
        let in_range = (0.0..=SMOKE_MAX_SCROLL).contains(&progress);
        let next = next_phase(self.phase, in_range);
        if next == self.phase {
            return;
        }
        self.phase = next;
        match self.phase {
            AnimationPhase::Looping => {
                for p in &mut self.particles {
                    p.rerandomize(&mut self.rng);
                    p.restart(true);
                }
            }
            AnimationPhase::Stopping => {
                for p in &mut self.particles {
                    p.restart(false);
                }
            }
            AnimationPhase::Idle => {}
        }
    }

    /// Advance every particle's spring by one frame.
    pub fn tick(&mut self, dt_sec: f32) {
        if self.phase == AnimationPhase::Idle {
            return;
        }
        for p in &mut self.particles {
            p.tick(dt_sec);
        }
    }

    /// Collect per-particle render values into `out` (cleared first).
    pub fn visuals(&self, out: &mut Vec<ParticleVisual>) {
        out.clear();
        if self.phase == AnimationPhase::Idle {
            return;
        }
        out.extend(self.particles.iter().map(|p| p.visual()));
    }
}
