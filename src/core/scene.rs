//! Progress-to-pose mapping for every animated object in the scene.
//!
//! All functions are pure: they take a scroll progress value and return pose
//! values the renderer consumes by value each tick. Inputs are clamped to
//! [0, 1] before mapping, so the outputs are total over any raw input.

use super::constants::*;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Coarse animation stage derived from progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Engines firing, everything still on the pad.
    Warmup,
    /// Rocket climbing, pad falling away.
    Launch,
}

pub fn stage(progress: f32) -> Stage {
    if progress.clamp(0.0, 1.0) > ENGINE_START_THRESHOLD {
        Stage::Launch
    } else {
        Stage::Warmup
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RocketPose {
    pub y: f32,
    pub rot_x: f32,
    pub rot_z: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PadPose {
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub fovy_radians: f32,
}

/// Per-frame pose values for every animated object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenePose {
    pub rocket: RocketPose,
    pub pad: PadPose,
    pub camera: CameraRig,
}

/// Sub-progress of the launch stage, 0 while the engines are still warming
/// up. Exactly 0 at the threshold: the numerator vanishes there and the
/// denominator is a fixed nonzero constant.
pub fn launch_progress(progress: f32) -> f32 {
    if progress > ENGINE_START_THRESHOLD {
        (progress - ENGINE_START_THRESHOLD) / (1.0 - ENGINE_START_THRESHOLD)
    } else {
        0.0
    }
}

pub fn rocket_pose(progress: f32) -> RocketPose {
    let lp = launch_progress(progress);
    let y = ROCKET_START_Y + lp * (ROCKET_END_Y - ROCKET_START_Y);
    // No residual tilt may carry over from a prior frame: below the
    // threshold the rotation is forced to zero, not merely left alone.
    let (rot_x, rot_z) = if progress > ENGINE_START_THRESHOLD {
        let tilt = progress * ROCKET_TILT_BASE;
        (tilt * ROCKET_TILT_X_FACTOR, tilt * ROCKET_TILT_Z_FACTOR)
    } else {
        (0.0, 0.0)
    };
    RocketPose { y, rot_x, rot_z }
}

pub fn pad_pose(progress: f32) -> PadPose {
    let lp = launch_progress(progress);
    PadPose {
        y: PAD_BASE_Y - lp * PAD_DESCENT_RANGE,
    }
}

/// Camera position is progress-weighted with no threshold gating; it starts
/// pulling in and rising from the very first scrolled pixel.
pub fn camera_rig(progress: f32) -> CameraRig {
    CameraRig {
        eye: CAMERA_EYE_BASE + CAMERA_EYE_SHIFT * progress,
        target: Vec3::ZERO,
        fovy_radians: CAMERA_FOVY_RADIANS,
    }
}

/// Map raw progress to the full set of object poses for one frame.
pub fn map_progress(progress: f32) -> ScenePose {
    let p = progress.clamp(0.0, 1.0);
    ScenePose {
        rocket: rocket_pose(p),
        pad: pad_pose(p),
        camera: camera_rig(p),
    }
}
