//! Persisted experience settings and their JSON (de)serialization.
//!
//! The storage backend itself lives in the web layer; this module keeps the
//! data model and error normalization pure so they stay host-testable.

use super::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_PARTICLE_COUNT: usize = 256;
const ERROR_MESSAGE_MAX_LEN: usize = 200;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceSettings {
    pub particle_count: usize,
    pub flame_intensity: f32,
    pub flame_speed: f32,
    pub flame_noise_scale: f32,
    pub seed: u64,
    pub show_hud: bool,
}

impl Default for ExperienceSettings {
    fn default() -> Self {
        Self {
            particle_count: SMOKE_PARTICLE_COUNT,
            flame_intensity: FLAME_DEFAULT_INTENSITY,
            flame_speed: FLAME_DEFAULT_SPEED,
            flame_noise_scale: FLAME_DEFAULT_NOISE_SCALE,
            seed: 42,
            show_hud: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse stored settings: {0}")]
    Parse(String),
    #[error("failed to serialize settings: {0}")]
    Serialize(String),
    #[error("storage backend unavailable: {0}")]
    Backend(String),
}

impl ExperienceSettings {
    /// Parse a stored JSON blob. Unknown fields are ignored and missing
    /// fields take their defaults; anything else surfaces a normalized
    /// message and commits nothing.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json)
            .map_err(|e| SettingsError::Parse(normalize_error_message(&e.to_string())))
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SettingsError::Serialize(normalize_error_message(&e.to_string())))
    }

    /// Clamp stored values into the ranges the animation tolerates.
    pub fn sanitized(mut self) -> Self {
        self.particle_count = self.particle_count.clamp(1, MAX_PARTICLE_COUNT);
        self.flame_intensity = self.flame_intensity.max(0.0);
        self.flame_noise_scale = self.flame_noise_scale.max(0.0);
        self
    }
}

/// Collapse an arbitrary error display into a single bounded line suitable
/// for the console and the HUD.
pub fn normalize_error_message(raw: &str) -> String {
    let mut msg = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if msg.is_empty() {
        msg = "unknown error".to_string();
    }
    if msg.len() > ERROR_MESSAGE_MAX_LEN {
        let mut cut = ERROR_MESSAGE_MAX_LEN;
        while !msg.is_char_boundary(cut) {
            cut -= 1;
        }
        msg.truncate(cut);
        msg.push('…');
    }
    msg
}
