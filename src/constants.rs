// Web-layer wiring constants: DOM ids and storage keys.

pub const CANVAS_ID: &str = "launch-canvas";
pub const HUD_ID: &str = "progress-hud";
pub const SETTINGS_STORAGE_KEY: &str = "ascent.settings";
