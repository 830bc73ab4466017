//! localStorage-backed settings persistence. Thin wrapper over the browser
//! key-value store; all parsing and error normalization lives in
//! `core::settings`.

use crate::constants::SETTINGS_STORAGE_KEY;
use crate::core::settings::{normalize_error_message, ExperienceSettings, SettingsError};
use web_sys as web;

fn backend() -> Result<web::Storage, SettingsError> {
    web::window()
        .ok_or_else(|| SettingsError::Backend("no window".into()))?
        .local_storage()
        .map_err(|e| SettingsError::Backend(normalize_error_message(&format!("{e:?}"))))?
        .ok_or_else(|| SettingsError::Backend("localStorage disabled".into()))
}

/// Load persisted settings. A missing key is no data, not an error.
pub fn load_settings() -> Result<Option<ExperienceSettings>, SettingsError> {
    let storage = backend()?;
    let json = storage
        .get_item(SETTINGS_STORAGE_KEY)
        .map_err(|e| SettingsError::Backend(normalize_error_message(&format!("{e:?}"))))?;
    match json {
        Some(json) => Ok(Some(ExperienceSettings::from_json(&json)?.sanitized())),
        None => Ok(None),
    }
}

pub fn save_settings(settings: &ExperienceSettings) -> Result<(), SettingsError> {
    let storage = backend()?;
    let json = settings.to_json()?;
    storage
        .set_item(SETTINGS_STORAGE_KEY, &json)
        .map_err(|e| SettingsError::Backend(normalize_error_message(&format!("{e:?}"))))
}
