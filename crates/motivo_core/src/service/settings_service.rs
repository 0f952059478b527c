//! Settings controller.
//!
//! # Responsibility
//! - Provide per-field get/set over the settings scalar keys.
//!
//! # Invariants
//! - Each field lives under its own storage key; there is no cross-field
//!   validation.
//! - Unknown or unreadable persisted values fall back to field defaults on
//!   load (fail-soft, logged).

use crate::model::settings::{Language, ReminderTime, Settings, ThemeColor};
use crate::store::{RecordStore, StoreResult};
use log::warn;

/// Storage key for the selected theme color.
pub const THEME_KEY: &str = "@motivo_theme_color";
/// Storage key for the selected UI language.
pub const LANGUAGE_KEY: &str = "@motivo_language";
/// Storage key for the daily reminder toggle (`0`/`1`).
pub const REMINDER_ENABLED_KEY: &str = "@motivo_reminder_enabled";
/// Storage key for the daily reminder time (`HH:MM`).
pub const REMINDER_TIME_KEY: &str = "@motivo_reminder_time";

/// Controller for the settings screen.
pub struct SettingsService<S: RecordStore> {
    store: S,
    settings: Settings,
}

impl<S: RecordStore> SettingsService<S> {
    /// Creates the controller and loads all fields (fail-soft per field).
    pub fn new(store: S) -> Self {
        let settings = load_settings(&store);
        Self { store, settings }
    }

    /// Re-reads all fields from storage, discarding in-memory state.
    pub fn reload(&mut self) {
        self.settings = load_settings(&self.store);
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn set_theme_color(&mut self, theme_color: ThemeColor) -> StoreResult<()> {
        self.settings.theme_color = theme_color;
        self.store.set_raw(THEME_KEY, theme_color.as_str())
    }

    pub fn set_language(&mut self, language: Language) -> StoreResult<()> {
        self.settings.language = language;
        self.store.set_raw(LANGUAGE_KEY, language.as_str())
    }

    pub fn set_reminder_enabled(&mut self, enabled: bool) -> StoreResult<()> {
        self.settings.reminder_enabled = enabled;
        self.store
            .set_raw(REMINDER_ENABLED_KEY, if enabled { "1" } else { "0" })
    }

    pub fn set_reminder_time(&mut self, time: ReminderTime) -> StoreResult<()> {
        self.settings.reminder_time = Some(time);
        self.store.set_raw(REMINDER_TIME_KEY, &time.to_string())
    }

    /// Clears the reminder time, returning the field to its unset default.
    pub fn clear_reminder_time(&mut self) -> StoreResult<()> {
        self.settings.reminder_time = None;
        self.store.remove(REMINDER_TIME_KEY)
    }
}

fn load_settings<S: RecordStore>(store: &S) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = read_scalar(store, THEME_KEY) {
        match ThemeColor::parse(&raw) {
            Some(theme_color) => settings.theme_color = theme_color,
            None => warn_unknown(THEME_KEY, &raw),
        }
    }
    if let Some(raw) = read_scalar(store, LANGUAGE_KEY) {
        match Language::parse(&raw) {
            Some(language) => settings.language = language,
            None => warn_unknown(LANGUAGE_KEY, &raw),
        }
    }
    if let Some(raw) = read_scalar(store, REMINDER_ENABLED_KEY) {
        match raw.as_str() {
            "1" => settings.reminder_enabled = true,
            "0" => settings.reminder_enabled = false,
            other => warn_unknown(REMINDER_ENABLED_KEY, other),
        }
    }
    if let Some(raw) = read_scalar(store, REMINDER_TIME_KEY) {
        match ReminderTime::parse(&raw) {
            Ok(time) => settings.reminder_time = Some(time),
            Err(_) => warn_unknown(REMINDER_TIME_KEY, &raw),
        }
    }

    settings
}

fn read_scalar<S: RecordStore>(store: &S, key: &str) -> Option<String> {
    match store.get_raw(key) {
        Ok(value) => value,
        Err(err) => {
            warn!("event=settings_load module=service status=error key={key} error={err}");
            None
        }
    }
}

fn warn_unknown(key: &str, value: &str) {
    warn!("event=settings_load module=service status=unknown_value key={key} value={value}");
}
