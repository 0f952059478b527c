//! Settings model.
//!
//! # Responsibility
//! - Define the per-field settings values and their scalar wire encodings.
//! - Validate the `HH:MM` reminder time format.
//!
//! # Invariants
//! - Every field has a default; unknown persisted values fall back to it.
//! - `ReminderTime` only holds valid 24-hour wall-clock times.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static REMINDER_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("valid time regex"));

/// Accent palette selected on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeColor {
    #[default]
    Light,
    Ocean,
    Forest,
}

impl ThemeColor {
    /// Scalar value persisted under the theme key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
        }
    }

    /// Parses a persisted scalar; `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "ocean" => Some(Self::Ocean),
            "forest" => Some(Self::Forest),
            _ => None,
        }
    }
}

/// UI language selected on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            _ => None,
        }
    }
}

/// Invalid reminder time input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidReminderTime(pub String);

impl Display for InvalidReminderTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid reminder time `{}`; expected HH:MM", self.0)
    }
}

impl Error for InvalidReminderTime {}

/// Wall-clock time of the daily reminder notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderTime {
    hour: u8,
    minute: u8,
}

impl ReminderTime {
    /// Parses a strict zero-padded 24-hour `HH:MM` string.
    pub fn parse(value: &str) -> Result<Self, InvalidReminderTime> {
        let captures = REMINDER_TIME_RE
            .captures(value)
            .ok_or_else(|| InvalidReminderTime(value.to_string()))?;
        // Capture groups are digit-only by construction.
        let hour = captures[1].parse().expect("two-digit hour");
        let minute = captures[2].parse().expect("two-digit minute");
        Ok(Self { hour, minute })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }
}

impl Display for ReminderTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Aggregated settings state, one persisted scalar per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub theme_color: ThemeColor,
    pub language: Language,
    pub reminder_enabled: bool,
    /// `None` until the user picks a time.
    pub reminder_time: Option<ReminderTime>,
}
