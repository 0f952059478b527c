//! Core domain logic for Motivo.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod reminder;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::goal::{Goal, GoalId, GoalValidationError, MAX_GOAL_TEXT_CHARS};
pub use model::journal::JournalEntry;
pub use model::mood::{current_streak, Mood, MoodEntry};
pub use model::quote::Quote;
pub use model::settings::{InvalidReminderTime, Language, ReminderTime, Settings, ThemeColor};
pub use reminder::{sync_reminder, LoggingScheduler, ReminderScheduler};
pub use service::goals_service::{GoalsError, GoalsService, GOALS_KEY, MAX_GOALS};
pub use service::journal_service::{JournalService, JOURNAL_KEY};
pub use service::mood_service::{MoodService, MOOD_KEY};
pub use service::quote_service::{bundled_quotes, QuoteError, QuotePicker};
pub use service::settings_service::{
    SettingsService, LANGUAGE_KEY, REMINDER_ENABLED_KEY, REMINDER_TIME_KEY, THEME_KEY,
};
pub use store::{RecordStore, SqliteRecordStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
