//! Journal entry model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One free-form journal entry for a single calendar day.
///
/// The journal list holds at most one entry per date; saving again on the
/// same day replaces the text (latest write wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Calendar day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Entry body. Empty text is allowed; an empty save still counts as
    /// "journaled today".
    pub text: String,
}

impl JournalEntry {
    pub fn new(date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            date,
            text: text.into(),
        }
    }
}
