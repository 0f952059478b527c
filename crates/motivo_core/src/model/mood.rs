//! Mood tracking model and streak computation.
//!
//! # Responsibility
//! - Define the `Mood` scale and per-day `MoodEntry` record.
//! - Compute the consecutive-day streak over a descending history.
//!
//! # Invariants
//! - The mood list holds at most one entry per calendar date.
//! - Streak computation assumes the history is sorted descending by date;
//!   [`crate::service::mood_service::MoodService`] maintains that order on
//!   every write and reload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed five-point mood scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Angry,
    Tired,
}

impl Mood {
    /// Human-readable label for display surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Neutral => "Neutral",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
            Self::Tired => "Tired",
        }
    }

    /// Emoji used by the mood picker row.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😀",
            Self::Neutral => "😐",
            Self::Sad => "😞",
            Self::Angry => "😡",
            Self::Tired => "😴",
        }
    }

    /// All moods in picker order.
    pub fn all() -> [Mood; 5] {
        [
            Self::Happy,
            Self::Neutral,
            Self::Sad,
            Self::Angry,
            Self::Tired,
        ]
    }
}

/// One recorded mood for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Calendar day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub mood: Mood,
}

impl MoodEntry {
    pub fn new(date: NaiveDate, mood: Mood) -> Self {
        Self { date, mood }
    }
}

/// Counts consecutive tracked days over a history sorted descending by date.
///
/// Seeds at 1 for a non-empty history and extends while the gap between
/// adjacent entries is exactly one day; the first other gap breaks the run.
/// Empty history yields 0.
pub fn current_streak(entries: &[MoodEntry]) -> u32 {
    let Some(first) = entries.first() else {
        return 0;
    };

    let mut streak = 1;
    let mut previous = first.date;
    for entry in &entries[1..] {
        if previous - entry.date != chrono::Duration::days(1) {
            break;
        }
        streak += 1;
        previous = entry.date;
    }
    streak
}
