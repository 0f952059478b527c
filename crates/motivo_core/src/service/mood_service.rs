//! Mood tracker controller.
//!
//! # Responsibility
//! - Provide the per-day mood upsert and history views for the tracker
//!   screen.
//! - Maintain the history order invariant the streak computation relies on.
//!
//! # Invariants
//! - At most one entry per calendar date; recording on an existing date
//!   replaces the mood in place (latest write wins).
//! - The history is always sorted descending by date: writes insert in
//!   order and reload re-sorts to heal drift left by older writers.

use crate::model::mood::{current_streak, Mood, MoodEntry};
use crate::store::{RecordStore, StoreResult};
use chrono::NaiveDate;

/// Storage key for the mood history list.
pub const MOOD_KEY: &str = "@mood_entries";

/// Controller for the mood tracker screen.
pub struct MoodService<S: RecordStore> {
    store: S,
    history: Vec<MoodEntry>,
}

impl<S: RecordStore> MoodService<S> {
    /// Creates the controller and loads the mood history (fail-soft).
    pub fn new(store: S) -> Self {
        let mut history: Vec<MoodEntry> = store.load(MOOD_KEY);
        sort_descending(&mut history);
        Self { store, history }
    }

    /// Re-reads the history from storage, discarding in-memory state.
    pub fn reload(&mut self) {
        self.history = self.store.load(MOOD_KEY);
        sort_descending(&mut self.history);
    }

    /// Full history, most recent day first.
    pub fn history(&self) -> &[MoodEntry] {
        &self.history
    }

    /// Up to `count` most recent entries, for the history list.
    pub fn recent(&self, count: usize) -> &[MoodEntry] {
        &self.history[..self.history.len().min(count)]
    }

    /// Mood recorded for one calendar day, if any.
    pub fn mood_for(&self, date: NaiveDate) -> Option<Mood> {
        self.history
            .iter()
            .find(|entry| entry.date == date)
            .map(|entry| entry.mood)
    }

    /// Records the mood for `date`, replacing any mood already stored there.
    ///
    /// New dates are inserted keeping the descending order invariant.
    pub fn record_mood(&mut self, date: NaiveDate, mood: Mood) -> StoreResult<()> {
        match self.history.iter_mut().find(|entry| entry.date == date) {
            Some(entry) => entry.mood = mood,
            None => {
                let position = self
                    .history
                    .iter()
                    .position(|entry| entry.date < date)
                    .unwrap_or(self.history.len());
                self.history.insert(position, MoodEntry::new(date, mood));
            }
        }
        self.store.save(MOOD_KEY, &self.history)
    }

    /// Consecutive-day streak ending at the most recent entry.
    pub fn streak(&self) -> u32 {
        current_streak(&self.history)
    }
}

fn sort_descending(history: &mut [MoodEntry]) {
    history.sort_by(|a, b| b.date.cmp(&a.date));
}
