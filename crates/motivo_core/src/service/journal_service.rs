//! Journal controller.
//!
//! # Responsibility
//! - Provide the per-day read/upsert used by the journal screen.
//!
//! # Invariants
//! - At most one entry per calendar date; saving on an existing date
//!   replaces the text in place (latest write wins).
//! - New dates are appended; existing entries keep their position.

use crate::model::journal::JournalEntry;
use crate::store::{RecordStore, StoreResult};
use chrono::NaiveDate;

/// Storage key for the journal entry list.
pub const JOURNAL_KEY: &str = "@journal_entries";

/// Controller for the journal screen.
pub struct JournalService<S: RecordStore> {
    store: S,
    entries: Vec<JournalEntry>,
}

impl<S: RecordStore> JournalService<S> {
    /// Creates the controller and loads the entry list (fail-soft).
    pub fn new(store: S) -> Self {
        let entries = store.load(JOURNAL_KEY);
        Self { store, entries }
    }

    /// Re-reads the entry list from storage, discarding in-memory state.
    pub fn reload(&mut self) {
        self.entries = self.store.load(JOURNAL_KEY);
    }

    /// All entries in stored order.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Entry for one calendar day, if the user journaled that day.
    pub fn entry_for(&self, date: NaiveDate) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.date == date)
    }

    /// Saves the entry for `date`, replacing any text already stored there.
    ///
    /// Empty text is stored as-is; the screen treats it as a cleared page.
    pub fn save_entry(&mut self, date: NaiveDate, text: impl Into<String>) -> StoreResult<()> {
        let text = text.into();
        match self.entries.iter_mut().find(|entry| entry.date == date) {
            Some(entry) => entry.text = text,
            None => self.entries.push(JournalEntry::new(date, text)),
        }
        self.store.save(JOURNAL_KEY, &self.entries)
    }
}
