//! Home screen quote selection.
//!
//! # Responsibility
//! - Expose the bundled read-only quote pool.
//! - Pick uniform-random quotes without immediate repeats.
//!
//! # Invariants
//! - "Next quote" never returns the current quote while the pool holds more
//!   than one entry; a pool of one always returns that quote without
//!   looping.

use crate::model::quote::Quote;
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

const BUNDLED_QUOTES_JSON: &str = include_str!("../../data/quotes.json");

/// Error for the bundled quote asset.
#[derive(Debug)]
pub enum QuoteError {
    /// The embedded quotes asset failed to parse.
    MalformedAsset(serde_json::Error),
}

impl Display for QuoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedAsset(err) => write!(f, "bundled quotes asset is malformed: {err}"),
        }
    }
}

impl Error for QuoteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedAsset(err) => Some(err),
        }
    }
}

/// Parses the quote pool bundled with the binary.
pub fn bundled_quotes() -> Result<Vec<Quote>, QuoteError> {
    serde_json::from_str(BUNDLED_QUOTES_JSON).map_err(QuoteError::MalformedAsset)
}

/// Controller for the home screen quote card.
pub struct QuotePicker {
    quotes: Vec<Quote>,
    current: Option<usize>,
}

impl QuotePicker {
    /// Creates a picker over an arbitrary pool with no current quote.
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self {
            quotes,
            current: None,
        }
    }

    /// Creates a picker over the bundled pool.
    pub fn bundled() -> Result<Self, QuoteError> {
        Ok(Self::new(bundled_quotes()?))
    }

    pub fn pool(&self) -> &[Quote] {
        &self.quotes
    }

    /// Quote currently shown, if one has been picked.
    pub fn current(&self) -> Option<&Quote> {
        self.current.and_then(|index| self.quotes.get(index))
    }

    /// Picks a uniform-random quote, allowing repeats. `None` on an empty
    /// pool.
    pub fn pick<R: Rng>(&mut self, rng: &mut R) -> Option<&Quote> {
        if self.quotes.is_empty() {
            self.current = None;
            return None;
        }
        self.current = Some(rng.gen_range(0..self.quotes.len()));
        self.current()
    }

    /// Picks the next quote, re-rolling while it matches the current one.
    ///
    /// The re-roll only applies when the pool has more than one quote, so a
    /// single-quote pool returns immediately.
    pub fn next<R: Rng>(&mut self, rng: &mut R) -> Option<&Quote> {
        if self.quotes.is_empty() {
            self.current = None;
            return None;
        }

        let mut index = rng.gen_range(0..self.quotes.len());
        if self.quotes.len() > 1 {
            while Some(index) == self.current {
                index = rng.gen_range(0..self.quotes.len());
            }
        }
        self.current = Some(index);
        self.current()
    }
}
