//! Weekly goals controller.
//!
//! # Responsibility
//! - Enforce the weekly goal cap and text validation before any write.
//! - Provide add/toggle/delete plus completion progress for the goals screen.
//!
//! # Invariants
//! - The persisted list never exceeds [`MAX_GOALS`] entries.
//! - Goal ids are unique within the list.
//! - New goals are appended; display order is insertion order.

use crate::model::goal::{Goal, GoalId, GoalValidationError};
use crate::store::{RecordStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key for the weekly goals list.
pub const GOALS_KEY: &str = "@weekly_goals";

/// Maximum number of concurrent weekly goals.
pub const MAX_GOALS: usize = 3;

/// Goal screen error taxonomy.
#[derive(Debug)]
pub enum GoalsError {
    /// The list already holds [`MAX_GOALS`] goals.
    LimitReached { max: usize },
    /// Goal text failed validation; nothing was written.
    Validation(GoalValidationError),
    /// Target goal does not exist.
    NotFound(GoalId),
    /// Persistence failure; the in-memory list keeps the mutation.
    Store(StoreError),
}

impl Display for GoalsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LimitReached { max } => {
                write!(f, "you can only set up to {max} goals")
            }
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "goal not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GoalsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::LimitReached { .. } | Self::NotFound(_) => None,
        }
    }
}

impl From<GoalValidationError> for GoalsError {
    fn from(value: GoalValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for GoalsError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Controller for the weekly goals screen.
pub struct GoalsService<S: RecordStore> {
    store: S,
    goals: Vec<Goal>,
}

impl<S: RecordStore> GoalsService<S> {
    /// Creates the controller and loads the current goal list (fail-soft).
    pub fn new(store: S) -> Self {
        let goals = store.load(GOALS_KEY);
        Self { store, goals }
    }

    /// Re-reads the goal list from storage, discarding in-memory state.
    pub fn reload(&mut self) {
        self.goals = self.store.load(GOALS_KEY);
    }

    /// Current goals in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Adds a new goal and returns its id.
    ///
    /// `created_at_ms` comes from the platform clock.
    ///
    /// # Errors
    /// - `Validation` for empty or over-length text, checked before the cap.
    /// - `LimitReached` when [`MAX_GOALS`] goals already exist.
    pub fn add_goal(&mut self, text: &str, created_at_ms: i64) -> Result<GoalId, GoalsError> {
        let goal = Goal::new(text, created_at_ms)?;
        if self.goals.len() >= MAX_GOALS {
            return Err(GoalsError::LimitReached { max: MAX_GOALS });
        }

        let id = goal.id;
        self.goals.push(goal);
        self.persist()?;
        Ok(id)
    }

    /// Flips the completion flag of one goal; returns the new state.
    pub fn toggle_goal(&mut self, id: GoalId) -> Result<bool, GoalsError> {
        let goal = self
            .goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or(GoalsError::NotFound(id))?;
        goal.completed = !goal.completed;
        let completed = goal.completed;
        self.persist()?;
        Ok(completed)
    }

    /// Removes one goal by id.
    pub fn delete_goal(&mut self, id: GoalId) -> Result<(), GoalsError> {
        let before = self.goals.len();
        self.goals.retain(|goal| goal.id != id);
        if self.goals.len() == before {
            return Err(GoalsError::NotFound(id));
        }
        self.persist()?;
        Ok(())
    }

    /// Number of completed goals, for the progress bar.
    pub fn completed_count(&self) -> usize {
        self.goals.iter().filter(|goal| goal.completed).count()
    }

    fn persist(&self) -> Result<(), GoalsError> {
        self.store.save(GOALS_KEY, &self.goals)?;
        Ok(())
    }
}
