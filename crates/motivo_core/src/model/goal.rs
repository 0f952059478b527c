//! Weekly goal model.
//!
//! # Responsibility
//! - Define the `Goal` record and its text validation rules.
//!
//! # Invariants
//! - `id` is stable and never reused for another goal.
//! - Goal text is non-empty after trimming and at most
//!   [`MAX_GOAL_TEXT_CHARS`] characters.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a goal.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type GoalId = Uuid;

/// Upper bound for goal text length, matching the input cap of the goals
/// screen.
pub const MAX_GOAL_TEXT_CHARS: usize = 50;

/// Validation error for goal text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    /// Text is empty or whitespace-only.
    EmptyText,
    /// Text exceeds [`MAX_GOAL_TEXT_CHARS`] characters.
    TextTooLong { chars: usize, max: usize },
}

impl Display for GoalValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "goal text cannot be empty"),
            Self::TextTooLong { chars, max } => {
                write!(f, "goal text is {chars} characters; maximum is {max}")
            }
        }
    }
}

impl Error for GoalValidationError {}

/// One weekly goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Stable global ID used for toggle/delete targeting.
    pub id: GoalId,
    /// Goal text as entered (trimmed).
    pub text: String,
    /// Whether the goal has been checked off.
    pub completed: bool,
    /// Creation instant in epoch milliseconds, supplied by the platform clock.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Goal {
    /// Creates a new incomplete goal with a generated stable ID.
    ///
    /// Trims the text and rejects empty or over-length input.
    pub fn new(text: &str, created_at: i64) -> Result<Self, GoalValidationError> {
        let trimmed = validate_goal_text(text)?;
        Ok(Self {
            id: Uuid::new_v4(),
            text: trimmed.to_string(),
            completed: false,
            created_at,
        })
    }
}

/// Validates goal text and returns the trimmed slice on success.
pub fn validate_goal_text(text: &str) -> Result<&str, GoalValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GoalValidationError::EmptyText);
    }
    let chars = trimmed.chars().count();
    if chars > MAX_GOAL_TEXT_CHARS {
        return Err(GoalValidationError::TextTooLong {
            chars,
            max: MAX_GOAL_TEXT_CHARS,
        });
    }
    Ok(trimmed)
}
