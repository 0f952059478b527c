//! Domain model for Motivo records.
//!
//! # Responsibility
//! - Define the serde-serializable record types persisted by each screen.
//! - Host entity-local validation and derived computations (streak).
//!
//! # Invariants
//! - JSON field names match the persisted format of the original app data
//!   (`createdAt`, lowercase mood names, `YYYY-MM-DD` dates).
//! - Journal and mood lists hold at most one entry per calendar date.

pub mod goal;
pub mod journal;
pub mod mood;
pub mod quote;
pub mod settings;
