//! Screen controller services.
//!
//! # Responsibility
//! - Bind domain policies to the record store, one controller per screen.
//! - Keep UI layers decoupled from storage keys and JSON details.
//!
//! # Invariants
//! - Each controller reloads its record list on construction (screen mount).
//! - Mutations update the in-memory list first, then persist the full list;
//!   a failed write is surfaced without rolling memory back.

pub mod goals_service;
pub mod journal_service;
pub mod mood_service;
pub mod quote_service;
pub mod settings_service;
