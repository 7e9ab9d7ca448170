#![forbid(unsafe_code)]

//! Core domain model and business logic for the cyclelog workout tracker.
//!
//! This crate provides:
//! - Domain types (session context, entry drafts, entries, goals)
//! - The ordered entry store
//! - Entry creation from a draft plus session snapshot
//! - Derived aggregates (per-exercise grouping, per-week summaries)
//! - The goal ledger
//! - Snapshot persistence, CSV export, config, logging

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod store;
pub mod factory;
pub mod history;
pub mod summary;
pub mod goals;
pub mod state;
pub mod export;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use store::EntryStore;
pub use factory::{commit_entry, Commit};
pub use history::{find_latest, group_by_exercise, ExerciseGroup};
pub use summary::{summarize_by_week, WeekSummary};
pub use goals::{GoalField, GoalLedger};
pub use state::TrackerState;
pub use export::export_entries_csv;
