//! Per-exercise grouping over the entry log.
//!
//! Groups are derived views: they hold references into the store's entries and
//! are rebuilt from scratch on every call. Store order (most recent first) is
//! preserved inside each group, so `latest()` is always index 0.

use crate::Entry;
use std::collections::HashMap;

/// Entries for one exercise, most recent first
#[derive(Clone, Debug)]
pub struct ExerciseGroup<'a> {
    pub name: String,
    pub entries: Vec<&'a Entry>,
}

impl<'a> ExerciseGroup<'a> {
    /// Most recent performance of this exercise
    ///
    /// Relies on upstream most-recent-first ordering; grouping never re-sorts.
    pub fn latest(&self) -> &'a Entry {
        self.entries[0]
    }
}

/// Group entries by exercise name, in first-seen order
///
/// Entries with an empty exercise name are excluded. Relative order within a
/// group follows the input order.
pub fn group_by_exercise(entries: &[Entry]) -> Vec<ExerciseGroup<'_>> {
    let mut groups: Vec<ExerciseGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        if entry.exercise.is_empty() {
            continue;
        }
        match index.get(entry.exercise.as_str()) {
            Some(&i) => groups[i].entries.push(entry),
            None => {
                index.insert(entry.exercise.as_str(), groups.len());
                groups.push(ExerciseGroup {
                    name: entry.exercise.clone(),
                    entries: vec![entry],
                });
            }
        }
    }

    tracing::debug!("Grouped {} entries into {} exercises", entries.len(), groups.len());
    groups
}

/// Most recent entry for a given exercise, if any was logged
pub fn find_latest<'a>(entries: &'a [Entry], exercise: &str) -> Option<&'a Entry> {
    entries.iter().find(|e| e.exercise == exercise)
}
