//! Ordered entry store with most-recent-first ordering.
//!
//! The store owns the full collection of logged entries. New entries go to the
//! front, so index 0 is always the latest surviving entry. Entries are never
//! mutated in place; the only mutations are whole-entry append and removal.

use crate::Entry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-front collection of logged entries
///
/// `version` increments on every mutation so callers can memoize derived
/// aggregates keyed on it. The aggregators themselves stay pure functions of
/// `all()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EntryStore {
    entries: Vec<Entry>,
    #[serde(default)]
    version: u64,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry at the front of the collection
    pub fn append(&mut self, entry: Entry) {
        tracing::debug!("Logged entry {} ({})", entry.id, entry.exercise);
        self.entries.insert(0, entry);
        self.version += 1;
    }

    /// Remove the entry with the given id; silent no-op if absent
    pub fn remove(&mut self, id: Uuid) {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            tracing::debug!("Remove for unknown entry id {}, ignoring", id);
            return;
        }
        self.version += 1;
    }

    /// Full ordered sequence, most recent first
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries logged on a given date, store order preserved
    pub fn for_date(&self, date: NaiveDate) -> Vec<&Entry> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }

    /// Mutation counter; bumps on every append/remove
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::entry_named;

    #[test]
    fn test_append_puts_newest_first() {
        let mut store = EntryStore::new();
        let first = entry_named("Weighted Pull-up");
        let second = entry_named("Ring Dip");

        store.append(first.clone());
        store.append(second.clone());

        assert_eq!(store.all()[0].id, second.id);
        assert_eq!(store.all()[1].id, first.id);
    }

    #[test]
    fn test_front_is_latest_surviving_entry_after_removal() {
        let mut store = EntryStore::new();
        let a = entry_named("A");
        let b = entry_named("B");
        let c = entry_named("C");
        store.append(a.clone());
        store.append(b.clone());
        store.append(c.clone());

        store.remove(c.id);

        assert_eq!(store.all()[0].id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = EntryStore::new();
        store.append(entry_named("L-Sit"));
        let version = store.version();

        store.remove(Uuid::new_v4());

        assert_eq!(store.len(), 1);
        assert_eq!(store.version(), version);
    }

    #[test]
    fn test_for_date_preserves_store_order() {
        let mut store = EntryStore::new();
        let mut a = entry_named("A");
        a.date = "2026-02-03".parse().unwrap();
        let mut b = entry_named("B");
        b.date = "2026-02-04".parse().unwrap();
        let mut c = entry_named("C");
        c.date = "2026-02-03".parse().unwrap();
        store.append(a.clone());
        store.append(b);
        store.append(c.clone());

        let day: Vec<_> = store.for_date("2026-02-03".parse().unwrap());
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].id, c.id);
        assert_eq!(day[1].id, a.id);
    }

    #[test]
    fn test_version_bumps_on_mutation() {
        let mut store = EntryStore::new();
        assert_eq!(store.version(), 0);

        let entry = entry_named("Front Lever");
        store.append(entry.clone());
        assert_eq!(store.version(), 1);

        store.remove(entry.id);
        assert_eq!(store.version(), 2);
    }
}
