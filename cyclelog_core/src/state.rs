//! Tracker snapshot persistence with file locking.
//!
//! The whole tracker (session, draft, entries, goals) is saved as one JSON
//! snapshot. Loads are forgiving: a missing, unreadable, or corrupt snapshot
//! falls back to a fresh default tracker so a bad file never blocks a session.

use crate::{EntryDraft, EntryStore, Error, GoalLedger, Result, SessionContext};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Everything the tracker holds for one user
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TrackerState {
    pub session: SessionContext,
    pub draft: EntryDraft,
    pub entries: EntryStore,
    pub goals: GoalLedger,
}

impl TrackerState {
    /// Load a tracker snapshot with shared locking
    ///
    /// Returns a default tracker if the file is missing or unusable.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No tracker snapshot found, starting fresh");
            return Ok(Self::default());
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!("Unable to open snapshot {:?}: {}. Starting fresh.", path, e);
                return Ok(Self::default());
            }
        };

        if let Err(e) = file.lock_shared() {
            tracing::warn!("Unable to lock snapshot {:?}: {}. Starting fresh.", path, e);
            return Ok(Self::default());
        }

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        if let Err(e) = reader.read_to_string(&mut contents) {
            let _ = file.unlock();
            tracing::warn!("Failed to read snapshot {:?}: {}. Starting fresh.", path, e);
            return Ok(Self::default());
        }

        file.unlock()?;

        match serde_json::from_str::<TrackerState>(&contents) {
            Ok(state) => {
                tracing::debug!("Loaded tracker with {} entries from {:?}", state.entries.len(), path);
                Ok(state)
            }
            Err(e) => {
                tracing::warn!("Failed to parse snapshot {:?}: {}. Starting fresh.", path, e);
                Ok(Self::default())
            }
        }
    }

    /// Save the tracker snapshot atomically with exclusive locking
    ///
    /// Writes to a temp file in the same directory, syncs, then renames over
    /// the old snapshot.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "snapshot path missing parent")
        })?)?;

        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved tracker snapshot to {:?}", path);
        Ok(())
    }

    /// Load, modify, and save back in one step
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut TrackerState) -> Result<()>,
    {
        let mut state = Self::load(path)?;
        f(&mut state)?;
        state.save(path)?;
        Ok(state)
    }
}
