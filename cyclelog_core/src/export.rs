//! CSV export of the entry log.
//!
//! Flattens each entry (including its session snapshot) into one CSV row so a
//! finished block can be archived or pulled into a spreadsheet.

use crate::{Entry, Result};
use std::path::Path;

/// Flat CSV representation of one entry
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    id: String,
    created_at: String,
    date: String,
    week: u32,
    day_type: &'static str,
    exercise: String,
    category: &'static str,
    side: String,
    sets: String,
    reps: String,
    weight: String,
    rpe: String,
    hold_time: String,
    tempo: String,
    rope_weight: &'static str,
    rope_protocol: &'static str,
    work: String,
    rest: String,
    rounds: String,
    core_focus: String,
    mobility_block: String,
    pain_flag: bool,
    pain_area: String,
    pain_notes: String,
    energy: u8,
    soreness: u8,
    stress: u8,
    motivation: u8,
    ready: bool,
}

impl From<&Entry> for CsvRow {
    fn from(entry: &Entry) -> Self {
        CsvRow {
            id: entry.id.to_string(),
            created_at: entry.created_at.to_rfc3339(),
            date: entry.date.to_string(),
            week: entry.week,
            day_type: entry.day_type.label(),
            exercise: entry.exercise.clone(),
            category: entry.category.label(),
            side: format!("{:?}", entry.side),
            sets: entry.sets.clone(),
            reps: entry.reps.clone(),
            weight: entry.weight.clone(),
            rpe: entry.rpe.clone(),
            hold_time: entry.hold_time.clone(),
            tempo: entry.tempo.clone(),
            rope_weight: entry.rope_weight.label(),
            rope_protocol: entry.rope_protocol.label(),
            work: entry.work.clone(),
            rest: entry.rest.clone(),
            rounds: entry.rounds.clone(),
            core_focus: entry.core_focus.clone(),
            mobility_block: entry.mobility_block.clone(),
            pain_flag: entry.pain_flag,
            pain_area: entry.pain_area.clone(),
            pain_notes: entry.pain_notes.clone(),
            energy: entry.energy,
            soreness: entry.soreness,
            stress: entry.stress,
            motivation: entry.motivation,
            ready: entry.ready,
        }
    }
}

const HEADERS: &[&str] = &[
    "id",
    "created_at",
    "date",
    "week",
    "day_type",
    "exercise",
    "category",
    "side",
    "sets",
    "reps",
    "weight",
    "rpe",
    "hold_time",
    "tempo",
    "rope_weight",
    "rope_protocol",
    "work",
    "rest",
    "rounds",
    "core_focus",
    "mobility_block",
    "pain_flag",
    "pain_area",
    "pain_notes",
    "energy",
    "soreness",
    "stress",
    "motivation",
    "ready",
];

/// Write all entries to a CSV file, newest first, and return the row count
///
/// The file is created (or truncated) with headers and fsynced before return.
pub fn export_entries_csv(entries: &[Entry], csv_path: &Path) -> Result<usize> {
    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::File::create(csv_path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    // Written explicitly so an empty log still produces a valid header row
    writer.write_record(HEADERS)?;
    for entry in entries {
        writer.serialize(CsvRow::from(entry))?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Exported {} entries to {:?}", entries.len(), csv_path);
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::entry_named;

    #[test]
    fn test_export_writes_headers_and_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("entries.csv");

        let mut rope = entry_named("Rope Conditioning");
        rope.category = crate::Category::JumpRope;
        let entries = vec![rope, entry_named("Weighted Pull-up")];

        let count = export_entries_csv(&entries, &csv_path).unwrap();
        assert_eq!(count, 2);

        let contents = std::fs::read_to_string(&csv_path).unwrap();
        let mut lines = contents.lines();
        assert!(lines.next().unwrap().starts_with("id,created_at,date,week"));
        assert_eq!(lines.count(), 2);
        assert!(contents.contains("Weighted Pull-up"));
        assert!(contents.contains("Jump Rope"));
    }

    #[test]
    fn test_export_empty_log_writes_headers_only() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("entries.csv");

        let count = export_entries_csv(&[], &csv_path).unwrap();
        assert_eq!(count, 0);

        let contents = std::fs::read_to_string(&csv_path).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }
}
