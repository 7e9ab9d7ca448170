//! Entry creation from a draft plus the live session context.
//!
//! Committing stamps the current session snapshot onto the new entry and
//! resets the draft's transient fields so the form is ready for the next
//! block. Count-like fields (sets, reps, RPE) and the rope block keep their
//! last values to speed up repeated superset logging.

use crate::{coerce_week, Entry, EntryDraft, SessionContext};
use chrono::Utc;
use uuid::Uuid;

/// Outcome of a commit attempt
///
/// Rejection carries no error; the store is left untouched and the caller can
/// surface (or ignore) the reason. This keeps the original best-effort
/// mutation contract while still being observable in tests.
#[derive(Clone, Debug, PartialEq)]
pub enum Commit {
    /// The draft was valid; the produced entry has not yet been stored
    Logged(Entry),
    /// Draft had an empty or whitespace-only exercise name; nothing changed
    EmptyExercise,
}

impl Commit {
    pub fn is_logged(&self) -> bool {
        matches!(self, Commit::Logged(_))
    }
}

/// Build an entry from the draft and session, resetting the draft on success
///
/// The entry id is a fresh v4 UUID rather than a wall-clock value, so two
/// commits in the same instant can never collide. `created_at` is kept as a
/// tie-break ordering signal only.
pub fn commit_entry(draft: &mut EntryDraft, session: &SessionContext) -> Commit {
    if draft.exercise.trim().is_empty() {
        tracing::debug!("Rejected entry commit with empty exercise name");
        return Commit::EmptyExercise;
    }

    let entry = Entry {
        id: Uuid::new_v4(),
        created_at: Utc::now(),

        exercise: draft.exercise.clone(),
        category: draft.category,
        side: draft.side,
        sets: draft.sets.clone(),
        reps: draft.reps.clone(),
        weight: draft.weight.clone(),
        rpe: draft.rpe.clone(),
        hold_time: draft.hold_time.clone(),
        tempo: draft.tempo.clone(),
        rope_weight: draft.rope_weight,
        rope_protocol: draft.rope_protocol,
        work: draft.work.clone(),
        rest: draft.rest.clone(),
        rounds: draft.rounds.clone(),
        core_focus: draft.core_focus.clone(),
        mobility_block: draft.mobility_block.clone(),
        pain_flag: draft.pain_flag,
        pain_area: draft.pain_area.clone(),
        pain_notes: draft.pain_notes.clone(),

        date: session.date,
        week: coerce_week(&session.week),
        day_type: session.day_type,
        energy: session.energy,
        soreness: session.soreness,
        stress: session.stress,
        motivation: session.motivation,
        ready: session.ready,
    };

    reset_transients(draft);

    Commit::Logged(entry)
}

/// Clear the per-block fields; sets/reps/rpe and the rope block stick around
fn reset_transients(draft: &mut EntryDraft) {
    draft.weight.clear();
    draft.hold_time.clear();
    draft.tempo.clear();
    draft.core_focus.clear();
    draft.mobility_block.clear();
    draft.pain_flag = false;
    draft.pain_area.clear();
    draft.pain_notes.clear();
}
