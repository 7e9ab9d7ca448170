//! Shared builders for unit tests.

use crate::{Category, Entry, RopeProtocol, RopeWeight, Side};
use chrono::Utc;
use uuid::Uuid;

/// A week-1 strength entry with the given exercise name
pub fn entry_named(exercise: &str) -> Entry {
    Entry {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        exercise: exercise.into(),
        category: Category::Strength,
        side: Side::Both,
        sets: "3".into(),
        reps: "5".into(),
        weight: String::new(),
        rpe: "7".into(),
        hold_time: String::new(),
        tempo: String::new(),
        rope_weight: RopeWeight::HalfPound,
        rope_protocol: RopeProtocol::Primer,
        work: "30".into(),
        rest: "30".into(),
        rounds: "6".into(),
        core_focus: String::new(),
        mobility_block: String::new(),
        pain_flag: false,
        pain_area: String::new(),
        pain_notes: String::new(),
        date: Utc::now().date_naive(),
        week: 1,
        day_type: crate::DayType::StrengthPush,
        energy: 3,
        soreness: 2,
        stress: 2,
        motivation: 4,
        ready: true,
    }
}
