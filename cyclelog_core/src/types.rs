//! Core domain types for the cyclelog training tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Fixed vocabularies (day types, entry categories, rope equipment)
//! - Session context and its wellness ratings
//! - Entry drafts and committed entries
//! - Long-term goals

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Fixed Vocabularies
// ============================================================================

/// Label for a day in the training split
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    StrengthPush,
    StrengthPull,
    LegsPower,
    FullBodyRings,
    CoreRope,
    RecoveryMobility,
}

impl DayType {
    /// Human-readable label as shown in the session header
    pub fn label(&self) -> &'static str {
        match self {
            DayType::StrengthPush => "D1 - Strength Push",
            DayType::StrengthPull => "D2 - Strength Pull",
            DayType::LegsPower => "D3 - Legs & Power",
            DayType::FullBodyRings => "D4 - Full Body & Rings",
            DayType::CoreRope => "D5 - Core & Rope",
            DayType::RecoveryMobility => "Recovery / Mobility",
        }
    }

    /// All day types in split order
    pub fn all() -> &'static [DayType] {
        &[
            DayType::StrengthPush,
            DayType::StrengthPull,
            DayType::LegsPower,
            DayType::FullBodyRings,
            DayType::CoreRope,
            DayType::RecoveryMobility,
        ]
    }

    /// Parse a short CLI token (`push`, `pull`, `legs`, `rings`, `core`, `recovery`)
    pub fn from_token(token: &str) -> Option<DayType> {
        match token.to_lowercase().as_str() {
            "push" | "d1" => Some(DayType::StrengthPush),
            "pull" | "d2" => Some(DayType::StrengthPull),
            "legs" | "d3" => Some(DayType::LegsPower),
            "rings" | "d4" => Some(DayType::FullBodyRings),
            "core" | "d5" => Some(DayType::CoreRope),
            "recovery" | "mobility" => Some(DayType::RecoveryMobility),
            _ => None,
        }
    }
}

/// Category of a logged block of work
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Strength,
    SkillHold,
    JumpRope,
    Core,
    Mobility,
    Recovery,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Strength => "Strength",
            Category::SkillHold => "Skill Hold",
            Category::JumpRope => "Jump Rope",
            Category::Core => "Core",
            Category::Mobility => "Mobility",
            Category::Recovery => "Recovery",
        }
    }

    pub fn from_token(token: &str) -> Option<Category> {
        match token.to_lowercase().as_str() {
            "strength" => Some(Category::Strength),
            "skill" | "hold" | "skill_hold" => Some(Category::SkillHold),
            "rope" | "jump_rope" => Some(Category::JumpRope),
            "core" => Some(Category::Core),
            "mobility" => Some(Category::Mobility),
            "recovery" => Some(Category::Recovery),
            _ => None,
        }
    }

    /// Categories that count toward mobility minutes in the week summary
    pub fn is_mobility_work(&self) -> bool {
        matches!(self, Category::Mobility | Category::Recovery)
    }
}

/// Which side a unilateral exercise was performed on
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    Both,
    Left,
    Right,
}

impl Side {
    pub fn from_token(token: &str) -> Option<Side> {
        match token.to_lowercase().as_str() {
            "both" => Some(Side::Both),
            "left" | "l" => Some(Side::Left),
            "right" | "r" => Some(Side::Right),
            _ => None,
        }
    }
}

/// Weighted-rope options
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RopeWeight {
    #[default]
    HalfPound,
    OnePound,
}

impl RopeWeight {
    pub fn label(&self) -> &'static str {
        match self {
            RopeWeight::HalfPound => "1/2 lb",
            RopeWeight::OnePound => "1 lb",
        }
    }
}

/// Where a rope block sits in the session
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RopeProtocol {
    #[default]
    Primer,
    Conditioning,
    Finisher,
    Recovery,
}

impl RopeProtocol {
    pub fn label(&self) -> &'static str {
        match self {
            RopeProtocol::Primer => "Primer",
            RopeProtocol::Conditioning => "Conditioning",
            RopeProtocol::Finisher => "Finisher",
            RopeProtocol::Recovery => "Recovery",
        }
    }
}

// ============================================================================
// Session Context
// ============================================================================

/// Wellness/metadata snapshot for the day's training session
///
/// There is one live context at a time, edited in place by the caller. Fields
/// that come straight off a form (`week`, `sleep`) stay as raw strings and are
/// coerced at entry-commit time; later edits never touch already-logged entries.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionContext {
    pub date: NaiveDate,
    pub week: String,
    pub day_type: DayType,
    pub sleep: String,
    pub energy: u8,
    pub soreness: u8,
    pub stress: u8,
    pub motivation: u8,
    pub ready: bool,
    pub notes: String,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            date: Utc::now().date_naive(),
            week: "1".into(),
            day_type: DayType::StrengthPush,
            sleep: "7".into(),
            energy: 3,
            soreness: 2,
            stress: 2,
            motivation: 4,
            ready: true,
            notes: String::new(),
        }
    }
}

impl SessionContext {
    /// Training week as a 1-based index; anything unparseable falls back to 1
    pub fn week_number(&self) -> u32 {
        coerce_week(&self.week)
    }
}

// ============================================================================
// Entry Draft and Entry
// ============================================================================

/// In-progress entry form
///
/// Numeric-looking fields (`sets`, `reps`, `rpe`, `work`, `rest`, `rounds`,
/// `hold_time`, `mobility_block`) are kept as raw strings because that is what
/// the form hands us; coercion happens in the aggregators with unparseable
/// values degrading to 0 rather than failing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EntryDraft {
    pub exercise: String,
    pub category: Category,
    pub side: Side,
    pub sets: String,
    pub reps: String,
    pub weight: String,
    pub rpe: String,
    pub hold_time: String,
    pub tempo: String,
    pub rope_weight: RopeWeight,
    pub rope_protocol: RopeProtocol,
    pub work: String,
    pub rest: String,
    pub rounds: String,
    pub core_focus: String,
    pub mobility_block: String,
    pub pain_flag: bool,
    pub pain_area: String,
    pub pain_notes: String,
}

impl Default for EntryDraft {
    fn default() -> Self {
        Self {
            exercise: String::new(),
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
        }
    }
}

/// One logged unit of work, immutable once created
///
/// Carries all draft fields at commit time plus a point-in-time copy of the
/// session fields. Editing the live `SessionContext` afterwards never changes
/// an existing entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,

    // Draft fields
    pub exercise: String,
    pub category: Category,
    pub side: Side,
    pub sets: String,
    pub reps: String,
    pub weight: String,
    pub rpe: String,
    pub hold_time: String,
    pub tempo: String,
    pub rope_weight: RopeWeight,
    pub rope_protocol: RopeProtocol,
    pub work: String,
    pub rest: String,
    pub rounds: String,
    pub core_focus: String,
    pub mobility_block: String,
    pub pain_flag: bool,
    pub pain_area: String,
    pub pain_notes: String,

    // Session snapshot
    pub date: NaiveDate,
    pub week: u32,
    pub day_type: DayType,
    pub energy: u8,
    pub soreness: u8,
    pub stress: u8,
    pub motivation: u8,
    pub ready: bool,
}

// ============================================================================
// Goals
// ============================================================================

/// A long-term goal tracked across the six-week block
///
/// The goal text is fixed at seed time; baseline/mid-point/end-result are
/// free-text checkpoints filled in as the block progresses.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: u32,
    pub goal: String,
    pub baseline: String,
    pub mid_point: String,
    pub end_result: String,
    pub achieved: bool,
}

// ============================================================================
// Numeric Coercion
// ============================================================================

/// Parse a form field as a number, degrading to 0 on anything unparseable
///
/// Matches form semantics: blank and garbage both count as 0, they never fail.
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Coerce a raw week field to a 1-based week index, defaulting to 1
pub fn coerce_week(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|w| *w >= 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number_handles_garbage() {
        assert_eq!(coerce_number("30"), 30.0);
        assert_eq!(coerce_number(" 7.5 "), 7.5);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
    }

    #[test]
    fn test_coerce_week_defaults_to_one() {
        assert_eq!(coerce_week("3"), 3);
        assert_eq!(coerce_week(""), 1);
        assert_eq!(coerce_week("0"), 1);
        assert_eq!(coerce_week("banana"), 1);
    }

    #[test]
    fn test_day_type_tokens_round_trip() {
        for day in DayType::all() {
            assert!(!day.label().is_empty());
        }
        assert_eq!(DayType::from_token("push"), Some(DayType::StrengthPush));
        assert_eq!(DayType::from_token("D3"), Some(DayType::LegsPower));
        assert_eq!(DayType::from_token("leg day"), None);
    }

    #[test]
    fn test_mobility_work_categories() {
        assert!(Category::Mobility.is_mobility_work());
        assert!(Category::Recovery.is_mobility_work());
        assert!(!Category::JumpRope.is_mobility_work());
    }
}
