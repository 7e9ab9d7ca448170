//! Long-term goal ledger for the six-week block.
//!
//! The ledger is seeded once with a fixed goal list; individual fields are
//! edited in place and goals are never created or destroyed at runtime.

use crate::Goal;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Goal list every fresh tracker starts from
static DEFAULT_GOALS: Lazy<Vec<Goal>> = Lazy::new(|| {
    let seed = |id: u32, goal: &str| Goal {
        id,
        goal: goal.into(),
        baseline: String::new(),
        mid_point: String::new(),
        end_result: String::new(),
        achieved: false,
    };

    vec![
        seed(1, "Weighted Pull-up +50% BW x 5 reps"),
        seed(2, "Ring Dip +40% BW x 5 reps"),
        seed(3, "Front Lever 10-15s hold"),
        seed(4, "L-Sit 30s hold"),
    ]
});

/// Which goal field to replace
#[derive(Clone, Debug, PartialEq)]
pub enum GoalField {
    Baseline(String),
    MidPoint(String),
    EndResult(String),
    Achieved(bool),
}

/// Fixed ordered set of goals with per-field updates
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GoalLedger {
    goals: Vec<Goal>,
}

impl Default for GoalLedger {
    fn default() -> Self {
        Self::seeded()
    }
}

impl GoalLedger {
    /// Ledger seeded with the default goal list
    pub fn seeded() -> Self {
        Self {
            goals: DEFAULT_GOALS.clone(),
        }
    }

    /// Goals in seed order
    pub fn all(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, id: u32) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Replace exactly one field of exactly one goal; unknown id is a no-op
    ///
    /// No cross-field validation: an end result can be recorded before the
    /// goal is marked achieved, and vice versa.
    pub fn update_field(&mut self, id: u32, field: GoalField) {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            tracing::debug!("Update for unknown goal id {}, ignoring", id);
            return;
        };

        match field {
            GoalField::Baseline(value) => goal.baseline = value,
            GoalField::MidPoint(value) => goal.mid_point = value,
            GoalField::EndResult(value) => goal.end_result = value,
            GoalField::Achieved(value) => goal.achieved = value,
        }
    }
}
