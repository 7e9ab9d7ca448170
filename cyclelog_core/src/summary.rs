//! Weekly rollup of the entry log for the cycle dashboard.
//!
//! One summary per distinct training week, ascending: distinct days trained,
//! total sets, average RPE, jump-rope conditioning minutes, and
//! mobility/recovery minutes. Everything is recomputed from the entries on
//! each call; the summaries own no state of their own.

use crate::{coerce_number, Category, Entry};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

/// Derived statistics for one training week
#[derive(Clone, Debug, PartialEq)]
pub struct WeekSummary {
    pub week: u32,
    pub days_completed: usize,
    pub total_sets: f64,
    /// Mean of valid (strictly positive) RPE values; `None` when no entry in
    /// the week carried a usable rating, which is distinct from an average of 0
    pub avg_rpe: Option<f64>,
    pub rope_minutes: f64,
    pub mobility_minutes: f64,
}

impl WeekSummary {
    /// Average RPE formatted for display: one decimal, `-` for no data
    pub fn avg_rpe_label(&self) -> String {
        match self.avg_rpe {
            Some(avg) => format!("{:.1}", avg),
            None => "-".into(),
        }
    }
}

#[derive(Default)]
struct WeekAccumulator {
    dates: HashSet<NaiveDate>,
    total_sets: f64,
    total_rpe: f64,
    rpe_count: u32,
    rope_minutes: f64,
    mobility_minutes: f64,
}

impl WeekAccumulator {
    fn fold(&mut self, entry: &Entry) {
        self.dates.insert(entry.date);
        self.total_sets += coerce_number(&entry.sets);

        let rpe = coerce_number(&entry.rpe);
        if rpe > 0.0 {
            self.total_rpe += rpe;
            self.rpe_count += 1;
        }

        if entry.category == Category::JumpRope {
            let work = coerce_number(&entry.work);
            let rounds = coerce_number(&entry.rounds);
            self.rope_minutes += work * rounds / 60.0;
        }

        if entry.category.is_mobility_work() {
            // A blank or zero block is missing data, not a real zero-minute
            // session; it must not enter the sum
            let minutes = coerce_number(&entry.mobility_block);
            if minutes != 0.0 {
                self.mobility_minutes += minutes;
            }
        }
    }

    fn finish(self, week: u32) -> WeekSummary {
        WeekSummary {
            week,
            days_completed: self.dates.len(),
            total_sets: self.total_sets,
            avg_rpe: (self.rpe_count > 0).then(|| self.total_rpe / f64::from(self.rpe_count)),
            rope_minutes: self.rope_minutes,
            mobility_minutes: self.mobility_minutes,
        }
    }
}

/// Summarize entries per training week, ascending by week number
///
/// Week buckets come from the snapshot stamped on each entry at commit time;
/// entries committed with an unparseable week already defaulted to week 1.
pub fn summarize_by_week(entries: &[Entry]) -> Vec<WeekSummary> {
    let mut weeks: BTreeMap<u32, WeekAccumulator> = BTreeMap::new();

    for entry in entries {
        weeks.entry(entry.week.max(1)).or_default().fold(entry);
    }

    tracing::debug!("Summarized {} entries across {} weeks", entries.len(), weeks.len());
    weeks
        .into_iter()
        .map(|(week, acc)| acc.finish(week))
        .collect()
}
