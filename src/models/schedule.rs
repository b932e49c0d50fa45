//! Schedule (result) model.
//!
//! `ScheduleResult` is the engine's only output per (tent, week) run:
//! the staffed slots and the detected gaps. It can be flattened into the two
//! persisted artifacts, a [`CoverageSchedule`] and a [`GapReport`].

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{GapInfo, GapReport, GapSummary, ScheduleSlot, TimeRange};

/// Slots and gaps for one tent and week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// One slot per merged coverage span, in chronological order.
    pub slots: Vec<ScheduleSlot>,
    /// Understaffed slots first, then uncovered time in chronological order.
    pub gaps: Vec<GapInfo>,
}

/// Flattened coverage for one tent and week.
///
/// Holds the span of every generated slot, whatever its fill state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSchedule {
    pub tent_id: String,
    pub week_start: NaiveDate,
    pub ranges: Vec<TimeRange>,
}

impl ScheduleResult {
    /// Creates a result.
    pub fn new(slots: Vec<ScheduleSlot>, gaps: Vec<GapInfo>) -> Self {
        Self { slots, gaps }
    }

    /// Whether every slot is filled and no gap was found.
    pub fn is_fully_covered(&self) -> bool {
        self.gaps.is_empty()
    }

    /// Spans of all slots.
    pub fn covered_ranges(&self) -> Vec<TimeRange> {
        self.slots.iter().map(|s| s.time_range).collect()
    }

    /// Slots meeting the required count.
    pub fn filled_slots(&self) -> Vec<&ScheduleSlot> {
        self.slots.iter().filter(|s| s.is_filled()).collect()
    }

    /// Slots with some but not enough people.
    pub fn understaffed_slots(&self) -> Vec<&ScheduleSlot> {
        self.slots.iter().filter(|s| s.is_understaffed()).collect()
    }

    /// Slots a person is assigned to.
    pub fn slots_for_person(&self, person_id: &str) -> Vec<&ScheduleSlot> {
        self.slots.iter().filter(|s| s.is_assigned(person_id)).collect()
    }

    /// Total assigned time per person.
    pub fn assigned_time_by_person(&self) -> HashMap<String, Duration> {
        let mut totals: HashMap<String, Duration> = HashMap::new();
        for slot in &self.slots {
            for person in &slot.assigned {
                *totals.entry(person.clone()).or_insert_with(Duration::zero) +=
                    slot.time_range.duration();
            }
        }
        totals
    }

    /// Gap counts for a summary alert.
    pub fn gap_summary(&self) -> GapSummary {
        GapSummary::from_gaps(&self.gaps)
    }

    /// Flattened coverage artifact.
    pub fn to_coverage_schedule(
        &self,
        tent_id: impl Into<String>,
        week_start: NaiveDate,
    ) -> CoverageSchedule {
        CoverageSchedule {
            tent_id: tent_id.into(),
            week_start,
            ranges: self.covered_ranges(),
        }
    }

    /// Gap report artifact.
    pub fn to_gap_report(&self, tent_id: impl Into<String>, week_start: NaiveDate) -> GapReport {
        GapReport::new(tent_id, week_start, self.gaps.clone())
    }
}

impl CoverageSchedule {
    /// Total time across the covered ranges.
    pub fn total_duration(&self) -> Duration {
        self.ranges
            .iter()
            .fold(Duration::zero(), |acc, r| acc + r.duration())
    }
}
