//! Coverage gap models.
//!
//! A gap is either uncovered time (nobody staffed) or an understaffed slot.
//! Gap sets are produced fresh per (tent, week) and replace any prior set
//! wholesale.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::TimeRange;

/// A stretch of the week without enough staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapInfo {
    /// Gap interval.
    pub time_range: TimeRange,
    /// Calendar day containing `time_range.start`.
    pub date: NaiveDate,
    /// People required concurrently.
    pub required_count: i32,
    /// People actually assigned.
    pub current_count: i32,
}

impl GapInfo {
    /// Creates a gap record.
    pub fn new(time_range: TimeRange, date: NaiveDate, required_count: i32, current_count: i32) -> Self {
        Self {
            time_range,
            date,
            required_count,
            current_count,
        }
    }

    /// Creates a gap with nobody assigned.
    pub fn uncovered(time_range: TimeRange, date: NaiveDate, required_count: i32) -> Self {
        Self::new(time_range, date, required_count, 0)
    }

    #[inline]
    pub fn is_uncovered(&self) -> bool {
        self.current_count == 0
    }

    #[inline]
    pub fn is_understaffed(&self) -> bool {
        self.current_count > 0 && self.current_count < self.required_count
    }

    /// People still needed; never negative.
    #[inline]
    pub fn missing_count(&self) -> i32 {
        (self.required_count - self.current_count).max(0)
    }

    /// Alert text asking people to fill this gap.
    pub fn describe(&self) -> String {
        let from = format_instant(self.time_range.start);
        let to = format_instant(self.time_range.end);
        if self.is_uncovered() {
            format!(
                "There's an uncovered gap from {from} to {to}. Can you help fill it? ({} people needed)",
                self.required_count
            )
        } else {
            let missing = self.missing_count();
            format!(
                "There's an understaffed gap from {from} to {to}. {missing} more person{} needed.",
                plural(missing as usize)
            )
        }
    }
}

fn format_instant(time: DateTime<Utc>) -> String {
    time.format("%b %-d, %Y %H:%M").to_string()
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// All gaps detected for one tent and week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapReport {
    pub tent_id: String,
    pub week_start: NaiveDate,
    /// Understaffed slots first, then uncovered time in chronological order.
    pub gaps: Vec<GapInfo>,
}

impl GapReport {
    /// Creates a report.
    pub fn new(tent_id: impl Into<String>, week_start: NaiveDate, gaps: Vec<GapInfo>) -> Self {
        Self {
            tent_id: tent_id.into(),
            week_start,
            gaps,
        }
    }

    /// Gaps with nobody assigned.
    pub fn uncovered(&self) -> Vec<&GapInfo> {
        self.gaps.iter().filter(|g| g.is_uncovered()).collect()
    }

    /// Gaps with some but not enough people.
    pub fn understaffed(&self) -> Vec<&GapInfo> {
        self.gaps.iter().filter(|g| g.is_understaffed()).collect()
    }

    /// Number of gaps.
    pub fn total(&self) -> usize {
        self.gaps.len()
    }

    /// Counts for a summary alert.
    pub fn summary(&self) -> GapSummary {
        GapSummary::from_gaps(&self.gaps)
    }
}

/// Gap counts for a single summary alert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapSummary {
    pub total: usize,
    pub uncovered: usize,
    pub understaffed: usize,
}

impl GapSummary {
    /// Counts gaps by kind.
    pub fn from_gaps(gaps: &[GapInfo]) -> Self {
        Self {
            total: gaps.len(),
            uncovered: gaps.iter().filter(|g| g.is_uncovered()).count(),
            understaffed: gaps.iter().filter(|g| g.is_understaffed()).count(),
        }
    }

    /// Whether there is nothing to report.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Summary alert text, or `None` when there are no gaps.
    pub fn message(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let body = if self.uncovered > 0 && self.understaffed > 0 {
            format!(
                "Your tent schedule has {} gap{}: {} uncovered and {} understaffed.",
                self.total,
                plural(self.total),
                self.uncovered,
                self.understaffed
            )
        } else if self.uncovered > 0 {
            format!(
                "Your tent schedule has {} uncovered time slot{}.",
                self.uncovered,
                plural(self.uncovered)
            )
        } else {
            format!(
                "Your tent schedule has {} understaffed time slot{}.",
                self.understaffed,
                plural(self.understaffed)
            )
        };

        Some(format!("{body} Please update your availability."))
    }
}
