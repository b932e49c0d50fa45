//! Availability record model.
//!
//! One record per (person, tent, week). The ranges are the windows in which
//! the person can staff the tent; they need not be sorted or disjoint.
//!
//! Records are supplied by an external availability store and consumed
//! read-only by the scheduler.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::TimeRange;

/// Lifecycle state of a person's weekly availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    /// Still being edited by the person.
    #[default]
    Draft,
    /// Submitted for scheduling.
    Submitted,
}

/// A person's availability for one tent and week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    /// Person identifier.
    pub person_id: String,
    /// Tent identifier.
    pub tent_id: String,
    /// First calendar day of the week.
    pub week_start: NaiveDate,
    /// Availability windows.
    pub ranges: Vec<TimeRange>,
    /// Editing state.
    #[serde(default)]
    pub status: AvailabilityStatus,
}

impl AvailabilityRecord {
    /// Creates an empty record.
    pub fn new(
        person_id: impl Into<String>,
        tent_id: impl Into<String>,
        week_start: NaiveDate,
    ) -> Self {
        Self {
            person_id: person_id.into(),
            tent_id: tent_id.into(),
            week_start,
            ranges: Vec::new(),
            status: AvailabilityStatus::Draft,
        }
    }

    /// Adds an availability window.
    pub fn with_range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.ranges.push(TimeRange::new(start, end));
        self
    }

    /// Adds several availability windows.
    pub fn with_ranges(mut self, ranges: impl IntoIterator<Item = TimeRange>) -> Self {
        self.ranges.extend(ranges);
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: AvailabilityStatus) -> Self {
        self.status = status;
        self
    }

    /// Appends a window.
    pub fn add_range(&mut self, range: TimeRange) {
        self.ranges.push(range);
    }

    /// Removes every window equal to `range`. Returns whether any was removed.
    pub fn remove_range(&mut self, range: &TimeRange) -> bool {
        let before = self.ranges.len();
        self.ranges.retain(|r| r != range);
        self.ranges.len() != before
    }

    /// Whether the person is available at `time` (window ends inclusive).
    pub fn is_available_at(&self, time: DateTime<Utc>) -> bool {
        self.ranges.iter().any(|r| r.contains(time))
    }

    /// Whether any window overlaps `span`.
    pub fn overlaps(&self, span: &TimeRange) -> bool {
        self.ranges.iter().any(|r| r.overlaps(span))
    }

    /// Windows starting on the given day of the week.
    ///
    /// `day_index` counts from `week_start` (0 = first day). Days are taken
    /// in the given UTC offset.
    pub fn ranges_for_day(&self, day_index: u32, offset: FixedOffset) -> Vec<&TimeRange> {
        let Some(day) = self
            .week_start
            .checked_add_signed(Duration::days(i64::from(day_index)))
        else {
            return Vec::new();
        };

        self.ranges
            .iter()
            .filter(|r| r.start.with_timezone(&offset).date_naive() == day)
            .collect()
    }

    /// Total duration of all windows (overlaps counted twice).
    pub fn total_duration(&self) -> Duration {
        self.ranges
            .iter()
            .fold(Duration::zero(), |acc, r| acc + r.duration())
    }
}
