//! Schedule slot model.
//!
//! A slot is one merged coverage span together with the people assigned to
//! staff it. Slots are snapshots: rebuild the schedule instead of patching
//! them.

use serde::{Deserialize, Serialize};

use super::TimeRange;

/// A merged span with its assigned staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Span covered by this slot.
    pub time_range: TimeRange,
    /// Assigned person IDs (order carries no meaning).
    pub assigned: Vec<String>,
    /// Number of people that must be present concurrently.
    pub required_count: i32,
}

impl ScheduleSlot {
    /// Creates an unstaffed slot.
    pub fn new(time_range: TimeRange, required_count: i32) -> Self {
        Self {
            time_range,
            assigned: Vec::new(),
            required_count,
        }
    }

    /// Sets the assigned people.
    pub fn with_assigned(mut self, assigned: Vec<String>) -> Self {
        self.assigned = assigned;
        self
    }

    /// Number of assigned people.
    #[inline]
    pub fn assigned_count(&self) -> i32 {
        i32::try_from(self.assigned.len()).unwrap_or(i32::MAX)
    }

    /// At least `required_count` people are assigned.
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.assigned_count() >= self.required_count
    }

    /// Some, but not enough, people are assigned.
    #[inline]
    pub fn is_understaffed(&self) -> bool {
        let n = self.assigned_count();
        n > 0 && n < self.required_count
    }

    /// Nobody is assigned.
    #[inline]
    pub fn is_uncovered(&self) -> bool {
        self.assigned.is_empty()
    }

    /// How many more people are needed.
    pub fn missing_count(&self) -> i32 {
        (self.required_count - self.assigned_count()).max(0)
    }

    /// Whether a person is assigned to this slot.
    pub fn is_assigned(&self, person_id: &str) -> bool {
        self.assigned.iter().any(|p| p == person_id)
    }
}
