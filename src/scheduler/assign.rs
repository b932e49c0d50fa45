//! Slot assigner.
//!
//! # Algorithm
//!
//! For each merged span:
//! 1. Candidates = every person with a window that overlaps the span.
//! 2. If there are none, emit an empty slot (wholly uncovered).
//! 3. Otherwise ask the [`SelectionStrategy`] for up to `required_count`
//!    people and emit the slot.
//!
//! A candidate only needs to overlap the span, not cover it end to end.
//!
//! # Complexity
//! O(s * w) where s = spans and w = total windows.

use std::collections::HashSet;

use crate::models::{AvailabilityRecord, ScheduleSlot, TimeRange};
use crate::selection::SelectionStrategy;

/// People whose availability overlaps `span`, in record order, each once.
pub fn candidates_for(span: &TimeRange, records: &[AvailabilityRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| r.overlaps(span))
        .filter(|r| seen.insert(r.person_id.as_str()))
        .map(|r| r.person_id.clone())
        .collect()
}

/// Builds one slot per span.
///
/// Non-positive `required_count` yields slots with nobody assigned; the
/// builder rejects such counts before getting here.
pub fn assign_slots<S>(
    spans: &[TimeRange],
    records: &[AvailabilityRecord],
    required_count: i32,
    strategy: &mut S,
) -> Vec<ScheduleSlot>
where
    S: SelectionStrategy + ?Sized,
{
    let wanted = usize::try_from(required_count).unwrap_or(0);

    spans
        .iter()
        .map(|span| {
            let candidates = candidates_for(span, records);
            let slot = ScheduleSlot::new(*span, required_count);
            if candidates.is_empty() || wanted == 0 {
                return slot;
            }

            let limit = wanted.min(candidates.len());
            let mut assigned = strategy.select(span, candidates, wanted);
            assigned.truncate(limit);
            slot.with_assigned(assigned)
        })
        .collect()
}
