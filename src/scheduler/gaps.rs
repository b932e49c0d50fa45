//! Gap detector.
//!
//! # Algorithm
//!
//! 1. Partition slots into filled and understaffed.
//! 2. Emit one gap per understaffed slot, in slot order.
//! 3. Sort filled slots by start.
//! 4. Sweep a cursor from the week start; before each filled span that
//!    starts after the cursor, emit an uncovered gap up to that start.
//!    Advance the cursor to the furthest end seen.
//! 5. Emit a trailing uncovered gap up to the week end if time remains.
//!
//! Understaffed gaps therefore come first and are never merged with the
//! uncovered time around them. Slots with nobody assigned produce no gap of
//! their own; their time is reported by the sweep.
//!
//! The sweep only walks forward from the week start. A filled span that
//! begins after the week end still produces a gap reaching its start.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, Utc};

use crate::models::{AvailabilityRecord, GapInfo, ScheduleSlot, TimeRange};

/// Finds uncovered and understaffed time in a scheduling horizon.
#[derive(Debug, Clone, Copy)]
pub struct GapDetector {
    horizon: Duration,
    utc_offset: FixedOffset,
}

impl GapDetector {
    /// Creates a detector for a horizon, reading gap dates in `utc_offset`.
    pub fn new(horizon: Duration, utc_offset: FixedOffset) -> Self {
        Self {
            horizon,
            utc_offset,
        }
    }

    /// Horizon length.
    pub fn horizon(&self) -> Duration {
        self.horizon
    }

    /// Detects gaps for the horizon starting at `week_start`.
    ///
    /// A horizon reaching past the latest representable instant ends there.
    pub fn detect(
        &self,
        slots: &[ScheduleSlot],
        week_start: DateTime<Utc>,
        required_count: i32,
    ) -> Vec<GapInfo> {
        let week_end = TimeRange::starting_at(week_start, self.horizon).end;

        let mut filled: Vec<&TimeRange> = Vec::new();
        let mut gaps: Vec<GapInfo> = Vec::new();

        for slot in slots {
            if slot.is_filled() {
                filled.push(&slot.time_range);
            } else if slot.is_understaffed() {
                gaps.push(GapInfo::new(
                    slot.time_range,
                    self.day_of(slot.time_range.start),
                    slot.required_count,
                    slot.assigned_count(),
                ));
            }
        }

        filled.sort_by_key(|r| r.start);

        let mut cursor = week_start;
        for range in filled {
            if cursor < range.start {
                let gap = TimeRange::new(cursor, range.start);
                gaps.push(GapInfo::uncovered(gap, self.day_of(cursor), required_count));
            }
            cursor = cursor.max(range.end);
        }

        if cursor < week_end {
            let gap = TimeRange::new(cursor, week_end);
            gaps.push(GapInfo::uncovered(gap, self.day_of(cursor), required_count));
        }

        gaps
    }

    fn day_of(&self, time: DateTime<Utc>) -> NaiveDate {
        time.with_timezone(&self.utc_offset).date_naive()
    }
}

impl Default for GapDetector {
    fn default() -> Self {
        Self {
            horizon: Duration::days(7),
            utc_offset: Utc.fix(),
        }
    }
}

/// Detects gaps over a seven-day UTC week.
pub fn detect_gaps(
    slots: &[ScheduleSlot],
    week_start: DateTime<Utc>,
    required_count: i32,
) -> Vec<GapInfo> {
    GapDetector::default().detect(slots, week_start, required_count)
}

/// People who could help fill a gap.
///
/// Returns everyone whose availability overlaps the gap and who is not
/// already assigned to a slot spanning exactly the gap's range.
pub fn gap_candidates(
    gap: &GapInfo,
    slots: &[ScheduleSlot],
    records: &[AvailabilityRecord],
) -> Vec<String> {
    let assigned: Vec<&str> = slots
        .iter()
        .filter(|s| s.time_range == gap.time_range)
        .flat_map(|s| s.assigned.iter().map(String::as_str))
        .collect();

    super::assign::candidates_for(&gap.time_range, records)
        .into_iter()
        .filter(|p| !assigned.contains(&p.as_str()))
        .collect()
}
