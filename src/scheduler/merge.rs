//! Interval merger.
//!
//! Pools every availability window for a tent and week and reduces them to
//! the minimal set of contiguous covered spans.
//!
//! # Algorithm
//! 1. Drop zero-length windows (they cover nothing).
//! 2. Sort by start, then end.
//! 3. Sweep with an accumulator; extend it while the next window overlaps,
//!    otherwise flush it and start over.
//!
//! Overlap is strict, so windows that only touch (`a.end == b.start`) stay
//! separate spans.
//!
//! # Complexity
//! O(n log n) in the number of windows.

use crate::models::{AvailabilityRecord, TimeRange};

/// Concatenates the windows of every record.
pub fn pool_ranges(records: &[AvailabilityRecord]) -> Vec<TimeRange> {
    records
        .iter()
        .flat_map(|r| r.ranges.iter().copied())
        .collect()
}

/// Merges overlapping ranges into chronologically ordered spans.
///
/// Expects `start <= end` for every input; inverted ranges are the
/// caller's to reject.
pub fn merge_ranges(ranges: &[TimeRange]) -> Vec<TimeRange> {
    let mut sorted: Vec<TimeRange> = ranges
        .iter()
        .filter(|r| !r.is_zero_length())
        .copied()
        .collect();
    sorted.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));

    let mut merged = Vec::with_capacity(sorted.len());
    let mut iter = sorted.into_iter();
    let Some(mut current) = iter.next() else {
        return merged;
    };

    for next in iter {
        if next.overlaps(&current) {
            current = TimeRange::new(current.start.min(next.start), current.end.max(next.end));
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    merged
}
