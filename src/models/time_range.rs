//! Time range model.
//!
//! A `TimeRange` is a pair of UTC instants used for availability windows,
//! merged coverage spans, slots, and gaps.
//!
//! # Boundary Semantics
//! - `overlaps` is strict (half-open): ranges that only touch do not overlap.
//! - `contains` is inclusive at both ends.
//!
//! The asymmetry is relied on by gap detection and must not be unified.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// An interval between two instants.
///
/// Zero-length ranges (`start == end`) are accepted; they have no duration
/// and never overlap anything. Inverted ranges (`start > end`) can be built
/// with [`TimeRange::new`] but are rejected by validation and by
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    /// Range start.
    pub start: DateTime<Utc>,
    /// Range end.
    pub end: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawTimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = ScheduleError;

    fn try_from(raw: RawTimeRange) -> Result<Self, Self::Error> {
        Self::try_new(raw.start, raw.end)
    }
}

impl TimeRange {
    /// Creates a new range without checking ordering.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Creates a new range, rejecting `start > end`.
    pub fn try_new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ScheduleError> {
        if start > end {
            return Err(ScheduleError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range starting at `start` and lasting `length`.
    ///
    /// The end saturates at the latest representable instant.
    pub fn starting_at(start: DateTime<Utc>, length: Duration) -> Self {
        let end = start
            .checked_add_signed(length)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self::new(start, end)
    }

    /// Creates a range starting at `start` and lasting `length`, or `None`
    /// if the end is out of range.
    pub fn checked_starting_at(start: DateTime<Utc>, length: Duration) -> Option<Self> {
        start.checked_add_signed(length).map(|end| Self::new(start, end))
    }

    /// Duration of this range.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether `start <= end`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Whether this range has no duration.
    #[inline]
    pub fn is_zero_length(&self) -> bool {
        self.start == self.end
    }

    /// Whether two ranges overlap (touching endpoints do not).
    ///
    /// A zero-length range overlaps nothing, even when it sits strictly
    /// inside `other`.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_zero_length()
            && !other.is_zero_length()
            && self.start < other.end
            && self.end > other.start
    }

    /// Whether an instant falls within this range, both ends inclusive.
    #[inline]
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        time >= self.start && time <= self.end
    }

    /// Whether `other` lies entirely within this range.
    pub fn encloses(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Overlapping part of two ranges, if any.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if end > start {
            Some(Self::new(start, end))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 22, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_time_range() {
        let r = TimeRange::new(at(9, 0), at(12, 0));
        assert_eq!(r.duration(), Duration::hours(3));
        assert!(r.is_valid());
        assert!(!r.is_zero_length());
    }

    #[test]
    fn test_starting_at_near_calendar_end() {
        let late = DateTime::<Utc>::MAX_UTC - Duration::hours(1);
        assert_eq!(TimeRange::starting_at(late, Duration::days(7)).end, DateTime::<Utc>::MAX_UTC);
        assert!(TimeRange::checked_starting_at(late, Duration::days(7)).is_none());
        assert_eq!(
            TimeRange::checked_starting_at(at(9, 0), Duration::hours(3)),
            Some(TimeRange::new(at(9, 0), at(12, 0)))
        );
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = TimeRange::new(at(9, 0), at(12, 0));
        let b = TimeRange::new(at(11, 0), at(14, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = TimeRange::new(at(12, 0), at(13, 0)); // touching
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = TimeRange::new(at(9, 0), at(12, 0));
        assert!(r.contains(at(9, 0)));
        assert!(r.contains(at(10, 30)));
        assert!(r.contains(at(12, 0))); // inclusive end, unlike overlaps
        assert!(!r.contains(at(12, 1)));
        assert!(!r.contains(at(8, 59)));
    }

    #[test]
    fn test_zero_length_never_overlaps() {
        let point = TimeRange::new(at(10, 0), at(10, 0));
        let around = TimeRange::new(at(9, 0), at(12, 0));
        assert!(point.is_zero_length());
        assert_eq!(point.duration(), Duration::zero());
        assert!(!point.overlaps(&point));
        assert!(!around.overlaps(&point));
        assert!(!point.overlaps(&around));
        // Still contained at its instant.
        assert!(point.contains(at(10, 0)));
    }

    #[test]
    fn test_try_new_rejects_inverted() {
        let err = TimeRange::try_new(at(12, 0), at(9, 0)).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidRange { .. }));
        assert!(TimeRange::try_new(at(9, 0), at(9, 0)).is_ok());
    }

    #[test]
    fn test_intersection() {
        let a = TimeRange::new(at(9, 0), at(12, 0));
        let b = TimeRange::new(at(11, 0), at(14, 0));
        assert_eq!(a.intersection(&b), Some(TimeRange::new(at(11, 0), at(12, 0))));

        let c = TimeRange::new(at(12, 0), at(13, 0));
        assert_eq!(a.intersection(&c), None);
    }

    #[test]
    fn test_encloses() {
        let outer = TimeRange::new(at(8, 0), at(18, 0));
        assert!(outer.encloses(&TimeRange::new(at(9, 0), at(12, 0))));
        assert!(outer.encloses(&outer));
        assert!(!outer.encloses(&TimeRange::new(at(17, 0), at(19, 0))));
    }

    #[test]
    fn test_serde_iso8601() {
        let r = TimeRange::new(at(9, 0), at(12, 0));
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"start":"2025-12-22T09:00:00Z","end":"2025-12-22T12:00:00Z"}"#
        );
        let back: TimeRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_serde_rejects_inverted() {
        let json = r#"{"start":"2025-12-22T12:00:00Z","end":"2025-12-22T09:00:00Z"}"#;
        let err = serde_json::from_str::<TimeRange>(json).unwrap_err();
        assert!(err.to_string().contains("start"));
    }
}
