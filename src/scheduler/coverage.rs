//! Coverage metrics.
//!
//! Summarizes how well a schedule staffs its horizon and how evenly the
//! load is spread.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Covered | Time inside filled slots |
//! | Understaffed | Time inside understaffed slots |
//! | Uncovered | Time inside uncovered gaps |
//! | Coverage Rate | covered / horizon |
//! | Assignment Spread | max - min assigned time across people |
//!
//! All durations are clipped to the horizon.

use chrono::Duration;
use std::collections::HashMap;

use crate::models::{ScheduleResult, TimeRange};

/// Schedule coverage indicators.
#[derive(Debug, Clone)]
pub struct CoverageKpi {
    /// Horizon length.
    pub horizon: Duration,
    /// Time staffed at the required level.
    pub covered: Duration,
    /// Time staffed below the required level.
    pub understaffed: Duration,
    /// Time reported as uncovered gaps.
    pub uncovered: Duration,
    /// Fraction of the horizon fully staffed (0.0..1.0).
    pub coverage_rate: f64,
    /// Assigned time per person.
    pub assigned_by_person: HashMap<String, Duration>,
    /// Difference between the most and least assigned person.
    pub assignment_spread: Duration,
}

impl CoverageKpi {
    /// Computes coverage for a result over its horizon.
    pub fn calculate(result: &ScheduleResult, horizon: &TimeRange) -> Self {
        let clipped = |r: &TimeRange| {
            r.intersection(horizon)
                .map(|i| i.duration())
                .unwrap_or_else(Duration::zero)
        };

        let covered = result
            .slots
            .iter()
            .filter(|s| s.is_filled())
            .fold(Duration::zero(), |acc, s| acc + clipped(&s.time_range));
        let understaffed = result
            .slots
            .iter()
            .filter(|s| s.is_understaffed())
            .fold(Duration::zero(), |acc, s| acc + clipped(&s.time_range));
        let uncovered = result
            .gaps
            .iter()
            .filter(|g| g.is_uncovered())
            .fold(Duration::zero(), |acc, g| acc + clipped(&g.time_range));

        let length = horizon.duration();
        let coverage_rate = match (covered.num_seconds(), length.num_seconds()) {
            (_, 0) => 0.0,
            (c, h) => c as f64 / h as f64,
        };

        let assigned_by_person = result.assigned_time_by_person();
        let assignment_spread = match (
            assigned_by_person.values().max(),
            assigned_by_person.values().min(),
        ) {
            (Some(max), Some(min)) => *max - *min,
            _ => Duration::zero(),
        };

        Self {
            horizon: length,
            covered,
            understaffed,
            uncovered,
            coverage_rate,
            assigned_by_person,
            assignment_spread,
        }
    }

    /// Whether the whole horizon is staffed at the required level.
    pub fn is_fully_covered(&self) -> bool {
        self.covered >= self.horizon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GapInfo, ScheduleSlot};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 22, hour, 0, 0).unwrap()
    }

    fn range(from: u32, to: u32) -> TimeRange {
        TimeRange::new(at(from), at(to))
    }

    fn next_midnight() -> DateTime<Utc> {
        at(0) + Duration::days(1)
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 22).unwrap()
    }

    fn sample() -> ScheduleResult {
        ScheduleResult::new(
            vec![
                ScheduleSlot::new(range(0, 6), 1).with_assigned(vec!["a".into()]),
                ScheduleSlot::new(range(6, 8), 2).with_assigned(vec!["b".into()]),
                ScheduleSlot::new(TimeRange::new(at(12), next_midnight()), 1)
                    .with_assigned(vec!["a".into()]),
            ],
            vec![
                GapInfo::new(range(6, 8), day(), 2, 1),
                GapInfo::uncovered(range(6, 12), day(), 1),
            ],
        )
    }

    #[test]
    fn test_coverage_kpi() {
        let kpi = CoverageKpi::calculate(&sample(), &TimeRange::new(at(0), next_midnight()));
        assert_eq!(kpi.horizon, Duration::hours(24));
        assert_eq!(kpi.covered, Duration::hours(18));
        assert_eq!(kpi.understaffed, Duration::hours(2));
        assert_eq!(kpi.uncovered, Duration::hours(6));
        assert!((kpi.coverage_rate - 0.75).abs() < 1e-10);
        assert!(!kpi.is_fully_covered());
    }

    #[test]
    fn test_assignment_spread() {
        let kpi = CoverageKpi::calculate(&sample(), &TimeRange::new(at(0), next_midnight()));
        assert_eq!(kpi.assigned_by_person["a"], Duration::hours(18));
        assert_eq!(kpi.assigned_by_person["b"], Duration::hours(2));
        assert_eq!(kpi.assignment_spread, Duration::hours(16));
    }

    #[test]
    fn test_clipped_to_horizon() {
        let kpi = CoverageKpi::calculate(&sample(), &range(0, 12));
        assert_eq!(kpi.covered, Duration::hours(6));
        assert!((kpi.coverage_rate - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_result() {
        let kpi = CoverageKpi::calculate(&ScheduleResult::default(), &range(0, 12));
        assert_eq!(kpi.covered, Duration::zero());
        assert_eq!(kpi.coverage_rate, 0.0);
        assert_eq!(kpi.assignment_spread, Duration::zero());
        assert!(kpi.assigned_by_person.is_empty());
    }

    #[test]
    fn test_zero_length_horizon() {
        let kpi = CoverageKpi::calculate(&sample(), &range(5, 5));
        assert_eq!(kpi.coverage_rate, 0.0);
    }
}
