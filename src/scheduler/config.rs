//! Scheduling configuration.
//!
//! # Time Model
//! Instants are UTC. Calendar days (a record's `week_start`, a gap's `date`)
//! are read in a fixed UTC offset so that results do not depend on the host
//! time zone.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::TimeRange;

/// Offset and horizon used to turn dates into instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Offset east of UTC, in seconds, for calendar days.
    pub utc_offset_seconds: i32,
    /// Length of the scheduling horizon in days.
    pub horizon_days: i64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            utc_offset_seconds: 0,
            horizon_days: 7,
        }
    }
}

impl ScheduleConfig {
    /// Creates the default configuration (UTC, one week).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the calendar offset.
    pub fn with_utc_offset_seconds(mut self, seconds: i32) -> Self {
        self.utc_offset_seconds = seconds;
        self
    }

    /// Sets the horizon length.
    pub fn with_horizon_days(mut self, days: i64) -> Self {
        self.horizon_days = days;
        self
    }

    /// Calendar offset.
    pub fn utc_offset(&self) -> Result<FixedOffset, ScheduleError> {
        FixedOffset::east_opt(self.utc_offset_seconds).ok_or_else(|| {
            ScheduleError::InvalidConfig(format!(
                "UTC offset out of range: {}s",
                self.utc_offset_seconds
            ))
        })
    }

    /// Horizon length.
    pub fn horizon(&self) -> Result<Duration, ScheduleError> {
        if self.horizon_days <= 0 {
            return Err(ScheduleError::InvalidConfig(format!(
                "horizon must be positive, got {} days",
                self.horizon_days
            )));
        }
        Duration::try_days(self.horizon_days).ok_or_else(|| {
            ScheduleError::InvalidConfig(format!("horizon too long: {} days", self.horizon_days))
        })
    }

    /// Instant of local midnight on `week_start`.
    pub fn week_start_instant(&self, week_start: NaiveDate) -> Result<DateTime<Utc>, ScheduleError> {
        let offset = self.utc_offset()?;
        week_start
            .and_time(NaiveTime::MIN)
            .and_local_timezone(offset)
            .single()
            .map(|t| t.with_timezone(&Utc))
            .ok_or_else(|| {
                ScheduleError::InvalidConfig(format!("no single midnight on {week_start}"))
            })
    }

    /// The scheduling horizon starting at local midnight on `week_start`.
    pub fn week_range(&self, week_start: NaiveDate) -> Result<TimeRange, ScheduleError> {
        let start = self.week_start_instant(week_start)?;
        TimeRange::checked_starting_at(start, self.horizon()?).ok_or_else(|| {
            ScheduleError::InvalidConfig(format!(
                "{} day horizon from {week_start} ends out of range",
                self.horizon_days
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn week() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 22).unwrap()
    }

    #[test]
    fn test_defaults() {
        let c = ScheduleConfig::default();
        assert_eq!(c.utc_offset_seconds, 0);
        assert_eq!(c.horizon().unwrap(), Duration::days(7));
        assert_eq!(
            c.week_start_instant(week()).unwrap(),
            Utc.with_ymd_and_hms(2025, 12, 22, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_offset_shifts_midnight() {
        let c = ScheduleConfig::new().with_utc_offset_seconds(-5 * 3600);
        assert_eq!(
            c.week_start_instant(week()).unwrap(),
            Utc.with_ymd_and_hms(2025, 12, 22, 5, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_invalid_config() {
        let c = ScheduleConfig::new().with_utc_offset_seconds(86_400);
        assert!(matches!(c.utc_offset(), Err(ScheduleError::InvalidConfig(_))));
        assert!(c.week_start_instant(week()).is_err());

        let c = ScheduleConfig::new().with_horizon_days(0);
        assert!(matches!(c.horizon(), Err(ScheduleError::InvalidConfig(_))));
    }

    #[test]
    fn test_week_range() {
        let week_range = ScheduleConfig::default().week_range(week()).unwrap();
        assert_eq!(week_range.start, Utc.with_ymd_and_hms(2025, 12, 22, 0, 0, 0).unwrap());
        assert_eq!(week_range.end, Utc.with_ymd_and_hms(2025, 12, 29, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_week_range_out_of_bounds() {
        let long = ScheduleConfig::new().with_horizon_days(1_000_000_000);
        assert!(long.horizon().is_ok());
        assert!(matches!(long.week_range(week()), Err(ScheduleError::InvalidConfig(_))));

        let last_week = ScheduleConfig::default().week_range(NaiveDate::MAX);
        assert!(matches!(last_week, Err(ScheduleError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_from_json() {
        let c: ScheduleConfig = serde_json::from_str(r#"{"utc_offset_seconds": 3600}"#).unwrap();
        assert_eq!(c.utc_offset_seconds, 3600);
        assert_eq!(c.horizon_days, 7);
    }
}
