//! Error types for schedule generation.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::service::StoreError;
use crate::validation::ValidationError;

/// Errors raised while validating input, building a schedule, or moving
/// schedule data across the persistence boundary.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("invalid time range: start {start} is after end {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("required count must be positive, got {0}")]
    InvalidRequiredCount(i64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{} validation error(s), first: {}", .0.len(), first_message(.0))]
    Validation(Vec<ValidationError>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("none")
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AvailabilityRecord, TimeRange};
    use crate::scheduler::ScheduleConfig;
    use crate::validation::validate_records;
    use chrono::{NaiveDate, TimeZone};

    fn week() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 22).unwrap()
    }

    #[test]
    fn test_error_sources() {
        let nine = Utc.with_ymd_and_hms(2025, 12, 22, 9, 0, 0).unwrap();
        let noon = Utc.with_ymd_and_hms(2025, 12, 22, 12, 0, 0).unwrap();
        let err = TimeRange::try_new(noon, nine).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidRange { start, end } if start == noon && end == nine));

        let err = ScheduleConfig::new().with_horizon_days(-1).horizon().unwrap_err();
        assert!(err.to_string().starts_with("invalid configuration:"));

        let err: ScheduleError = serde_json::from_str::<TimeRange>("{").unwrap_err().into();
        assert!(matches!(err, ScheduleError::Json(_)));

        let err: ScheduleError = StoreError::TentNotFound("tent-9".into()).into();
        assert_eq!(err.to_string(), "store error: tent not found: tent-9");
    }

    #[test]
    fn test_validation_error_names_person_and_index() {
        let nine = Utc.with_ymd_and_hms(2025, 12, 22, 9, 0, 0).unwrap();
        let noon = Utc.with_ymd_and_hms(2025, 12, 22, 12, 0, 0).unwrap();
        let record = AvailabilityRecord::new("alice", "tent-1", week())
            .with_range(nine, noon)
            .with_range(noon, nine);

        let err: ScheduleError = validate_records(&[record], "tent-1", week())
            .unwrap_err()
            .into();
        let message = err.to_string();
        assert!(message.starts_with("1 validation error(s)"));
        assert!(message.contains("Range #1 of 'alice'"));
    }
}
