//! Input validation for schedule generation.
//!
//! Checks availability records before any interval work happens.
//! Detects:
//! - Inverted time ranges (`start > end`)
//! - Records belonging to another tent or week
//! - More than one record for the same person
//!
//! Inverted ranges are reported, never repaired. Every issue is collected so
//! the caller can reject the offending records in one pass.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::error::ScheduleError;
use crate::models::AvailabilityRecord;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Person whose record is at fault.
    pub person_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A range ends before it starts.
    InvalidRange,
    /// A record belongs to a different tent.
    TentMismatch,
    /// A record belongs to a different week.
    WeekMismatch,
    /// Two records share a person ID.
    DuplicatePerson,
}

impl ValidationError {
    fn new(
        kind: ValidationErrorKind,
        person_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            person_id: person_id.into(),
            message: message.into(),
        }
    }
}

/// Validates the availability records for one tent and week.
///
/// Checks:
/// 1. Every range has `start <= end`
/// 2. Every record carries `tent_id`
/// 3. Every record carries `week_start`
/// 4. No person appears twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_records(
    records: &[AvailabilityRecord],
    tent_id: &str,
    week_start: NaiveDate,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for record in records {
        if !seen.insert(record.person_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePerson,
                &record.person_id,
                format!("Duplicate availability record for person '{}'", record.person_id),
            ));
        }

        if record.tent_id != tent_id {
            errors.push(ValidationError::new(
                ValidationErrorKind::TentMismatch,
                &record.person_id,
                format!(
                    "Record for '{}' belongs to tent '{}', expected '{}'",
                    record.person_id, record.tent_id, tent_id
                ),
            ));
        }

        if record.week_start != week_start {
            errors.push(ValidationError::new(
                ValidationErrorKind::WeekMismatch,
                &record.person_id,
                format!(
                    "Record for '{}' is for week {}, expected {}",
                    record.person_id, record.week_start, week_start
                ),
            ));
        }

        for (index, range) in record.ranges.iter().enumerate() {
            if !range.is_valid() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidRange,
                    &record.person_id,
                    format!(
                        "Range #{index} of '{}' starts at {} after it ends at {}",
                        record.person_id, range.start, range.end
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Rejects a non-positive staffing requirement.
pub fn validate_required_count(required_count: i64) -> Result<i32, ScheduleError> {
    match i32::try_from(required_count) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ScheduleError::InvalidRequiredCount(required_count)),
    }
}
