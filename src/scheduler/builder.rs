//! Schedule builder.
//!
//! Runs the pipeline for one tent and week:
//!
//! 1. Validate the required count and the records.
//! 2. Pool and merge every availability window.
//! 3. Assign people to each merged span.
//! 4. Detect uncovered and understaffed time.
//!
//! Pure computation: no I/O, no retries. Persisting the result belongs to
//! the caller (see [`crate::service`]).

use chrono::NaiveDate;
use tracing::{debug, instrument, warn};

use super::assign::assign_slots;
use super::gaps::GapDetector;
use super::merge::{merge_ranges, pool_ranges};
use super::ScheduleConfig;
use crate::error::ScheduleError;
use crate::models::{AvailabilityRecord, ScheduleResult};
use crate::selection::{RandomSelection, SelectionStrategy};
use crate::validation::{validate_records, validate_required_count};

/// Input container for one tent and week.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Tent being staffed.
    pub tent_id: String,
    /// First calendar day of the week.
    pub week_start: NaiveDate,
    /// One record per person with availability that week.
    pub records: Vec<AvailabilityRecord>,
    /// People required concurrently.
    pub required_count: i64,
}

impl ScheduleRequest {
    /// Creates a new schedule request.
    pub fn new(
        tent_id: impl Into<String>,
        week_start: NaiveDate,
        records: Vec<AvailabilityRecord>,
        required_count: i64,
    ) -> Self {
        Self {
            tent_id: tent_id.into(),
            week_start,
            records,
            required_count,
        }
    }

    /// Adds a record.
    pub fn with_record(mut self, record: AvailabilityRecord) -> Self {
        self.records.push(record);
        self
    }
}

/// Builds schedules from availability.
///
/// # Example
///
/// ```
/// use tent_schedule::models::AvailabilityRecord;
/// use tent_schedule::scheduler::{ScheduleBuilder, ScheduleRequest};
/// use tent_schedule::selection::InOrderSelection;
/// use chrono::{NaiveDate, TimeZone, Utc};
///
/// let week = NaiveDate::from_ymd_opt(2025, 12, 22).unwrap();
/// let record = AvailabilityRecord::new("alice", "tent-1", week).with_range(
///     Utc.with_ymd_and_hms(2025, 12, 22, 9, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2025, 12, 22, 12, 0, 0).unwrap(),
/// );
/// let request = ScheduleRequest::new("tent-1", week, vec![record], 1);
///
/// let mut builder = ScheduleBuilder::new().with_strategy(InOrderSelection);
/// let result = builder.build(&request).unwrap();
/// assert_eq!(result.slots.len(), 1);
/// assert_eq!(result.gaps.len(), 2);
/// ```
#[derive(Debug)]
pub struct ScheduleBuilder {
    config: ScheduleConfig,
    strategy: Box<dyn SelectionStrategy + Send>,
}

impl ScheduleBuilder {
    /// Creates a builder with the default configuration and random selection.
    pub fn new() -> Self {
        Self {
            config: ScheduleConfig::default(),
            strategy: Box::new(RandomSelection::new()),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: ScheduleConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the selection strategy.
    pub fn with_strategy<S: SelectionStrategy + Send + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Name of the selection strategy in use.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Builds the schedule for a request.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidRequiredCount`] if `required_count <= 0`
    /// - [`ScheduleError::Validation`] if any record is malformed
    /// - [`ScheduleError::InvalidConfig`] for an unusable configuration
    ///
    /// Zero records is not an error: the result has no slots and one gap
    /// spanning the whole horizon.
    #[instrument(
        level = "debug",
        skip_all,
        fields(tent_id = %request.tent_id, week_start = %request.week_start)
    )]
    pub fn build(&mut self, request: &ScheduleRequest) -> Result<ScheduleResult, ScheduleError> {
        let required_count = validate_required_count(request.required_count)?;
        validate_records(&request.records, &request.tent_id, request.week_start)?;

        let week = self.config.week_range(request.week_start)?;
        let week_start = week.start;
        let horizon = week.duration();

        let pooled = pool_ranges(&request.records);
        let outside = pooled
            .iter()
            .filter(|r| !r.is_zero_length() && !week.encloses(r))
            .count();
        if outside > 0 {
            warn!(outside, "availability extends beyond the scheduling horizon");
        }

        let spans = merge_ranges(&pooled);
        debug!(
            records = request.records.len(),
            windows = pooled.len(),
            spans = spans.len(),
            "merged availability"
        );

        let slots = assign_slots(
            &spans,
            &request.records,
            required_count,
            self.strategy.as_mut(),
        );

        let detector = GapDetector::new(horizon, self.config.utc_offset()?);
        let gaps = detector.detect(&slots, week_start, required_count);
        debug!(
            slots = slots.len(),
            gaps = gaps.len(),
            strategy = self.strategy.name(),
            "schedule built"
        );

        Ok(ScheduleResult::new(slots, gaps))
    }
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
