//! Schedule regeneration against an external store.
//!
//! The engine itself performs no I/O. This module defines the boundary it
//! is used across:
//!
//! - [`ScheduleStore`]: supplies availability and the tent's required count,
//!   and persists results.
//! - [`ScheduleService`]: fetch → build → persist for one (tent, week) key.
//! - [`MemoryStore`]: in-memory store for tests and local use.
//!
//! # Write Policy
//! A persisted result replaces the previous one for its key wholesale.
//! Because two regenerations of the same key do not commute, the service
//! holds a per-key lock across the whole fetch/build/persist sequence.
//! Different keys proceed in parallel. A key's lock is dropped from the
//! service once no regeneration of that key is running.
//!
//! # Recovery
//! Nothing is retried here. A failed persist leaves the store untouched and
//! the whole regeneration can be rerun.

use chrono::NaiveDate;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

use crate::error::ScheduleError;
use crate::models::{AvailabilityRecord, ScheduleResult};
use crate::scheduler::{ScheduleBuilder, ScheduleRequest};

/// Errors reported by a [`ScheduleStore`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("tent not found: {0}")]
    TentNotFound(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Grouping key for persisted schedules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScheduleKey {
    pub tent_id: String,
    pub week_start: NaiveDate,
}

impl ScheduleKey {
    pub fn new(tent_id: impl Into<String>, week_start: NaiveDate) -> Self {
        Self {
            tent_id: tent_id.into(),
            week_start,
        }
    }
}

/// Persistence boundary for schedule generation.
pub trait ScheduleStore: Send + Sync {
    /// Every availability record for a tent and week, one per person.
    fn fetch_availability(
        &self,
        tent_id: &str,
        week_start: NaiveDate,
    ) -> Result<Vec<AvailabilityRecord>, StoreError>;

    /// People the tent requires concurrently.
    fn required_count(&self, tent_id: &str) -> Result<i64, StoreError>;

    /// Stores a result, replacing any previous one for the key.
    fn persist(
        &self,
        tent_id: &str,
        week_start: NaiveDate,
        result: &ScheduleResult,
    ) -> Result<(), StoreError>;
}

/// Regenerates and persists schedules.
#[derive(Debug)]
pub struct ScheduleService<S: ScheduleStore> {
    store: S,
    key_locks: Mutex<HashMap<ScheduleKey, Arc<Mutex<()>>>>,
}

impl<S: ScheduleStore> ScheduleService<S> {
    /// Creates a service over a store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            key_locks: Mutex::new(HashMap::new()),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rebuilds and persists the schedule for a tent and week.
    ///
    /// Regenerations of the same key are serialized; the caller supplies
    /// the builder so each worker keeps its own selection state.
    #[instrument(level = "info", skip(self, builder), fields(strategy = builder.strategy_name()))]
    pub fn regenerate(
        &self,
        builder: &mut ScheduleBuilder,
        tent_id: &str,
        week_start: NaiveDate,
    ) -> Result<ScheduleResult, ScheduleError> {
        let key = ScheduleKey::new(tent_id, week_start);
        let lock = self.acquire_key(&key);
        let result = {
            let _guard = lock.lock();
            self.regenerate_locked(builder, tent_id, week_start)
        };
        self.release_key(&key, lock);
        result
    }

    fn regenerate_locked(
        &self,
        builder: &mut ScheduleBuilder,
        tent_id: &str,
        week_start: NaiveDate,
    ) -> Result<ScheduleResult, ScheduleError> {
        let records = self.store.fetch_availability(tent_id, week_start)?;
        let required_count = self.store.required_count(tent_id)?;
        let request = ScheduleRequest::new(tent_id, week_start, records, required_count);

        let result = builder.build(&request)?;
        self.store.persist(tent_id, week_start, &result)?;

        let summary = result.gap_summary();
        info!(
            slots = result.slots.len(),
            uncovered = summary.uncovered,
            understaffed = summary.understaffed,
            "schedule regenerated"
        );
        Ok(result)
    }

    fn acquire_key(&self, key: &ScheduleKey) -> Arc<Mutex<()>> {
        self.key_locks.lock().entry(key.clone()).or_default().clone()
    }

    /// Drops a handle from [`Self::acquire_key`], removing the key's lock
    /// once no other regeneration holds it.
    ///
    /// Handles are only cloned and dropped under the map lock, so the
    /// strong count seen here is exact.
    fn release_key(&self, key: &ScheduleKey, lock: Arc<Mutex<()>>) {
        let mut locks = self.key_locks.lock();
        drop(lock);
        if locks.get(key).is_some_and(|l| Arc::strong_count(l) == 1) {
            locks.remove(key);
        }
    }
}

/// In-memory [`ScheduleStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    availability: RwLock<HashMap<ScheduleKey, Vec<AvailabilityRecord>>>,
    required: RwLock<HashMap<String, i64>>,
    results: RwLock<HashMap<ScheduleKey, ScheduleResult>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a tent's required count.
    pub fn set_required_count(&self, tent_id: impl Into<String>, required_count: i64) {
        self.required.write().insert(tent_id.into(), required_count);
    }

    /// Stores a record, replacing the person's previous record for that
    /// tent and week.
    pub fn upsert_availability(&self, record: AvailabilityRecord) {
        let key = ScheduleKey::new(record.tent_id.clone(), record.week_start);
        let mut availability = self.availability.write();
        let records = availability.entry(key).or_default();
        match records.iter_mut().find(|r| r.person_id == record.person_id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }

    /// Removes a person's record. Returns whether one existed.
    pub fn remove_availability(&self, person_id: &str, tent_id: &str, week_start: NaiveDate) -> bool {
        let key = ScheduleKey::new(tent_id, week_start);
        let mut availability = self.availability.write();
        match availability.get_mut(&key) {
            Some(records) => {
                let before = records.len();
                records.retain(|r| r.person_id != person_id);
                records.len() != before
            }
            None => false,
        }
    }

    /// The stored result for a key.
    pub fn stored(&self, tent_id: &str, week_start: NaiveDate) -> Option<ScheduleResult> {
        self.results
            .read()
            .get(&ScheduleKey::new(tent_id, week_start))
            .cloned()
    }

    /// Number of successful persists.
    pub fn write_count(&self) -> usize {
        *self.writes.lock()
    }
}

impl ScheduleStore for MemoryStore {
    fn fetch_availability(
        &self,
        tent_id: &str,
        week_start: NaiveDate,
    ) -> Result<Vec<AvailabilityRecord>, StoreError> {
        Ok(self
            .availability
            .read()
            .get(&ScheduleKey::new(tent_id, week_start))
            .cloned()
            .unwrap_or_default())
    }

    fn required_count(&self, tent_id: &str) -> Result<i64, StoreError> {
        self.required
            .read()
            .get(tent_id)
            .copied()
            .ok_or_else(|| StoreError::TentNotFound(tent_id.to_string()))
    }

    fn persist(
        &self,
        tent_id: &str,
        week_start: NaiveDate,
        result: &ScheduleResult,
    ) -> Result<(), StoreError> {
        self.results
            .write()
            .insert(ScheduleKey::new(tent_id, week_start), result.clone());
        *self.writes.lock() += 1;
        Ok(())
    }
}
