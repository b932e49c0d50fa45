//! Availability-to-shift scheduling engine.
//!
//! Turns per-person weekly availability into a staffed schedule for a tent:
//! availability windows are merged into coverage spans, people are assigned
//! to each span up to the required concurrent count, and uncovered or
//! understaffed time is reported as gaps.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimeRange`, `AvailabilityRecord`,
//!   `ScheduleSlot`, `GapInfo`, `GapReport`, `ScheduleResult`
//! - **`scheduler`**: Merge, assign, and gap-detection stages plus the
//!   `ScheduleBuilder` that runs them
//! - **`selection`**: Pluggable staff selection (`SelectionStrategy`)
//! - **`validation`**: Input integrity checks (inverted ranges, foreign
//!   records, duplicate people, required count)
//! - **`codec`**: JSON encoding with explicit decode errors
//! - **`service`**: Store boundary and per-key serialized regeneration
//!
//! # Architecture
//!
//! The engine is synchronous pure computation over an immutable snapshot.
//! Persistence, notifications, and UI live outside this crate; `service`
//! only defines the seam they plug into.

pub mod codec;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod selection;
pub mod service;
pub mod validation;

pub use error::ScheduleError;
