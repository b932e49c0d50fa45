//! Schedule generation pipeline.
//!
//! Availability → merged spans → staffed slots → gaps.
//!
//! # Stages
//!
//! - `merge`: pools every window and merges overlaps into spans.
//! - `assign`: picks staff for each span via a `SelectionStrategy`.
//! - `gaps`: reports understaffed slots and uncovered time.
//! - `builder`: validates input and runs the stages for one tent and week.
//! - `coverage`: coverage and fairness metrics for a finished schedule.
//!
//! Every stage is a pure function of its inputs; only the default random
//! selection is non-deterministic.

mod assign;
mod builder;
mod config;
mod coverage;
mod gaps;
mod merge;

pub use assign::{assign_slots, candidates_for};
pub use builder::{ScheduleBuilder, ScheduleRequest};
pub use config::ScheduleConfig;
pub use coverage::CoverageKpi;
pub use gaps::{detect_gaps, gap_candidates, GapDetector};
pub use merge::{merge_ranges, pool_ranges};
