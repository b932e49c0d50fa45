//! Staff selection strategies.
//!
//! When more people can cover a span than the tent requires, a
//! [`SelectionStrategy`] decides who gets the slot. The default shuffles
//! candidates so that repeated runs rotate the burden; deterministic and
//! load-balancing strategies are provided for callers that need them.
//!
//! # Usage
//!
//! ```
//! use tent_schedule::selection::{InOrderSelection, SelectionStrategy};
//! use tent_schedule::models::TimeRange;
//! use chrono::{TimeZone, Utc};
//!
//! let span = TimeRange::new(
//!     Utc.with_ymd_and_hms(2025, 12, 22, 9, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2025, 12, 22, 12, 0, 0).unwrap(),
//! );
//! let mut strategy = InOrderSelection;
//! let picked = strategy.select(&span, vec!["alice".into(), "bob".into()], 1);
//! assert_eq!(picked, vec!["alice".to_string()]);
//! ```

mod strategies;

pub use strategies::{InOrderSelection, LeastAssignedSelection, RandomSelection};

use crate::models::TimeRange;
use std::fmt::Debug;

/// Chooses which candidates staff a span.
///
/// # Contract
/// Implementations return at most `required_count` people, all drawn from
/// `candidates`. The scheduler truncates longer answers.
pub trait SelectionStrategy: Debug {
    /// Strategy name (e.g., "random").
    fn name(&self) -> &'static str;

    /// Picks up to `required_count` people from `candidates` for `span`.
    ///
    /// `candidates` is never empty and lists each person once, in the order
    /// their availability records were supplied.
    fn select(
        &mut self,
        span: &TimeRange,
        candidates: Vec<String>,
        required_count: usize,
    ) -> Vec<String>;

    /// Strategy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
