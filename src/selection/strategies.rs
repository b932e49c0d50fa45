//! Built-in selection strategies.
//!
//! - **Random**: uniform shuffle, then take the first N (default)
//! - **InOrder**: first N in candidate order, fully deterministic
//! - **LeastAssigned**: prefer whoever has staffed the least time so far

use chrono::Duration;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;

use super::SelectionStrategy;
use crate::models::TimeRange;

/// Uniformly random selection.
///
/// Each call draws a fresh permutation of the candidates, so re-running a
/// schedule spreads slots among equally available people. Use
/// [`RandomSelection::seeded`] for reproducible output.
#[derive(Debug, Clone)]
pub struct RandomSelection {
    rng: StdRng,
}

impl RandomSelection {
    /// Creates a selection seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible selection.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStrategy for RandomSelection {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select(
        &mut self,
        _span: &TimeRange,
        mut candidates: Vec<String>,
        required_count: usize,
    ) -> Vec<String> {
        candidates.shuffle(&mut self.rng);
        candidates.truncate(required_count);
        candidates
    }

    fn description(&self) -> &'static str {
        "Uniform random shuffle"
    }
}

/// Takes candidates in the order they were supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct InOrderSelection;

impl SelectionStrategy for InOrderSelection {
    fn name(&self) -> &'static str {
        "in-order"
    }

    fn select(
        &mut self,
        _span: &TimeRange,
        mut candidates: Vec<String>,
        required_count: usize,
    ) -> Vec<String> {
        candidates.truncate(required_count);
        candidates
    }

    fn description(&self) -> &'static str {
        "Candidate order, no reordering"
    }
}

/// Load-balancing selection.
///
/// Tracks how much time each person has been given and prefers the least
/// loaded. Ties keep candidate order. The tally survives across schedule
/// runs until [`LeastAssignedSelection::reset`] is called.
#[derive(Debug, Clone, Default)]
pub struct LeastAssignedSelection {
    assigned: HashMap<String, Duration>,
}

impl LeastAssignedSelection {
    /// Creates a selection with an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time given to a person so far.
    pub fn assigned_time(&self, person_id: &str) -> Duration {
        self.assigned
            .get(person_id)
            .copied()
            .unwrap_or_else(Duration::zero)
    }

    /// Clears the tally.
    pub fn reset(&mut self) {
        self.assigned.clear();
    }
}

impl SelectionStrategy for LeastAssignedSelection {
    fn name(&self) -> &'static str {
        "least-assigned"
    }

    fn select(
        &mut self,
        span: &TimeRange,
        mut candidates: Vec<String>,
        required_count: usize,
    ) -> Vec<String> {
        // Stable sort keeps candidate order among equally loaded people.
        candidates.sort_by_key(|p| self.assigned_time(p));
        candidates.truncate(required_count);

        for person in &candidates {
            *self
                .assigned
                .entry(person.clone())
                .or_insert_with(Duration::zero) += span.duration();
        }
        candidates
    }

    fn description(&self) -> &'static str {
        "Least accumulated assigned time first"
    }
}
