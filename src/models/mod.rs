//! Scheduling domain models.
//!
//! Plain immutable data: composition is by ID plus the `(tent_id,
//! week_start)` grouping key supplied by the caller.
//!
//! # Domain Mappings
//!
//! | tent-schedule | Tent staffing | Shift work | On-call |
//! |---------------|---------------|------------|---------|
//! | AvailabilityRecord | Member's week | Worker availability | Engineer rota |
//! | ScheduleSlot | Staffed span | Shift | On-call block |
//! | GapInfo | Unguarded time | Open shift | Uncovered page window |
//! | ScheduleResult | Tent week plan | Roster | Rotation |

mod availability;
mod gap;
mod schedule;
mod slot;
mod time_range;

pub use availability::{AvailabilityRecord, AvailabilityStatus};
pub use gap::{GapInfo, GapReport, GapSummary};
pub use schedule::{CoverageSchedule, ScheduleResult};
pub use slot::ScheduleSlot;
pub use time_range::TimeRange;
