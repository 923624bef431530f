//! Usage counters and the milestone unlock engine
//!
//! The tracker holds the cumulative counters and the unlocked set; the
//! surrounding session persists both and calls `evaluate` after every
//! mutation. Milestones unlock exactly once and never re-lock.

mod catalog;
mod counters;
mod tracker;

pub use catalog::{CATALOG, Milestone, MilestoneIcon, MilestoneId};
pub use counters::{Counter, Counters};
pub use tracker::ProgressTracker;

use thiserror::Error;

/// Errors from the progress tracker
#[derive(Debug, Error)]
pub enum ProgressError {
    /// Queried a milestone id that is not in the catalog
    #[error("unknown milestone id: {0}")]
    UnknownMilestone(String),
}
