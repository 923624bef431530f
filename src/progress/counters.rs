//! Monotonic usage counters
//!
//! The fixed set of counters the milestone catalog is evaluated against.
//! Values only ever grow; deltas are unsigned so a decrement cannot be
//! expressed at all.

use serde::{Deserialize, Serialize};

/// Identifies one of the tracked usage counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    TasksCreated,
    TasksCompleted,
    TasksDeleted,
    VentClicks,
    ExcusesUsed,
}

impl Counter {
    /// Get the string form for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TasksCreated => "tasks_created",
            Self::TasksCompleted => "tasks_completed",
            Self::TasksDeleted => "tasks_deleted",
            Self::VentClicks => "vent_clicks",
            Self::ExcusesUsed => "excuses_used",
        }
    }

    /// Parse from database string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "tasks_created" => Some(Self::TasksCreated),
            "tasks_completed" => Some(Self::TasksCompleted),
            "tasks_deleted" => Some(Self::TasksDeleted),
            "vent_clicks" => Some(Self::VentClicks),
            "excuses_used" => Some(Self::ExcusesUsed),
            _ => None,
        }
    }

    /// All counters, in storage order
    pub fn all() -> &'static [Counter] {
        &[
            Self::TasksCreated,
            Self::TasksCompleted,
            Self::TasksDeleted,
            Self::VentClicks,
            Self::ExcusesUsed,
        ]
    }
}

/// Snapshot of all counter values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub tasks_created: u64,
    pub tasks_completed: u64,
    pub tasks_deleted: u64,
    pub vent_clicks: u64,
    pub excuses_used: u64,
}

impl Counters {
    /// Read a counter by name
    pub fn get(&self, counter: Counter) -> u64 {
        match counter {
            Counter::TasksCreated => self.tasks_created,
            Counter::TasksCompleted => self.tasks_completed,
            Counter::TasksDeleted => self.tasks_deleted,
            Counter::VentClicks => self.vent_clicks,
            Counter::ExcusesUsed => self.excuses_used,
        }
    }

    pub(crate) fn add(&mut self, counter: Counter, delta: u64) {
        let slot = match counter {
            Counter::TasksCreated => &mut self.tasks_created,
            Counter::TasksCompleted => &mut self.tasks_completed,
            Counter::TasksDeleted => &mut self.tasks_deleted,
            Counter::VentClicks => &mut self.vent_clicks,
            Counter::ExcusesUsed => &mut self.excuses_used,
        };
        *slot = slot.saturating_add(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_name_roundtrip() {
        for counter in Counter::all() {
            assert_eq!(Counter::from_str(counter.as_str()), Some(*counter));
        }
        assert_eq!(Counter::from_str("tasks_procrastinated"), None);
    }

    #[test]
    fn test_add_never_wraps() {
        let mut counters = Counters::default();
        counters.add(Counter::VentClicks, u64::MAX);
        counters.add(Counter::VentClicks, 1);
        assert_eq!(counters.vent_clicks, u64::MAX);
    }
}
