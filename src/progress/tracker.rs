//! Progress tracker - counters plus one-way milestone unlocks
//!
//! Owns the usage counters and the unlocked set. Mutations go through
//! `record`; the host calls `evaluate` explicitly after each mutation and
//! routes the returned ids to its notification sink.

use std::collections::HashSet;

use super::ProgressError;
use super::catalog::{CATALOG, MilestoneId};
use super::counters::{Counter, Counters};

/// Tracks cumulative usage counters and evaluates the milestone catalog
///
/// Not internally synchronized; a session serializes all calls
/// (single-writer discipline).
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    counters: Counters,
    unlocked: HashSet<MilestoneId>,
}

impl ProgressTracker {
    /// Fresh tracker: all counters zero, every milestone locked
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a tracker from persisted state.
    ///
    /// Fails on an unlocked id that is not in the catalog rather than
    /// silently dropping it.
    pub fn restore(counters: Counters, unlocked_ids: &[String]) -> Result<Self, ProgressError> {
        let mut unlocked = HashSet::new();
        for id in unlocked_ids {
            let parsed = MilestoneId::from_str(id)
                .ok_or_else(|| ProgressError::UnknownMilestone(id.clone()))?;
            unlocked.insert(parsed);
        }
        Ok(Self { counters, unlocked })
    }

    /// Add `delta` to a counter and return the updated snapshot.
    ///
    /// Counters are append-only: `delta` is unsigned, so a decrement cannot
    /// be expressed. The caller is expected to follow up with `evaluate`.
    pub fn record(&mut self, counter: Counter, delta: u64) -> Counters {
        self.counters.add(counter, delta);
        self.counters
    }

    /// Walk the catalog in declared order and unlock every milestone whose
    /// condition now holds, returning the newly unlocked ids in that order.
    ///
    /// Already-unlocked milestones are skipped, so calling this twice with
    /// unchanged inputs returns an empty list the second time.
    pub fn evaluate(&mut self, pending_tasks: usize) -> Vec<MilestoneId> {
        let mut newly_unlocked = Vec::new();
        for milestone in CATALOG {
            if self.unlocked.contains(&milestone.id) {
                continue;
            }
            if milestone.id.satisfied(&self.counters, pending_tasks) {
                self.unlocked.insert(milestone.id);
                newly_unlocked.push(milestone.id);
            }
        }
        newly_unlocked
    }

    /// Unlock status for a milestone id.
    ///
    /// An id outside the catalog is a programmer error and fails loudly
    /// instead of reading as "locked".
    pub fn is_unlocked(&self, id: &str) -> Result<bool, ProgressError> {
        let parsed =
            MilestoneId::from_str(id).ok_or_else(|| ProgressError::UnknownMilestone(id.into()))?;
        Ok(self.unlocked.contains(&parsed))
    }

    /// Current counter snapshot
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Unlocked ids in catalog order, for persistence
    pub fn unlocked_ids(&self) -> Vec<&'static str> {
        CATALOG
            .iter()
            .filter(|m| self.unlocked.contains(&m.id))
            .map(|m| m.id.as_str())
            .collect()
    }

    /// Number of unlocked milestones
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_monotonic() {
        let mut tracker = ProgressTracker::new();
        let mut last = 0;
        for delta in [1, 0, 5, 2] {
            let snapshot = tracker.record(Counter::VentClicks, delta);
            assert!(snapshot.vent_clicks >= last);
            last = snapshot.vent_clicks;
        }
        assert_eq!(last, 8);
    }

    #[test]
    fn test_threshold_exactness() {
        let mut tracker = ProgressTracker::new();
        tracker.record(Counter::TasksCompleted, 4);
        assert_eq!(tracker.evaluate(0), vec![MilestoneId::FirstBlood]);

        // 4 completed: worker (>= 5) must not fire yet
        assert!(tracker.evaluate(0).is_empty());

        tracker.record(Counter::TasksCompleted, 1);
        assert_eq!(tracker.evaluate(0), vec![MilestoneId::Worker]);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut tracker = ProgressTracker::new();
        tracker.record(Counter::TasksDeleted, 1);
        assert_eq!(tracker.evaluate(0), vec![MilestoneId::Quitter]);
        assert!(tracker.evaluate(0).is_empty());
        assert!(tracker.evaluate(0).is_empty());
    }

    #[test]
    fn test_multiple_unlocks_come_in_catalog_order() {
        let mut tracker = ProgressTracker::new();
        tracker.record(Counter::TasksCompleted, 20);
        tracker.record(Counter::TasksDeleted, 2);
        tracker.record(Counter::ExcusesUsed, 3);
        let unlocked = tracker.evaluate(10);
        assert_eq!(
            unlocked,
            vec![
                MilestoneId::FirstBlood,
                MilestoneId::Worker,
                MilestoneId::Psycho,
                MilestoneId::Hoarder,
                MilestoneId::Quitter,
                MilestoneId::Liar,
            ]
        );
    }

    #[test]
    fn test_no_relock_when_pending_drops() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.evaluate(10), vec![MilestoneId::Hoarder]);
        assert!(tracker.evaluate(0).is_empty());
        assert!(tracker.is_unlocked("hoarder").unwrap());
    }

    #[test]
    fn test_unknown_milestone_fails_loudly() {
        let tracker = ProgressTracker::new();
        let err = tracker.is_unlocked("slacker").unwrap_err();
        assert!(matches!(err, ProgressError::UnknownMilestone(id) if id == "slacker"));
    }

    #[test]
    fn test_restore_rejects_unknown_ids() {
        let err = ProgressTracker::restore(Counters::default(), &["first_blood".into(), "bogus".into()])
            .unwrap_err();
        assert!(matches!(err, ProgressError::UnknownMilestone(id) if id == "bogus"));
    }

    #[test]
    fn test_restore_keeps_unlocks() {
        let counters = Counters {
            tasks_completed: 1,
            ..Default::default()
        };
        let mut tracker = ProgressTracker::restore(counters, &["first_blood".into()]).unwrap();
        // first_blood condition still holds but it must not re-fire
        assert!(tracker.evaluate(0).is_empty());
        assert!(tracker.is_unlocked("first_blood").unwrap());
    }
}
