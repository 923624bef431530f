//! Local state storage for ParadisePlanner
//!
//! Everything the app remembers between runs lives in one SQLite file:
//! tasks, notes, usage counters, unlocked milestones, the dossier, and the
//! daily madness cache. The tracker defines the in-memory shapes; this
//! module owns the encoding.

mod db;
mod queries;

pub use db::Db;

use std::path::Path;

use anyhow::Result;

/// Default database file name inside the data dir
pub const DB_FILE: &str = "paradise.db";

/// Handle to the state database
#[derive(Clone)]
pub struct Store {
    pub(crate) db: Db,
}

impl Store {
    /// Open or create the store under the given data directory
    pub fn open(data_dir: &Path) -> Result<Self> {
        let db = Db::open(&data_dir.join(DB_FILE))?;
        Ok(Self { db })
    }

    /// Open the store at an explicit database path
    pub fn open_at(path: &Path) -> Result<Self> {
        let db = Db::open(path)?;
        Ok(Self { db })
    }

    /// Wipe all state
    pub fn reset_all(&self) -> Result<()> {
        self.db.reset_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MadnessEvent, Note, Task};
    use crate::progress::{Counter, Counters};
    use tempfile::tempdir;

    #[test]
    fn test_store_roundtrip() {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        // Tasks
        let task = Task::new("buy milk", "Acquire the white liquid");
        store.insert_task(&task).unwrap();
        assert_eq!(store.pending_task_count().unwrap(), 1);

        let done = store.set_task_completed(&task.id, true).unwrap().unwrap();
        assert!(done.completed);
        assert_eq!(store.pending_task_count().unwrap(), 0);

        // Notes
        let note = Note::new("the pigeons are watching");
        store.insert_note(&note).unwrap();
        assert_eq!(store.list_notes().unwrap().len(), 1);
        assert!(store.delete_note(&note.id).unwrap());

        // Counters
        let counters = Counters {
            tasks_created: 3,
            tasks_completed: 1,
            ..Default::default()
        };
        store.save_counters(&counters).unwrap();
        let loaded = store.load_counters().unwrap();
        assert_eq!(loaded, counters);
        assert_eq!(loaded.get(Counter::TasksCreated), 3);

        // Unlocks
        store.record_unlock("first_blood", 1_700_000_000_000).unwrap();
        store.record_unlock("first_blood", 1_700_000_000_001).unwrap();
        assert_eq!(store.unlocked_ids().unwrap(), vec!["first_blood"]);

        // Profile
        store.set_profile_name("Boris").unwrap();
        store.set_profile_bio("Subject hoards receipts.").unwrap();
        let profile = store.profile().unwrap();
        assert_eq!(profile.name, "Boris");
        assert_eq!(profile.bio, "Subject hoards receipts.");

        // Madness cache
        let event = MadnessEvent {
            title: "Pipe Burst".into(),
            description: "The hot water is now a street feature.".into(),
            buff: "+5 Dampness".into(),
        };
        assert!(store.cached_madness("2025-08-07").unwrap().is_none());
        store.cache_madness("2025-08-07", &event).unwrap();
        assert_eq!(store.cached_madness("2025-08-07").unwrap(), Some(event));
    }

    #[test]
    fn test_delete_missing_task_reports_false() {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        assert!(!store.delete_task("nope").unwrap());
    }
}
