//! Application session - the host layer around the two cores
//!
//! Owns the store, the progress tracker, and the oracle. Every handler that
//! touches a counter follows the same shape: mutate state, `record`, then an
//! explicit `evaluate` against the current pending-task count, persisting and
//! returning whatever newly unlocked.

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::{MadnessEvent, Note, Profile, Task};
use crate::oracle::{Oracle, SpeechClip};
use crate::progress::{Counter, Counters, Milestone, ProgressTracker};
use crate::store::Store;
use crate::stylize::{Frame, SeededNoise, StylizeError, stylize};

/// Events the notification layer renders after a mutation
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    MilestoneUnlocked {
        milestone: &'static Milestone,
        unlocked_at: i64,
    },
}

/// One running app session: store + tracker + oracle
pub struct Session {
    store: Store,
    tracker: ProgressTracker,
    oracle: Oracle,
    voice_enabled: bool,
    voice: String,
}

impl Session {
    /// Open the session described by the config, restoring tracker state
    /// from the store
    pub fn open(config: &Config) -> Result<Self> {
        let store = Store::open(&config.data_dir())?;
        Self::with_store(config, store)
    }

    /// Open a session over an existing store (tests use this with a tempdir)
    pub fn with_store(config: &Config, store: Store) -> Result<Self> {
        let counters = store.load_counters()?;
        let unlocked = store.unlocked_ids()?;
        let tracker = ProgressTracker::restore(counters, &unlocked)
            .context("Persisted milestone state is corrupt")?;

        let oracle = Oracle::new(config.settings.oracle.clone(), Config::api_key());

        Ok(Self {
            store,
            tracker,
            oracle,
            voice_enabled: config.settings.voice.enabled,
            voice: config.settings.voice.voice.clone(),
        })
    }

    // ========================================
    // TASKS
    // ========================================

    /// Add a task; the oracle rewrites it as a quest objective
    pub fn add_task(&mut self, text: &str) -> Result<(Task, Vec<ProgressEvent>)> {
        let absurd = self.oracle.absurd_task(text);
        let task = Task::new(text, absurd);
        self.store.insert_task(&task)?;
        self.tracker.record(Counter::TasksCreated, 1);
        let events = self.after_mutation()?;
        info!(task = %task.id, "task added");
        Ok((task, events))
    }

    /// Toggle completion. Completing counts toward `tasks_completed`;
    /// un-completing never decrements anything (counters are append-only).
    pub fn toggle_task(&mut self, id: &str) -> Result<(Task, Vec<ProgressEvent>)> {
        let task = self
            .store
            .get_task(id)?
            .with_context(|| format!("No task with id {id}"))?;

        let now_completed = !task.completed;
        let task = self
            .store
            .set_task_completed(id, now_completed)?
            .with_context(|| format!("No task with id {id}"))?;

        if now_completed {
            self.tracker.record(Counter::TasksCompleted, 1);
        }
        let events = self.after_mutation()?;
        Ok((task, events))
    }

    /// Delete a task outright (the quitter's path)
    pub fn delete_task(&mut self, id: &str) -> Result<Vec<ProgressEvent>> {
        if !self.store.delete_task(id)? {
            anyhow::bail!("No task with id {id}");
        }
        self.tracker.record(Counter::TasksDeleted, 1);
        self.after_mutation()
    }

    /// Ditch a task with an oracle-supplied excuse
    pub fn excuse_task(&mut self, id: &str) -> Result<(String, Vec<ProgressEvent>)> {
        let task = self
            .store
            .get_task(id)?
            .with_context(|| format!("No task with id {id}"))?;

        let excuse = self.oracle.excuse(&task.original_text);
        self.store.delete_task(id)?;
        self.tracker.record(Counter::ExcusesUsed, 1);
        let events = self.after_mutation()?;
        Ok((excuse, events))
    }

    /// All tasks, newest first
    pub fn tasks(&self) -> Result<Vec<Task>> {
        self.store.list_tasks()
    }

    // ========================================
    // VENT / MADNESS / NOTES / DOSSIER
    // ========================================

    /// Register `clicks` presses of the vent button and fetch a fresh roast
    pub fn vent(&mut self, clicks: u64) -> Result<(String, Vec<ProgressEvent>)> {
        self.tracker.record(Counter::VentClicks, clicks);
        let events = self.after_mutation()?;
        let roast = self.oracle.insult();
        Ok((roast, events))
    }

    /// Today's madness event, fetched at most once per calendar day unless
    /// `reroll` forces a fresh one
    pub fn madness(&mut self, reroll: bool) -> Result<MadnessEvent> {
        let bucket = today_bucket();
        if !reroll {
            if let Some(cached) = self.store.cached_madness(&bucket)? {
                debug!(day = %bucket, "madness cache hit");
                return Ok(cached);
            }
        }
        let event = self.oracle.madness_event();
        self.store.cache_madness(&bucket, &event)?;
        Ok(event)
    }

    /// Add a note to the pad
    pub fn add_note(&mut self, content: &str) -> Result<Note> {
        let note = Note::new(content);
        self.store.insert_note(&note)?;
        Ok(note)
    }

    /// All notes, newest first
    pub fn notes(&self) -> Result<Vec<Note>> {
        self.store.list_notes()
    }

    /// Shred a note
    pub fn delete_note(&mut self, id: &str) -> Result<()> {
        if !self.store.delete_note(id)? {
            anyhow::bail!("No note with id {id}");
        }
        Ok(())
    }

    /// Current dossier
    pub fn profile(&self) -> Result<Profile> {
        self.store.profile()
    }

    /// Rename the suspect
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.store.set_profile_name(name)
    }

    /// Ask the oracle for a fresh psych write-up and persist it
    pub fn rewrite_bio(&mut self) -> Result<String> {
        let profile = self.store.profile()?;
        let bio = self.oracle.psych_profile(&profile.name);
        self.store.set_profile_bio(&bio)?;
        Ok(bio)
    }

    // ========================================
    // CAMERA / VOICE / PROGRESS VIEWS
    // ========================================

    /// Stylize a captured frame, stamping it with the local time
    pub fn snap(&self, frame: &Frame, seed: Option<u64>) -> Result<Frame, StylizeError> {
        let noise = match seed {
            Some(seed) => SeededNoise::new(seed),
            None => SeededNoise::from_entropy(),
        };
        let stamp = Local::now().format("%d.%m.%Y %H:%M:%S").to_string();
        stylize(frame, &stamp, &noise)
    }

    /// Speak a line if voice is enabled; `None` otherwise
    pub fn speak(&self, text: &str) -> Option<SpeechClip> {
        if !self.voice_enabled {
            return None;
        }
        self.oracle.speak(text, &self.voice)
    }

    /// Counter snapshot for the dossier screen
    pub fn counters(&self) -> &Counters {
        self.tracker.counters()
    }

    /// Every milestone with its unlock state, in catalog order
    pub fn milestones(&self) -> Vec<(&'static Milestone, bool)> {
        crate::progress::CATALOG
            .iter()
            .map(|m| {
                let unlocked = self
                    .tracker
                    .is_unlocked(m.id.as_str())
                    .expect("catalog ids are always known");
                (m, unlocked)
            })
            .collect()
    }

    /// Evaluate the catalog and persist counters plus any fresh unlocks
    fn after_mutation(&mut self) -> Result<Vec<ProgressEvent>> {
        let pending = self.store.pending_task_count()?;
        let newly_unlocked = self.tracker.evaluate(pending);
        let now = Utc::now().timestamp_millis();

        self.store.save_counters(self.tracker.counters())?;
        let mut events = Vec::with_capacity(newly_unlocked.len());
        for id in newly_unlocked {
            self.store.record_unlock(id.as_str(), now)?;
            info!(milestone = id.as_str(), "milestone unlocked");
            events.push(ProgressEvent::MilestoneUnlocked {
                milestone: Milestone::get(id),
                unlocked_at: now,
            });
        }
        Ok(events)
    }
}

/// Local-date bucket ("YYYY-MM-DD") the daily madness cache is keyed by
fn today_bucket() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_bucket_shape() {
        let bucket = today_bucket();
        assert_eq!(bucket.len(), 10);
        assert_eq!(bucket.chars().filter(|c| *c == '-').count(), 2);
    }
}
