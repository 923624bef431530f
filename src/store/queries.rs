//! Read/write operations on the state database

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{OptionalExtension, params};

use super::Store;
use crate::domain::{Difficulty, MadnessEvent, Note, Profile, Task};
use crate::progress::{Counter, Counters};

impl Store {
    // ========================================
    // TASKS
    // ========================================

    /// Insert a new task
    pub fn insert_task(&self, task: &Task) -> Result<()> {
        let conn = self.db.conn();
        conn.execute(
            r#"INSERT INTO tasks (id, original_text, absurd_description, completed, created_at, difficulty)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
            params![
                task.id,
                task.original_text,
                task.absurd_description,
                task.completed,
                task.created_at,
                task.difficulty.as_str(),
            ],
        )?;
        Ok(())
    }

    /// Fetch a task by id
    pub fn get_task(&self, id: &str) -> Result<Option<Task>> {
        let conn = self.db.conn();
        conn.query_row(
            "SELECT id, original_text, absurd_description, completed, created_at, difficulty
             FROM tasks WHERE id = ?1",
            [id],
            row_to_task,
        )
        .optional()
        .context("Failed to load task")
    }

    /// All tasks, newest first
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            "SELECT id, original_text, absurd_description, completed, created_at, difficulty
             FROM tasks ORDER BY created_at DESC",
        )?;
        let tasks = stmt
            .query_map([], row_to_task)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tasks)
    }

    /// Flip a task's completed flag; returns the updated task
    pub fn set_task_completed(&self, id: &str, completed: bool) -> Result<Option<Task>> {
        let conn = self.db.conn();
        conn.execute(
            "UPDATE tasks SET completed = ?2 WHERE id = ?1",
            params![id, completed],
        )?;
        drop(conn);
        self.get_task(id)
    }

    /// Remove a task; returns whether anything was deleted
    pub fn delete_task(&self, id: &str) -> Result<bool> {
        let conn = self.db.conn();
        let deleted = conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
        Ok(deleted > 0)
    }

    /// Count of not-yet-completed tasks (the tracker's `pending_tasks` input)
    pub fn pending_task_count(&self) -> Result<usize> {
        let conn = self.db.conn();
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM tasks WHERE completed = 0", [], |r| {
                r.get(0)
            })?;
        Ok(count as usize)
    }

    // ========================================
    // NOTES
    // ========================================

    /// Insert a note
    pub fn insert_note(&self, note: &Note) -> Result<()> {
        let conn = self.db.conn();
        conn.execute(
            "INSERT INTO notes (id, content, created_at) VALUES (?1, ?2, ?3)",
            params![note.id, note.content, note.created_at],
        )?;
        Ok(())
    }

    /// All notes, newest first
    pub fn list_notes(&self) -> Result<Vec<Note>> {
        let conn = self.db.conn();
        let mut stmt =
            conn.prepare("SELECT id, content, created_at FROM notes ORDER BY created_at DESC")?;
        let notes = stmt
            .query_map([], |row| {
                Ok(Note {
                    id: row.get(0)?,
                    content: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notes)
    }

    /// Remove a note; returns whether anything was deleted
    pub fn delete_note(&self, id: &str) -> Result<bool> {
        let conn = self.db.conn();
        let deleted = conn.execute("DELETE FROM notes WHERE id = ?1", [id])?;
        Ok(deleted > 0)
    }

    // ========================================
    // COUNTERS & UNLOCKS
    // ========================================

    /// Persist the full counter snapshot
    pub fn save_counters(&self, counters: &Counters) -> Result<()> {
        let conn = self.db.conn();
        for counter in Counter::all() {
            conn.execute(
                r#"INSERT INTO counters (name, value) VALUES (?1, ?2)
                   ON CONFLICT(name) DO UPDATE SET value = ?2"#,
                params![counter.as_str(), counters.get(*counter)],
            )?;
        }
        Ok(())
    }

    /// Load the counter snapshot; missing rows read as zero
    pub fn load_counters(&self) -> Result<Counters> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare("SELECT name, value FROM counters")?;
        let mut counters = Counters::default();
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;
        for row in rows {
            let (name, value) = row?;
            if let Some(counter) = Counter::from_str(&name) {
                counters.add(counter, value.max(0) as u64);
            }
        }
        Ok(counters)
    }

    /// Record a milestone unlock (idempotent)
    pub fn record_unlock(&self, id: &str, unlocked_at: i64) -> Result<()> {
        let conn = self.db.conn();
        conn.execute(
            "INSERT OR IGNORE INTO achievements (id, unlocked_at) VALUES (?1, ?2)",
            params![id, unlocked_at],
        )?;
        Ok(())
    }

    /// All unlocked milestone ids
    pub fn unlocked_ids(&self) -> Result<Vec<String>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare("SELECT id FROM achievements ORDER BY unlocked_at")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(ids)
    }

    // ========================================
    // PROFILE
    // ========================================

    /// Load the dossier
    pub fn profile(&self) -> Result<Profile> {
        let conn = self.db.conn();
        conn.query_row("SELECT name, bio FROM profile WHERE id = 1", [], |row| {
            Ok(Profile {
                name: row.get(0)?,
                bio: row.get(1)?,
            })
        })
        .context("Failed to load profile")
    }

    /// Rename the suspect
    pub fn set_profile_name(&self, name: &str) -> Result<()> {
        let conn = self.db.conn();
        conn.execute("UPDATE profile SET name = ?1 WHERE id = 1", [name])?;
        Ok(())
    }

    /// Replace the psych write-up
    pub fn set_profile_bio(&self, bio: &str) -> Result<()> {
        let conn = self.db.conn();
        conn.execute("UPDATE profile SET bio = ?1 WHERE id = 1", [bio])?;
        Ok(())
    }

    // ========================================
    // MADNESS CACHE
    // ========================================

    /// Cached event for the given day bucket, if any
    pub fn cached_madness(&self, day_bucket: &str) -> Result<Option<MadnessEvent>> {
        let conn = self.db.conn();
        conn.query_row(
            "SELECT title, description, buff FROM madness_cache WHERE day_bucket = ?1",
            [day_bucket],
            |row| {
                Ok(MadnessEvent {
                    title: row.get(0)?,
                    description: row.get(1)?,
                    buff: row.get(2)?,
                })
            },
        )
        .optional()
        .context("Failed to load madness cache")
    }

    /// Store (or overwrite) the event for a day bucket
    pub fn cache_madness(&self, day_bucket: &str, event: &MadnessEvent) -> Result<()> {
        let conn = self.db.conn();
        conn.execute(
            r#"INSERT INTO madness_cache (day_bucket, title, description, buff, fetched_at)
               VALUES (?1, ?2, ?3, ?4, ?5)
               ON CONFLICT(day_bucket) DO UPDATE SET
                   title = ?2, description = ?3, buff = ?4, fetched_at = ?5"#,
            params![
                day_bucket,
                event.title,
                event.description,
                event.buff,
                Utc::now().timestamp_millis(),
            ],
        )?;
        Ok(())
    }
}

fn row_to_task(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    let difficulty: String = row.get(5)?;
    Ok(Task {
        id: row.get(0)?,
        original_text: row.get(1)?,
        absurd_description: row.get(2)?,
        completed: row.get(3)?,
        created_at: row.get(4)?,
        difficulty: Difficulty::from_str(&difficulty).unwrap_or(Difficulty::Meh),
    })
}
