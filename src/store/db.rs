//! SQLite database connection and schema management
//!
//! Manages the `~/.paradise/paradise.db` database with automatic schema
//! migration.

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Database wrapper shared by the store
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    /// Open or create the database at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data dir: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Get a reference to the connection
    pub fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().expect("Database lock poisoned")
    }

    /// Initialize the database schema
    fn init_schema(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(SCHEMA_SQL)?;
        drop(conn);
        self.run_migrations()?;
        Ok(())
    }

    /// Run any pending migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn();

        let version: i32 = conn
            .query_row(
                "SELECT COALESCE(MAX(version), 0) FROM schema_version",
                [],
                |r| r.get(0),
            )
            .unwrap_or(0);

        // Migration 2: tasks gained a difficulty column
        if version < 2 {
            let has_difficulty: bool = conn
                .prepare("SELECT COUNT(*) FROM pragma_table_info('tasks') WHERE name = 'difficulty'")
                .and_then(|mut s| s.query_row([], |r| r.get::<_, i32>(0)))
                .map(|c| c > 0)
                .unwrap_or(false);

            if !has_difficulty {
                conn.execute_batch(
                    "ALTER TABLE tasks ADD COLUMN difficulty TEXT NOT NULL DEFAULT 'meh';",
                )?;
            }

            conn.execute("INSERT OR REPLACE INTO schema_version VALUES (2)", [])?;
        }

        Ok(())
    }

    /// Delete all application state (tasks, notes, counters, unlocks, cache)
    pub fn reset_all(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(
            r#"
            DELETE FROM tasks;
            DELETE FROM notes;
            DELETE FROM counters;
            DELETE FROM achievements;
            DELETE FROM madness_cache;
            UPDATE profile SET name = 'Dude', bio = 'No write-up on file.' WHERE id = 1;
            "#,
        )?;
        Ok(())
    }
}

/// SQL schema for the state database
const SCHEMA_SQL: &str = r#"
-- Task list (one row per chore)
CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY,
    original_text TEXT NOT NULL,
    absurd_description TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0,
    created_at INTEGER NOT NULL,
    difficulty TEXT NOT NULL DEFAULT 'meh'
);
CREATE INDEX IF NOT EXISTS idx_tasks_created ON tasks(created_at);

-- Notes pad
CREATE TABLE IF NOT EXISTS notes (
    id TEXT PRIMARY KEY,
    content TEXT NOT NULL,
    created_at INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_notes_created ON notes(created_at);

-- Monotonic usage counters (name -> value)
CREATE TABLE IF NOT EXISTS counters (
    name TEXT PRIMARY KEY,
    value INTEGER NOT NULL DEFAULT 0
);

-- Unlocked milestones
CREATE TABLE IF NOT EXISTS achievements (
    id TEXT PRIMARY KEY,
    unlocked_at INTEGER NOT NULL
);

-- Dossier (singleton row)
CREATE TABLE IF NOT EXISTS profile (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    name TEXT NOT NULL DEFAULT 'Dude',
    bio TEXT NOT NULL DEFAULT 'No write-up on file.'
);
INSERT OR IGNORE INTO profile (id) VALUES (1);

-- Daily madness cache (one event per calendar day)
CREATE TABLE IF NOT EXISTS madness_cache (
    day_bucket TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    buff TEXT NOT NULL,
    fetched_at INTEGER NOT NULL
);

-- Schema version
CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY);
INSERT OR IGNORE INTO schema_version VALUES (2);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_and_init() {
        let dir = tempdir().unwrap();
        let db = Db::open(&dir.path().join("test.db")).unwrap();

        let conn = db.conn();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap();
        let tables: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        for table in ["tasks", "notes", "counters", "achievements", "profile", "madness_cache"] {
            assert!(tables.contains(&table.to_string()), "missing table {table}");
        }
    }

    #[test]
    fn test_reopen_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        drop(Db::open(&path).unwrap());
        // schema init and migrations must tolerate an existing database
        assert!(Db::open(&path).is_ok());
    }
}
