//! SQLite-backed key-value cache for the last study profile and schedule.
//!
//! The engine itself is persistence-agnostic; this collaborator only
//! caches the most recent `StudyData` and `ScheduleData` across sessions,
//! under the same keys the original client used.

use rusqlite::{params, Connection};

use super::data_dir;
use crate::error::{Result, StorageError};
use crate::types::{ScheduleData, StudyData};

/// Cache key for the last submitted study profile.
pub const STUDY_DATA_KEY: &str = "studyData";

/// Cache key for the last generated schedule.
pub const SCHEDULE_DATA_KEY: &str = "scheduleData";

/// SQLite key-value cache.
pub struct CacheDb {
    conn: Connection,
}

impl CacheDb {
    /// Open the cache at `~/.config/studyai/studyai.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("studyai.db");
        let conn = Connection::open(&path)
            .map_err(|source| StorageError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate().map_err(StorageError::from)?;
        Ok(db)
    }

    /// Open an in-memory cache (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|source| StorageError::OpenFailed {
                path: ":memory:".into(),
                source,
            })?;
        let db = Self { conn };
        db.migrate().map_err(StorageError::from)?;
        Ok(db)
    }

    fn migrate(&self) -> std::result::Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv WHERE key = ?1")
            .map_err(StorageError::from)?;
        let mut rows = stmt
            .query_map(params![key], |row| row.get::<_, String>(0))
            .map_err(StorageError::from)?;
        match rows.next() {
            Some(value) => Ok(Some(value.map_err(StorageError::from)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map_err(StorageError::from)?;
        Ok(())
    }

    /// Remove a value from the kv store.
    pub fn kv_delete(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(StorageError::from)?;
        Ok(())
    }

    /// Load the cached study profile, if any.
    pub fn load_study_data(&self) -> Result<Option<StudyData>> {
        match self.kv_get(STUDY_DATA_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Cache a study profile.
    pub fn store_study_data(&self, data: &StudyData) -> Result<()> {
        self.kv_set(STUDY_DATA_KEY, &serde_json::to_string(data)?)
    }

    /// Load the cached schedule, if any.
    pub fn load_schedule(&self) -> Result<Option<ScheduleData>> {
        match self.kv_get(SCHEDULE_DATA_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Cache a generated schedule.
    pub fn store_schedule(&self, schedule: &ScheduleData) -> Result<()> {
        self.kv_set(SCHEDULE_DATA_KEY, &serde_json::to_string(schedule)?)
    }

    /// Drop both cached values.
    pub fn clear(&self) -> Result<()> {
        self.kv_delete(STUDY_DATA_KEY)?;
        self.kv_delete(SCHEDULE_DATA_KEY)
    }
}
