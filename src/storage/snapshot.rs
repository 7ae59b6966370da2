//! SQLite-backed snapshot of the whole profile mapping: one row per author,
//! the aggregate itself stored as JSON so floats round-trip exactly.
//!
//! Durability model is whole-snapshot, not write-ahead: a flush replaces
//! the entire mapping in one transaction, and anything scored since the
//! last flush is lost on crash.

use crate::error::ProfilerError;
use crate::profile::ProfileAggregate;
use chrono::Utc;
use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

pub struct SnapshotStore {
    conn: Mutex<Connection>,
}

impl SnapshotStore {
    /// Open or create the snapshot database at `path`, creating parent
    /// directories as needed. A missing file is a first run, not an error.
    pub fn open(path: &Path) -> Result<Self, ProfilerError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS profiles (
                author_id TEXT PRIMARY KEY,
                profile_json TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Load the full mapping. A row that fails to deserialize is fatal:
    /// the snapshot is corrupt and must not silently shrink the cache.
    pub fn load_all(&self) -> Result<HashMap<String, ProfileAggregate>, ProfilerError> {
        let conn = self.conn.lock().expect("snapshot lock");
        let mut stmt = conn.prepare("SELECT author_id, profile_json FROM profiles")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut out = HashMap::new();
        for row in rows {
            let (author_id, json) = row?;
            let aggregate: ProfileAggregate =
                serde_json::from_str(&json).map_err(|source| ProfilerError::CorruptSnapshot {
                    author_id: author_id.clone(),
                    source,
                })?;
            out.insert(author_id, aggregate);
        }
        Ok(out)
    }

    /// Replace the stored mapping with `profiles` in a single transaction.
    pub fn flush_all(
        &self,
        profiles: &HashMap<String, ProfileAggregate>,
    ) -> Result<(), ProfilerError> {
        let mut conn = self.conn.lock().expect("snapshot lock");
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM profiles", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO profiles (author_id, profile_json, updated_at) VALUES (?1, ?2, ?3)",
            )?;
            let updated_at = Utc::now().to_rfc3339();
            for (author_id, aggregate) in profiles {
                let json = serde_json::to_string(aggregate)?;
                stmt.execute(params![author_id, json, updated_at])?;
            }
        }
        tx.commit()?;
        info!(profiles = profiles.len(), "profile snapshot flushed");
        Ok(())
    }
}
