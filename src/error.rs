//! Engine error types. Non-fatal degradations (unparseable timestamps,
//! empty text, an author with no history) are handled in place and never
//! reach this enum.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfilerError {
    /// The historical corpus could not be opened or read. Fatal for the
    /// profiling request: without history access there is nothing to
    /// profile against, and a silently neutral score would hide that.
    #[error("history corpus unreadable at {path}: {source}")]
    History {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("snapshot store error: {0}")]
    Snapshot(#[from] rusqlite::Error),

    #[error("snapshot io error: {0}")]
    SnapshotIo(#[from] std::io::Error),

    /// A persisted profile row failed to deserialize. Fatal at store
    /// initialization rather than skipped, so a damaged snapshot is
    /// noticed instead of quietly shrinking the cache.
    #[error("corrupt profile snapshot for '{author_id}': {source}")]
    CorruptSnapshot {
        author_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("profile serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
