//! Engine configuration: historical corpus location, snapshot store, logging.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilerConfig {
    /// Data directory (profile snapshot lives here)
    pub data_dir: PathBuf,
    /// Historical corpus CSV with at least author_id, inbound, created_at, text
    pub history_path: PathBuf,
    /// Snapshot database file name inside `data_dir`
    pub snapshot_file: String,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets"),
            history_path: PathBuf::from("data/history.csv"),
            snapshot_file: "profiles.db".to_string(),
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl ProfilerConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<ProfilerConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }

    /// Full path of the snapshot database.
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(&self.snapshot_file)
    }
}
