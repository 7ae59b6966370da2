//! Cold-start profile construction from the historical corpus.

use super::ProfileAggregate;
use crate::error::ProfilerError;
use crate::features::{hour_of, FeatureExtractor};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// One row of the historical corpus. Extra columns are ignored. The source
/// data encodes `inbound` as a `True`/`False` string, so it is parsed
/// case-insensitively rather than as a native boolean.
#[derive(Debug, Deserialize)]
struct HistoryRecord {
    author_id: String,
    inbound: String,
    created_at: String,
    #[serde(default)]
    text: Option<String>,
}

impl HistoryRecord {
    /// Outbound records are the ones actually authored by the account
    /// being profiled; inbound records addressed to it must never shape
    /// its profile. Only an explicit `false` counts as outbound, so a
    /// malformed or empty flag cannot slip a row into the baseline.
    fn is_outbound(&self) -> bool {
        self.inbound.trim().eq_ignore_ascii_case("false")
    }
}

/// Builds a fresh aggregate for an author from its historical records,
/// read once per cold author.
pub struct HistoryBootstrapper {
    corpus_path: PathBuf,
}

impl HistoryBootstrapper {
    pub fn new(corpus_path: impl Into<PathBuf>) -> Self {
        Self {
            corpus_path: corpus_path.into(),
        }
    }

    /// Fold every outbound record for `author_id`, in corpus order, into a
    /// fresh aggregate. An unreadable corpus is an error; an author with no
    /// matching records is not, and yields an empty aggregate.
    pub fn bootstrap(
        &self,
        extractor: &FeatureExtractor,
        author_id: &str,
    ) -> Result<ProfileAggregate, ProfilerError> {
        let mut reader =
            csv::Reader::from_path(&self.corpus_path).map_err(|source| ProfilerError::History {
                path: self.corpus_path.clone(),
                source,
            })?;

        let mut aggregate = ProfileAggregate::new();
        let mut matched = 0u64;
        for row in reader.deserialize::<HistoryRecord>() {
            let record = row.map_err(|source| ProfilerError::History {
                path: self.corpus_path.clone(),
                source,
            })?;
            if record.author_id != author_id || !record.is_outbound() {
                continue;
            }
            let text = record.text.as_deref().unwrap_or("");
            aggregate.fold(&extractor.extract(text), hour_of(&record.created_at));
            matched += 1;
        }

        if matched == 0 {
            warn!(author_id, "no outbound history; starting with empty profile");
        } else {
            info!(author_id, records = matched, "bootstrapped profile from history");
        }
        Ok(aggregate)
    }
}
