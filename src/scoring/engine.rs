//! Engine wiring: store lookup, bootstrap on miss, score against the
//! pre-update mean, fold, explicit flush.

use super::{cosine_distance, AnomalyReport, ProfileBreakdown, NEUTRAL_SCORE};
use crate::error::ProfilerError;
use crate::features::{hour_of, observation_vector, FeatureExtractor};
use crate::profile::{HistoryBootstrapper, ProfileAggregate, ProfileStore};
use crate::storage::SnapshotStore;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

/// Online behavioural profiling engine.
///
/// Every scoring call mutates the scored author's aggregate, so two calls
/// for the same author are order-sensitive and must not interleave. The
/// global store lock serializes all scoring calls, which satisfies that
/// (trading away cross-author parallelism for simplicity). The only
/// blocking I/O on the scoring path is the one-time history read for a
/// cold author; persistence happens only in [`flush`](Self::flush).
pub struct ProfilerEngine {
    extractor: FeatureExtractor,
    bootstrap: HistoryBootstrapper,
    store: Mutex<ProfileStore>,
    snapshot: SnapshotStore,
}

impl ProfilerEngine {
    /// Open the snapshot store at `snapshot_path` and load any persisted
    /// profiles. A corrupt snapshot is fatal here; a missing one means a
    /// first run and an empty store.
    pub fn open(
        extractor: FeatureExtractor,
        bootstrap: HistoryBootstrapper,
        snapshot_path: &Path,
    ) -> Result<Self, ProfilerError> {
        let snapshot = SnapshotStore::open(snapshot_path)?;
        let profiles = snapshot.load_all()?;
        if !profiles.is_empty() {
            info!(profiles = profiles.len(), "loaded profile snapshot");
        }
        Ok(Self {
            extractor,
            bootstrap,
            store: Mutex::new(ProfileStore::from_map(profiles)),
            snapshot,
        })
    }

    /// Score `text` + `timestamp` against `author_id`'s current mean
    /// profile, then fold the observation in. The profile afterwards always
    /// reflects history including the content just scored. Returns a value
    /// in `[0, 1]`.
    pub fn score_and_update(
        &self,
        author_id: &str,
        text: &str,
        timestamp: &str,
    ) -> Result<f64, ProfilerError> {
        Ok(self.analyze(author_id, text, timestamp)?.anomaly_score)
    }

    /// As [`score_and_update`](Self::score_and_update), returning the full
    /// report with the baseline and observation profiles.
    pub fn analyze(
        &self,
        author_id: &str,
        text: &str,
        timestamp: &str,
    ) -> Result<AnomalyReport, ProfilerError> {
        let mut store = self.store.lock().expect("store lock");
        let profile = store.get_or_try_insert(author_id, || {
            self.bootstrap.bootstrap(&self.extractor, author_id)
        })?;

        let baseline_observations = profile.total_observations;
        let features = self.extractor.extract(text);
        let hour = hour_of(timestamp);
        let observation = observation_vector(&features, hour);

        let (anomaly_score, baseline, summary) = match profile.mean_vector() {
            None => (
                NEUTRAL_SCORE,
                None,
                "profile is new or empty; anomaly score is neutral".to_string(),
            ),
            Some(mean) => {
                // Cosine distance over vectors with a signed sentiment
                // component is bounded by [0, 2]; distances above 1
                // saturate so the score stays on the same 0-1 scale as
                // the other signal sources.
                let score = cosine_distance(&observation, &mean).clamp(0.0, 1.0);
                let summary = format!(
                    "cosine distance against a baseline of {baseline_observations} \
                     observations (higher is more anomalous)"
                );
                (score, Some(ProfileBreakdown::from_vector(&mean)), summary)
            }
        };

        // Scored against the pre-update state; fold afterwards, on both
        // branches, exactly once per observation.
        profile.fold(&features, hour);

        debug!(author_id, anomaly_score, baseline_observations, "scored observation");
        Ok(AnomalyReport {
            author_id: author_id.to_string(),
            anomaly_score,
            baseline_observations,
            summary,
            baseline,
            observation: ProfileBreakdown::from_vector(&observation),
        })
    }

    /// Persist the whole store as one atomic snapshot. This is an explicit
    /// checkpoint invoked by the caller once a session's work is done;
    /// nothing flushes automatically.
    pub fn flush(&self) -> Result<(), ProfilerError> {
        let store = self.store.lock().expect("store lock");
        self.snapshot.flush_all(store.as_map())
    }

    /// Current aggregate for an author, if cached.
    pub fn profile(&self, author_id: &str) -> Option<ProfileAggregate> {
        self.store
            .lock()
            .expect("store lock")
            .get(author_id)
            .cloned()
    }
}
