//! Per-author profile aggregates, history bootstrap, and the in-memory store.

mod bootstrap;
mod store;

pub use bootstrap::HistoryBootstrapper;
pub use store::ProfileStore;

use crate::features::{StylometricFeatures, COMBINED_DIM, HOURS, STYLOMETRIC_DIM};
use serde::{Deserialize, Serialize};

/// Running aggregate of every observation folded in for one author.
///
/// `feature_sums` and `hourly_counts` are always consistent with exactly
/// `total_observations` calls to [`fold`](Self::fold); there is no
/// partial-update state. Because the accumulators are pure sums, the final
/// state is independent of fold order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAggregate {
    pub feature_sums: [f64; STYLOMETRIC_DIM],
    pub hourly_counts: [f64; HOURS],
    pub total_observations: u64,
}

impl Default for ProfileAggregate {
    fn default() -> Self {
        Self {
            feature_sums: [0.0; STYLOMETRIC_DIM],
            hourly_counts: [0.0; HOURS],
            total_observations: 0,
        }
    }
}

impl ProfileAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observation in. The hourly bucket is only touched when the
    /// hour is known; `total_observations` is incremented unconditionally.
    pub fn fold(&mut self, features: &StylometricFeatures, hour: Option<u32>) {
        let v = features.to_array();
        for (sum, x) in self.feature_sums.iter_mut().zip(v.iter()) {
            *sum += x;
        }
        if let Some(h) = hour {
            if let Some(slot) = self.hourly_counts.get_mut(h as usize) {
                *slot += 1.0;
            }
        }
        self.total_observations += 1;
    }

    /// Mean profile vector: element-wise `feature_sums / n` concatenated
    /// with `hourly_counts / n`. `None` when nothing has been folded in —
    /// an empty aggregate has no defined mean.
    pub fn mean_vector(&self) -> Option<[f64; COMBINED_DIM]> {
        if self.total_observations == 0 {
            return None;
        }
        let n = self.total_observations as f64;
        let mut v = [0.0; COMBINED_DIM];
        for (slot, sum) in v.iter_mut().zip(self.feature_sums.iter()) {
            *slot = sum / n;
        }
        for (slot, count) in v[STYLOMETRIC_DIM..].iter_mut().zip(self.hourly_counts.iter()) {
            *slot = count / n;
        }
        Some(v)
    }
}
