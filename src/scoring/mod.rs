//! Anomaly scoring: cosine distance between a new observation and the
//! author's running mean profile.

mod engine;

pub use engine::ProfilerEngine;

use crate::features::{STYLOMETRIC_DIM, STYLOMETRIC_FIELDS};
use serde::{Deserialize, Serialize};

/// Score returned when an author has no observations to compare against.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Cosine distance (1 − cosine similarity) between two equal-length
/// vectors. A zero vector has no direction, so comparisons involving one
/// are treated as maximal distance rather than a division by zero.
pub fn cosine_distance(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    1.0 - dot / (norm_a * norm_b)
}

/// A combined vector split back into named stylometric fields and the
/// 24 hourly slots, for report output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileBreakdown {
    /// Field name → value, in canonical stylometric order.
    pub stylometric: Vec<(String, f64)>,
    pub temporal: Vec<f64>,
}

impl ProfileBreakdown {
    pub fn from_vector(v: &[f64]) -> Self {
        let stylometric = STYLOMETRIC_FIELDS
            .iter()
            .zip(v.iter())
            .map(|(name, x)| ((*name).to_string(), *x))
            .collect();
        let temporal = v[STYLOMETRIC_DIM.min(v.len())..].to_vec();
        Self {
            stylometric,
            temporal,
        }
    }
}

/// Detailed outcome of one scoring call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyReport {
    pub author_id: String,
    /// Cosine distance clamped to `[0, 1]`; exactly [`NEUTRAL_SCORE`] for
    /// a brand-new author with nothing to compare against.
    pub anomaly_score: f64,
    /// Observations in the baseline this score was computed against
    /// (before the new observation was folded in).
    pub baseline_observations: u64,
    pub summary: String,
    /// Mean profile at scoring time; absent for a brand-new author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<ProfileBreakdown>,
    /// The new observation's own profile.
    pub observation: ProfileBreakdown,
}
