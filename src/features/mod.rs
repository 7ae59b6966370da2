//! Stylometric and temporal feature extraction from a single text sample.

mod stylometric;
mod temporal;

pub use stylometric::FeatureExtractor;
pub use temporal::hour_of;

use serde::{Deserialize, Serialize};

/// Number of stylometric features.
pub const STYLOMETRIC_DIM: usize = 10;
/// Hour-of-day buckets.
pub const HOURS: usize = 24;
/// Length of a combined observation vector: stylometric features followed
/// by the hourly slots.
pub const COMBINED_DIM: usize = STYLOMETRIC_DIM + HOURS;

/// Canonical stylometric field order. Defined once and consumed by both
/// extraction ([`StylometricFeatures::to_array`]) and the aggregate math,
/// so the alignment between a vector and the running sums cannot drift.
pub const STYLOMETRIC_FIELDS: [&str; STYLOMETRIC_DIM] = [
    "text_length",
    "word_count",
    "avg_word_length",
    "type_token_ratio",
    "mention_count",
    "hashtag_count",
    "sentiment_compound",
    "uppercase_word_ratio",
    "exclamation_count",
    "question_count",
];

/// Stylometric features of one text sample. Degenerate input (empty text,
/// no word tokens) is the all-zero value, never a shorter vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StylometricFeatures {
    pub text_length: f64,
    pub word_count: f64,
    pub avg_word_length: f64,
    pub type_token_ratio: f64,
    pub mention_count: f64,
    pub hashtag_count: f64,
    pub sentiment_compound: f64,
    pub uppercase_word_ratio: f64,
    pub exclamation_count: f64,
    pub question_count: f64,
}

impl StylometricFeatures {
    /// Fields in [`STYLOMETRIC_FIELDS`] order.
    pub fn to_array(&self) -> [f64; STYLOMETRIC_DIM] {
        [
            self.text_length,
            self.word_count,
            self.avg_word_length,
            self.type_token_ratio,
            self.mention_count,
            self.hashtag_count,
            self.sentiment_compound,
            self.uppercase_word_ratio,
            self.exclamation_count,
            self.question_count,
        ]
    }
}

/// Combined observation vector for a single new text: stylometric features
/// plus a one-hot hour slot (all-zero temporal part when the timestamp did
/// not parse).
pub fn observation_vector(
    features: &StylometricFeatures,
    hour: Option<u32>,
) -> [f64; COMBINED_DIM] {
    let mut v = [0.0; COMBINED_DIM];
    v[..STYLOMETRIC_DIM].copy_from_slice(&features.to_array());
    if let Some(h) = hour {
        if let Some(slot) = v.get_mut(STYLOMETRIC_DIM + h as usize) {
            *slot = 1.0;
        }
    }
    v
}
