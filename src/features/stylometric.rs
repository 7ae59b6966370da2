//! Stylometric feature extraction: token statistics, social markers,
//! punctuation counts, sentiment — deterministic for fixed input.

use super::StylometricFeatures;
use crate::sentiment::SentimentScorer;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\w']+").expect("word regex"))
}

fn mention_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@\w+").expect("mention regex"))
}

fn hashtag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#\w+").expect("hashtag regex"))
}

/// Extracts the fixed-schema stylometric vector from one text sample.
///
/// The sentiment scorer is injected once at construction and lives as long
/// as the extractor, rather than being looked up globally at call time.
pub struct FeatureExtractor {
    sentiment: Box<dyn SentimentScorer>,
}

impl FeatureExtractor {
    pub fn new(sentiment: Box<dyn SentimentScorer>) -> Self {
        Self { sentiment }
    }

    /// Pure feature extraction. Character, regex, and sentiment fields are
    /// computed from the raw text regardless of tokenization, so a
    /// punctuation-only message keeps its literal counts; only the
    /// token-denominated ratios are 0.0 (never NaN) when there are no word
    /// tokens. Empty input therefore still yields the all-zero vector.
    pub fn extract(&self, text: &str) -> StylometricFeatures {
        let tokens: Vec<&str> = word_re().find_iter(text).map(|m| m.as_str()).collect();
        let word_count = tokens.len() as f64;

        let (avg_word_length, type_token_ratio, uppercase_word_ratio) = if tokens.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let total_len: usize = tokens.iter().map(|t| t.chars().count()).sum();
            let unique: HashSet<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
            // Fully-uppercase tokens longer than one character.
            let uppercase_words = tokens
                .iter()
                .filter(|t| {
                    t.chars().count() > 1
                        && t.chars().any(|c| c.is_uppercase())
                        && !t.chars().any(|c| c.is_lowercase())
                })
                .count();
            (
                total_len as f64 / word_count,
                unique.len() as f64 / word_count,
                uppercase_words as f64 / word_count,
            )
        };

        StylometricFeatures {
            text_length: text.chars().count() as f64,
            word_count,
            avg_word_length,
            type_token_ratio,
            mention_count: mention_re().find_iter(text).count() as f64,
            hashtag_count: hashtag_re().find_iter(text).count() as f64,
            sentiment_compound: self.sentiment.compound(text),
            uppercase_word_ratio,
            exclamation_count: text.matches('!').count() as f64,
            question_count: text.matches('?').count() as f64,
        }
    }
}
