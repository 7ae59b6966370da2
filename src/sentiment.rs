//! Lexicon-based polarity scoring.
//!
//! The profiling engine only needs a `text -> compound score in [-1, 1]`
//! contract; any general-purpose polarity scorer satisfies it. The default
//! implementation here is a compact valence lexicon with VADER-style
//! compound normalization, not a bit-exact port of any particular lexicon.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Polarity scorer contract: normalized compound score in `[-1, 1]`,
/// `0.0` for neutral or empty text.
pub trait SentimentScorer: Send + Sync {
    fn compound(&self, text: &str) -> f64;
}

/// Valence flip applied when the preceding token is a negation.
const NEGATION_FLIP: f64 = -0.74;
/// Emphasis added to a fully-uppercase sentiment word in mixed-case text.
const CAPS_EMPHASIS: f64 = 0.733;
/// Normalization constant: compound = total / sqrt(total^2 + alpha).
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Token valences on the usual -4..4 scale, social-media-leaning.
const LEXICON: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("angry", -2.3),
    ("annoyed", -1.8),
    ("annoying", -1.8),
    ("attack", -2.1),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("broken", -1.6),
    ("bug", -1.3),
    ("cool", 1.3),
    ("crash", -1.7),
    ("crashed", -1.7),
    ("crisis", -2.5),
    ("danger", -2.4),
    ("dangerous", -2.4),
    ("dead", -3.3),
    ("death", -2.9),
    ("disappointed", -2.2),
    ("disappointing", -2.1),
    ("disaster", -3.1),
    ("emergency", -2.2),
    ("enjoy", 2.2),
    ("error", -1.6),
    ("excellent", 3.0),
    ("excited", 2.3),
    ("fail", -2.2),
    ("failed", -2.3),
    ("failure", -2.4),
    ("fake", -2.0),
    ("fantastic", 3.0),
    ("fine", 0.8),
    ("fraud", -2.8),
    ("fun", 2.3),
    ("garbage", -2.2),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("hate", -2.7),
    ("hated", -2.7),
    ("helpful", 1.9),
    ("horrible", -2.5),
    ("issue", -0.9),
    ("kill", -3.7),
    ("liar", -2.7),
    ("lie", -2.4),
    ("lies", -2.2),
    ("like", 1.5),
    ("love", 3.2),
    ("loved", 2.9),
    ("nice", 1.8),
    ("ok", 0.9),
    ("okay", 0.9),
    ("outrage", -2.4),
    ("perfect", 3.0),
    ("problem", -1.4),
    ("resolved", 1.6),
    ("sad", -2.1),
    ("scam", -2.6),
    ("shocking", -1.8),
    ("slow", -1.2),
    ("sorry", -0.3),
    ("support", 1.7),
    ("terrible", -2.1),
    ("thank", 1.9),
    ("thanks", 1.9),
    ("threat", -2.1),
    ("trash", -2.1),
    ("useless", -1.9),
    ("war", -2.9),
    ("welcome", 1.6),
    ("win", 2.8),
    ("won", 2.7),
    ("wonderful", 2.7),
    ("worst", -3.1),
    ("wrong", -2.1),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nor", "nothing", "nobody",
    "without", "hardly", "barely", "cannot", "can't", "won't", "don't",
    "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't", "ain't",
];

fn lexicon() -> &'static HashMap<&'static str, f64> {
    static MAP: OnceLock<HashMap<&'static str, f64>> = OnceLock::new();
    MAP.get_or_init(|| LEXICON.iter().copied().collect())
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token)
}

/// Default lexicon-based scorer. Stateless and deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexiconSentiment {
    fn compound(&self, text: &str) -> f64 {
        // Uppercase emphasis is only meaningful when the text mixes cases.
        let has_lowercase = text.chars().any(|c| c.is_lowercase());
        let tokens: Vec<&str> = text
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
            .filter(|t| !t.is_empty())
            .collect();

        let mut total = 0.0;
        let mut prev_lower = String::new();
        for raw in &tokens {
            let token = raw.to_lowercase();
            if let Some(&base) = lexicon().get(token.as_str()) {
                let mut valence = base;
                let all_caps = raw.chars().any(|c| c.is_uppercase())
                    && !raw.chars().any(|c| c.is_lowercase());
                if has_lowercase && all_caps {
                    valence += CAPS_EMPHASIS.copysign(valence);
                }
                if is_negation(&prev_lower) {
                    valence *= NEGATION_FLIP;
                }
                total += valence;
            }
            prev_lower = token;
        }

        if total == 0.0 {
            return 0.0;
        }
        (total / (total * total + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}
