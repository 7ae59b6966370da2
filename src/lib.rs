//! authorprint — online behavioural profiling engine.
//!
//! Assigns a per-author behavioural anomaly score in `[0, 1]` to a new
//! `(text, timestamp)` pair by comparing it against a continuously updated
//! aggregate of that author's historical writing style and posting-time
//! pattern. Profiles bootstrap lazily from a historical corpus on first
//! sight of an author, update incrementally on every scoring call, and
//! persist across process lifetimes via an explicit snapshot flush.
//!
//! Modular structure:
//! - [`features`] — Stylometric and temporal feature extraction
//! - [`sentiment`] — Lexicon-based polarity scoring
//! - [`profile`] — Per-author aggregates, history bootstrap, in-memory store
//! - [`storage`] — SQLite snapshot persistence
//! - [`scoring`] — Cosine-distance anomaly scoring engine
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod profile;
pub mod scoring;
pub mod sentiment;
pub mod storage;

pub use config::ProfilerConfig;
pub use error::ProfilerError;
pub use features::{FeatureExtractor, StylometricFeatures};
pub use logging::StructuredLogger;
pub use profile::{HistoryBootstrapper, ProfileAggregate, ProfileStore};
pub use scoring::{AnomalyReport, ProfilerEngine};
pub use sentiment::{LexiconSentiment, SentimentScorer};
pub use storage::SnapshotStore;
