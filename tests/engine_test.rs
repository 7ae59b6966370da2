//! End-to-end tests: bootstrap from a corpus, score, fold, flush, reload.

use authorprint::error::ProfilerError;
use authorprint::features::{FeatureExtractor, STYLOMETRIC_DIM};
use authorprint::profile::{HistoryBootstrapper, ProfileAggregate};
use authorprint::scoring::ProfilerEngine;
use authorprint::sentiment::LexiconSentiment;
use authorprint::storage::SnapshotStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn extractor() -> FeatureExtractor {
    FeatureExtractor::new(Box::new(LexiconSentiment::new()))
}

fn write_corpus(dir: &Path, rows: &[(&str, &str, &str, &str)]) -> PathBuf {
    let path = dir.join("history.csv");
    let mut out = String::from("author_id,inbound,created_at,text\n");
    for (author, inbound, created_at, text) in rows {
        out.push_str(&format!("{author},{inbound},{created_at},{text}\n"));
    }
    std::fs::write(&path, out).unwrap();
    path
}

fn engine_at(dir: &Path, corpus: &Path) -> ProfilerEngine {
    ProfilerEngine::open(
        extractor(),
        HistoryBootstrapper::new(corpus),
        &dir.join("profiles.db"),
    )
    .unwrap()
}

#[test]
fn neutral_score_for_brand_new_author() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(dir.path(), &[]);
    let engine = engine_at(dir.path(), &corpus);

    let score = engine
        .score_and_update("nobody", "first ever message", "2017-11-01T10:30:00Z")
        .unwrap();
    assert_eq!(score, 0.5);
}

#[test]
fn scores_stay_in_bounds_for_degenerate_input() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(dir.path(), &[]);
    let engine = engine_at(dir.path(), &corpus);

    // First call: empty history, neutral.
    let s1 = engine.score_and_update("a", "", "garbage").unwrap();
    assert_eq!(s1, 0.5);

    // The profile now holds one all-zero observation, so its mean is the
    // zero vector and comparisons against it are maximal distance.
    let s2 = engine.score_and_update("a", "", "garbage").unwrap();
    assert_eq!(s2, 1.0);
    let s3 = engine
        .score_and_update("a", "actual words now", "2017-11-01T10:30:00Z")
        .unwrap();
    assert_eq!(s3, 1.0);

    for s in [s1, s2, s3] {
        assert!((0.0..=1.0).contains(&s));
    }
}

#[test]
fn repeated_identical_input_scores_no_higher() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(
        dir.path(),
        &[("amazonhelp", "False", "2017-11-01T10:00:00Z", "hello world")],
    );
    let engine = engine_at(dir.path(), &corpus);

    let text = "We have responded to your Direct Message";
    let ts = "2017-11-01T10:35:00Z";
    let s1 = engine.score_and_update("amazonhelp", text, ts).unwrap();
    let s2 = engine.score_and_update("amazonhelp", text, ts).unwrap();
    // The profile now partially matches the repeated content.
    assert!(s2 <= s1, "second score {s2} should not exceed first {s1}");
}

#[test]
fn stylometric_and_temporal_divergence_raises_score() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    let rows: &[(&str, &str, &str, &str)] =
        &[("a", "False", "2017-11-01T10:00:00Z", "hello world")];
    let corpus_a = write_corpus(dir_a.path(), rows);
    let corpus_b = write_corpus(dir_b.path(), rows);

    let divergent = engine_at(dir_a.path(), &corpus_a)
        .score_and_update("a", "HELLO WORLD!!!", "2017-11-02T23:00:00Z")
        .unwrap();
    let conforming = engine_at(dir_b.path(), &corpus_b)
        .score_and_update("a", "hello world", "2017-11-02T10:30:00Z")
        .unwrap();

    assert!(divergent > conforming);
    assert!(divergent > 0.0);
    assert_ne!(divergent, 0.5);
}

#[test]
fn punctuation_only_message_is_not_maximally_anomalous() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(
        dir.path(),
        &[("a", "False", "2017-11-01T10:00:00Z", "wow!!! what a day!!!")],
    );
    let engine = engine_at(dir.path(), &corpus);

    // Literal character counts survive tokenization, so "!!!" is a real
    // observation vector rather than the zero vector.
    let score = engine
        .score_and_update("a", "!!!", "2017-11-01T10:05:00Z")
        .unwrap();
    assert!(score < 1.0);
    assert!(score >= 0.0);
}

#[test]
fn inbound_records_do_not_shape_the_profile() {
    let dir = TempDir::new().unwrap();
    // Only the explicitly outbound row may enter the baseline; rows with a
    // malformed or empty inbound flag are skipped, not assumed outbound.
    let corpus = write_corpus(
        dir.path(),
        &[
            ("a", "True", "2017-11-01T03:00:00Z", "customer complaint text"),
            ("a", "False", "2017-11-01T10:00:00Z", "hello world"),
            ("a", "maybe", "2017-11-01T05:00:00Z", "garbage flag row"),
            ("a", "", "2017-11-01T06:00:00Z", "blank flag row"),
            ("someone_else", "False", "2017-11-01T11:00:00Z", "other author"),
        ],
    );
    let engine = engine_at(dir.path(), &corpus);
    engine
        .score_and_update("a", "anything", "2017-11-01T12:00:00Z")
        .unwrap();

    let profile = engine.profile("a").unwrap();
    // one bootstrapped outbound record + the scored observation
    assert_eq!(profile.total_observations, 2);
    assert_eq!(profile.hourly_counts[10], 1.0);
    assert_eq!(profile.hourly_counts[3], 0.0);
    assert_eq!(profile.hourly_counts[5], 0.0);
    assert_eq!(profile.hourly_counts[6], 0.0);
}

#[test]
fn two_identical_calls_accumulate_exactly() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(dir.path(), &[]);
    let engine = engine_at(dir.path(), &corpus);

    let text = "same text both times";
    let ts = "2017-11-01T10:30:00Z";
    engine.score_and_update("fresh", text, ts).unwrap();
    engine.score_and_update("fresh", text, ts).unwrap();

    let profile = engine.profile("fresh").unwrap();
    assert_eq!(profile.total_observations, 2);

    let single = extractor().extract(text).to_array();
    for i in 0..STYLOMETRIC_DIM {
        assert_eq!(profile.feature_sums[i], 2.0 * single[i]);
    }
    assert_eq!(profile.hourly_counts[10], 2.0);
}

#[test]
fn aggregation_is_order_independent() {
    // Texts chosen so every feature value is exactly representable in
    // binary (uniform token lengths, no sentiment words), making the sums
    // exactly equal across fold orders.
    let observations = [
        ("aa bb cc", Some(3)),
        ("dddd eeee ffff gggg", Some(5)),
        ("hh hh", None),
    ];
    let e = extractor();

    let mut forward = ProfileAggregate::new();
    for (text, hour) in observations {
        forward.fold(&e.extract(text), hour);
    }
    let mut reverse = ProfileAggregate::new();
    for (text, hour) in observations.into_iter().rev() {
        reverse.fold(&e.extract(text), hour);
    }

    assert_eq!(forward, reverse);
    assert_eq!(forward.total_observations, 3);
}

#[test]
fn snapshot_round_trips_floats_exactly() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(dir.path(), &[]);
    let engine = engine_at(dir.path(), &corpus);

    // Sentiment and ratio features produce awkward fractions on purpose.
    engine
        .score_and_update("a", "I love this, it is great!", "2017-11-01T10:30:00Z")
        .unwrap();
    engine
        .score_and_update("a", "this is terrible and wrong", "not-a-timestamp")
        .unwrap();
    let before = engine.profile("a").unwrap();
    engine.flush().unwrap();

    let reloaded = SnapshotStore::open(&dir.path().join("profiles.db"))
        .unwrap()
        .load_all()
        .unwrap();
    let after = &reloaded["a"];
    assert_eq!(after, &before);
    for (x, y) in after.feature_sums.iter().zip(before.feature_sums.iter()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

#[test]
fn warm_cache_survives_restart_without_corpus() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(
        dir.path(),
        &[("a", "False", "2017-11-01T10:00:00Z", "hello world")],
    );
    let engine = engine_at(dir.path(), &corpus);
    engine
        .score_and_update("a", "first session text", "2017-11-01T11:00:00Z")
        .unwrap();
    engine.flush().unwrap();
    drop(engine);

    // Restarted engine with an unreadable corpus: the cached author must
    // come from the snapshot and never hit the bootstrapper.
    let restarted = ProfilerEngine::open(
        extractor(),
        HistoryBootstrapper::new(dir.path().join("missing.csv")),
        &dir.path().join("profiles.db"),
    )
    .unwrap();
    let score = restarted
        .score_and_update("a", "second session text", "2017-11-01T12:00:00Z")
        .unwrap();
    assert!((0.0..=1.0).contains(&score));
    assert_eq!(restarted.profile("a").unwrap().total_observations, 3);
}

#[test]
fn missing_corpus_is_fatal_for_cold_author() {
    let dir = TempDir::new().unwrap();
    let engine = ProfilerEngine::open(
        extractor(),
        HistoryBootstrapper::new(dir.path().join("missing.csv")),
        &dir.path().join("profiles.db"),
    )
    .unwrap();

    let err = engine
        .score_and_update("a", "text", "2017-11-01T10:30:00Z")
        .unwrap_err();
    assert!(matches!(err, ProfilerError::History { .. }));
    // The failed bootstrap must not leave a half-made profile behind.
    assert!(engine.profile("a").is_none());
}

#[test]
fn corrupt_snapshot_is_fatal_at_load() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("profiles.db");
    {
        let conn = rusqlite::Connection::open(&db).unwrap();
        conn.execute_batch(
            "CREATE TABLE profiles (
                author_id TEXT PRIMARY KEY,
                profile_json TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            INSERT INTO profiles VALUES ('a', 'not json', '2017-11-01');",
        )
        .unwrap();
    }

    let err = SnapshotStore::open(&db).unwrap().load_all().unwrap_err();
    assert!(matches!(err, ProfilerError::CorruptSnapshot { .. }));
}
