//! authorprint entrypoint: scores one observation against an author's
//! profile, emits the report as a JSON line, and flushes the updated store.

use authorprint::{
    config::ProfilerConfig, features::FeatureExtractor, logging::StructuredLogger,
    profile::HistoryBootstrapper, scoring::ProfilerEngine, sentiment::LexiconSentiment,
};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("AUTHORPRINT_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = ProfilerConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    let mut args = std::env::args().skip(1);
    let (author_id, text) = match (args.next(), args.next()) {
        (Some(a), Some(t)) => (a, t),
        _ => {
            eprintln!("usage: authorprint <author_id> <text> [timestamp]");
            std::process::exit(2);
        }
    };
    let timestamp = args.next().unwrap_or_default();

    info!(data_dir = ?config.data_dir, history = ?config.history_path, "profiler starting");
    std::fs::create_dir_all(&config.data_dir)?;

    // Sentiment scorer and extractor are built once here and live as long
    // as the engine.
    let extractor = FeatureExtractor::new(Box::new(LexiconSentiment::new()));
    let bootstrap = HistoryBootstrapper::new(&config.history_path);
    let engine = ProfilerEngine::open(extractor, bootstrap, &config.snapshot_path())?;

    let report = engine.analyze(&author_id, &text, &timestamp)?;
    StructuredLogger::emit_json(&report, &mut std::io::stdout());

    engine.flush()?;
    info!("profiler cycle complete");
    Ok(())
}
