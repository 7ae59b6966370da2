//! JSON log lines: one JSON object per line (ndjson) for ingestion.

use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub struct StructuredLogger;

impl StructuredLogger {
    /// Install the global subscriber: JSON lines when `json` is set, level
    /// from `RUST_LOG` or `default_level`. Logs go to stderr; stdout is
    /// reserved for the report lines written via [`emit_json`](Self::emit_json).
    pub fn init(json: bool, default_level: &str) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        if json {
            let fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(fmt).init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    /// Emit one serializable value as a single JSON line, outside tracing
    /// (e.g. the anomaly report handed back to the caller).
    pub fn emit_json(value: &impl Serialize, w: &mut impl Write) {
        if let Ok(line) = serde_json::to_string(value) {
            let _ = writeln!(w, "{}", line);
        }
    }
}
