//! Structured logging: tracing subscriber setup and JSON-line emission.

mod format;

pub use format::StructuredLogger;
