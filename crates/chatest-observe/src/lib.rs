//! Observability setup for Chatest: structured logging with optional
//! OpenTelemetry span export.

pub mod export;
pub mod tracing_setup;
