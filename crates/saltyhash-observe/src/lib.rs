//! Observability setup for saltyhash: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
