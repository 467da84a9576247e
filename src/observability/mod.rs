//! Observability: tracing setup and file-based OTLP export.
//!
//! The application traces its event handling and worker operations with the
//! `tracing` crate. Spans export to a rotating OTLP JSON file in the platform
//! data directory, so behavior can be inspected offline without a collector.
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: File-exporting tracer provider
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: Rotating trace file writer

pub mod file_writer;
pub mod init;
pub mod span_formatter;
pub mod tracer;

pub use init::init_tracing;
