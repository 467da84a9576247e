//! Tracer provider with file-based span export.
//!
//! Implements a custom `SpanExporter` that writes spans to a rotating JSON
//! file instead of sending them over the network, enabling offline trace
//! analysis without any collector running.

use super::file_writer::RotatingFileWriter;
use super::span_formatter::OtlpFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Span exporter writing OTLP JSON lines to a rotating file.
struct FileSpanExporter {
    writer: RotatingFileWriter,
    formatter: OtlpFormatter,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(file_path: PathBuf, resource: Resource) -> Self {
        Self {
            writer: RotatingFileWriter::new(file_path),
            formatter: OtlpFormatter::new(resource),
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for FileSpanExporter {
    /// Writes the batch as a single OTLP JSON line.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let document = self.formatter.format_batch(&batch).to_string();

        match self.writer.write_line(&document) {
            Ok(()) => Box::pin(std::future::ready(Ok(()))),
            Err(e) => Box::pin(std::future::ready(Err(TraceError::from(e.to_string())))),
        }
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, res: &Resource) {
        let _ = res;
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Creates a tracer provider exporting to the given file.
///
/// Uses a simple (immediate, non-batched) export strategy so traces survive
/// even an abrupt exit of the terminal loop.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
