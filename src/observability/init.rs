//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with OpenTelemetry integration: spans
//! emitted through `tracing` macros are filtered, exported through the file
//! exporter, and written as OTLP JSON to the platform data directory.

use super::tracer;
use crate::infrastructure;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name stamped on exported spans.
const SERVICE_NAME: &str = "WhiteTemple";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// The filter level comes from `config.trace_level`, defaulting to `"info"`.
/// Traces land in `<data dir>/white-temple-otlp.json`.
///
/// Observability is optional: if the data directory cannot be created the
/// function returns without installing a subscriber, and repeated calls after
/// a successful install are no-ops.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = infrastructure::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let trace_file = data_dir.join("white-temple-otlp.json");
    let provider = tracer::create_tracer_provider(trace_file, resource);

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
