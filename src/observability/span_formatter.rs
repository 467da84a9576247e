//! OTLP JSON span formatting.
//!
//! Converts finished span data into OTLP (OpenTelemetry Protocol) JSON so the
//! file exporter writes documents any OTLP-compatible analysis tool can read.
//! One complete document is produced per export batch.

use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::Value as JsonValue;
use std::time::SystemTime;

/// Instrumentation scope name stamped on every document.
const SCOPE_NAME: &str = "WhiteTemple";

/// Formats span batches as OTLP JSON documents.
pub struct OtlpFormatter {
    resource: Resource,
}

impl OtlpFormatter {
    /// Creates a formatter carrying the given resource metadata.
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Formats a batch as one OTLP document:
    /// `resourceSpans` → `scopeSpans` → `spans`.
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attrs: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| {
                serde_json::json!({
                    "key": key.to_string(),
                    "value": format_value(value),
                })
            })
            .collect();

        let spans: Vec<JsonValue> = batch.iter().map(format_span).collect();

        serde_json::json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attrs },
                "scopeSpans": [{
                    "scope": { "name": SCOPE_NAME },
                    "spans": spans,
                }]
            }]
        })
    }
}

fn format_span(span: &SpanData) -> JsonValue {
    let parent_span_id = if span.parent_span_id == opentelemetry::trace::SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    let attributes: Vec<JsonValue> = span
        .attributes
        .iter()
        .map(|kv| {
            serde_json::json!({
                "key": kv.key.to_string(),
                "value": format_value(&kv.value),
            })
        })
        .collect();

    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            serde_json::json!({
                "timeUnixNano": unix_nanos(event.timestamp),
                "name": event.name,
            })
        })
        .collect();

    let (status_code, status_message) = match &span.status {
        opentelemetry::trace::Status::Unset => (0, String::new()),
        opentelemetry::trace::Status::Ok => (1, String::new()),
        opentelemetry::trace::Status::Error { description } => (2, description.to_string()),
    };

    serde_json::json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent_span_id,
        "name": span.name,
        "kind": span_kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes,
        "events": events,
        "status": {
            "code": status_code,
            "message": status_message,
        },
    })
}

/// OTLP attribute value encoding. Arrays fall back to their debug rendering;
/// nothing in this application emits array-valued attributes.
fn format_value(value: &opentelemetry::Value) -> JsonValue {
    use opentelemetry::Value;

    match value {
        Value::Bool(b) => serde_json::json!({ "boolValue": b }),
        Value::I64(i) => serde_json::json!({ "intValue": i.to_string() }),
        Value::F64(f) => serde_json::json!({ "doubleValue": f }),
        Value::String(s) => serde_json::json!({ "stringValue": s.to_string() }),
        Value::Array(_) => serde_json::json!({ "stringValue": format!("{value:?}") }),
    }
}

const fn span_kind_code(kind: &opentelemetry::trace::SpanKind) -> u8 {
    match kind {
        opentelemetry::trace::SpanKind::Internal => 1,
        opentelemetry::trace::SpanKind::Server => 2,
        opentelemetry::trace::SpanKind::Client => 3,
        opentelemetry::trace::SpanKind::Producer => 4,
        opentelemetry::trace::SpanKind::Consumer => 5,
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .to_string()
}

impl std::fmt::Debug for OtlpFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtlpFormatter").finish()
    }
}
