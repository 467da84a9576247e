//! Worker protocol types for cross-thread communication.
//!
//! This module defines the request and response protocol between the UI thread
//! and the background worker that drives the service futures. It also
//! implements distributed tracing context propagation across the boundary, so
//! spans created inside the worker link to their parents on the UI thread.
//!
//! Every request carries a `request_id` chosen by the UI thread. The id serves
//! two purposes: it lets the worker abort the matching task on
//! [`WorkerMessage::Cancel`], and it lets the event handler discard responses
//! that settle after their screen has been unmounted.

use crate::domain::{ApprovedMessage, ConfessionDraft, SubmissionOutcome};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Extracts the OpenTelemetry trace ID and span ID from the active span.
    /// Returns `None` if the current span context is invalid or not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            None
        }
    }
}

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Generates convenience constructors that automatically attach the current
/// trace context to each message variant.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    submit_confession(SubmitConfession { request_id: u64, draft: ConfessionDraft }),
    load_messages(LoadMessages { request_id: u64 }),
    cancel(Cancel { request_id: u64 }),
}

/// Messages sent from the UI thread to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Submit a confession draft through the submission boundary.
    SubmitConfession {
        /// Request identifier for cancellation and stale-response filtering.
        request_id: u64,

        /// The draft to submit. The UI keeps its own copy for retry.
        draft: ConfessionDraft,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Load the full approved-message collection from the content store.
    LoadMessages {
        /// Request identifier for cancellation and stale-response filtering.
        request_id: u64,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Abort the in-flight request with the given identifier.
    ///
    /// Sent when the screen that issued the request is unmounted while the
    /// operation is still outstanding. Unknown or already-settled ids are
    /// ignored.
    Cancel {
        /// Identifier of the request to abort.
        request_id: u64,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

/// Responses sent from the worker back to the UI thread.
///
/// Each response names the request it settles. A cancelled request produces no
/// response at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// A submission settled with an outcome from the boundary.
    SubmissionSettled {
        /// Identifier of the originating request.
        request_id: u64,
        /// The settled outcome.
        outcome: SubmissionOutcome,
    },

    /// A submission failed in transport before settling.
    SubmissionFailed {
        /// Identifier of the originating request.
        request_id: u64,
        /// Human-readable failure description.
        message: String,
    },

    /// The approved-message collection was loaded.
    MessagesLoaded {
        /// Identifier of the originating request.
        request_id: u64,
        /// The collection, in store order.
        messages: Vec<ApprovedMessage>,
    },

    /// The approved-message collection could not be loaded.
    LoadFailed {
        /// Identifier of the originating request.
        request_id: u64,
        /// Human-readable failure description.
        message: String,
    },
}
