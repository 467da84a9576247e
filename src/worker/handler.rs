//! Background worker driving the service futures.
//!
//! The worker owns the async side of the application: it receives
//! [`WorkerMessage`]s from the UI thread, spawns one tokio task per request,
//! and sends a [`WorkerResponse`] back when the service future settles. The UI
//! thread never blocks on a service call.
//!
//! Cancellation is explicit: every spawned task is tracked by request id, and
//! a [`WorkerMessage::Cancel`] aborts the matching task so an unmounted screen
//! never receives a late result.

use crate::services::{ContentStore, SubmissionService};
use crate::worker::{WorkerMessage, WorkerResponse};
use std::collections::HashMap;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::AbortHandle;

/// Worker state: injected service boundaries plus in-flight task tracking.
pub struct TempleWorker {
    submission: Arc<dyn SubmissionService>,
    content: Arc<dyn ContentStore>,
    response_tx: Sender<WorkerResponse>,
    in_flight: HashMap<u64, AbortHandle>,
}

impl TempleWorker {
    /// Creates a worker around the given service boundaries.
    ///
    /// Responses are delivered on `response_tx`; the UI thread drains that
    /// channel between input events.
    #[must_use]
    pub fn new(
        submission: Arc<dyn SubmissionService>,
        content: Arc<dyn ContentStore>,
        response_tx: Sender<WorkerResponse>,
    ) -> Self {
        Self {
            submission,
            content,
            response_tx,
            in_flight: HashMap::new(),
        }
    }

    /// Runs the worker until the request channel closes.
    ///
    /// Each received message is dispatched without awaiting the spawned task,
    /// so a long submission never delays a concurrent load or a cancellation.
    pub async fn run(mut self, mut requests: UnboundedReceiver<WorkerMessage>) {
        while let Some(message) = requests.recv().await {
            self.handle_message(message);
            self.in_flight.retain(|_, handle| !handle.is_finished());
        }
        tracing::debug!("request channel closed, worker shutting down");
    }

    /// Dispatches a single worker message.
    ///
    /// Attaches the parent trace context from the message so spans created in
    /// the worker link back to the originating UI span.
    pub fn handle_message(&mut self, message: WorkerMessage) {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::SubmitConfession {
                request_id, draft, ..
            } => {
                let service = Arc::clone(&self.submission);
                let tx = self.response_tx.clone();
                let handle = tokio::spawn(async move {
                    let response = match service.submit(&draft).await {
                        Ok(outcome) => WorkerResponse::SubmissionSettled {
                            request_id,
                            outcome,
                        },
                        Err(e) => WorkerResponse::SubmissionFailed {
                            request_id,
                            message: e.to_string(),
                        },
                    };
                    if tx.send(response).is_err() {
                        tracing::debug!(request_id, "response channel closed, dropping result");
                    }
                });
                self.track(request_id, handle.abort_handle());
            }

            WorkerMessage::LoadMessages { request_id, .. } => {
                let store = Arc::clone(&self.content);
                let tx = self.response_tx.clone();
                let handle = tokio::spawn(async move {
                    let response = match store.list_approved_messages().await {
                        Ok(messages) => WorkerResponse::MessagesLoaded {
                            request_id,
                            messages,
                        },
                        Err(e) => WorkerResponse::LoadFailed {
                            request_id,
                            message: e.to_string(),
                        },
                    };
                    if tx.send(response).is_err() {
                        tracing::debug!(request_id, "response channel closed, dropping result");
                    }
                });
                self.track(request_id, handle.abort_handle());
            }

            WorkerMessage::Cancel { request_id, .. } => {
                if let Some(handle) = self.in_flight.remove(&request_id) {
                    handle.abort();
                    tracing::debug!(request_id, "in-flight request aborted");
                } else {
                    tracing::debug!(request_id, "cancel for unknown or settled request");
                }
            }
        }
    }

    fn track(&mut self, request_id: u64, handle: AbortHandle) {
        if self.in_flight.insert(request_id, handle).is_some() {
            tracing::debug!(request_id, "request id reused while still in flight");
        }
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Reconstructs the OpenTelemetry context from the serialized trace
    /// information in the message, allowing spans created in the worker to be
    /// linked to their parent spans on the UI thread.
    ///
    /// Returns a context guard that must be held for the duration of the
    /// operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = match message {
            WorkerMessage::SubmitConfession { trace_context, .. }
            | WorkerMessage::LoadMessages { trace_context, .. }
            | WorkerMessage::Cancel { trace_context, .. } => trace_context,
        }
        .as_ref()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context =
            opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConfessionDraft, SubmissionOutcome};
    use crate::services::{
        FailingContentStore, SimulatedContentStore, SimulatedSubmissionService,
    };
    use std::time::Duration;

    fn draft(body: &str) -> ConfessionDraft {
        ConfessionDraft {
            author: String::new(),
            body: body.to_string(),
        }
    }

    fn spawn_worker(
        submission: Arc<dyn SubmissionService>,
        content: Arc<dyn ContentStore>,
    ) -> (
        tokio::sync::mpsc::UnboundedSender<WorkerMessage>,
        std::sync::mpsc::Receiver<WorkerResponse>,
    ) {
        let (req_tx, req_rx) = tokio::sync::mpsc::unbounded_channel();
        let (resp_tx, resp_rx) = std::sync::mpsc::channel();
        let worker = TempleWorker::new(submission, content, resp_tx);
        tokio::spawn(worker.run(req_rx));
        (req_tx, resp_rx)
    }

    async fn recv_with_timeout(
        rx: std::sync::mpsc::Receiver<WorkerResponse>,
        timeout: Duration,
    ) -> (
        std::sync::mpsc::Receiver<WorkerResponse>,
        Option<WorkerResponse>,
    ) {
        tokio::task::spawn_blocking(move || {
            let response = rx.recv_timeout(timeout).ok();
            (rx, response)
        })
        .await
        .expect("receiver task panicked")
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn submission_settles_with_accepted() {
        let (req_tx, resp_rx) = spawn_worker(
            Arc::new(SimulatedSubmissionService::with_latency(Duration::ZERO)),
            Arc::new(SimulatedContentStore::seeded_with_latency(Duration::ZERO).unwrap()),
        );

        req_tx
            .send(WorkerMessage::submit_confession(7, draft("test")))
            .unwrap();

        let (_rx, response) = recv_with_timeout(resp_rx, Duration::from_secs(5)).await;
        assert_eq!(
            response,
            Some(WorkerResponse::SubmissionSettled {
                request_id: 7,
                outcome: SubmissionOutcome::Accepted,
            })
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn load_failure_is_reported_not_swallowed() {
        let (req_tx, resp_rx) = spawn_worker(
            Arc::new(SimulatedSubmissionService::with_latency(Duration::ZERO)),
            Arc::new(FailingContentStore::new("connection refused")),
        );

        req_tx.send(WorkerMessage::load_messages(3)).unwrap();

        let (_rx, response) = recv_with_timeout(resp_rx, Duration::from_secs(5)).await;
        match response {
            Some(WorkerResponse::LoadFailed { request_id, message }) => {
                assert_eq!(request_id, 3);
                assert!(message.contains("connection refused"));
            }
            other => panic!("expected LoadFailed, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn cancel_aborts_the_in_flight_request() {
        let (req_tx, resp_rx) = spawn_worker(
            Arc::new(SimulatedSubmissionService::with_latency(Duration::from_secs(30))),
            Arc::new(SimulatedContentStore::seeded_with_latency(Duration::ZERO).unwrap()),
        );

        req_tx
            .send(WorkerMessage::submit_confession(11, draft("slow")))
            .unwrap();
        req_tx.send(WorkerMessage::cancel(11)).unwrap();

        let (_rx, response) = recv_with_timeout(resp_rx, Duration::from_millis(300)).await;
        assert_eq!(response, None, "aborted request must produce no response");
    }
}
