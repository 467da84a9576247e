//! Background worker for the asynchronous service boundaries.
//!
//! This module implements the async side of the application. The UI thread
//! stays single-threaded and event-driven; anything that awaits (submitting a
//! confession, loading the message collection) crosses this boundary as a
//! message, runs as a tokio task, and comes back as a response event. The
//! protocol carries trace context so observability spans stay linked across
//! the boundary.
//!
//! - [`messages`]: Request/response protocol with trace context propagation
//! - [`handler`]: The worker runtime: dispatch, task tracking, cancellation

pub mod handler;
pub mod messages;

pub use handler::TempleWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
