//! Service boundaries behind the worker.
//!
//! The flows never call these directly; they post messages to the worker,
//! which drives the service futures on its runtime. Both boundaries are traits
//! so the simulated implementations and a future real backend are
//! interchangeable (dependency injection at worker construction).
//!
//! - [`content`]: Read-only approved-message and doctrine source
//! - [`submission`]: Confession submission boundary
//! - [`simulated`]: Latency-simulating implementations and seed content

pub mod content;
pub mod simulated;
pub mod submission;

pub use content::ContentStore;
pub use simulated::{
    FailingContentStore, SimulatedContentStore, SimulatedSubmissionService,
    DEFAULT_FETCH_LATENCY, DEFAULT_SUBMIT_LATENCY,
};
pub use submission::SubmissionService;
