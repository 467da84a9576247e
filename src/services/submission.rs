//! Submission service abstraction.
//!
//! [`SubmissionService`] is the boundary a confession crosses when submitted.
//! The interface is stable even though the current body is a simulation: a
//! later real implementation (network call) is a drop-in replacement with the
//! same contract.

use crate::domain::error::Result;
use crate::domain::{ConfessionDraft, SubmissionOutcome};
use async_trait::async_trait;

/// Abstraction over the confession submission boundary.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Submits a confession draft.
    ///
    /// Resolves with the settled [`SubmissionOutcome`]; no partial results.
    /// Exactly one call is made per user-initiated submit; retry is always
    /// user-initiated.
    ///
    /// # Errors
    ///
    /// Returns [`TempleError::Transport`](crate::domain::TempleError::Transport)
    /// if the boundary cannot be reached. The simulated service never fails,
    /// but the error is part of the contract.
    async fn submit(&self, draft: &ConfessionDraft) -> Result<SubmissionOutcome>;
}
