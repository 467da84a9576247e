//! Content store abstraction.
//!
//! This module defines the [`ContentStore`] trait that abstracts over the
//! source of approved messages and doctrines. The current implementation is a
//! latency-simulating in-memory store; a real backend client implements the
//! same trait and is injected in its place without touching the flows.
//!
//! # Design Philosophy
//!
//! The trait is minimal and read-only. No write or approve path is exposed;
//! the approval workflow is external to this system.

use crate::domain::error::Result;
use crate::domain::{ApprovedMessage, Doctrine};
use async_trait::async_trait;

/// Abstraction over the approved-message and doctrine source.
///
/// Implementations must be shareable across the UI thread and the worker
/// runtime (`Send + Sync`).
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Retrieves the full approved-message collection.
    ///
    /// The returned order is the display order; consumers must not re-sort.
    /// This is a single all-or-nothing fetch: no pagination and no partial
    /// results.
    ///
    /// # Errors
    ///
    /// Returns [`TempleError::Content`](crate::domain::TempleError::Content)
    /// if the collection cannot be produced.
    async fn list_approved_messages(&self) -> Result<Vec<ApprovedMessage>>;

    /// Returns the ordered doctrine statements.
    ///
    /// Doctrines are static, so this is synchronous and infallible.
    fn list_doctrines(&self) -> Vec<Doctrine>;
}
