//! Transient user notifications.
//!
//! Notices are discrete output events emitted by the flows (message text plus
//! a short descriptive subtext), decoupled from any presentation mechanism.
//! The terminal shim shows them as a banner and expires them after a fixed
//! time; a different shim could route them anywhere else.

use serde::{Deserialize, Serialize};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    /// An acknowledgment.
    Success,
    /// A recoverable failure.
    Error,
}

/// A transient notification event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity, which also drives presentation color.
    pub kind: NoticeKind,
    /// Primary message text.
    pub message: String,
    /// Optional short descriptive subtext.
    pub detail: Option<String>,
}

impl Notice {
    /// Creates a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            detail: None,
        }
    }

    /// Attaches a descriptive subtext.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
