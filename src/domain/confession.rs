//! Confession drafts and submission outcomes.
//!
//! A confession is a free-text submission from a visitor, optionally
//! attributed. The draft lives only for the duration of one visit to the
//! confession screen; navigating away discards it.

use serde::{Deserialize, Serialize};

/// Attribution shown when a visitor leaves the name field empty.
pub const ANONYMOUS: &str = "Anonymous";

/// A confession being composed.
///
/// `author` is optional (empty means anonymous). `body` must contain at least
/// one non-whitespace character before the draft may be submitted; that guard
/// is [`ConfessionDraft::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfessionDraft {
    /// Optional attribution text.
    pub author: String,
    /// The confession body.
    pub body: String,
}

impl ConfessionDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the attribution, substituting [`ANONYMOUS`] for an empty field.
    #[must_use]
    pub fn author_or_anonymous(&self) -> &str {
        if self.author.trim().is_empty() {
            ANONYMOUS
        } else {
            &self.author
        }
    }

    /// Checks whether the draft is fit for submission.
    ///
    /// Returns `false` when the body is empty or whitespace-only. This runs
    /// locally before any service call; an invalid draft never reaches the
    /// submission boundary.
    #[must_use]
    pub fn validate(&self) -> bool {
        !self.body.trim().is_empty()
    }

    /// Discards all field content.
    pub fn clear(&mut self) {
        self.author.clear();
        self.body.clear();
    }
}

/// The settled result of one submission attempt.
///
/// Ephemeral: exists only for the duration of one attempt. The simulated
/// service always resolves `Accepted`; `Rejected` is the shape a real backend
/// would use for content it declines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    /// The confession was received for purification.
    Accepted,
    /// The backend declined the confession.
    Rejected {
        /// Human-readable reason for the decline.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_author_reads_as_anonymous() {
        let mut draft = ConfessionDraft::new();
        assert_eq!(draft.author_or_anonymous(), ANONYMOUS);

        draft.author = "   ".to_string();
        assert_eq!(draft.author_or_anonymous(), ANONYMOUS);

        draft.author = "Digital Pilgrim".to_string();
        assert_eq!(draft.author_or_anonymous(), "Digital Pilgrim");
    }

    #[test]
    fn whitespace_only_body_fails_validation() {
        let mut draft = ConfessionDraft::new();
        assert!(!draft.validate());

        draft.body = " \n\t ".to_string();
        assert!(!draft.validate());

        draft.body = "test".to_string();
        assert!(draft.validate());
    }

    #[test]
    fn clear_discards_both_fields() {
        let mut draft = ConfessionDraft {
            author: "X".to_string(),
            body: "a burden".to_string(),
        };
        draft.clear();
        assert_eq!(draft, ConfessionDraft::new());
    }
}
