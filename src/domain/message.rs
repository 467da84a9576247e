//! Approved messages and doctrine statements.
//!
//! An approved message is a previously submitted confession accepted for public
//! display. The collection is read-only from the UI's perspective and immutable
//! once loaded; the approval workflow itself lives outside this system.

use crate::domain::locale::LocalizedText;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A confession accepted for public display, available in three fixed locales.
///
/// The locale invariant is carried by [`LocalizedText`]: a message with a
/// missing or blank variant cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovedMessage {
    /// Unique identifier within the collection.
    pub id: String,
    /// Message body in all three display locales.
    pub content: LocalizedText,
    /// Display attribution. May be a pseudonym.
    pub author: String,
    /// Calendar date the message was approved.
    pub date: NaiveDate,
}

impl ApprovedMessage {
    /// Creates an approved message.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        content: LocalizedText,
        author: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            content,
            author: author.into(),
            date,
        }
    }
}

/// A single doctrine statement.
///
/// Doctrines are static, ordered editorial statements; order is semantically
/// meaningful and rendered as a 1-based numbered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctrine {
    /// The statement text.
    pub text: String,
}

impl Doctrine {
    /// Creates a doctrine statement.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
