//! Domain layer for the White Temple application.
//!
//! This module contains the core domain types, independent of terminal APIs or
//! infrastructure concerns: the confession draft and its submission outcome,
//! the multilingual approved message with its locale invariant, doctrine
//! statements, notification events, and the error taxonomy.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`locale`]: Locales and validated multilingual text
//! - [`message`]: Approved messages and doctrines
//! - [`confession`]: Confession drafts and submission outcomes
//! - [`notice`]: Transient notification events

pub mod confession;
pub mod error;
pub mod locale;
pub mod message;
pub mod notice;

pub use confession::{ConfessionDraft, SubmissionOutcome, ANONYMOUS};
pub use error::{Result, TempleError};
pub use locale::{Locale, LocalizedText};
pub use message::{ApprovedMessage, Doctrine};
pub use notice::{Notice, NoticeKind};
