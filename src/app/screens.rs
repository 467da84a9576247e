//! Screen and flow state machine types.
//!
//! This module defines the closed enumerations that drive the application:
//! which screen is mounted, where the confession flow stands, and which form
//! field receives input. Because the enumerations are closed, navigation and
//! transition handling are total; there is no invalid target to validate.

/// The mutually exclusive top-level views.
///
/// Exactly one screen is active at any time. The value is owned by
/// [`AppState`](crate::app::AppState) and mutated only by the event handler in
/// response to navigation events. Initial value: `Landing`. Navigation is
/// cyclic; there is no terminal screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The temple entrance: title, ceremony blurb, navigation menu.
    Landing,

    /// The confession portal: name and message form plus submission flow.
    Confession,

    /// The approved-message gallery, all three locales rendered together.
    MessageFeed,

    /// The numbered doctrine listing.
    Doctrines,
}

/// Where the confession flow stands.
///
/// `Settled` corresponds to the idle-after-result phase: the previous attempt
/// has settled and the form is waiting. Any edit returns the flow to
/// `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfessionPhase {
    /// The visitor is composing; submit is available.
    Editing,

    /// A submission is in flight; input and re-submission are disabled.
    Submitting,

    /// The last attempt settled. The draft is empty after acceptance,
    /// preserved after failure so retry is a matter of pressing submit again.
    Settled,
}

/// The form field currently receiving input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    /// The optional name field.
    Author,

    /// The confession body.
    Body,
}

impl FormFocus {
    /// The other field.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Author => Self::Body,
            Self::Body => Self::Author,
        }
    }
}
