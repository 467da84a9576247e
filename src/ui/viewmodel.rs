//! View model types representing renderable UI state.
//!
//! Immutable view models computed from application state, following the MVVM
//! split: `AppState::compute_viewmodel()` produces them, the renderer consumes
//! them. They contain no business logic, only display-ready data: text
//! already wrapped to the terminal width, scroll windows already applied.

use crate::app::screens::FormFocus;
use crate::domain::Notice;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title line).
    pub header: HeaderInfo,

    /// The active screen's renderable content.
    pub body: ScreenView,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Transient notification to overlay, if one is active.
    pub notice: Option<Notice>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, centered in the header bar.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: scroll  Esc: return").
    pub keybindings: String,
}

/// Renderable content of the active screen.
#[derive(Debug, Clone)]
pub enum ScreenView {
    /// The temple entrance.
    Landing(LandingView),
    /// The confession portal form.
    Confession(ConfessionView),
    /// The approved-message gallery.
    Feed(FeedView),
    /// The numbered doctrine listing.
    Doctrines(DoctrinesView),
}

/// Landing screen content.
#[derive(Debug, Clone)]
pub struct LandingView {
    /// Subtitle line under the title, wrapped.
    pub subtitle: Vec<String>,
    /// Heading of the ceremony blurb.
    pub about_heading: String,
    /// Ceremony blurb, wrapped.
    pub about_lines: Vec<String>,
    /// Navigation menu entries in display order.
    pub menu: Vec<MenuEntry>,
}

/// One navigation menu entry.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    /// The key that triggers the entry.
    pub key: char,
    /// The entry label.
    pub label: String,
}

/// Confession form content.
#[derive(Debug, Clone)]
pub struct ConfessionView {
    /// Screen heading.
    pub heading: String,
    /// Current content of the name field.
    pub author: String,
    /// Placeholder shown while the name field is empty.
    pub author_placeholder: String,
    /// Body content wrapped to the field width; empty while the body is empty.
    pub body_lines: Vec<String>,
    /// Placeholder shown while the body is empty.
    pub body_placeholder: String,
    /// Which field the cursor sits in.
    pub focus: FormFocus,
    /// Whether a submission is in flight (renders the purifying indicator and
    /// greys out the submit hint).
    pub submitting: bool,
}

/// Message feed content, one variant per feed phase.
#[derive(Debug, Clone)]
pub enum FeedView {
    /// The fetch is outstanding.
    Loading,
    /// The collection arrived.
    Ready {
        /// Cards from the scroll position onward.
        cards: Vec<MessageCard>,
        /// Number of cards above the window.
        skipped: usize,
        /// Total cards in the collection.
        total: usize,
    },
    /// The fetch failed.
    Failed {
        /// Human-readable failure description.
        message: String,
    },
}

/// One approved message, display-ready.
#[derive(Debug, Clone)]
pub struct MessageCard {
    /// Formatted approval date.
    pub date: String,
    /// Attribution line.
    pub author: String,
    /// `(locale label, wrapped text)` for all three locales, in display order.
    pub variants: Vec<(String, Vec<String>)>,
}

/// Doctrine listing content.
#[derive(Debug, Clone)]
pub struct DoctrinesView {
    /// Entries from the scroll position onward.
    pub entries: Vec<DoctrineEntry>,
    /// Number of entries above the window.
    pub skipped: usize,
    /// Total entries.
    pub total: usize,
    /// Closing line under the listing.
    pub epigraph: String,
}

/// One doctrine, display-ready.
#[derive(Debug, Clone)]
pub struct DoctrineEntry {
    /// 1-based position; order is semantically meaningful.
    pub ordinal: usize,
    /// Statement text, wrapped.
    pub text_lines: Vec<String>,
}
