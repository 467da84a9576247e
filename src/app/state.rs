//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for all
//! transient UI state: the mounted screen, the confession flow, the message
//! feed, the doctrine listing, and the active notice. It is mutated only by
//! the event handler; view models are computed on demand from state snapshots.
//!
//! Each screen owns its state exclusively. Mounting a screen re-initializes
//! that state, which is how a half-written draft is discarded on navigation
//! and how the feed re-fetches on every mount.

use crate::app::screens::{ConfessionPhase, FormFocus, Screen};
use crate::domain::{ApprovedMessage, ConfessionDraft, Doctrine, Locale, Notice};
use crate::ui::helpers::wrap_text;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ConfessionView, DoctrineEntry, DoctrinesView, FeedView, FooterInfo, HeaderInfo, LandingView,
    MenuEntry, MessageCard, ScreenView, UIViewModel,
};

/// State local to one visit of the confession screen.
///
/// Recreated whole on every mount, so nothing survives navigation.
#[derive(Debug, Clone)]
pub struct ConfessionState {
    /// The draft being composed.
    pub draft: ConfessionDraft,
    /// Where the flow stands.
    pub phase: ConfessionPhase,
    /// Which field receives input.
    pub focus: FormFocus,
    /// Id of the in-flight submission, if one is outstanding.
    pub pending_request: Option<u64>,
}

impl ConfessionState {
    /// Creates the state for a fresh visit: empty draft, editing, name field
    /// focused.
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: ConfessionDraft::new(),
            phase: ConfessionPhase::Editing,
            focus: FormFocus::Author,
            pending_request: None,
        }
    }
}

impl Default for ConfessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the message feed stands.
#[derive(Debug, Clone)]
pub enum FeedPhase {
    /// The fetch is outstanding.
    Loading,
    /// The collection arrived, in store order.
    Ready(Vec<ApprovedMessage>),
    /// The fetch failed; retry is user-initiated.
    Failed(String),
}

/// State local to one visit of the message feed.
#[derive(Debug, Clone)]
pub struct FeedState {
    /// Current feed phase.
    pub phase: FeedPhase,
    /// Index of the first visible card.
    pub scroll: usize,
    /// Id of the in-flight fetch, if one is outstanding.
    pub pending_request: Option<u64>,
}

impl FeedState {
    /// State before the feed has ever been mounted.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            phase: FeedPhase::Loading,
            scroll: 0,
            pending_request: None,
        }
    }

    /// State for a fresh mount with an outstanding fetch.
    #[must_use]
    pub fn loading(request_id: u64) -> Self {
        Self {
            phase: FeedPhase::Loading,
            scroll: 0,
            pending_request: Some(request_id),
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The mounted screen. Initial value: [`Screen::Landing`].
    pub screen: Screen,

    /// Confession screen state; recreated on every mount.
    pub confession: ConfessionState,

    /// Message feed state; recreated on every mount.
    pub feed: FeedState,

    /// The static doctrine listing, loaded once at startup.
    pub doctrines: Vec<Doctrine>,

    /// Index of the first visible doctrine entry.
    pub doctrine_scroll: usize,

    /// Active transient notification, if any.
    pub notice: Option<Notice>,

    /// Color scheme for rendering.
    pub theme: Theme,

    next_request_id: u64,
}

impl AppState {
    /// Creates the initial state: landing screen, empty flows.
    #[must_use]
    pub fn new(doctrines: Vec<Doctrine>, theme: Theme) -> Self {
        Self {
            screen: Screen::Landing,
            confession: ConfessionState::new(),
            feed: FeedState::idle(),
            doctrines,
            doctrine_scroll: 0,
            notice: None,
            theme,
            next_request_id: 1,
        }
    }

    /// Returns the mounted screen.
    #[must_use]
    pub const fn current_screen(&self) -> Screen {
        self.screen
    }

    /// Hands out the next worker request id.
    ///
    /// Ids are unique for the lifetime of the process; the stale-response
    /// guard and cancellation both key on them.
    pub fn allocate_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Installs a notice for the renderer to overlay.
    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Removes the active notice.
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Moves the scroll window of the mounted screen down by one entry.
    ///
    /// Returns whether anything changed. No-op on screens without a scroll
    /// window and at the end of the content.
    pub fn scroll_down(&mut self) -> bool {
        match self.screen {
            Screen::MessageFeed => {
                if let FeedPhase::Ready(messages) = &self.feed.phase {
                    let max = messages.len().saturating_sub(1);
                    if self.feed.scroll < max {
                        self.feed.scroll += 1;
                        return true;
                    }
                }
                false
            }
            Screen::Doctrines => {
                let max = self.doctrines.len().saturating_sub(1);
                if self.doctrine_scroll < max {
                    self.doctrine_scroll += 1;
                    return true;
                }
                false
            }
            Screen::Landing | Screen::Confession => false,
        }
    }

    /// Moves the scroll window of the mounted screen up by one entry.
    ///
    /// Returns whether anything changed.
    pub fn scroll_up(&mut self) -> bool {
        match self.screen {
            Screen::MessageFeed => {
                if matches!(self.feed.phase, FeedPhase::Ready(_)) && self.feed.scroll > 0 {
                    self.feed.scroll -= 1;
                    return true;
                }
                false
            }
            Screen::Doctrines => {
                if self.doctrine_scroll > 0 {
                    self.doctrine_scroll -= 1;
                    return true;
                }
                false
            }
            Screen::Landing | Screen::Confession => false,
        }
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// All wrapping and scroll windowing happens here so the renderer only
    /// positions and colors text.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            body: self.compute_body(rows, cols),
            footer: self.compute_footer(),
            notice: self.notice.clone(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.screen {
            Screen::Landing => " White Temple ".to_string(),
            Screen::Confession => " Confession Portal ".to_string(),
            Screen::MessageFeed => match &self.feed.phase {
                FeedPhase::Ready(messages) => {
                    format!(" Sacred Confessions ({}) ", messages.len())
                }
                FeedPhase::Loading | FeedPhase::Failed(_) => " Sacred Confessions ".to_string(),
            },
            Screen::Doctrines => format!(" Temple Doctrines ({}) ", self.doctrines.len()),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.screen {
            Screen::Landing => {
                "c: confess  m: messages  d: doctrines  q: leave the temple".to_string()
            }
            Screen::Confession => match self.confession.phase {
                ConfessionPhase::Submitting => "Purifying...  Esc: return to temple".to_string(),
                ConfessionPhase::Editing | ConfessionPhase::Settled => {
                    "Tab: switch field  Ctrl+S: send to purification  Esc: return to temple"
                        .to_string()
                }
            },
            Screen::MessageFeed => match self.feed.phase {
                FeedPhase::Loading => "Esc: return to temple".to_string(),
                FeedPhase::Ready(_) => "j/k: scroll  Esc: return to temple  q: quit".to_string(),
                FeedPhase::Failed(_) => {
                    "r: retry  Esc: return to temple  q: quit".to_string()
                }
            },
            Screen::Doctrines => "j/k: scroll  Esc: return to temple  q: quit".to_string(),
        };
        FooterInfo { keybindings }
    }

    fn compute_body(&self, rows: usize, cols: usize) -> ScreenView {
        let text_width = cols.saturating_sub(8).max(20);
        match self.screen {
            Screen::Landing => ScreenView::Landing(Self::compute_landing(text_width)),
            Screen::Confession => {
                ScreenView::Confession(self.compute_confession(text_width))
            }
            Screen::MessageFeed => ScreenView::Feed(self.compute_feed(rows, text_width)),
            Screen::Doctrines => {
                ScreenView::Doctrines(self.compute_doctrines(rows, text_width))
            }
        }
    }

    fn compute_landing(width: usize) -> LandingView {
        LandingView {
            subtitle: wrap_text(
                "A digital temple constructed between the internet and a physical site.",
                width,
            ),
            about_heading: "About the Ceremony".to_string(),
            about_lines: [
                "Join us on November 13 & 14 for a ritual of confession and purification.",
                "Experience the space between data and divinity.",
            ]
            .iter()
            .flat_map(|line| wrap_text(line, width))
            .collect(),
            menu: vec![
                MenuEntry {
                    key: 'c',
                    label: "Enter the confession portal".to_string(),
                },
                MenuEntry {
                    key: 'm',
                    label: "View the approved messages".to_string(),
                },
                MenuEntry {
                    key: 'd',
                    label: "Read the temple doctrines".to_string(),
                },
            ],
        }
    }

    fn compute_confession(&self, width: usize) -> ConfessionView {
        ConfessionView {
            heading: "Your sin shall be purified".to_string(),
            author: self.confession.draft.author.clone(),
            author_placeholder: "Anonymous".to_string(),
            body_lines: wrap_text(&self.confession.draft.body, width),
            body_placeholder: "Enter your confession, thoughts, or burdens here. \
                               Let the digital temple receive and transform them..."
                .to_string(),
            focus: self.confession.focus,
            submitting: self.confession.phase == ConfessionPhase::Submitting,
        }
    }

    fn compute_feed(&self, rows: usize, width: usize) -> FeedView {
        match &self.feed.phase {
            FeedPhase::Loading => FeedView::Loading,
            FeedPhase::Failed(message) => FeedView::Failed {
                message: message.clone(),
            },
            FeedPhase::Ready(messages) => {
                let cards: Vec<MessageCard> = messages
                    .iter()
                    .skip(self.feed.scroll)
                    .take(rows.max(1))
                    .map(|message| Self::compute_card(message, width))
                    .collect();
                FeedView::Ready {
                    cards,
                    skipped: self.feed.scroll,
                    total: messages.len(),
                }
            }
        }
    }

    fn compute_card(message: &ApprovedMessage, width: usize) -> MessageCard {
        MessageCard {
            date: message.date.format("%b %d, %Y").to_string(),
            author: message.author.clone(),
            variants: Locale::ALL
                .iter()
                .map(|&locale| {
                    (
                        locale.label().to_string(),
                        wrap_text(message.content.get(locale), width),
                    )
                })
                .collect(),
        }
    }

    fn compute_doctrines(&self, rows: usize, width: usize) -> DoctrinesView {
        let number_width = 4;
        let entries: Vec<DoctrineEntry> = self
            .doctrines
            .iter()
            .enumerate()
            .skip(self.doctrine_scroll)
            .take(rows.max(1))
            .map(|(index, doctrine)| DoctrineEntry {
                ordinal: index + 1,
                text_lines: wrap_text(&doctrine.text, width.saturating_sub(number_width)),
            })
            .collect();
        DoctrinesView {
            entries,
            skipped: self.doctrine_scroll,
            total: self.doctrines.len(),
            epigraph: "Enter with understanding, leave with wisdom".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocalizedText;
    use chrono::NaiveDate;

    fn doctrines(count: usize) -> Vec<Doctrine> {
        (0..count)
            .map(|i| Doctrine::new(format!("statement {i}")))
            .collect()
    }

    fn message(id: &str) -> ApprovedMessage {
        ApprovedMessage::new(
            id,
            LocalizedText::new("en text", "中文", "ไทย").unwrap(),
            "Someone",
            NaiveDate::from_ymd_opt(2024, 11, 13).unwrap(),
        )
    }

    #[test]
    fn request_ids_are_unique_and_increasing() {
        let mut state = AppState::new(vec![], Theme::default());
        let a = state.allocate_request_id();
        let b = state.allocate_request_id();
        assert!(b > a);
    }

    #[test]
    fn doctrine_scroll_clamps_to_the_listing() {
        let mut state = AppState::new(doctrines(3), Theme::default());
        state.screen = Screen::Doctrines;

        assert!(!state.scroll_up());
        assert!(state.scroll_down());
        assert!(state.scroll_down());
        assert!(!state.scroll_down(), "scroll must stop at the last entry");
        assert_eq!(state.doctrine_scroll, 2);
    }

    #[test]
    fn feed_scroll_is_inert_while_loading() {
        let mut state = AppState::new(vec![], Theme::default());
        state.screen = Screen::MessageFeed;
        state.feed = FeedState::loading(1);

        assert!(!state.scroll_down());
        assert!(!state.scroll_up());
    }

    #[test]
    fn ready_feed_viewmodel_windows_from_the_scroll_position() {
        let mut state = AppState::new(vec![], Theme::default());
        state.screen = Screen::MessageFeed;
        state.feed = FeedState {
            phase: FeedPhase::Ready(vec![message("1"), message("2"), message("3")]),
            scroll: 1,
            pending_request: None,
        };

        let vm = state.compute_viewmodel(24, 80);
        match vm.body {
            ScreenView::Feed(FeedView::Ready {
                cards,
                skipped,
                total,
            }) => {
                assert_eq!(cards.len(), 2);
                assert_eq!(skipped, 1);
                assert_eq!(total, 3);
            }
            other => panic!("expected ready feed, got {other:?}"),
        }
    }

    #[test]
    fn every_card_exposes_all_three_locale_variants() {
        let card = AppState::compute_card(&message("1"), 40);
        let labels: Vec<&str> = card.variants.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["English", "中文", "ไทย"]);
        assert!(card.variants.iter().all(|(_, lines)| !lines.is_empty()));
    }
}
