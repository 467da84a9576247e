//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! worker responses, translating them into state changes and action sequences.
//! It is the single place screen transitions happen, which keeps the
//! navigation rules total over the closed [`Screen`] enumeration.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the terminal shim or the worker bridge
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`AppState`] methods
//! 4. Actions are collected and returned for the shim to execute
//!
//! Async results re-enter as [`Event::WorkerResponse`] and pass a
//! stale-response guard: a response whose request id no longer matches the
//! mounted screen's pending id is discarded, so navigating away mid-flight can
//! never corrupt a later visit.

use crate::app::screens::{ConfessionPhase, FormFocus, Screen};
use crate::app::state::{AppState, ConfessionState, FeedPhase, FeedState};
use crate::app::Action;
use crate::domain::error::Result;
use crate::domain::{Notice, SubmissionOutcome};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Validation message shown when the confession body is empty.
const EMPTY_BODY_NOTICE: &str = "Please enter a message for purification";

/// Acknowledgment shown when a confession is accepted.
const ACCEPTED_NOTICE: &str = "Your message has been received for purification";

/// Subtext of the acceptance acknowledgment.
const ACCEPTED_DETAIL: &str = "The temple acknowledges your confession.";

/// Events triggered by user input or worker responses.
///
/// Each event is a discrete occurrence that may cause state changes and action
/// emissions. The handler processes them sequentially, so state transitions
/// are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mounts the given screen, unmounting the current one.
    Navigate(Screen),
    /// Mounts the landing screen from anywhere.
    ReturnToLanding,
    /// Leaves the application.
    Quit,

    /// Moves input focus to the other form field.
    FocusNext,
    /// Appends a character to the focused form field.
    Char(char),
    /// Removes the last character from the focused form field.
    Backspace,
    /// Line break in the body, or focus hand-off from the name field.
    Newline,
    /// Submits the confession draft.
    Submit,

    /// Moves the scroll window down one entry.
    ScrollDown,
    /// Moves the scroll window up one entry.
    ScrollUp,
    /// Re-issues a failed feed fetch.
    RetryLoad,

    /// Expires the active notice.
    DismissNotice,

    /// Wraps a response from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions.
///
/// Returns `(redraw, actions)`: whether the frame needs re-rendering, and the
/// side effects for the shim to execute in order. Events that do not apply to
/// the mounted screen are ignored without a redraw.
///
/// # Errors
///
/// Reserved for state transitions that can fail; the current set cannot, but
/// the signature keeps the shim's error path uniform.
#[allow(clippy::unnecessary_wraps)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Navigate(target) => Ok(navigate(state, *target)),
        Event::ReturnToLanding => Ok(navigate(state, Screen::Landing)),
        Event::Quit => Ok((false, vec![Action::Quit])),

        Event::FocusNext => {
            if state.screen != Screen::Confession
                || state.confession.phase == ConfessionPhase::Submitting
            {
                return Ok((false, vec![]));
            }
            state.confession.focus = state.confession.focus.next();
            Ok((true, vec![]))
        }

        Event::Char(c) => Ok(edit_draft(state, |draft, focus| match focus {
            FormFocus::Author => draft.author.push(*c),
            FormFocus::Body => draft.body.push(*c),
        })),

        Event::Backspace => Ok(edit_draft(state, |draft, focus| {
            match focus {
                FormFocus::Author => draft.author.pop(),
                FormFocus::Body => draft.body.pop(),
            };
        })),

        Event::Newline => {
            if state.screen != Screen::Confession
                || state.confession.phase == ConfessionPhase::Submitting
            {
                return Ok((false, vec![]));
            }
            match state.confession.focus {
                // Enter in the name field moves on to the message, like a form.
                FormFocus::Author => state.confession.focus = FormFocus::Body,
                FormFocus::Body => {
                    leave_settled(state);
                    state.confession.draft.body.push('\n');
                }
            }
            Ok((true, vec![]))
        }

        Event::Submit => Ok(submit(state)),

        Event::ScrollDown => Ok((state.scroll_down(), vec![])),
        Event::ScrollUp => Ok((state.scroll_up(), vec![])),

        Event::RetryLoad => {
            if state.screen != Screen::MessageFeed
                || !matches!(state.feed.phase, FeedPhase::Failed(_))
            {
                return Ok((false, vec![]));
            }
            let request_id = state.allocate_request_id();
            state.feed = FeedState::loading(request_id);
            tracing::debug!(request_id, "retrying message load");
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::load_messages(request_id))],
            ))
        }

        Event::DismissNotice => {
            if state.notice.is_none() {
                return Ok((false, vec![]));
            }
            state.clear_notice();
            Ok((true, vec![]))
        }

        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
    }
}

/// Mounts `target`, discarding the current screen's local state.
///
/// Requesting the already-mounted screen is a no-op: state is left untouched
/// and no actions are emitted. Otherwise any in-flight request of the screen
/// being left is cancelled, and the target's state is re-initialized: a fresh
/// draft for the confession portal, a fresh fetch for the feed.
fn navigate(state: &mut AppState, target: Screen) -> (bool, Vec<Action>) {
    if state.screen == target {
        tracing::debug!(screen = ?target, "navigation to mounted screen ignored");
        return (false, vec![]);
    }

    let mut actions = cancel_in_flight(state);
    state.screen = target;
    state.clear_notice();

    match target {
        Screen::Landing => {}
        Screen::Confession => state.confession = ConfessionState::new(),
        Screen::MessageFeed => {
            let request_id = state.allocate_request_id();
            state.feed = FeedState::loading(request_id);
            actions.push(Action::PostToWorker(WorkerMessage::load_messages(
                request_id,
            )));
        }
        Screen::Doctrines => state.doctrine_scroll = 0,
    }

    tracing::debug!(screen = ?target, "screen mounted");
    (true, actions)
}

/// Emits cancellations for every outstanding request and forgets them.
///
/// Run on unmount so the worker aborts the underlying task instead of letting
/// the result land after the screen is gone.
fn cancel_in_flight(state: &mut AppState) -> Vec<Action> {
    let mut actions = vec![];
    if let Some(request_id) = state.confession.pending_request.take() {
        tracing::debug!(request_id, "cancelling in-flight submission on unmount");
        actions.push(Action::PostToWorker(WorkerMessage::cancel(request_id)));
    }
    if let Some(request_id) = state.feed.pending_request.take() {
        tracing::debug!(request_id, "cancelling in-flight load on unmount");
        actions.push(Action::PostToWorker(WorkerMessage::cancel(request_id)));
    }
    actions
}

/// Applies an edit to the draft if the confession form currently takes input.
///
/// Input is ignored outside the confession screen and while a submission is in
/// flight. Editing after a settled attempt returns the flow to `Editing`.
fn edit_draft(
    state: &mut AppState,
    apply: impl FnOnce(&mut crate::domain::ConfessionDraft, &FormFocus),
) -> (bool, Vec<Action>) {
    if state.screen != Screen::Confession
        || state.confession.phase == ConfessionPhase::Submitting
    {
        return (false, vec![]);
    }
    leave_settled(state);
    let focus = state.confession.focus;
    apply(&mut state.confession.draft, &focus);
    (true, vec![])
}

fn leave_settled(state: &mut AppState) {
    if state.confession.phase == ConfessionPhase::Settled {
        state.confession.phase = ConfessionPhase::Editing;
    }
}

/// Runs the submit guard and, if it passes, posts the draft to the worker.
///
/// A whitespace-only body never reaches the worker: the flow stays in
/// `Editing` and an error notice is surfaced. While `Submitting`, further
/// submits are ignored entirely, so exactly one worker post happens per
/// accepted attempt.
fn submit(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.screen != Screen::Confession {
        return (false, vec![]);
    }

    match state.confession.phase {
        ConfessionPhase::Submitting => {
            tracing::debug!("submit ignored while a submission is in flight");
            (false, vec![])
        }
        ConfessionPhase::Editing | ConfessionPhase::Settled => {
            if !state.confession.draft.validate() {
                tracing::debug!("submit rejected by validation: empty body");
                state.confession.phase = ConfessionPhase::Editing;
                return (true, vec![Action::Notify(Notice::error(EMPTY_BODY_NOTICE))]);
            }

            let request_id = state.allocate_request_id();
            state.confession.phase = ConfessionPhase::Submitting;
            state.confession.pending_request = Some(request_id);
            tracing::debug!(
                request_id,
                author = %state.confession.draft.author_or_anonymous(),
                "confession posted for purification"
            );
            (
                true,
                vec![Action::PostToWorker(WorkerMessage::submit_confession(
                    request_id,
                    state.confession.draft.clone(),
                ))],
            )
        }
    }
}

/// Applies a worker response to the screen that is waiting for it.
///
/// Responses for unmounted screens or superseded requests are discarded, which
/// is the second half of the cancellation design.
fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::SubmissionSettled {
            request_id,
            outcome,
        } => {
            if !submission_is_current(state, *request_id) {
                return (false, vec![]);
            }
            state.confession.pending_request = None;
            state.confession.phase = ConfessionPhase::Settled;

            match outcome {
                SubmissionOutcome::Accepted => {
                    state.confession.draft.clear();
                    (
                        true,
                        vec![Action::Notify(
                            Notice::success(ACCEPTED_NOTICE).with_detail(ACCEPTED_DETAIL),
                        )],
                    )
                }
                SubmissionOutcome::Rejected { reason } => (
                    true,
                    vec![Action::Notify(
                        Notice::error("The temple declined your confession")
                            .with_detail(reason.clone()),
                    )],
                ),
            }
        }

        WorkerResponse::SubmissionFailed {
            request_id,
            message,
        } => {
            if !submission_is_current(state, *request_id) {
                return (false, vec![]);
            }
            state.confession.pending_request = None;
            // Draft is preserved so the visitor can retry.
            state.confession.phase = ConfessionPhase::Settled;
            (
                true,
                vec![Action::Notify(
                    Notice::error("The temple could not be reached")
                        .with_detail(message.clone()),
                )],
            )
        }

        WorkerResponse::MessagesLoaded {
            request_id,
            messages,
        } => {
            if !feed_is_current(state, *request_id) {
                return (false, vec![]);
            }
            state.feed.pending_request = None;
            state.feed.phase = FeedPhase::Ready(messages.clone());
            state.feed.scroll = 0;
            tracing::debug!(message_count = messages.len(), "message feed ready");
            (true, vec![])
        }

        WorkerResponse::LoadFailed {
            request_id,
            message,
        } => {
            if !feed_is_current(state, *request_id) {
                return (false, vec![]);
            }
            state.feed.pending_request = None;
            state.feed.phase = FeedPhase::Failed(message.clone());
            (true, vec![])
        }
    }
}

fn submission_is_current(state: &AppState, request_id: u64) -> bool {
    let current = state.screen == Screen::Confession
        && state.confession.pending_request == Some(request_id);
    if !current {
        tracing::debug!(request_id, "stale submission response discarded");
    }
    current
}

fn feed_is_current(state: &AppState, request_id: u64) -> bool {
    let current =
        state.screen == Screen::MessageFeed && state.feed.pending_request == Some(request_id);
    if !current {
        tracing::debug!(request_id, "stale feed response discarded");
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApprovedMessage, LocalizedText, NoticeKind, SubmissionOutcome};
    use crate::ui::theme::Theme;
    use chrono::NaiveDate;

    fn fresh_state() -> AppState {
        AppState::new(vec![], Theme::default())
    }

    fn seeded_message(id: &str) -> ApprovedMessage {
        ApprovedMessage::new(
            id,
            LocalizedText::new("en", "中文", "ไทย").unwrap(),
            "Someone",
            NaiveDate::from_ymd_opt(2024, 11, 13).unwrap(),
        )
    }

    fn posted_request_id(actions: &[Action]) -> u64 {
        actions
            .iter()
            .find_map(|action| match action {
                Action::PostToWorker(WorkerMessage::SubmitConfession { request_id, .. })
                | Action::PostToWorker(WorkerMessage::LoadMessages { request_id, .. }) => {
                    Some(*request_id)
                }
                _ => None,
            })
            .expect("no worker post among actions")
    }

    fn type_body(state: &mut AppState, text: &str) {
        handle_event(state, &Event::FocusNext).unwrap();
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn navigate_to_landing_while_on_landing_is_a_no_op() {
        let mut state = fresh_state();
        let (redraw, actions) =
            handle_event(&mut state, &Event::Navigate(Screen::Landing)).unwrap();
        assert!(!redraw);
        assert!(actions.is_empty());
        assert_eq!(state.current_screen(), Screen::Landing);
    }

    #[test]
    fn empty_body_submit_never_reaches_the_worker() {
        let mut state = fresh_state();
        handle_event(&mut state, &Event::Navigate(Screen::Confession)).unwrap();
        state.confession.draft.author = "X".to_string();
        state.confession.draft.body = "   ".to_string();

        let (redraw, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(redraw);
        assert_eq!(state.confession.phase, ConfessionPhase::Editing);
        assert!(
            !actions
                .iter()
                .any(|a| matches!(a, Action::PostToWorker(_))),
            "validation failure must not post to the worker"
        );
        match &actions[..] {
            [Action::Notify(notice)] => {
                assert_eq!(notice.kind, NoticeKind::Error);
                assert_eq!(notice.message, EMPTY_BODY_NOTICE);
            }
            other => panic!("expected a single error notice, got {other:?}"),
        }
    }

    #[test]
    fn valid_submit_posts_exactly_once_and_disables_resubmission() {
        let mut state = fresh_state();
        handle_event(&mut state, &Event::Navigate(Screen::Confession)).unwrap();
        type_body(&mut state, "test");

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(state.confession.phase, ConfessionPhase::Submitting);
        assert_eq!(actions.len(), 1);
        let request_id = posted_request_id(&actions);

        // Re-entrant submit while in flight is ignored entirely.
        let (redraw, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(!redraw);
        assert!(actions.is_empty());

        // Settling the request clears the draft and surfaces success.
        let (_, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::SubmissionSettled {
                request_id,
                outcome: SubmissionOutcome::Accepted,
            }),
        )
        .unwrap();
        assert_eq!(state.confession.phase, ConfessionPhase::Settled);
        assert!(state.confession.draft.body.is_empty());
        match &actions[..] {
            [Action::Notify(notice)] => assert_eq!(notice.kind, NoticeKind::Success),
            other => panic!("expected a success notice, got {other:?}"),
        }
    }

    #[test]
    fn transport_failure_preserves_the_draft_for_retry() {
        let mut state = fresh_state();
        handle_event(&mut state, &Event::Navigate(Screen::Confession)).unwrap();
        type_body(&mut state, "a burden");

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let request_id = posted_request_id(&actions);

        let (_, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::SubmissionFailed {
                request_id,
                message: "gateway timeout".to_string(),
            }),
        )
        .unwrap();

        assert_eq!(state.confession.draft.body, "a burden");
        assert_eq!(state.confession.phase, ConfessionPhase::Settled);
        match &actions[..] {
            [Action::Notify(notice)] => {
                assert_eq!(notice.kind, NoticeKind::Error);
                assert_eq!(notice.detail.as_deref(), Some("gateway timeout"));
            }
            other => panic!("expected an error notice, got {other:?}"),
        }

        // Retry is user-initiated re-submission of the preserved draft.
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(state.confession.phase, ConfessionPhase::Submitting);
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn mounting_the_feed_starts_loading_and_posts_a_fetch() {
        let mut state = fresh_state();
        let (redraw, actions) =
            handle_event(&mut state, &Event::Navigate(Screen::MessageFeed)).unwrap();

        assert!(redraw);
        assert!(matches!(state.feed.phase, FeedPhase::Loading));
        let request_id = posted_request_id(&actions);
        assert_eq!(state.feed.pending_request, Some(request_id));
    }

    #[test]
    fn loaded_messages_arrive_in_store_order() {
        let mut state = fresh_state();
        let (_, actions) =
            handle_event(&mut state, &Event::Navigate(Screen::MessageFeed)).unwrap();
        let request_id = posted_request_id(&actions);

        let messages = vec![seeded_message("1"), seeded_message("2"), seeded_message("3")];
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::MessagesLoaded {
                request_id,
                messages: messages.clone(),
            }),
        )
        .unwrap();

        match &state.feed.phase {
            FeedPhase::Ready(loaded) => assert_eq!(*loaded, messages),
            other => panic!("expected ready feed, got {other:?}"),
        }
    }

    #[test]
    fn navigation_discards_the_draft_and_refetches_the_feed() {
        let mut state = fresh_state();

        handle_event(&mut state, &Event::Navigate(Screen::Confession)).unwrap();
        type_body(&mut state, "half-written");
        handle_event(&mut state, &Event::ReturnToLanding).unwrap();

        // A fresh visit starts from an empty draft.
        handle_event(&mut state, &Event::Navigate(Screen::Confession)).unwrap();
        assert!(state.confession.draft.body.is_empty());
        handle_event(&mut state, &Event::ReturnToLanding).unwrap();

        // Every feed mount fetches under its own request id.
        let (_, actions) =
            handle_event(&mut state, &Event::Navigate(Screen::MessageFeed)).unwrap();
        let first = posted_request_id(&actions);
        handle_event(&mut state, &Event::ReturnToLanding).unwrap();
        let (_, actions) =
            handle_event(&mut state, &Event::Navigate(Screen::MessageFeed)).unwrap();
        let second = posted_request_id(&actions);
        assert_ne!(first, second);
    }

    #[test]
    fn unmounting_mid_flight_cancels_and_later_responses_are_stale() {
        let mut state = fresh_state();
        let (_, actions) =
            handle_event(&mut state, &Event::Navigate(Screen::MessageFeed)).unwrap();
        let request_id = posted_request_id(&actions);

        let (_, actions) = handle_event(&mut state, &Event::ReturnToLanding).unwrap();
        assert!(
            actions.iter().any(|a| matches!(
                a,
                Action::PostToWorker(WorkerMessage::Cancel { request_id: id, .. }) if *id == request_id
            )),
            "unmount must cancel the in-flight fetch"
        );

        // If the response still sneaks through, the guard drops it.
        handle_event(&mut state, &Event::Navigate(Screen::MessageFeed)).unwrap();
        let (redraw, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::MessagesLoaded {
                request_id,
                messages: vec![seeded_message("stale")],
            }),
        )
        .unwrap();
        assert!(!redraw);
        assert!(matches!(state.feed.phase, FeedPhase::Loading));
    }

    #[test]
    fn failed_feed_is_a_defined_state_and_retry_reloads() {
        let mut state = fresh_state();
        let (_, actions) =
            handle_event(&mut state, &Event::Navigate(Screen::MessageFeed)).unwrap();
        let request_id = posted_request_id(&actions);

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::LoadFailed {
                request_id,
                message: "connection refused".to_string(),
            }),
        )
        .unwrap();
        assert!(matches!(state.feed.phase, FeedPhase::Failed(_)));

        let (_, actions) = handle_event(&mut state, &Event::RetryLoad).unwrap();
        let retry_id = posted_request_id(&actions);
        assert_ne!(retry_id, request_id);
        assert!(matches!(state.feed.phase, FeedPhase::Loading));
    }

    #[test]
    fn editing_after_a_settled_attempt_returns_to_editing() {
        let mut state = fresh_state();
        handle_event(&mut state, &Event::Navigate(Screen::Confession)).unwrap();
        type_body(&mut state, "test");
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let request_id = posted_request_id(&actions);
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::SubmissionSettled {
                request_id,
                outcome: SubmissionOutcome::Accepted,
            }),
        )
        .unwrap();
        assert_eq!(state.confession.phase, ConfessionPhase::Settled);

        handle_event(&mut state, &Event::Char('n')).unwrap();
        assert_eq!(state.confession.phase, ConfessionPhase::Editing);
        assert_eq!(state.confession.draft.body, "n");
    }
}
