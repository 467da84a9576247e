//! Integration tests exercising the confession and gallery flows end to end:
//! real event handler, real worker, simulated services at zero latency.

use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use white_temple::app::{
    handle_event, Action, AppState, ConfessionPhase, Event, FeedPhase, Screen,
};
use white_temple::domain::NoticeKind;
use white_temple::services::{
    ContentStore, SimulatedContentStore, SimulatedSubmissionService, SubmissionService,
};
use white_temple::worker::{TempleWorker, WorkerMessage, WorkerResponse};
use white_temple::{initialize, Config};

struct Harness {
    state: AppState,
    request_tx: UnboundedSender<WorkerMessage>,
    response_rx: Receiver<WorkerResponse>,
}

impl Harness {
    /// Builds the application against zero-latency services with the worker
    /// running on the test runtime.
    fn new() -> Self {
        Self::with_services(
            Arc::new(SimulatedSubmissionService::with_latency(Duration::ZERO)),
            Arc::new(SimulatedContentStore::seeded_with_latency(Duration::ZERO).unwrap()),
        )
    }

    fn with_services(
        submission: Arc<dyn SubmissionService>,
        content: Arc<dyn ContentStore>,
    ) -> Self {
        let state = initialize(&Config::default(), content.as_ref());

        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = std::sync::mpsc::channel();
        let worker = TempleWorker::new(submission, content, response_tx);
        tokio::spawn(worker.run(request_rx));

        Self {
            state,
            request_tx,
            response_rx,
        }
    }

    /// Handles one event and executes its actions the way the shim does:
    /// worker posts go to the worker, notices land in state.
    fn dispatch(&mut self, event: &Event) -> Vec<Action> {
        let (_, actions) = handle_event(&mut self.state, event).unwrap();
        for action in &actions {
            match action {
                Action::PostToWorker(message) => {
                    self.request_tx.send(message.clone()).unwrap();
                }
                Action::Notify(notice) => self.state.show_notice(notice.clone()),
                Action::Quit => {}
            }
        }
        actions
    }

    /// Waits for the next worker response and feeds it back into the handler.
    fn pump(&mut self) {
        let response = self
            .response_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("worker response");
        self.dispatch(&Event::WorkerResponse(response));
    }

    /// Asserts that no worker response arrives within the window.
    fn assert_silent(&self, window: Duration) {
        assert!(
            self.response_rx.recv_timeout(window).is_err(),
            "expected no worker response"
        );
    }

    fn type_body(&mut self, text: &str) {
        self.dispatch(&Event::FocusNext);
        for c in text.chars() {
            self.dispatch(&Event::Char(c));
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn anonymous_confession_is_accepted_and_draft_cleared() {
    let mut harness = Harness::new();

    harness.dispatch(&Event::Navigate(Screen::Confession));
    harness.type_body("test");
    harness.dispatch(&Event::Submit);
    assert_eq!(harness.state.confession.phase, ConfessionPhase::Submitting);

    harness.pump();

    assert_eq!(harness.state.confession.phase, ConfessionPhase::Settled);
    assert!(harness.state.confession.draft.body.is_empty());
    let notice = harness.state.notice.as_ref().expect("success notice");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(
        notice.message,
        "Your message has been received for purification"
    );
    assert_eq!(
        notice.detail.as_deref(),
        Some("The temple acknowledges your confession.")
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn whitespace_confession_is_rejected_before_the_worker() {
    let mut harness = Harness::new();

    harness.dispatch(&Event::Navigate(Screen::Confession));
    for c in "X".chars() {
        harness.dispatch(&Event::Char(c));
    }
    harness.type_body("   ");
    harness.dispatch(&Event::Submit);

    assert_eq!(harness.state.confession.phase, ConfessionPhase::Editing);
    let notice = harness.state.notice.as_ref().expect("error notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Please enter a message for purification");

    harness.assert_silent(Duration::from_millis(200));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn feed_mount_loads_the_five_seeded_messages_in_order() {
    let mut harness = Harness::new();

    harness.dispatch(&Event::Navigate(Screen::MessageFeed));
    assert!(matches!(harness.state.feed.phase, FeedPhase::Loading));

    harness.pump();

    match &harness.state.feed.phase {
        FeedPhase::Ready(messages) => {
            let ids: Vec<&str> = messages.iter().map(|m| m.id.as_str()).collect();
            assert_eq!(ids, ["1", "2", "3", "4", "5"]);
        }
        other => panic!("expected ready feed, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn navigation_discards_the_draft_and_refetches_independently() {
    let mut harness = Harness::new();

    harness.dispatch(&Event::Navigate(Screen::Confession));
    harness.type_body("half-written");
    harness.dispatch(&Event::ReturnToLanding);

    harness.dispatch(&Event::Navigate(Screen::MessageFeed));
    harness.pump();
    assert!(matches!(harness.state.feed.phase, FeedPhase::Ready(_)));

    // Remounting re-fetches; nothing is cached across mounts.
    harness.dispatch(&Event::ReturnToLanding);
    harness.dispatch(&Event::Navigate(Screen::MessageFeed));
    assert!(matches!(harness.state.feed.phase, FeedPhase::Loading));
    harness.pump();
    assert!(matches!(harness.state.feed.phase, FeedPhase::Ready(_)));

    // And the confession draft did not survive its unmount.
    harness.dispatch(&Event::Navigate(Screen::Confession));
    assert!(harness.state.confession.draft.body.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn leaving_the_feed_mid_fetch_cancels_the_request() {
    let mut harness = Harness::with_services(
        Arc::new(SimulatedSubmissionService::with_latency(Duration::ZERO)),
        Arc::new(
            SimulatedContentStore::seeded_with_latency(Duration::from_secs(30)).unwrap(),
        ),
    );

    harness.dispatch(&Event::Navigate(Screen::MessageFeed));
    let actions = harness.dispatch(&Event::ReturnToLanding);

    assert!(
        actions
            .iter()
            .any(|a| matches!(a, Action::PostToWorker(WorkerMessage::Cancel { .. }))),
        "unmount must emit a cancellation"
    );
    harness.assert_silent(Duration::from_millis(300));
    assert_eq!(harness.state.current_screen(), Screen::Landing);
}
