//! Actions representing side effects to be executed by the terminal shim.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions bridge pure state transformations and effectful operations:
//! posting to the worker, surfacing a notification, terminating the loop. The
//! shim executes them in sequence.

use crate::domain::Notice;
use crate::worker::WorkerMessage;

/// Commands produced by the event handler for the shim to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leaves the event loop and restores the terminal.
    Quit,

    /// Posts a message to the background worker.
    ///
    /// Covers both starting an async operation and cancelling one. The
    /// handler never blocks on either.
    PostToWorker(WorkerMessage),

    /// Surfaces a transient notification.
    ///
    /// The notice is a presentation-agnostic event; the terminal shim shows it
    /// as a banner and expires it, but any other channel could subscribe here
    /// instead.
    Notify(Notice),
}
