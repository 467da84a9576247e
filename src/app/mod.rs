//! Application layer coordinating state, events, and actions.
//!
//! This module is the control-flow core of the temple: the router over the
//! closed [`Screen`] enumeration, the confession and feed flows, and the event
//! handler that ties them together. It sits between the terminal shim
//! (main.rs) and the domain/service/worker layers.
//!
//! # Architecture
//!
//! The application follows a unidirectional data flow:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordinator
//! - [`screens`]: Screen and flow state machine types
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod handler;
pub mod screens;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use screens::{ConfessionPhase, FormFocus, Screen};
pub use state::{AppState, ConfessionState, FeedPhase, FeedState};
