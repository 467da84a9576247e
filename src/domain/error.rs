//! Error types for the White Temple application.
//!
//! This module defines the centralized error type [`TempleError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for White Temple operations.
///
/// This enum consolidates all error conditions that can occur while the
/// application runs, from the simulated service boundaries to terminal I/O and
/// configuration issues. Most variants carry a human-readable description;
/// I/O errors convert automatically via `#[from]`.
#[derive(Debug, Error)]
pub enum TempleError {
    /// The submission boundary could not be reached.
    ///
    /// Reserved for a real backend replacing the simulated submission service.
    /// The simulation never produces it, but the contract keeps it representable
    /// so a network client is a drop-in replacement.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The content store failed to produce its collection.
    ///
    /// Drives the message feed into its failed state. Local to the feed screen;
    /// navigation and other screens are unaffected.
    #[error("Content error: {0}")]
    Content(String),

    /// An approved message violated the locale invariant at construction.
    ///
    /// Every approved message must carry non-empty text for all three locales.
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// Filesystem or terminal I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for White Temple operations.
///
/// Type alias for `std::result::Result<T, TempleError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, TempleError>;
