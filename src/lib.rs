//! White Temple: a terminal rendition of a digital confession temple.
//!
//! The application presents four screens (a landing page, a confession
//! portal, a read-only multilingual message gallery, and a static doctrine
//! listing) behind a single event-driven state machine. Submissions and
//! message loads are asynchronous against simulated service boundaries, so a
//! real backend can later slot in behind the same traits.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Screen routing                                   │  ← Flow logic
//! │  - Event handling, action dispatching               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Service Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (services/)   │   │ (worker/)     │
//! │ - Rendering   │   │ - Content     │   │ - Async tasks │
//! │ - Theming     │   │ - Submission  │   │ - Cancellation│
//! │ - Components  │   │ - Simulation  │   │ - Trace bridge│
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Models & errors (domain/)                        │
//! │  - Tracing pipeline (observability/)                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Event Flow
//!
//! The UI thread is single-threaded and event-driven. Key presses become
//! [`app::Event`]s; [`app::handle_event`] mutates [`app::AppState`] and
//! returns [`app::Action`]s; the shim executes them: posting worker
//! messages, surfacing notices, quitting. Async results come back through the
//! worker as events, closing the loop. Navigating away from a screen with an
//! in-flight request cancels it explicitly.
//!
//! # Example
//!
//! ```
//! use white_temple::app::{handle_event, Event, Screen};
//! use white_temple::services::SimulatedContentStore;
//! use white_temple::{initialize, Config};
//!
//! let config = Config::default();
//! let store = SimulatedContentStore::seeded().unwrap();
//! let mut state = initialize(&config, &store);
//! assert_eq!(state.current_screen(), Screen::Landing);
//!
//! let (redraw, _actions) =
//!     handle_event(&mut state, &Event::Navigate(Screen::Doctrines)).unwrap();
//! assert!(redraw);
//! assert_eq!(state.current_screen(), Screen::Doctrines);
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod services;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, Screen};
pub use domain::{Result, TempleError};
pub use ui::Theme;

use serde::Deserialize;
use services::ContentStore;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the configuration file location.
const CONFIG_ENV_VAR: &str = "WHITE_TEMPLE_CONFIG";

/// Application configuration.
///
/// Loaded from an optional TOML file; every field has a default, and a missing
/// file means an entirely default configuration. Latencies exist so the
/// simulated boundaries can be tuned (or zeroed in tests) without touching
/// code.
///
/// ```toml
/// # ~/.config/white-temple/config.toml
/// theme = "misty-night"
/// trace_level = "debug"
/// submit_latency_ms = 1500
/// fetch_latency_ms = 800
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme`.
    pub theme_file: Option<String>,

    /// Tracing filter level (`trace`, `debug`, `info`, `warn`, `error`).
    pub trace_level: Option<String>,

    /// Simulated submission latency in milliseconds.
    pub submit_latency_ms: u64,

    /// Simulated message fetch latency in milliseconds.
    pub fetch_latency_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            submit_latency_ms: services::DEFAULT_SUBMIT_LATENCY.as_millis() as u64,
            fetch_latency_ms: services::DEFAULT_FETCH_LATENCY.as_millis() as u64,
        }
    }
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// The path comes from `WHITE_TEMPLE_CONFIG` if set, otherwise the
    /// platform config dir. A missing file yields the default configuration;
    /// only an unreadable or unparseable file is an error.
    ///
    /// # Errors
    ///
    /// Returns [`TempleError::Config`] if the file exists but cannot be read
    /// or parsed.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(infrastructure::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            TempleError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`TempleError::Config`] on invalid TOML.
    ///
    /// # Example
    ///
    /// ```
    /// use white_temple::Config;
    ///
    /// let config = Config::from_toml_str("submit_latency_ms = 10").unwrap();
    /// assert_eq!(config.submit_latency().as_millis(), 10);
    /// assert_eq!(config.fetch_latency().as_millis(), 800);
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| TempleError::Config(e.to_string()))
    }

    /// The simulated submission latency.
    #[must_use]
    pub const fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    /// The simulated fetch latency.
    #[must_use]
    pub const fn fetch_latency(&self) -> Duration {
        Duration::from_millis(self.fetch_latency_ms)
    }
}

/// Initializes the application state.
///
/// Resolves the theme (custom file first, then built-in name, then default)
/// and loads the static doctrine listing from the content store, the one
/// synchronous read in the system, since doctrines carry no latency.
#[must_use]
pub fn initialize(config: &Config, content: &dyn ContentStore) -> AppState {
    tracing::debug!("initializing white temple");

    let theme = match (&config.theme_file, &config.theme_name) {
        (Some(theme_file), _) => Theme::from_file(theme_file).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
            Theme::default()
        }),
        (None, Some(theme_name)) => Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme name, using default");
            Theme::default()
        }),
        (None, None) => Theme::default(),
    };

    AppState::new(content.list_doctrines(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SimulatedContentStore;

    #[test]
    fn default_config_matches_the_simulated_latencies() {
        let config = Config::default();
        assert_eq!(config.submit_latency(), services::DEFAULT_SUBMIT_LATENCY);
        assert_eq!(config.fetch_latency(), services::DEFAULT_FETCH_LATENCY);
    }

    #[test]
    fn partial_toml_keeps_defaults_for_the_rest() {
        let config = Config::from_toml_str("theme = \"porcelain-dawn\"").unwrap();
        assert_eq!(config.theme_name.as_deref(), Some("porcelain-dawn"));
        assert_eq!(config.fetch_latency(), services::DEFAULT_FETCH_LATENCY);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = Config::from_toml_str("submit_latency_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, TempleError::Config(_)));
    }

    #[test]
    fn initialize_starts_on_landing_with_the_doctrines_loaded() {
        let store = SimulatedContentStore::seeded().unwrap();
        let state = initialize(&Config::default(), &store);
        assert_eq!(state.current_screen(), Screen::Landing);
        assert_eq!(state.doctrines.len(), 8);
    }

    #[test]
    fn unknown_theme_name_falls_back_to_default() {
        let store = SimulatedContentStore::seeded().unwrap();
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        let state = initialize(&config, &store);
        assert_eq!(state.theme.name, Theme::default().name);
    }
}
