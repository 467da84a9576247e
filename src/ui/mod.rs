//! UI layer: view models, theming, and ANSI rendering.
//!
//! Rendering is split MVVM-style: [`AppState`](crate::app::AppState) computes
//! an immutable view model, and the renderer prints it with theme colors. The
//! components never read application state directly.
//!
//! - [`viewmodel`]: Display-ready view model types
//! - [`renderer`]: Frame rendering entry point
//! - [`components`]: Per-screen and chrome renderers
//! - [`theme`]: Color schemes and ANSI escape generation
//! - [`helpers`]: Cursor positioning, wrapping, truncation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
