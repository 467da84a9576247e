//! Top-level rendering coordinator.
//!
//! The main rendering entry point: computes the view model from application
//! state and delegates to the component renderers. Layout is fixed: header on
//! rows 1-2, footer on the last row, the active screen in between, and the
//! notice banner overlaying the top when one is active.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::clear_screen;
use crate::ui::viewmodel::ScreenView;
use std::io::Write;

/// Renders one frame to stdout.
///
/// Clears the screen, renders the view model computed from `state`, and
/// flushes. Does not read input or block.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let vm = state.compute_viewmodel(rows, cols);
    let theme = &state.theme;

    clear_screen();

    let body_start = components::render_header(&vm.header, theme, cols);
    let body_end = rows.saturating_sub(2);

    match &vm.body {
        ScreenView::Landing(view) => {
            components::render_landing(body_start, body_end, view, theme, cols);
        }
        ScreenView::Confession(view) => {
            components::render_confession(body_start, body_end, view, theme, cols);
        }
        ScreenView::Feed(view) => {
            components::render_feed(body_start, body_end, view, theme, cols);
        }
        ScreenView::Doctrines(view) => {
            components::render_doctrines(body_start, body_end, view, theme, cols);
        }
    }

    components::render_footer(rows, &vm.footer, theme, cols);

    if let Some(notice) = &vm.notice {
        components::render_notice(notice, theme, cols);
    }

    let _ = std::io::stdout().flush();
}
