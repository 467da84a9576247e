//! Header component renderer.

use crate::ui::helpers::{position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar and its separator line at the top of the screen.
///
/// Returns the next available row.
pub fn render_header(header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate_chars(&header.title, cols);
    let title_len = title.chars().count();
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(1, 1);
    print!("{}", " ".repeat(padding));
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.title_fg));
    print!("{title}");
    print!("{}", Theme::reset());

    position_cursor(2, 1);
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());

    3
}
