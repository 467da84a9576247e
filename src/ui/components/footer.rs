//! Footer component renderer.

use crate::ui::helpers::{position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Keybinding hints are centered and dimmed; the line is padded to the full
/// terminal width and truncated on narrow terminals.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let help_text = truncate_chars(&footer.keybindings, cols);
    let text_len = help_text.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}
