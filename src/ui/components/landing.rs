//! Landing screen renderer: title screen, ceremony blurb, navigation menu.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LandingView;

/// Renders the temple entrance between `start_row` and `end_row` inclusive.
pub fn render_landing(
    start_row: usize,
    end_row: usize,
    view: &LandingView,
    theme: &Theme,
    cols: usize,
) {
    let mut row = start_row + 1;

    for line in &view.subtitle {
        if row > end_row {
            return;
        }
        print_centered(row, line, &Theme::fg(&theme.colors.text_dim), cols);
        row += 1;
    }

    row += 1;
    if row <= end_row {
        let glow_width = (cols / 2).max(8);
        print_centered(
            row,
            &"─".repeat(glow_width),
            &Theme::fg(&theme.colors.accent),
            cols,
        );
        row += 2;
    }

    if row <= end_row {
        print_centered(
            row,
            &view.about_heading,
            &format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent)),
            cols,
        );
        row += 2;
    }
    for line in &view.about_lines {
        if row > end_row {
            return;
        }
        print_centered(row, line, &Theme::fg(&theme.colors.text_dim), cols);
        row += 1;
    }

    row += 1;
    for entry in &view.menu {
        if row > end_row {
            return;
        }
        let label = format!("[{}] {}", entry.key, entry.label);
        let padding = cols.saturating_sub(label.chars().count()) / 2;
        position_cursor(row, 1);
        print!("{}", " ".repeat(padding));
        print!(
            "{}[{}]{} {}{}{}",
            Theme::fg(&theme.colors.accent),
            entry.key,
            Theme::reset(),
            Theme::fg(&theme.colors.text_normal),
            entry.label,
            Theme::reset()
        );
        row += 2;
    }
}

fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let padding = cols.saturating_sub(text.chars().count()) / 2;
    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{style}{text}{}", Theme::reset());
}
