//! Confession form renderer.

use crate::app::screens::FormFocus;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ConfessionView;

const MARGIN: usize = 4;

/// Renders the confession portal between `start_row` and `end_row` inclusive.
///
/// The focused field carries a `▸` marker and a trailing cursor block; both
/// disappear while a submission is in flight, when the form no longer takes
/// input.
pub fn render_confession(
    start_row: usize,
    end_row: usize,
    view: &ConfessionView,
    theme: &Theme,
    cols: usize,
) {
    let mut row = start_row + 1;

    let heading_pad = cols.saturating_sub(view.heading.chars().count()) / 2;
    position_cursor(row, 1);
    print!("{}", " ".repeat(heading_pad));
    print!(
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.title_fg),
        view.heading,
        Theme::reset()
    );
    row += 2;

    // Name field.
    if row > end_row {
        return;
    }
    render_label(
        row,
        "Optional name",
        view.focus == FormFocus::Author && !view.submitting,
        theme,
    );
    row += 1;

    if row > end_row {
        return;
    }
    position_cursor(row, MARGIN + 1);
    if view.author.is_empty() {
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.text_dim),
            view.author_placeholder,
            Theme::reset()
        );
    } else {
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.text_normal),
            view.author,
            Theme::reset()
        );
    }
    if view.focus == FormFocus::Author && !view.submitting {
        print!("{}▏{}", Theme::fg(&theme.colors.focus_fg), Theme::reset());
    }
    row += 2;

    // Message field.
    if row > end_row {
        return;
    }
    render_label(
        row,
        "Your message to be purified",
        view.focus == FormFocus::Body && !view.submitting,
        theme,
    );
    row += 1;

    if view.body_lines.is_empty() {
        if row > end_row {
            return;
        }
        position_cursor(row, MARGIN + 1);
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.text_dim),
            view.body_placeholder,
            Theme::reset()
        );
        if view.focus == FormFocus::Body && !view.submitting {
            position_cursor(row, MARGIN + 1);
            print!("{}▏{}", Theme::fg(&theme.colors.focus_fg), Theme::reset());
        }
        row += 1;
    } else {
        let last = view.body_lines.len() - 1;
        for (index, line) in view.body_lines.iter().enumerate() {
            if row > end_row {
                return;
            }
            position_cursor(row, MARGIN + 1);
            print!(
                "{}{}{}",
                Theme::fg(&theme.colors.text_normal),
                line,
                Theme::reset()
            );
            if index == last && view.focus == FormFocus::Body && !view.submitting {
                print!("{}▏{}", Theme::fg(&theme.colors.focus_fg), Theme::reset());
            }
            row += 1;
        }
    }

    // Submit hint / in-flight indicator.
    row += 1;
    if row > end_row {
        return;
    }
    let hint = if view.submitting {
        "◌ Purifying..."
    } else {
        "Ctrl+S: Send to purification"
    };
    let padding = cols.saturating_sub(hint.chars().count()) / 2;
    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.accent),
        hint,
        Theme::reset()
    );
}

fn render_label(row: usize, text: &str, focused: bool, theme: &Theme) {
    position_cursor(row, 3);
    if focused {
        print!(
            "{}▸ {}{}",
            Theme::fg(&theme.colors.focus_fg),
            text,
            Theme::reset()
        );
    } else {
        print!(
            "{}  {}{}",
            Theme::fg(&theme.colors.text_dim),
            text,
            Theme::reset()
        );
    }
}
