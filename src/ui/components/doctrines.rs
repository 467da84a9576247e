//! Doctrine listing renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DoctrinesView;

const MARGIN: usize = 4;

/// Renders the numbered doctrine listing between `start_row` and `end_row`.
pub fn render_doctrines(
    start_row: usize,
    end_row: usize,
    view: &DoctrinesView,
    theme: &Theme,
    cols: usize,
) {
    let mut row = start_row;

    position_cursor(row, MARGIN + 1);
    print!(
        "{}doctrine {} of {}{}",
        Theme::fg(&theme.colors.text_dim),
        view.skipped + 1,
        view.total,
        Theme::reset()
    );
    row += 2;

    for entry in &view.entries {
        if row > end_row {
            return;
        }
        let number = format!("{}.", entry.ordinal);
        position_cursor(row, MARGIN + 1);
        print!(
            "{}{}{}{:width$}",
            Theme::fg(&theme.colors.accent),
            number,
            Theme::reset(),
            "",
            width = 4usize.saturating_sub(number.chars().count())
        );

        let mut first = true;
        for line in &entry.text_lines {
            if row > end_row {
                return;
            }
            if !first {
                position_cursor(row, MARGIN + 5);
            }
            print!(
                "{}{}{}",
                Theme::fg(&theme.colors.text_normal),
                line,
                Theme::reset()
            );
            first = false;
            row += 1;
        }
        row += 1;
    }

    if row + 1 <= end_row {
        let padding = cols.saturating_sub(view.epigraph.chars().count()) / 2;
        position_cursor(row + 1, 1);
        print!("{}", " ".repeat(padding));
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.text_dim),
            view.epigraph,
            Theme::reset()
        );
    }
}
