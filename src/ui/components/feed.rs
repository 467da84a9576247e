//! Message feed renderer: loading, ready, and failed phases.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FeedView, MessageCard};

const MARGIN: usize = 4;

/// Renders the approved-message gallery between `start_row` and `end_row`.
pub fn render_feed(
    start_row: usize,
    end_row: usize,
    view: &FeedView,
    theme: &Theme,
    cols: usize,
) {
    match view {
        FeedView::Loading => render_loading(start_row, end_row, theme, cols),
        FeedView::Failed { message } => render_failed(start_row, end_row, message, theme, cols),
        FeedView::Ready {
            cards,
            skipped,
            total,
        } => render_cards(start_row, end_row, cards, *skipped, *total, theme, cols),
    }
}

fn render_loading(start_row: usize, end_row: usize, theme: &Theme, cols: usize) {
    let row = (start_row + end_row) / 2;
    print_centered(
        row,
        "Receiving the purified messages...",
        &Theme::fg(&theme.colors.text_dim),
        cols,
    );
    if row + 1 <= end_row {
        print_centered(row + 1, "· · ·", &Theme::fg(&theme.colors.accent), cols);
    }
}

fn render_failed(start_row: usize, end_row: usize, message: &str, theme: &Theme, cols: usize) {
    let row = (start_row + end_row) / 2;
    print_centered(
        row,
        "The messages could not be received",
        &Theme::fg(&theme.colors.error_fg),
        cols,
    );
    if row + 1 <= end_row {
        print_centered(row + 1, message, &Theme::fg(&theme.colors.text_dim), cols);
    }
    if row + 3 <= end_row {
        print_centered(
            row + 3,
            "Press r to try again",
            &Theme::fg(&theme.colors.text_dim),
            cols,
        );
    }
}

fn render_cards(
    start_row: usize,
    end_row: usize,
    cards: &[MessageCard],
    skipped: usize,
    total: usize,
    theme: &Theme,
    cols: usize,
) {
    let mut row = start_row;

    position_cursor(row, MARGIN + 1);
    print!(
        "{}message {} of {}{}",
        Theme::fg(&theme.colors.text_dim),
        skipped + 1,
        total,
        Theme::reset()
    );
    row += 2;

    for card in cards {
        if row > end_row {
            return;
        }
        row = render_card(row, end_row, card, theme, cols);
    }
}

/// Renders one card; returns the next free row.
fn render_card(
    mut row: usize,
    end_row: usize,
    card: &MessageCard,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, MARGIN + 1);
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.border),
        "─".repeat(cols.saturating_sub(2 * MARGIN)),
        Theme::reset()
    );
    row += 1;

    if row > end_row {
        return row;
    }
    position_cursor(row, MARGIN + 1);
    print!(
        "{}✦ {}{}",
        Theme::fg(&theme.colors.text_dim),
        card.date,
        Theme::reset()
    );
    row += 2;

    for (label, lines) in &card.variants {
        if row > end_row {
            return row;
        }
        position_cursor(row, MARGIN + 1);
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.accent),
            label,
            Theme::reset()
        );
        row += 1;

        for line in lines {
            if row > end_row {
                return row;
            }
            position_cursor(row, MARGIN + 1);
            print!(
                "{}{}{}",
                Theme::fg(&theme.colors.text_normal),
                line,
                Theme::reset()
            );
            row += 1;
        }
        row += 1;
    }

    if row <= end_row {
        position_cursor(row, MARGIN + 1);
        print!(
            "{}— {}{}",
            Theme::fg(&theme.colors.accent),
            card.author,
            Theme::reset()
        );
        row += 2;
    }
    row
}

fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let padding = cols.saturating_sub(text.chars().count()) / 2;
    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{style}{text}{}", Theme::reset());
}
