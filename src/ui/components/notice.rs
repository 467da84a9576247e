//! Transient notice banner renderer.
//!
//! The terminal presentation of a [`Notice`] event: a top-centered banner in
//! the severity color, overlaying the header area until it expires.

use crate::domain::{Notice, NoticeKind};
use crate::ui::helpers::{position_cursor, truncate_chars};
use crate::ui::theme::Theme;

/// Renders the active notice as a top-centered banner.
pub fn render_notice(notice: &Notice, theme: &Theme, cols: usize) {
    let color = match notice.kind {
        NoticeKind::Success => &theme.colors.success_fg,
        NoticeKind::Error => &theme.colors.error_fg,
    };

    let marker = match notice.kind {
        NoticeKind::Success => "✦",
        NoticeKind::Error => "✕",
    };

    let message = truncate_chars(&format!("{marker} {}", notice.message), cols);
    print_centered(1, &message, &format!("{}{}", Theme::bold(), Theme::fg(color)), cols);

    if let Some(detail) = &notice.detail {
        let detail = truncate_chars(detail, cols);
        print_centered(2, &detail, &Theme::fg(&theme.colors.text_dim), cols);
    }
}

fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let padding = cols.saturating_sub(text.chars().count()) / 2;
    position_cursor(row, 1);
    print!("{}", " ".repeat(cols));
    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{style}{text}{}", Theme::reset());
}
