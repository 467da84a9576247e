//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning, text
//! wrapping, and truncation. Everything operates on character counts, not
//! bytes, so multi-byte scripts never split mid-character.

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\x1b[{row};{col}H`. Coordinates are
/// 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Clears the screen and homes the cursor.
pub fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[1;1H");
}

/// Wraps text to the given width, preserving explicit line breaks.
///
/// Greedy word wrap on whitespace; a single word longer than the width is
/// hard-broken at the width. Scripts written without spaces (Chinese, Thai)
/// therefore break at the width boundary, which is the best a cell-width-naive
/// renderer can do. An empty input yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    let width = width.max(1);

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            for piece in break_word(word, width) {
                let piece_len = piece.chars().count();
                if current_len == 0 {
                    current = piece;
                    current_len = piece_len;
                } else if current_len + 1 + piece_len <= width {
                    current.push(' ');
                    current.push_str(&piece);
                    current_len += 1 + piece_len;
                } else {
                    lines.push(std::mem::take(&mut current));
                    current = piece;
                    current_len = piece_len;
                }
            }
        }
        lines.push(current);
    }
    lines
}

/// Splits a single word into pieces no longer than `width` characters.
fn break_word(word: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= width {
        return vec![word.to_string()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Truncates text to `max` characters, appending an ellipsis when shortened.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_text("the ritual begins when you hesitate", 12);
        assert_eq!(lines, ["the ritual", "begins when", "you hesitate"]);
    }

    #[test]
    fn preserves_explicit_line_breaks() {
        let lines = wrap_text("first\n\nsecond", 20);
        assert_eq!(lines, ["first", "", "second"]);
    }

    #[test]
    fn hard_breaks_spaceless_scripts_at_the_width() {
        let lines = wrap_text("在数字空间的黑暗中我找到了光明", 6);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 6));
    }

    #[test]
    fn empty_text_yields_no_lines() {
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("神庙教会了我", 6), "神庙教会了我");
        assert_eq!(truncate_chars("神庙教会了我数据", 6), "神庙教...");
    }
}
