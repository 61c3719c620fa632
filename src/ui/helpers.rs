//! Shared rendering utilities.
//!
//! Everything here prints straight to stdout, which Zellij captures as the
//! pane contents. Widths and ranges are in characters, not bytes.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row`/`col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates `text` to at most `width` characters, or pads it to exactly that.
///
/// # Examples
///
/// ```
/// use dexplorer::ui::helpers::fit;
///
/// assert_eq!(fit("Pikachu", 4), "Pika");
/// assert_eq!(fit("Mew", 5), "Mew  ");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.push_str(&" ".repeat(width - len));
    out
}

/// Prints `text` with the character `ranges` highlighted.
///
/// After each highlighted run the given `restore` escape is re-applied, so
/// callers can keep a row background across the highlight.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}{restore}", Theme::reset());

        current_pos = end;
    }

    let remaining: String = chars[current_pos..].iter().collect();
    print!("{remaining}");
}

/// Horizontal rule across `cols` columns starting at `col`.
pub fn render_rule(row: usize, col: usize, cols: usize, color: &str) -> usize {
    position_cursor(row, col);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_counts_characters() {
        assert_eq!(fit("Flabébé", 7), "Flabébé");
        assert_eq!(fit("Flabébé", 9), "Flabébé  ");
        assert_eq!(fit("", 2), "  ");
    }
}
