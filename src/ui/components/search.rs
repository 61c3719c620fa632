//! Boxed search input.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 1;

/// Draws the three-row search box across `cols` columns.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}┌{}┐{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    let caret = if search.focused { "▏" } else { "" };
    let label = " Search: ";
    let max_query = inner_width.saturating_sub(label.len() + caret.chars().count());
    let query: String = {
        // Keep the tail of long queries so the caret stays visible.
        let chars: Vec<char> = search.query.chars().collect();
        chars[chars.len().saturating_sub(max_query)..].iter().collect()
    };
    let used = label.len() + query.chars().count() + caret.chars().count();

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}│", Theme::fg(border));
    print!("{}{label}", Theme::fg(&theme.colors.text_dim));
    print!("{}{query}{caret}", Theme::fg(&theme.colors.text_normal));
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}│{}", Theme::fg(border), Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}└{}┘{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    row + 3
}
