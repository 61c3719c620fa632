//! Title bar with the visible/total count and the active sort.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    let sort_len = header.sort_label.chars().count() + 1;
    let gap = cols.saturating_sub(title_len + sort_len);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", header.title);
    print!("{}", " ".repeat(gap));
    if title_len + sort_len <= cols {
        print!("{}{} ", Theme::fg(&theme.colors.text_dim), header.sort_label);
    }

    print!("{}", Theme::reset());
    row + 1
}
