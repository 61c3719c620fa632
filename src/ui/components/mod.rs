//! Pane layout and the components drawn into it.
//!
//! ```text
//! row 2        header (full width)
//! row 3        ─────────────────────────────────────────────
//!              search box (3 rows, optional)  │ detail panel
//!              filter chips (optional)        │   or
//!              list headings                  │ filter panel
//!              list rows ...                  │
//! rows - 1     ─────────────────────────────────────────────
//! rows         footer
//! ```
//!
//! The right pane is dropped below [`SPLIT_MIN_COLS`] columns.

mod chips;
mod detail;
mod empty;
mod filters;
mod footer;
mod header;
mod list;
mod search;

use crate::ui::helpers::{position_cursor, render_rule};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Narrowest pane that still gets a detail panel.
pub const SPLIT_MIN_COLS: usize = 100;

/// Width of the list pane for a pane `cols` wide.
#[must_use]
pub const fn list_width(cols: usize) -> usize {
    if cols >= SPLIT_MIN_COLS {
        cols * 3 / 5
    } else {
        cols
    }
}

pub fn render_layout(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let list_cols = list_width(cols);
    let footer_row = rows;
    let bottom_rule_row = rows.saturating_sub(1);

    let mut current_row = header::render_header(2, &vm.header, theme, cols);
    current_row = render_rule(current_row, 1, cols, &theme.colors.border);
    let body_top = current_row;

    if let Some(search) = &vm.search_bar {
        current_row = search::render_search_bar(current_row, search, theme, list_cols);
    }
    if !vm.chips.is_empty() {
        current_row = chips::render_chips(current_row, &vm.chips, theme, list_cols);
    }
    current_row = list::render_list_headers(current_row, theme, list_cols);

    if let Some(empty) = &vm.empty_state {
        empty::render_empty_state(current_row, empty, theme, list_cols);
    } else {
        list::render_list_rows(current_row, &vm.display_items, theme, list_cols);
    }

    if list_cols < cols {
        render_side_pane(vm, theme, body_top, bottom_rule_row, list_cols, cols);
    }

    render_rule(bottom_rule_row, 1, cols, &theme.colors.border);
    footer::render_footer(footer_row, &vm.footer, theme, cols);
}

fn render_side_pane(
    vm: &UIViewModel,
    theme: &Theme,
    top: usize,
    bottom: usize,
    list_cols: usize,
    cols: usize,
) {
    for row in top..bottom {
        position_cursor(row, list_cols + 1);
        print!("{}│{}", Theme::fg(&theme.colors.border), Theme::reset());
    }

    let col = list_cols + 3;
    let width = cols.saturating_sub(col);
    let max_rows = bottom.saturating_sub(top + 1);

    if let Some(panel) = &vm.filter_panel {
        filters::render_filter_panel(top + 1, col, width, panel, theme);
    } else {
        detail::render_detail(top + 1, col, width, max_rows, &vm.detail, theme);
    }
}
