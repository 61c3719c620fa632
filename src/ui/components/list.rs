//! Record list: column headings and one row per visible record.

use crate::ui::helpers::{self, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 20;
const TYPES_WIDTH: usize = 17;

pub fn render_list_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let headings = format!(
        "  {:<ID_WIDTH$} {:<NAME_WIDTH$} {:<TYPES_WIDTH$} HP/ATK/SPD",
        "#", "NAME", "TYPE"
    );
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", fit(&headings, cols));
    print!("{}", Theme::reset());
    row + 1
}

pub fn render_list_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_list_row(current_row, item, theme, cols);
    }
    current_row
}

fn render_list_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let row_style = if item.is_cursor {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(row, 1);
    print!("{row_style}");

    if item.is_selected {
        if !item.is_cursor {
            print!("{}", Theme::fg(&theme.colors.selected_marker_fg));
        }
        print!("● {row_style}");
    } else {
        print!("  ");
    }

    print!("{} ", fit(&item.id_label, ID_WIDTH));

    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, &row_style);
    print!("{} ", " ".repeat(NAME_WIDTH.saturating_sub(item.name.chars().count())));

    print!("{} ", fit(&item.types, TYPES_WIDTH));

    let mut used = 2 + ID_WIDTH + 1 + NAME_WIDTH + 1 + TYPES_WIDTH + 1;
    let stats = fit(&item.stats, cols.saturating_sub(used + 2));
    print!("{stats}");
    used += stats.chars().count();

    if item.is_legendary && used + 2 <= cols {
        if !item.is_cursor {
            print!("{}", Theme::fg(&theme.colors.legendary_fg));
        }
        print!(" ★");
        used += 2;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}
