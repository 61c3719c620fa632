//! Filter panel: one labelled input per filter control.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterPanelInfo;

const LABEL_WIDTH: usize = 12;

pub fn render_filter_panel(row: usize, col: usize, width: usize, panel: &FilterPanelInfo, theme: &Theme) {
    position_cursor(row, col);
    print!("{}{}Filters{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());

    let value_width = width.saturating_sub(LABEL_WIDTH + 3);
    for (offset, field) in panel.fields.iter().enumerate() {
        position_cursor(row + 2 + offset, col);
        print!("{}{}", Theme::fg(&theme.colors.text_dim), fit(&field.label, LABEL_WIDTH));

        let (open, close, style) = if field.is_focused {
            (
                "[",
                "]",
                format!(
                    "{}{}",
                    Theme::fg(&theme.colors.selection_fg),
                    Theme::bg(&theme.colors.selection_bg)
                ),
            )
        } else {
            (" ", " ", Theme::fg(&theme.colors.text_normal))
        };

        let caret = if field.is_focused { "▏" } else { "" };
        let value = format!("{}{caret}", field.value);
        print!(
            "{}{open}{style}{}{}{}{close}{}",
            Theme::fg(&theme.colors.border),
            fit(&value, value_width),
            Theme::reset(),
            Theme::fg(&theme.colors.border),
            Theme::reset()
        );
    }
}
