//! Active-filter chips.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterChip;

/// Renders chips left to right on one row; chips that do not fit are
/// summarized as `+N`.
pub fn render_chips(row: usize, chips: &[FilterChip], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(" ");
    let mut used = 1;

    for (idx, chip) in chips.iter().enumerate() {
        let label = format!(" {} ", chip.text);
        let width = label.chars().count() + 1;
        let remaining = chips.len() - idx;

        if (remaining > 1 && used + width + 4 > cols) || used + width > cols {
            print!("{}+{remaining}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
            break;
        }

        print!(
            "{}{}{label}{} ",
            Theme::fg(&theme.colors.chip_fg),
            Theme::bg(&theme.colors.chip_bg),
            Theme::reset()
        );
        used += width;
    }

    row + 1
}
