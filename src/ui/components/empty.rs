//! Placeholder shown instead of list rows.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyKind, EmptyState};

/// Centers the message and subtitle within `cols` columns starting at `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let color = match empty.kind {
        EmptyKind::Failed => &theme.colors.error_fg,
        EmptyKind::Waiting | EmptyKind::Loading | EmptyKind::NoResults => &theme.colors.empty_state_fg,
    };

    let msg_len = empty.message.chars().count();
    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(cols.saturating_sub(msg_len) / 2));
    print!("{}", empty.message);
    print!("{}", Theme::reset());

    if empty.subtitle.is_empty() {
        return;
    }

    let sub_len = empty.subtitle.chars().count();
    position_cursor(row + 2, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(cols.saturating_sub(sub_len) / 2));
    print!("{}", empty.subtitle);
    print!("{}", Theme::reset());
}
