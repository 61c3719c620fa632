//! Detail panel for the selected record, or the welcome panel.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailInfo, DetailPanel, StatBar};

const LABEL_WIDTH: usize = 11;
const VALUE_WIDTH: usize = 4;

/// Draws the panel in the box starting at `row`/`col`, at most `width`
/// columns wide and `max_rows` tall.
pub fn render_detail(row: usize, col: usize, width: usize, max_rows: usize, panel: &DetailPanel, theme: &Theme) {
    let mut lines = Lines { row, col, width, end: row + max_rows };

    match panel {
        DetailPanel::Welcome { title, hint } => {
            lines.next(&format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)), title);
            lines.skip();
            lines.next(&Theme::fg(&theme.colors.text_dim), hint);
        }
        DetailPanel::Record(detail) => render_record(&mut lines, detail, theme),
    }
}

fn render_record(lines: &mut Lines, detail: &DetailInfo, theme: &Theme) {
    lines.next(
        &format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)),
        &detail.title,
    );
    lines.skip();

    if lines.has_room() {
        let badge = |text: &str| {
            format!(
                "{}{} {text} {}",
                Theme::fg(&theme.colors.badge_fg),
                Theme::bg(&theme.colors.badge_bg),
                Theme::reset()
            )
        };
        position_cursor(lines.row, lines.col);
        print!("{} {}", badge(&detail.type1), badge(&detail.type2));
        lines.row += 1;
    }
    lines.skip();

    for (label, value) in &detail.facts {
        let text = format!("{label:<LABEL_WIDTH$}{value}");
        lines.next(&Theme::fg(&theme.colors.text_normal), &text);
    }
    lines.skip();

    for stat in &detail.stats {
        if !lines.has_room() {
            break;
        }
        render_stat_bar(lines, stat, theme);
    }

    if !detail.sprite_url.is_empty() {
        lines.skip();
        lines.next(&Theme::fg(&theme.colors.text_dim), &detail.sprite_url);
    }
}

fn render_stat_bar(lines: &mut Lines, stat: &StatBar, theme: &Theme) {
    let bar_width = lines.width.saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 1);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((stat.fill_percent / 100.0) * bar_width as f64).round() as usize;
    let filled = filled.min(bar_width);

    position_cursor(lines.row, lines.col);
    print!("{}{:<LABEL_WIDTH$}", Theme::fg(&theme.colors.text_normal), stat.label);
    print!("{:>3} ", stat.value);
    print!("{}{}", Theme::fg(&theme.colors.stat_bar_fill), "█".repeat(filled));
    print!("{}{}", Theme::fg(&theme.colors.stat_bar_empty), "█".repeat(bar_width - filled));
    print!("{}", Theme::reset());
    lines.row += 1;
}

/// Row cursor confined to the panel box.
struct Lines {
    row: usize,
    col: usize,
    width: usize,
    end: usize,
}

impl Lines {
    const fn has_room(&self) -> bool {
        self.row < self.end
    }

    fn next(&mut self, style: &str, text: &str) {
        if !self.has_room() {
            return;
        }
        position_cursor(self.row, self.col);
        print!("{style}{}{}", fit(text, self.width), Theme::reset());
        self.row += 1;
    }

    fn skip(&mut self) {
        self.row += 1;
    }
}
