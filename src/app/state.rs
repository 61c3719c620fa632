//! Application state management and view model computation.
//!
//! [`AppState`] is the single explicit state object behind the plugin. It owns
//! the loaded [`RecordStore`], the raw filter inputs and the active filter set,
//! the search term, the sort, the selection, and the cursor. The visible list
//! is derived state: [`AppState::rederive`] recomputes it from the full store
//! after every change, filter first and sort second.
//!
//! # Examples
//!
//! ```
//! use dexplorer::app::AppState;
//! use dexplorer::catalog::CatalogOrigin;
//! use dexplorer::domain::SortOption;
//! use dexplorer::ui::theme::Theme;
//! use dexplorer::Record;
//!
//! let mut state = AppState::new(CatalogOrigin::default(), Theme::default());
//! state.store.replace(vec![
//!     Record::new(4, "Charmander", "Fire"),
//!     Record::new(1, "Bulbasaur", "Grass"),
//! ]);
//! state.sort = SortOption::Name;
//! state.rederive();
//!
//! assert_eq!(state.visible[0].name, "Bulbasaur");
//! ```

use super::inputs::FilterInputs;
use super::modes::InputMode;
use super::selection::Selection;
use super::store::{LoadStatus, RecordStore};
use crate::catalog::CatalogOrigin;
use crate::domain::{filter_records, sort_records, FilterKey, FilterSet, Record, SortOption};
use crate::ui::components::list_width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailInfo, DetailPanel, DisplayItem, EmptyKind, EmptyState, FilterChip, FilterField,
    FilterPanelInfo, FooterInfo, HeaderInfo, SearchBarInfo, StatBar, UIViewModel,
};

/// Rows taken by the header, footer, rules and list headings.
const CHROME_ROWS: usize = 6;
/// Rows taken by the search box.
const SEARCH_BAR_ROWS: usize = 3;
/// Below this list width the stats column is dropped from list rows.
const COMPACT_COLS: usize = 60;
const NAME_WIDTH: usize = 20;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every record from the last successful load.
    pub store: RecordStore,

    /// Where reloads fetch from.
    pub origin: CatalogOrigin,

    /// Raw text of the filter controls.
    pub inputs: FilterInputs,

    /// Active filters, rebuilt from `inputs` after each change.
    pub filters: FilterSet,

    /// Search box text as typed.
    pub search_query: String,

    /// `search_query` trimmed and lower-cased.
    pub search_term: String,

    pub sort: SortOption,

    pub selection: Selection,

    /// Filtered then sorted view of the store.
    pub visible: Vec<Record>,

    /// Cursor index within `visible`.
    pub cursor: usize,

    pub input_mode: InputMode,

    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(origin: CatalogOrigin, theme: Theme) -> Self {
        Self {
            store: RecordStore::new(),
            origin,
            inputs: FilterInputs::new(),
            filters: FilterSet::new(),
            search_query: String::new(),
            search_term: String::new(),
            sort: SortOption::default(),
            selection: Selection::default(),
            visible: vec![],
            cursor: 0,
            input_mode: InputMode::Normal,
            theme,
        }
    }

    /// Recomputes `visible` from the full store and clamps the cursor.
    pub fn rederive(&mut self) {
        let _span = tracing::debug_span!(
            "rederive",
            total = self.store.len(),
            filters = self.filters.len(),
            sort = %self.sort
        )
        .entered();

        let filtered = filter_records(self.store.records(), &self.filters, &self.search_term);
        self.visible = sort_records(&filtered, self.sort);

        if self.visible.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.visible.len() - 1);
        }

        tracing::debug!(visible = self.visible.len(), "view re-derived");
    }

    /// Replaces the search box text and the folded search term.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
        self.search_term = self.search_query.trim().to_lowercase();
    }

    /// Rebuilds the filter set from the raw inputs.
    pub fn apply_filter_inputs(&mut self) {
        self.filters = self.inputs.rebuild_filter_set();
    }

    /// Clears every input, restores the default sort, and empties the
    /// filter set and search term. The selection is left alone.
    pub fn reset(&mut self) {
        self.inputs.clear_all();
        self.sort = SortOption::default();
        self.filters = FilterSet::new();
        self.set_search("");
        self.cursor = 0;
    }

    pub fn move_cursor_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.visible.len();
    }

    pub fn move_cursor_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.visible.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// The record under the cursor, if any row is visible.
    #[must_use]
    pub fn cursor_record(&self) -> Option<&Record> {
        self.visible.get(self.cursor)
    }

    /// The record shown in the detail panel.
    #[must_use]
    pub fn selected_record(&self) -> Option<&Record> {
        self.selection.current(&self.store)
    }

    /// Computes a renderable view model for a pane of `rows` x `cols`.
    ///
    /// The list is windowed so the cursor stays roughly centered; near either
    /// end the window is pinned so it stays full.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let available_rows = self.calculate_available_rows(rows);

        let mut visible_start = self.cursor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.visible.len());
        if visible_end - visible_start < available_rows && self.visible.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items = self.visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, record)| {
                self.compute_display_item(record, visible_start + relative_idx, cols)
            })
            .collect();

        UIViewModel {
            display_items,
            cursor_index: self.cursor.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            search_bar: self.compute_search_bar(),
            filter_panel: self.compute_filter_panel(),
            chips: self.compute_chips(),
            detail: self.compute_detail(),
        }
    }

    fn compute_display_item(&self, record: &Record, absolute_idx: usize, cols: usize) -> DisplayItem {
        let name = if record.name.chars().count() > NAME_WIDTH {
            let kept: String = record.name.chars().take(NAME_WIDTH - 3).collect();
            format!("{kept}...")
        } else {
            record.name.clone()
        };

        let types = match &record.type2 {
            Some(type2) => format!("{} / {type2}", record.type1),
            None => record.type1.clone(),
        };

        let stats = if list_width(cols) < COMPACT_COLS {
            String::new()
        } else {
            format!("{:>3}/{:>3}/{:>3}", record.hp, record.attack, record.speed)
        };

        let highlight_ranges = match_range(&name, &self.search_term)
            .into_iter()
            .collect();

        DisplayItem {
            id_label: record.display_id(),
            name,
            types,
            stats,
            is_legendary: record.legendary,
            is_cursor: absolute_idx == self.cursor,
            is_selected: self.selection.is_selected(record.id),
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Pokédex ({} of {}) ", self.visible.len(), self.store.len()),
            sort_label: format!("Sort: {}", self.sort.label()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "j/k: navigate  Enter: select  /: search  f: filters  s: sort  r: reset  R: reload  q: quit"
            }
            InputMode::Search => "Type to search  Backspace: delete  Enter/ESC: done",
            InputMode::Filters { .. } => {
                "Tab/Shift+Tab: field  Type to edit  Del: remove filter  ESC: done"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        let (kind, message, subtitle) = match self.store.status() {
            LoadStatus::Idle => (EmptyKind::Waiting, "Waiting for permissions...", String::new()),
            LoadStatus::Loading => (EmptyKind::Loading, "Loading...", String::new()),
            LoadStatus::Failed(error) => (
                EmptyKind::Failed,
                "Failed to load data",
                format!("{error}. Press R to retry."),
            ),
            LoadStatus::Ready if self.visible.is_empty() => (
                EmptyKind::NoResults,
                "No creatures found!",
                "Try a different search or press r to reset filters.".to_string(),
            ),
            LoadStatus::Ready => return None,
        };

        Some(EmptyState {
            kind,
            message: message.to_string(),
            subtitle,
        })
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let focused = self.input_mode == InputMode::Search;
        (focused || !self.search_query.is_empty()).then(|| SearchBarInfo {
            query: self.search_query.clone(),
            focused,
        })
    }

    fn compute_filter_panel(&self) -> Option<FilterPanelInfo> {
        let focused = self.input_mode.focused_field()?;
        let fields = FilterKey::ALL
            .into_iter()
            .map(|key| FilterField {
                key,
                label: key.label(),
                value: self.inputs.get(key).to_string(),
                is_focused: key == focused,
            })
            .collect();
        Some(FilterPanelInfo { fields })
    }

    fn compute_chips(&self) -> Vec<FilterChip> {
        self.filters
            .iter()
            .map(|(key, value)| FilterChip {
                key,
                text: format!("{}: {}", key.label(), value.display_for(key)),
            })
            .collect()
    }

    fn compute_detail(&self) -> DetailPanel {
        let Some(record) = self.selected_record() else {
            return DetailPanel::Welcome {
                title: "Welcome to the Pokédex!".to_string(),
                hint: "Select a Pokémon with Enter to see its details.".to_string(),
            };
        };

        let stats = [
            ("HP", record.hp),
            ("Attack", record.attack),
            ("Defense", record.defense),
            ("Sp. Atk", record.sp_atk),
            ("Sp. Def", record.sp_def),
            ("Speed", record.speed),
        ]
        .into_iter()
        .map(|(label, value)| StatBar {
            label: label.to_string(),
            value,
            fill_percent: (f64::from(value) / 2.0).min(100.0),
        })
        .collect();

        DetailPanel::Record(DetailInfo {
            title: format!("{} - {}", record.display_id(), record.name),
            type1: record.type1.clone(),
            type2: record.type2.clone().unwrap_or_else(|| "None".to_string()),
            facts: vec![
                ("Height".to_string(), format!("{} m", record.height)),
                ("Weight".to_string(), format!("{} kg", record.weight)),
                ("Base XP".to_string(), record.base_experience.to_string()),
                ("Generation".to_string(), record.generation.to_string()),
                (
                    "Legendary".to_string(),
                    if record.legendary { "Yes" } else { "No" }.to_string(),
                ),
            ],
            stats,
            sprite_url: record.sprites.detail_url().to_string(),
        })
    }

    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let mut chrome = CHROME_ROWS;
        if self.compute_search_bar().is_some() {
            chrome += SEARCH_BAR_ROWS;
        }
        if !self.filters.is_empty() {
            chrome += 1;
        }
        total_rows.saturating_sub(chrome)
    }
}

/// Character range of the first case-insensitive occurrence of `term` in
/// `text`. `term` is expected to be lower-cased already.
fn match_range(text: &str, term: &str) -> Option<(usize, usize)> {
    if term.is_empty() {
        return None;
    }
    let haystack: Vec<char> = text
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();
    let needle: Vec<char> = term.chars().collect();
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle.as_slice())
        .map(|start| (start, start + needle.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulbasaur() -> Record {
        let mut record = Record::new(1, "Bulbasaur", "Grass");
        record.type2 = Some("Poison".to_string());
        record.hp = 45;
        record.attack = 49;
        record.defense = 49;
        record.sp_atk = 65;
        record.sp_def = 65;
        record.speed = 45;
        record.height = 0.7;
        record.weight = 6.9;
        record.base_experience = 64;
        record.generation = 1;
        record
    }

    fn ready_state(records: Vec<Record>) -> AppState {
        let mut state = AppState::new(CatalogOrigin::default(), Theme::default());
        state.store.replace(records);
        state.rederive();
        state
    }

    #[test]
    fn match_range_is_case_insensitive() {
        assert_eq!(match_range("Bulbasaur", "saur"), Some((5, 9)));
        assert_eq!(match_range("Bulbasaur", ""), None);
        assert_eq!(match_range("Mew", "mewtwo"), None);
    }

    #[test]
    fn detail_panel_formats_selected_record() {
        let mut state = ready_state(vec![bulbasaur()]);
        state.selection.select(&bulbasaur());

        let DetailPanel::Record(detail) = state.compute_viewmodel(30, 120).detail else {
            panic!("expected a record detail panel");
        };
        assert_eq!(detail.title, "#001 - Bulbasaur");
        assert_eq!(detail.type2, "Poison");
        assert_eq!(detail.facts[0], ("Height".to_string(), "0.7 m".to_string()));
        assert_eq!(detail.facts[1], ("Weight".to_string(), "6.9 kg".to_string()));
        assert_eq!(detail.facts[4], ("Legendary".to_string(), "No".to_string()));
        assert_eq!(detail.stats.len(), 6);
        assert!((detail.stats[0].fill_percent - 22.5).abs() < f64::EPSILON);
    }

    #[test]
    fn stat_bar_fill_is_capped() {
        let mut record = Record::new(242, "Blissey", "Normal");
        record.hp = 255;
        let mut state = ready_state(vec![record.clone()]);
        state.selection.select(&record);

        let DetailPanel::Record(detail) = state.compute_viewmodel(30, 120).detail else {
            panic!("expected a record detail panel");
        };
        assert!((detail.stats[0].fill_percent - 100.0).abs() < f64::EPSILON);
        assert_eq!(detail.type2, "None");
    }

    #[test]
    fn window_keeps_cursor_visible() {
        let records = (1..=50).map(|id| Record::new(id, format!("Mon{id}"), "Normal")).collect();
        let mut state = ready_state(records);
        state.cursor = 49;

        let vm = state.compute_viewmodel(16, 120);
        assert_eq!(vm.display_items.len(), 10);
        assert!(vm.display_items[vm.cursor_index].is_cursor);
        assert_eq!(vm.display_items[vm.cursor_index].id_label, "#050");
    }

    #[test]
    fn empty_state_reflects_load_status() {
        let mut state = AppState::new(CatalogOrigin::default(), Theme::default());
        assert_eq!(
            state.compute_viewmodel(24, 80).empty_state.map(|e| e.kind),
            Some(EmptyKind::Waiting)
        );

        state.store.replace(vec![]);
        state.rederive();
        let empty = state.compute_viewmodel(24, 80).empty_state;
        assert_eq!(empty.map(|e| e.message), Some("No creatures found!".to_string()));
    }
}
