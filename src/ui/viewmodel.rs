//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` after every
//! re-derivation and consumed by the renderer. They hold display-ready text
//! only: labels are resolved, numbers are formatted, and the list is already
//! windowed to the pane height.
//!
//! # Examples
//!
//! ```
//! use dexplorer::app::AppState;
//! use dexplorer::catalog::CatalogOrigin;
//! use dexplorer::ui::theme::Theme;
//! use dexplorer::ui::viewmodel::DetailPanel;
//!
//! let state = AppState::new(CatalogOrigin::default(), Theme::default());
//! let vm = state.compute_viewmodel(24, 120);
//! assert!(matches!(vm.detail, DetailPanel::Welcome { .. }));
//! ```

use crate::domain::FilterKey;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Visible list rows, windowed around the cursor.
    pub display_items: Vec<DisplayItem>,

    /// Index of the cursor row within `display_items`.
    pub cursor_index: usize,

    pub header: HeaderInfo,

    pub footer: FooterInfo,

    /// Replaces the list when loading, failed, or nothing matches.
    pub empty_state: Option<EmptyState>,

    /// Present while the search box holds text or has focus.
    pub search_bar: Option<SearchBarInfo>,

    /// Present while the filter panel is open.
    pub filter_panel: Option<FilterPanelInfo>,

    /// One chip per active filter, in filter listing order.
    pub chips: Vec<FilterChip>,

    pub detail: DetailPanel,
}

/// One row of the record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Zero-padded identifier, e.g. `#001`.
    pub id_label: String,

    pub name: String,

    /// `Grass / Poison`, or just `Fire` without a secondary type.
    pub types: String,

    /// Compact HP / Attack / Speed summary.
    pub stats: String,

    pub is_legendary: bool,

    /// Row under the cursor.
    pub is_cursor: bool,

    /// Row of the record shown in the detail panel.
    pub is_selected: bool,

    /// Character ranges of `name` matching the search term.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// Active sort, e.g. `Sort: HP`.
    pub sort_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help for the current mode.
    pub keybindings: String,
}

/// What the list area shows instead of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKind {
    Waiting,
    Loading,
    Failed,
    NoResults,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub kind: EmptyKind,

    pub message: String,

    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Search box text as typed.
    pub query: String,

    /// Whether typed characters go to the search box.
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanelInfo {
    pub fields: Vec<FilterField>,
}

/// One input of the filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterField {
    pub key: FilterKey,

    pub label: String,

    /// Raw input text.
    pub value: String,

    pub is_focused: bool,
}

/// One active-filter chip, e.g. `Min HP: 50`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub key: FilterKey,

    pub text: String,
}

/// Right-hand panel contents.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPanel {
    /// Nothing selected yet.
    Welcome { title: String, hint: String },

    Record(DetailInfo),
}

/// Detail view of the selected record.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailInfo {
    /// `#001 - Bulbasaur`.
    pub title: String,

    pub type1: String,

    /// Secondary type, or `None` as text when absent.
    pub type2: String,

    /// Label/value rows: height, weight, base XP, generation, legendary.
    pub facts: Vec<(String, String)>,

    pub stats: Vec<StatBar>,

    /// Animated sprite when available, otherwise the static one. May be empty.
    pub sprite_url: String,
}

/// One base-stat bar.
#[derive(Debug, Clone, PartialEq)]
pub struct StatBar {
    pub label: String,

    pub value: u32,

    /// Bar fill in percent, `min(100, value / 2)`.
    pub fill_percent: f64,
}
