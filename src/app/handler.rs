//! Event handling and state transition logic.
//!
//! [`handle_event`] is the reducer behind the plugin. Every user input, HTTP
//! result and worker reply arrives as an [`Event`]; the reducer mutates
//! [`AppState`], re-derives the visible list from the full store when
//! anything that feeds it changed, and returns the side effects to run.
//!
//! # Event Types
//!
//! - **Search**: `SearchChanged`, `Char`, `Backspace`, `SearchMode`, `ExitSearch`
//! - **Filters**: `FilterInput`, `ControlChanged`, `RemoveFilter`, `Reset`
//! - **Sort**: `SortChanged`, `CycleSort`
//! - **Selection**: `Select`, `SelectCursor`, `CursorDown`, `CursorUp`
//! - **Focus**: `FilterMode`, `FocusNextField`, `FocusPrevField`, `Escape`, `CloseFocus`
//! - **Loading**: `Reload`, `CollectionFetched`, `WorkerResponse`
//!
//! # Examples
//!
//! ```
//! use dexplorer::app::{handle_event, Action, AppState, Event};
//! use dexplorer::catalog::CatalogOrigin;
//! use dexplorer::ui::theme::Theme;
//!
//! let origin = CatalogOrigin::Endpoint("http://localhost:5000/api/pokemon".into());
//! let mut state = AppState::new(origin, Theme::default());
//!
//! let (render, actions) = handle_event(&mut state, &Event::Reload)?;
//! assert!(render);
//! assert_eq!(
//!     actions,
//!     vec![Action::FetchCollection { url: "http://localhost:5000/api/pokemon".into() }]
//! );
//! # Ok::<(), dexplorer::DexError>(())
//! ```

use super::inputs::Control;
use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::catalog::{decode_collection, CatalogOrigin};
use crate::domain::error::Result;
use crate::domain::{FilterKey, Record, SortOption};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, HTTP results, or worker replies.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Replaces the whole search box text.
    SearchChanged(String),
    /// Types a character into the focused field (search box or filter).
    Char(char),
    /// Deletes the last character of the focused field.
    Backspace,
    /// Focuses the search box.
    SearchMode,
    /// Leaves the search box, keeping its text.
    ExitSearch,

    /// Sets a filter control's text and rebuilds the filter set.
    FilterInput { key: FilterKey, value: String },
    /// Sets any control by its stable identifier (`filter-hp-min`, ...).
    ControlChanged { control: String, value: String },
    /// Removes one active filter (chip removal) and clears its control.
    RemoveFilter(FilterKey),
    /// Clears every control, filter and the search term; restores default sort.
    Reset,

    SortChanged(SortOption),
    /// Advances to the next sort option.
    CycleSort,

    /// Selects the record with `id`; unknown identifiers are ignored.
    Select { id: u32 },
    /// Selects the record under the cursor.
    SelectCursor,
    CursorDown,
    CursorUp,

    /// Opens the filter panel.
    FilterMode,
    FocusNextField,
    FocusPrevField,
    /// Returns to normal mode.
    Escape,
    /// Hides the plugin pane.
    CloseFocus,

    /// Discards the collection and fetches it again.
    Reload,
    /// Result of the collection GET.
    CollectionFetched { status: u16, body: Vec<u8> },
    /// Reply from the dataset worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the pane should be re-rendered.
///
/// # Errors
///
/// - [`DexError::UnknownControl`](crate::DexError::UnknownControl) for a
///   `ControlChanged` naming no control
/// - [`DexError::UnknownSort`](crate::DexError::UnknownSort) for a sort value
///   outside the known options
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchChanged(text) => {
            state.set_search(text.clone());
            state.rederive();
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search => {
                let mut query = state.search_query.clone();
                query.push(*c);
                state.set_search(query);
                tracing::trace!(query = %state.search_query, "search query updated");
                state.rederive();
                Ok((true, vec![]))
            }
            InputMode::Filters { field } => {
                state.inputs.push_char(field, *c);
                state.apply_filter_inputs();
                state.rederive();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search => {
                let mut query = state.search_query.clone();
                query.pop();
                state.set_search(query);
                state.rederive();
                Ok((true, vec![]))
            }
            InputMode::Filters { field } => {
                state.inputs.pop_char(field);
                state.apply_filter_inputs();
                state.rederive();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::FilterInput { key, value } => {
            set_filter_input(state, *key, value);
            Ok((true, vec![]))
        }
        Event::ControlChanged { control, value } => {
            match control.parse::<Control>()? {
                Control::Search => state.set_search(value.clone()),
                Control::Sort => state.sort = value.parse()?,
                Control::Filter(key) => {
                    set_filter_input(state, key, value);
                    return Ok((true, vec![]));
                }
            }
            state.rederive();
            Ok((true, vec![]))
        }
        Event::RemoveFilter(key) => {
            tracing::debug!(key = %key, "removing filter");
            state.inputs.clear(*key);
            state.filters.remove(*key);
            state.rederive();
            Ok((true, vec![]))
        }
        Event::Reset => {
            tracing::debug!("resetting filters, search and sort");
            state.reset();
            state.rederive();
            Ok((true, vec![]))
        }
        Event::SortChanged(option) => {
            state.sort = *option;
            state.rederive();
            Ok((true, vec![]))
        }
        Event::CycleSort => {
            state.sort = state.sort.next();
            state.rederive();
            Ok((true, vec![]))
        }
        Event::Select { id } => {
            let Some(record) = state.store.get(*id).cloned() else {
                tracing::debug!(id, "select ignored, unknown id");
                return Ok((false, vec![]));
            };
            state.selection.select(&record);
            Ok((true, vec![]))
        }
        Event::SelectCursor => {
            let Some(record) = state.cursor_record().cloned() else {
                tracing::debug!("no record under cursor");
                return Ok((false, vec![]));
            };
            state.selection.select(&record);
            Ok((true, vec![]))
        }
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::FilterMode => {
            state.input_mode = InputMode::Filters {
                field: FilterKey::Type1,
            };
            Ok((true, vec![]))
        }
        Event::FocusNextField => {
            state.input_mode = state.input_mode.next_field();
            Ok((true, vec![]))
        }
        Event::FocusPrevField => {
            state.input_mode = state.input_mode.prev_field();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Reload => {
            if state.store.is_loading() {
                tracing::debug!("reload ignored, a load is already in flight");
                return Ok((false, vec![]));
            }

            state.store.begin_loading();
            state.selection.clear();
            state.rederive();

            let action = match &state.origin {
                CatalogOrigin::Endpoint(url) => Action::FetchCollection { url: url.clone() },
                CatalogOrigin::DataFile(path) => {
                    Action::PostToWorker(WorkerMessage::load_catalog(path.clone()))
                }
            };
            tracing::debug!(action = ?action, "collection load started");
            Ok((true, vec![action]))
        }
        Event::CollectionFetched { status, body } => {
            if !state.store.is_loading() {
                tracing::debug!(status, "stale collection response ignored");
                return Ok((false, vec![]));
            }
            match decode_collection(*status, body) {
                Ok(records) => finish_load(state, records),
                Err(e) => state.store.fail(format!("Error loading data: {e}")),
            }
            state.rederive();
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => {
            if !state.store.is_loading() {
                tracing::debug!("stale worker response ignored");
                return Ok((false, vec![]));
            }
            match response {
                WorkerResponse::CatalogLoaded { records } => finish_load(state, records.clone()),
                WorkerResponse::Error { message } => state.store.fail(message.clone()),
            }
            state.rederive();
            Ok((true, vec![]))
        }
    }
}

fn set_filter_input(state: &mut AppState, key: FilterKey, value: &str) {
    state.inputs.set(key, value);
    state.apply_filter_inputs();
    state.rederive();
}

fn finish_load(state: &mut AppState, records: Vec<Record>) {
    tracing::info!(record_count = records.len(), "collection loaded");
    state.store.replace(records);
    state.cursor = 0;
}
