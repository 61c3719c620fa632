//! Zellij plugin wrapper and entry point.
//!
//! The thin integration layer between the Dexplorer library and Zellij. It
//! implements `ZellijPlugin` and `ZellijWorker`, translates Zellij events into
//! library [`Event`]s, and executes the [`Action`]s the reducer returns.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │     Zellij Main Thread       │
//! │  ┌────────────────────────┐  │
//! │  │  State (plugin)        │──┼──► web_request(endpoint)
//! │  └────────────────────────┘  │        │
//! │          │ IPC               │        ▼
//! │          ▼                   │   WebRequestResult
//! │  ┌────────────────────────┐  │
//! │  │  CatalogWorker         │  │  ← dataset file loads
//! │  └────────────────────────┘  │
//! └──────────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up` (or `Ctrl+n`/`Ctrl+p`): Move cursor
//! - `Enter`: Show the record under the cursor
//! - `/`: Search, `f`: Filter panel
//! - `s`: Cycle sort, `r`: Reset, `R`: Reload
//! - `q`: Close plugin
//!
//! Search mode: type to search, `Backspace` deletes, `Enter`/`Esc` leave.
//!
//! Filter panel: `Tab`/`Down` and `Shift+Tab`/`Up` move between fields, type
//! to edit, `Delete` removes the focused filter, `Esc`/`Enter` leave.
//!
//! Built for any other target, the binary is a small offline viewer: it loads
//! a dataset file through the same worker and reducer and prints one frame.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use std::sync::Once;
    use zellij_tile::prelude::*;
    use zellij_tile::shim::{post_message_to, post_message_to_plugin};

    use dexplorer::worker::{CatalogWorker, WorkerMessage, WorkerResponse, WORKER_NAME};
    use dexplorer::{handle_event, Action, CatalogOrigin, Config, Event, InputMode};

    /// Zellij-facing wrapper around the worker-side handler.
    #[derive(Default, serde::Serialize, serde::Deserialize)]
    pub struct WorkerShim(CatalogWorker);

    /// The worker runs in its own instance, so it installs its own subscriber.
    static WORKER_TRACING: Once = Once::new();

    impl ZellijWorker<'_> for WorkerShim {
        fn on_message(&mut self, message: String, payload: String) {
            WORKER_TRACING.call_once(|| dexplorer::observability::init_tracing(&Config::default()));
            let _span = tracing::debug_span!("worker_on_message", message = %message).entered();

            if message != WORKER_NAME {
                tracing::debug!(message = %message, "ignoring message for another worker");
                return;
            }

            if let Some(payload) = self.0.handle_payload(&payload) {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
        }
    }

    /// Plugin state wrapper.
    pub struct State {
        app: dexplorer::AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: dexplorer::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            dexplorer::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();
            tracing::debug!(origin = ?config.origin(), "parsed configuration");

            self.app = dexplorer::initialize(&config);

            let permissions: &[PermissionType] = match config.origin() {
                CatalogOrigin::Endpoint(_) => &[PermissionType::WebAccess],
                CatalogOrigin::DataFile(_) => &[PermissionType::FullHdAccess],
            };
            request_permission(permissions);

            subscribe(&[
                EventType::Key,
                EventType::CustomMessage,
                EventType::WebRequestResult,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = event_name(&event);
            let _guard =
                tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                    match map_custom_message_event(&message, &payload) {
                        Some(event) => event,
                        None => return false,
                    }
                }
                zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, _context) => {
                    tracing::debug!(status, body_len = body.len(), "collection response received");
                    Event::CollectionFetched { status, body }
                }
                zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                    tracing::debug!("permissions granted - loading collection");
                    Event::Reload
                }
                zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                    tracing::warn!("permissions denied - collection cannot be loaded");
                    return false;
                }
                _ => return false,
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    for action in &actions {
                        execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            dexplorer::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::trace!(bare_key = ?key.bare_key, "key event");

            let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
            let shift = key.has_modifiers(&[KeyModifier::Shift]);

            match self.app.input_mode {
                InputMode::Normal => Some(match key.bare_key {
                    BareKey::Char('n') if ctrl => Event::CursorDown,
                    BareKey::Char('p') if ctrl => Event::CursorUp,
                    BareKey::Down | BareKey::Char('j') => Event::CursorDown,
                    BareKey::Up | BareKey::Char('k') => Event::CursorUp,
                    BareKey::Enter => Event::SelectCursor,
                    BareKey::Char('/') => Event::SearchMode,
                    BareKey::Char('f') => Event::FilterMode,
                    BareKey::Char('s') => Event::CycleSort,
                    BareKey::Char('r') => Event::Reset,
                    BareKey::Char('R') => Event::Reload,
                    BareKey::Char('q') => Event::CloseFocus,
                    BareKey::Esc => Event::Escape,
                    _ => return None,
                }),
                InputMode::Search => Some(match key.bare_key {
                    BareKey::Enter | BareKey::Esc => Event::ExitSearch,
                    BareKey::Down => Event::CursorDown,
                    BareKey::Up => Event::CursorUp,
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Char(c) if !ctrl => Event::Char(c),
                    _ => return None,
                }),
                InputMode::Filters { field } => Some(match key.bare_key {
                    BareKey::Tab if shift => Event::FocusPrevField,
                    BareKey::Tab | BareKey::Down => Event::FocusNextField,
                    BareKey::Up => Event::FocusPrevField,
                    BareKey::Delete => Event::RemoveFilter(field),
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Enter | BareKey::Esc => Event::Escape,
                    BareKey::Char(c) if !ctrl => Event::Char(c),
                    _ => return None,
                }),
            }
        }
    }

    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(WORKER_NAME.to_string()),
                    name: WORKER_NAME.to_string(),
                    payload,
                });
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize worker message"),
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::FetchCollection { url } => {
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], BTreeMap::new());
            }
            Action::PostToWorker(message) => post_worker_message(message),
        }
    }
}

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(plugin::State);
#[cfg(target_family = "wasm")]
register_worker!(plugin::WorkerShim, catalog_worker, CATALOG_WORKER);

#[cfg(not(target_family = "wasm"))]
fn main() -> std::process::ExitCode {
    native::run(std::env::args().skip(1).collect())
}

/// Offline viewer: `dexplorer <dataset.json> [id]`.
#[cfg(not(target_family = "wasm"))]
mod native {
    use dexplorer::worker::CatalogWorker;
    use dexplorer::{handle_event, Action, Config, Event};
    use std::process::ExitCode;

    const ROWS: usize = 40;
    const COLS: usize = 120;

    pub fn run(args: Vec<String>) -> ExitCode {
        let Some(data_file) = args.first() else {
            eprintln!("usage: dexplorer <dataset.json> [id]");
            return ExitCode::from(2);
        };

        let config = Config {
            data_file: Some(data_file.clone()),
            ..Config::default()
        };
        let mut state = dexplorer::initialize(&config);
        let mut worker = CatalogWorker::default();

        let mut pending = vec![Event::Reload];
        if let Some(id) = args.get(1).and_then(|s| s.parse::<u32>().ok()) {
            pending.push(Event::Select { id });
        }

        for event in pending {
            let actions = match handle_event(&mut state, &event) {
                Ok((_, actions)) => actions,
                Err(e) => {
                    eprintln!("{e}");
                    return ExitCode::FAILURE;
                }
            };
            for action in actions {
                if let Action::PostToWorker(message) = action {
                    let response = worker.handle_message(message);
                    if let Err(e) = handle_event(&mut state, &Event::WorkerResponse(response)) {
                        eprintln!("{e}");
                        return ExitCode::FAILURE;
                    }
                }
            }
        }

        dexplorer::ui::render(&state, ROWS, COLS);
        println!();

        if let dexplorer::app::LoadStatus::Failed(message) = state.store.status() {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
        ExitCode::SUCCESS
    }
}
