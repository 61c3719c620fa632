//! Dexplorer: a Zellij plugin for browsing a creature catalog.
//!
//! Dexplorer fetches a collection of creature records and lets you:
//! - Search by name (case-insensitive substring)
//! - Filter by type, generation, legendary status and stat ranges
//! - Sort by number, name, HP, attack, defense or speed
//! - Select a record to see its detail panel with base-stat bars
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Reducer
//! │  - Event handling                                   │
//! │  - Record store, selection, filter inputs           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - HTTP decode │   │ - Dataset     │
//! │ - Theming     │   │ - Dataset file│   │   loading     │
//! │ - Components  │   │ - Validation  │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Record model, filter and sort engines (domain/)  │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/dexplorer.wasm" {
//!         endpoint "http://127.0.0.1:5000/api/pokemon"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! Setting `data_file` loads the raw dataset from disk on the worker thread
//! instead of calling the endpoint.
//!
//! # Examples
//!
//! ```
//! use dexplorer::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::Reload)?;
//! assert!(matches!(actions[0], Action::FetchCollection { .. }));
//!
//! let body = br#"[{"id": 25, "name": "Pikachu", "type1": "Electric", "hp": 35}]"#;
//! handle_event(&mut state, &Event::CollectionFetched { status: 200, body: body.to_vec() })?;
//! handle_event(&mut state, &Event::Select { id: 25 })?;
//!
//! assert_eq!(state.selected_record().map(|r| r.name.as_str()), Some("Pikachu"));
//! # Ok::<(), dexplorer::DexError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use catalog::CatalogOrigin;
pub use domain::{DexError, Record, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Collection endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/pokemon";

/// Plugin configuration parsed from the Zellij layout.
///
/// ```kdl
/// plugin location="file:/path/to/dexplorer.wasm" {
///     endpoint "http://127.0.0.1:5000/api/pokemon"
///     data_file "~/datasets/pokemon.json"
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Collection endpoint URL. Default: [`DEFAULT_ENDPOINT`]
    pub endpoint: String,

    /// Raw dataset file. When set, it replaces the endpoint as the source.
    /// A leading `~` resolves inside the `/host` sandbox mount.
    pub data_file: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for spans and events. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            data_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use dexplorer::{CatalogOrigin, Config};
    /// use std::collections::BTreeMap;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_file".to_string(), "~/pokemon.json".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.trace_level, "debug");
    /// assert_eq!(config.origin(), CatalogOrigin::DataFile("~/pokemon.json".into()));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            endpoint: get("endpoint").unwrap_or(defaults.endpoint),
            data_file: get("data_file"),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level").unwrap_or(defaults.trace_level),
        }
    }

    /// Where collection loads are sent.
    #[must_use]
    pub fn origin(&self) -> CatalogOrigin {
        self.data_file.as_ref().map_or_else(
            || CatalogOrigin::Endpoint(self.endpoint.clone()),
            |path| CatalogOrigin::DataFile(PathBuf::from(path)),
        )
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    /// Failures are logged and fall back to the default theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial state: empty store, theme resolved from `config`.
///
/// Nothing is fetched yet; the first [`Event::Reload`] starts the load.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(origin = ?config.origin(), "initializing dexplorer plugin");
    AppState::new(config.origin(), config.theme())
}
