//! Terminal UI: view models, components and themes.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_layout → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready view model types
//! - [`renderer`]: Rendering entry point
//! - [`components`]: Pane layout and component renderers
//! - [`helpers`]: Cursor positioning, fitting and highlighting
//! - [`theme`]: Color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DetailInfo, DetailPanel, DisplayItem, EmptyKind, EmptyState, FilterChip, FooterInfo,
    HeaderInfo, SearchBarInfo, UIViewModel,
};
