//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain, catalog and
//! worker layers.
//!
//! ```text
//! User Input → Events → handle_event → State Mutations → Actions → Side Effects
//!                            ↑                                       ↓
//!                            └──── HTTP results / worker replies ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the reducer
//! - [`handler`]: The event reducer
//! - [`inputs`]: Raw filter control text and control identifiers
//! - [`modes`]: Input mode state machine
//! - [`selection`]: The selected record
//! - [`state`]: Central state container and view model computation
//! - [`store`]: Loaded records and load status

pub mod actions;
pub mod handler;
pub mod inputs;
pub mod modes;
pub mod selection;
pub mod state;
pub mod store;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use inputs::{Control, FilterInputs};
pub use modes::InputMode;
pub use selection::Selection;
pub use state::AppState;
pub use store::{LoadStatus, RecordStore};
