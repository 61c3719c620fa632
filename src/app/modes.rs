//! Input mode state machine.
//!
//! The mode decides where typed characters go:
//!
//! - **Normal**: single keys are commands (navigate, select, sort, reset)
//! - **Search**: characters edit the search box
//! - **Filters**: characters edit the focused filter field
//!
//! # Examples
//!
//! ```
//! use dexplorer::app::InputMode;
//! use dexplorer::domain::FilterKey;
//!
//! let mode = InputMode::Filters { field: FilterKey::Type1 };
//! assert_eq!(mode.next_field(), InputMode::Filters { field: FilterKey::Type2 });
//! ```

use crate::domain::FilterKey;

/// Current input handling mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands.
    #[default]
    Normal,

    /// Typing edits the search box.
    Search,

    /// The filter panel is open with `field` focused.
    Filters {
        /// Filter control receiving typed characters.
        field: FilterKey,
    },
}

impl InputMode {
    /// Moves filter focus forward, wrapping. Other modes are unchanged.
    #[must_use]
    pub fn next_field(self) -> Self {
        self.step_field(1)
    }

    /// Moves filter focus backward, wrapping. Other modes are unchanged.
    #[must_use]
    pub fn prev_field(self) -> Self {
        self.step_field(FilterKey::ALL.len() - 1)
    }

    fn step_field(self, offset: usize) -> Self {
        match self {
            Self::Filters { field } => {
                let idx = FilterKey::ALL.iter().position(|k| *k == field).unwrap_or(0);
                Self::Filters {
                    field: FilterKey::ALL[(idx + offset) % FilterKey::ALL.len()],
                }
            }
            other => other,
        }
    }

    #[must_use]
    pub const fn focused_field(self) -> Option<FilterKey> {
        match self {
            Self::Filters { field } => Some(field),
            _ => None,
        }
    }
}
