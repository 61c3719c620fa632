//! Domain layer for the Dexplorer plugin.
//!
//! Holds the catalog record model and the two pure engines that decide what
//! the user sees: the filter predicate and the sort. Nothing in here knows
//! about Zellij, rendering or loading.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`record`]: `Record` and its lenient `Sprites` payload
//! - [`filter`]: Filter keys, filter sets and the inclusion predicate
//! - [`sort`]: Sort options and the stable sort
//!
//! # Examples
//!
//! ```
//! use dexplorer::domain::{filter_records, sort_records, FilterSet, SortOption};
//!
//! let visible = sort_records(&filter_records(&[], &FilterSet::new(), ""), SortOption::Id);
//! assert!(visible.is_empty());
//! ```

pub mod error;
pub mod filter;
pub mod record;
pub mod sort;

pub use error::{DexError, Result};
pub use filter::{filter_records, matches, Bound, FilterKey, FilterSet, FilterValue, RangeStat};
pub use record::{Record, Sprites};
pub use sort::{collate, sort_records, SortOption};
