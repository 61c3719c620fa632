//! Error types for the Dexplorer plugin.
//!
//! [`DexError`] is the single error type shared by the catalog loaders, the
//! event reducer and the worker. [`Result`] is the matching alias.

use thiserror::Error;

/// The main error type for Dexplorer operations.
///
/// Variants wrapping foreign errors use `#[from]` so loaders can propagate
/// with `?`.
///
/// # Examples
///
/// ```
/// use dexplorer::DexError;
///
/// let err = DexError::Http { status: 503 };
/// assert_eq!(err.to_string(), "HTTP error! Status: 503");
/// ```
#[derive(Debug, Error)]
pub enum DexError {
    /// A catalog source could not produce records.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The collection endpoint answered with a non-success status.
    #[error("HTTP error! Status: {status}")]
    Http {
        /// Status code returned by the endpoint.
        status: u16,
    },

    /// The collection payload was structurally wrong.
    ///
    /// Raised when the body is not a list or when its first element lacks a
    /// name or identifier.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// A filter key outside the known set.
    #[error("Unknown filter key: {0}")]
    UnknownFilter(String),

    /// A sort key outside the known set.
    #[error("Unknown sort option: {0}")]
    UnknownSort(String),

    /// A control identifier that maps to no input.
    #[error("Unknown control: {0}")]
    UnknownControl(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Dexplorer operations.
pub type Result<T> = std::result::Result<T, DexError>;
