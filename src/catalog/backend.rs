//! Catalog source abstraction.
//!
//! A [`CatalogSource`] is anything that can hand over the full record
//! collection in one call. The worker thread owns one while it serves a load.

use crate::domain::error::Result;
use crate::domain::Record;

/// Abstraction over places the record collection can be read from.
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::catalog::JsonCatalog): raw dataset file on disk
pub trait CatalogSource: Send {
    /// Returns every record, in source order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or is malformed.
    fn load_all(&self) -> Result<Vec<Record>>;

    /// Looks a single record up by identifier.
    ///
    /// Returns `Ok(None)` when no record carries `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    fn get_by_id(&self, id: u32) -> Result<Option<Record>> {
        Ok(self.load_all()?.into_iter().find(|r| r.id == id))
    }
}

/// Where the plugin fetches its collection from on every (re)load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// HTTP collection endpoint, fetched with a parameterless GET.
    Endpoint(String),

    /// Raw dataset file, read on the worker thread.
    DataFile(std::path::PathBuf),
}

impl Default for CatalogOrigin {
    fn default() -> Self {
        Self::Endpoint(crate::DEFAULT_ENDPOINT.to_string())
    }
}
