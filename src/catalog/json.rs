//! Raw dataset file loader.
//!
//! Reads the whole dataset (a JSON array of [`RawRecord`] rows) once on open
//! and keeps the transformed records in memory.
//!
//! # File Format
//!
//! ```json
//! [
//!   {
//!     "#": 1, "Name": "Bulbasaur", "Type 1": "Grass", "Type 2": "Poison",
//!     "HP": 45, "Attack": 49, "Defense": 49, "Sp. Atk": 65, "Sp. Def": 65,
//!     "Speed": 45, "Generation": 1, "Legendary": false,
//!     "height": 0.7, "weight": 6.9, "base_experience": 64,
//!     "sprites": "{'normal': '...', 'animated': '...'}"
//!   }
//! ]
//! ```

use crate::catalog::backend::CatalogSource;
use crate::catalog::models::RawRecord;
use crate::domain::error::{DexError, Result};
use crate::domain::Record;
use std::path::{Path, PathBuf};

/// Dataset file catalog.
///
/// `Send` but not `Sync`; it is built and used on the worker thread.
#[derive(Debug)]
pub struct JsonCatalog {
    file_path: PathBuf,
    records: Vec<Record>,
}

impl JsonCatalog {
    /// Opens and transforms the dataset at `file_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the file cannot be read
    /// - the file is not a JSON array of dataset rows
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        let _span = tracing::debug_span!("json_catalog_open", path = ?file_path).entered();

        let records = Self::load_from_file(&file_path)?;

        tracing::debug!(record_count = records.len(), "dataset loaded and transformed");
        Ok(Self { file_path, records })
    }

    fn load_from_file(path: &Path) -> Result<Vec<Record>> {
        let contents = std::fs::read_to_string(path)?;
        let rows: Vec<RawRecord> = serde_json::from_str(&contents)
            .map_err(|e| DexError::Catalog(format!("invalid dataset in {}: {e}", path.display())))?;

        Ok(rows.into_iter().map(RawRecord::into_record).collect())
    }
}

impl CatalogSource for JsonCatalog {
    fn load_all(&self) -> Result<Vec<Record>> {
        tracing::debug!(
            count = self.records.len(),
            path = ?self.file_path,
            "serving dataset records"
        );
        Ok(self.records.clone())
    }

    fn get_by_id(&self, id: u32) -> Result<Option<Record>> {
        Ok(self.records.iter().find(|r| r.id == id).cloned())
    }
}
