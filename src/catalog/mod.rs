//! Catalog loading layer.
//!
//! Records reach the plugin one of two ways:
//!
//! - over HTTP from the collection endpoint, decoded by [`decode_collection`]
//! - from a raw dataset file on disk via [`JsonCatalog`], read on the worker
//!   thread
//!
//! # Modules
//!
//! - `backend`: [`CatalogSource`] trait
//! - `json`: dataset file implementation
//! - `models`: raw dataset row type
//! - `payload`: endpoint response decoding and validation

pub mod backend;
pub mod json;
pub mod models;
pub mod payload;

pub use backend::{CatalogOrigin, CatalogSource};
pub use json::JsonCatalog;
pub use models::RawRecord;
pub use payload::decode_collection;
