//! Background worker for dataset loading.
//!
//! When the plugin is configured with a local dataset file, the file is read
//! and transformed on Zellij's worker thread so the UI keeps rendering its
//! loading indicator.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: [`CatalogWorker`] message processing

pub mod handler;
pub mod messages;

pub use handler::CatalogWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};

/// Name shared by the worker registration and its IPC messages.
pub const WORKER_NAME: &str = "catalog";
