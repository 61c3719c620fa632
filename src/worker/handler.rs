//! Worker-side message handling.
//!
//! Dataset reads happen off the render thread. [`CatalogWorker`] turns one
//! [`WorkerMessage`] into one [`WorkerResponse`]; the plugin binary wires it
//! to Zellij's worker IPC.

use crate::catalog::{CatalogSource, JsonCatalog};
use crate::domain::error::Result;
use crate::infrastructure::paths;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Worker thread state.
///
/// Stateless between messages: every load reopens the dataset so a reload
/// picks up edits to the file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogWorker {
    /// Loads served so far, for log correlation.
    #[serde(skip)]
    loads_served: u64,
}

impl CatalogWorker {
    fn open_source(path: &Path) -> Result<Box<dyn CatalogSource>> {
        let resolved = paths::expand_tilde(&path.to_string_lossy());
        Ok(Box::new(JsonCatalog::open(resolved)?))
    }

    fn handle_load_catalog(&mut self, path: &Path) -> WorkerResponse {
        self.loads_served += 1;

        match Self::open_source(path).and_then(|source| source.load_all()) {
            Ok(records) => {
                tracing::debug!(
                    record_count = records.len(),
                    load = self.loads_served,
                    "catalog loaded"
                );
                WorkerResponse::CatalogLoaded { records }
            }
            Err(e) => {
                tracing::warn!(error = %e, path = ?path, "catalog load failed");
                WorkerResponse::Error {
                    message: format!("Error loading data: {e}"),
                }
            }
        }
    }

    /// Re-attaches the sender's trace context for the duration of a message.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let remote = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        Some(opentelemetry::Context::current().with_remote_span_context(remote).attach())
    }

    /// Processes one request and produces its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadCatalog { path, .. } => self.handle_load_catalog(&path),
        }
    }

    /// Decodes a JSON request payload, handles it, and encodes the response.
    ///
    /// Returns `None` when the payload is not a valid request or the response
    /// cannot be serialized; both are logged.
    pub fn handle_payload(&mut self, payload: &str) -> Option<String> {
        let message: WorkerMessage = match serde_json::from_str(payload) {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return None;
            }
        };

        let response = self.handle_message(message);
        serde_json::to_string(&response)
            .map_err(|e| tracing::debug!(error = %e, "failed to serialize worker response"))
            .ok()
    }
}
