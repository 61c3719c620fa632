//! Tracer provider whose exporter appends OTLP-JSON lines to a file.
//!
//! Plugins run sandboxed without network access, so spans go to disk instead
//! of a collector. Export is synchronous (simple span processor): each span
//! is written when it closes.

use super::file_writer::RotatingFile;
use super::span_formatter::OtlpJsonEncoder;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Instrumentation scope name written into every batch.
pub const SCOPE_NAME: &str = "dexplorer";

#[derive(Debug)]
struct OtlpFileExporter {
    file: RotatingFile,
    encoder: OtlpJsonEncoder,
    is_shutdown: AtomicBool,
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown.load(Ordering::SeqCst) {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = self.encoder.encode_batch(&batch).to_string();
            self.file
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    // The resource is fixed at construction.
    fn set_resource(&mut self, _resource: &Resource) {}
}

/// Builds a provider exporting every span to `file_path` under `resource`.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = OtlpFileExporter {
        file: RotatingFile::new(file_path),
        encoder: OtlpJsonEncoder::new(resource.clone(), SCOPE_NAME),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
