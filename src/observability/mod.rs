//! Tracing with file-based OTLP export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK tracer → OtlpFileExporter → dexplorer-otlp.json
//! ```
//!
//! The trace file rotates at 10 MiB and keeps three numbered backups. The
//! filter level comes from the `trace_level` plugin option (default `info`).
//!
//! # Modules
//!
//! - [`init`]: Subscriber installation
//! - `tracer`: Tracer provider and file exporter
//! - `span_formatter`: OTLP-JSON encoding
//! - `file_writer`: Size-rotated trace file

mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
