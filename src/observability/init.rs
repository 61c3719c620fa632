//! Subscriber setup: `tracing` → OpenTelemetry → OTLP-JSON file.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported in the trace resource.
pub const SERVICE_NAME: &str = "Dexplorer";

/// File name of the live trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "dexplorer-otlp.json";

/// Installs the global subscriber.
///
/// The filter comes from `config.trace_level` (any `EnvFilter` directive,
/// default `info`); an unparseable directive falls back to `info`. Tracing
/// is optional: if the data directory cannot be created, or a subscriber is
/// already installed, this does nothing.
///
/// Traces land in `~/.local/share/zellij/dexplorer/dexplorer-otlp.json`.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(tracer::SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
