//! Distributed tracing configuration.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, trace as sdktrace, Resource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use travel_assistant_core::{config::TelemetryConfig, Error, Result};

const SERVICE_NAME: &str = "travel-assistant";

/// Build the log filter: `RUST_LOG` wins, then the configured filter.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| Error::config(format!("invalid log filter '{}': {}", config.log_filter, e)))
}

/// Configure stdout logging and, when an OTLP endpoint is set, OpenTelemetry
/// trace export.
pub fn configure_tracing(config: &TelemetryConfig) -> Result<()> {
    let filter = env_filter(config)?;

    let json_layer = config.json_logs.then(|| tracing_subscriber::fmt::layer().json());
    let text_layer = (!config.json_logs).then(tracing_subscriber::fmt::layer);

    let tracer = match &config.otlp_endpoint {
        Some(endpoint) => Some(otlp_tracer(endpoint)?),
        None => None,
    };
    let otel_layer = tracer.map(|t| tracing_opentelemetry::layer().with_tracer(t));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(otel_layer)
        .try_init()
        .map_err(|e| Error::internal(format!("Failed to install tracing subscriber: {}", e)))?;

    if let Some(endpoint) = &config.otlp_endpoint {
        tracing::info!(endpoint = %endpoint, "OpenTelemetry tracing enabled");
    }
    Ok(())
}

fn otlp_tracer(endpoint: &str) -> Result<sdktrace::Tracer> {
    let provider = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(endpoint),
        )
        .with_trace_config(
            sdktrace::Config::default()
                .with_resource(Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)])),
        )
        .install_batch(runtime::Tokio)
        .map_err(|e| Error::internal(format!("Failed to install OTLP pipeline: {}", e)))?;

    let tracer = provider.tracer(SERVICE_NAME);
    opentelemetry::global::set_tracer_provider(provider);
    Ok(tracer)
}
