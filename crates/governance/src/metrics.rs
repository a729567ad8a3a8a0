//! Metrics implementation using Prometheus.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use travel_assistant_core::{Error, Result};

/// Initialize Prometheus recorder and return the handle.
pub fn setup_metrics_recorder() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| Error::internal(format!("Failed to install Prometheus recorder: {}", e)))?;

    tracing::info!("Prometheus metrics recorder initialized");
    Ok(handle)
}

/// Helper to track HTTP request metrics (latency, count).
pub fn track_request(method: &str, path: &str, status: u16, latency_sec: f64) {
    metrics::counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(latency_sec);
}

/// Result of one call to the dialogue backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueOutcome {
    Replied,
    Empty,
    Failed,
}

impl DialogueOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogueOutcome::Replied => "replied",
            DialogueOutcome::Empty => "empty",
            DialogueOutcome::Failed => "failed",
        }
    }
}

/// Helper to track dialogue backend calls.
pub fn track_dialogue(route: &str, outcome: DialogueOutcome, latency_sec: f64) {
    metrics::counter!(
        "dialogue_requests_total",
        "route" => route.to_string(),
        "outcome" => outcome.as_str()
    )
    .increment(1);

    metrics::histogram!("dialogue_request_duration_seconds", "route" => route.to_string())
        .record(latency_sec);
}
