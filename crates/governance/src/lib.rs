#![deny(unused)]
//! Observability for the travel assistant.
//!
//! This crate provides:
//! - Log/trace subscriber setup (text or JSON, optional OTLP export)
//! - Prometheus metrics recorder and request/dialogue counters

pub mod metrics;
pub mod tracing_layer;

pub use metrics::{setup_metrics_recorder, track_dialogue, track_request, DialogueOutcome};
pub use tracing_layer::configure_tracing;
