#![deny(unused)]
//! HTTP surface of the travel assistant.
//!
//! This crate provides:
//! - Chat and voice chat routes backed by a [`DialogueClient`](travel_assistant_core::DialogueClient)
//! - Multipart file uploads
//! - Site pages, static files, health and Prometheus metrics

pub mod chat;
pub mod error;
pub mod pages;
pub mod server;
pub mod upload;

pub use error::{ApiError, APOLOGY_MESSAGE, NO_RESPONSE_MESSAGE};
pub use server::{AppState, GatewayServer};
