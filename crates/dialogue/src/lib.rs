#![deny(unused)]
//! Dialogue service adapters for the travel assistant.
//!
//! This crate provides:
//! - A Dialogflow ES REST client implementing `DialogueClient`
//! - A stand-in client used when no agent is configured

pub mod dialogflow;
pub mod unconfigured;

pub use dialogflow::DialogflowClient;
pub use unconfigured::UnconfiguredDialogueClient;

use travel_assistant_core::{config::DialogflowConfig, Error, Result};

/// Create the Dialogflow client described by `config`.
///
/// Fails when the project id or access token is missing.
pub fn create_default_client(config: &DialogflowConfig) -> Result<DialogflowClient> {
    if !config.is_configured() {
        return Err(Error::config(
            "Dialogflow requires a project id and an access token",
        ));
    }
    DialogflowClient::new(config)
}
