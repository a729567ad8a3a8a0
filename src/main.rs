#![deny(unused)]
//! Travel Assistant - airline customer-service web assistant
//!
//! Serves the site pages and a chat widget backend that relays messages to a
//! Dialogflow agent, with speech-friendly reply shaping for voice input.

use std::sync::Arc;

use travel_assistant_core::config::AppConfig;
use travel_assistant_core::template::PageRenderer;
use travel_assistant_core::DialogueClient;
use travel_assistant_dialogue::{create_default_client, UnconfiguredDialogueClient};
use travel_assistant_gateway::GatewayServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    // Initialize tracing
    travel_assistant_governance::configure_tracing(&config.telemetry)?;

    tracing::info!("Starting Travel Assistant v{}", env!("CARGO_PKG_VERSION"));

    // =========================================================================
    // Dialogue backend
    // =========================================================================
    let dialogue: Arc<dyn DialogueClient> = match create_default_client(&config.dialogflow) {
        Ok(client) => {
            tracing::info!(
                project = config.dialogflow.project_id.as_deref().unwrap_or_default(),
                language = %config.dialogflow.language_code,
                "Dialogflow client initialized"
            );
            Arc::new(client)
        }
        Err(e) => {
            tracing::warn!(
                "Dialogflow unavailable ({}). Chat requests will fail until it is configured.",
                e
            );
            Arc::new(UnconfiguredDialogueClient)
        }
    };

    // =========================================================================
    // Pages
    // =========================================================================
    let pages = PageRenderer::from_glob(&config.pages.templates_glob)?;

    // =========================================================================
    // Metrics
    // =========================================================================
    let metrics_handle = match travel_assistant_governance::setup_metrics_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!("Metrics disabled: {}", e);
            None
        }
    };

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        uploads = %config.upload.dir.display(),
        "Gateway configured"
    );

    let addr = format!("http://{}:{}", config.server.host, config.server.port);
    let mut server = GatewayServer::new(config, dialogue, pages);
    if let Some(handle) = metrics_handle {
        server = server.with_metrics(handle);
    }

    // =========================================================================
    // Print startup banner
    // =========================================================================
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Travel Assistant v{}", env!("CARGO_PKG_VERSION"));
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!("║  Endpoints:");
    println!("║    GET  /                    - Home page");
    println!("║    POST /chat                - Chat with the assistant");
    println!("║    POST /chat/voice          - Voice chat");
    println!("║    POST /upload              - File upload");
    println!("║    GET  /voice/capabilities  - Voice features");
    println!("║    GET  /health              - Health check");
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!("║  Server:  {}", addr);
    println!("║  Session: {}", server.default_session());
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    server.run().await?;

    Ok(())
}
