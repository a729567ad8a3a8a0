//! Axum-based HTTP server for the travel assistant.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{DefaultBodyLimit, MatchedPath, Request},
    http::HeaderValue,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use travel_assistant_core::config::AppConfig;
use travel_assistant_core::template::PageRenderer;
use travel_assistant_core::{DialogueClient, Error, Result, SessionId};
use travel_assistant_governance::track_request;

use crate::chat::{chat_handler, voice_chat_handler};
use crate::error::ApiError;
use crate::pages::{health_handler, page_routes, voice_capabilities_handler};
use crate::upload::{prepare_upload_dir, upload_handler};

/// Shared application state.
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub dialogue: Arc<dyn DialogueClient>,
    pub pages: Arc<PageRenderer>,
    /// Used for every request that does not name its own session.
    pub default_session: SessionId,
}

impl AppState {
    /// Pick the caller's session, or the process session when none was sent.
    ///
    /// A supplied id the dialogue backend would refuse is the caller's error.
    pub fn resolve_session(
        &self,
        requested: Option<&str>,
    ) -> std::result::Result<SessionId, ApiError> {
        match requested.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => SessionId::parse(raw).ok_or_else(|| {
                tracing::debug!(len = raw.len(), "Rejected malformed session id");
                ApiError::bad_request("Invalid session_id")
            }),
            None => {
                tracing::debug!(
                    session = %self.default_session,
                    "No client session supplied; using process session"
                );
                Ok(self.default_session.clone())
            }
        }
    }
}

/// Gateway server.
pub struct GatewayServer {
    config: Arc<AppConfig>,
    dialogue: Arc<dyn DialogueClient>,
    pages: Arc<PageRenderer>,
    default_session: SessionId,
    metrics_handle: Option<PrometheusHandle>,
    enable_tracing: bool,
}

impl GatewayServer {
    /// Create a new gateway server with a freshly generated process session.
    pub fn new(
        config: AppConfig,
        dialogue: Arc<dyn DialogueClient>,
        pages: PageRenderer,
    ) -> Self {
        Self {
            config: Arc::new(config),
            dialogue,
            pages: Arc::new(pages),
            default_session: SessionId::generate(),
            metrics_handle: None,
            enable_tracing: true,
        }
    }

    /// Pin the process session instead of generating one.
    pub fn with_default_session(mut self, session: SessionId) -> Self {
        self.default_session = session;
        self
    }

    /// Set metrics handle.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }

    pub fn default_session(&self) -> &SessionId {
        &self.default_session
    }

    /// Build the Axum router.
    pub fn build_router(&self) -> Router {
        let state = Arc::new(AppState {
            config: self.config.clone(),
            dialogue: self.dialogue.clone(),
            pages: self.pages.clone(),
            default_session: self.default_session.clone(),
        });

        let mut router = Router::new()
            .route("/chat", post(chat_handler))
            .route("/chat/voice", post(voice_chat_handler))
            .route("/upload", post(upload_handler))
            .route("/health", get(health_handler))
            .route("/voice/capabilities", get(voice_capabilities_handler))
            .merge(page_routes());

        if let Some(handle) = &self.metrics_handle {
            let handle = handle.clone();
            router = router.route("/metrics", get(move || async move { handle.render() }));
        }

        let mut router = router
            .route_layer(middleware::from_fn(track_metrics))
            .nest_service("/static", ServeDir::new(&self.config.pages.static_dir))
            .layer(DefaultBodyLimit::max(self.config.server.max_body_bytes))
            .layer(self.cors_layer())
            .with_state(state);

        if self.enable_tracing {
            router = router.layer(TraceLayer::new_for_http());
        }

        router
    }

    fn cors_layer(&self) -> CorsLayer {
        let origins = &self.config.server.allowed_origins;
        let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
            AllowOrigin::any()
        } else {
            let parsed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match HeaderValue::from_str(o) {
                    Ok(v) => Some(v),
                    Err(_) => {
                        tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(parsed)
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Run the server until Ctrl+C or SIGTERM.
    pub async fn run(self) -> Result<()> {
        prepare_upload_dir(&self.config.upload.dir).await?;

        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::internal(format!("Failed to bind {}: {}", addr, e)))?;

        tracing::info!(
            addr = %addr,
            session = %self.default_session,
            dialogflow_configured = self.dialogue.is_configured(),
            "Travel assistant listening"
        );

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| Error::internal(format!("Server error: {}", e)))?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let response = next.run(req).await;
    track_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );
    response
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use travel_assistant_core::mocks::MockDialogueClient;

    fn state(default: &str) -> AppState {
        AppState {
            config: Arc::new(AppConfig::default()),
            dialogue: Arc::new(MockDialogueClient::echo()),
            pages: Arc::new(PageRenderer::from_raw(&[]).unwrap()),
            default_session: SessionId::parse(default).unwrap(),
        }
    }

    #[test]
    fn test_resolve_session_prefers_client() {
        let state = state("process");
        assert_eq!(state.resolve_session(Some("tab-7")).unwrap().as_str(), "tab-7");
    }

    #[test]
    fn test_resolve_session_rejects_malformed() {
        let state = state("process");
        let too_long = "x".repeat(37);
        for raw in [too_long.as_str(), "a/b", "tab 7"] {
            let err = state.resolve_session(Some(raw)).unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(ref m) if m == "Invalid session_id"));
        }
    }

    #[test]
    fn test_resolve_session_falls_back() {
        let state = state("process");
        assert_eq!(state.resolve_session(None).unwrap().as_str(), "process");
        assert_eq!(state.resolve_session(Some("   ")).unwrap().as_str(), "process");
    }
}
