//! Site pages, health and voice capability routes.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};

use travel_assistant_core::template::Page;
use travel_assistant_core::HealthReport;
use travel_assistant_voice::VoiceCapabilities;

use crate::error::ApiError;
use crate::server::AppState;

/// One `GET` route per [`Page`].
pub fn page_routes() -> Router<Arc<AppState>> {
    Page::ALL.into_iter().fold(Router::new(), |router, page| {
        router.route(
            page.path(),
            get(move |State(state): State<Arc<AppState>>| async move { render_page(&state, page) }),
        )
    })
}

fn render_page(state: &AppState, page: Page) -> Result<Html<String>, ApiError> {
    Ok(Html(state.pages.render(page)?))
}

/// `GET /health`
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    Json(HealthReport::healthy(state.dialogue.is_configured()))
}

/// `GET /voice/capabilities`
pub async fn voice_capabilities_handler() -> Json<VoiceCapabilities> {
    Json(VoiceCapabilities::current())
}
