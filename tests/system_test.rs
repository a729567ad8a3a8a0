//! Whole-stack tests: gateway router, voice pipeline and Dialogflow client
//! against an in-process stand-in for the Dialogflow API.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::Path,
    http::{Request, StatusCode},
    routing::post,
    Json, Router,
};
use secrecy::Secret;
use serde_json::{json, Value};
use tower::ServiceExt;

use travel_assistant_core::config::{AppConfig, DialogflowConfig};
use travel_assistant_core::mocks::MockDialogueClient;
use travel_assistant_core::template::PageRenderer;
use travel_assistant_core::DialogueClient;
use travel_assistant_dialogue::{create_default_client, UnconfiguredDialogueClient};
use travel_assistant_gateway::{GatewayServer, APOLOGY_MESSAGE};

// =============================================================================
// Fake Dialogflow agent
// =============================================================================

async fn fake_agent(
    Path((_project, session)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let text = body["queryInput"]["text"]["text"].as_str().unwrap_or_default();
    let session = session.trim_end_matches(":detectIntent");

    let reply = if text.contains("heathrow") {
        "Your **BA** flight leaves LHR T5 at 09:40.".to_string()
    } else {
        format!("[{}] {}", session, text)
    };
    Json(json!({ "queryResult": { "fulfillmentText": reply } }))
}

async fn spawn_agent() -> String {
    let app = Router::new().route(
        "/v2/projects/:project/agent/sessions/:session",
        post(fake_agent),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn agent_config(base_url: String) -> DialogflowConfig {
    DialogflowConfig {
        base_url,
        project_id: Some("travel-agent".into()),
        access_token: Some(Secret::new("token".into())),
        language_code: "en-GB".into(),
        timeout_secs: 5,
    }
}

fn build_app(dialogue: Arc<dyn DialogueClient>, static_dir: &tempfile::TempDir) -> Router {
    let mut config = AppConfig::default();
    config.pages.static_dir = static_dir.path().to_path_buf();
    config.upload.dir = static_dir.path().join("uploads");

    let pages = PageRenderer::from_raw(&[("index.html", "<title>{{ page_title }}</title>")]).unwrap();

    GatewayServer::new(config, dialogue, pages)
        .with_tracing(false)
        .build_router()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_voice_chat_through_dialogflow() {
    let client = create_default_client(&agent_config(spawn_agent().await)).unwrap();
    let static_dir = tempfile::tempdir().unwrap();
    let app = build_app(Arc::new(client), &static_dir);

    let (status, json) = post_json(
        &app,
        "/chat/voice",
        json!({ "message": "Is my flight from Heath Row on time", "confidence": 0.9 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["processed_message"], "is my flight from heathrow on time");
    assert_eq!(
        json["response"],
        "Sure! Your British Airways flight leaves London Heathrow Terminal 5 at 09:40. \
         Is there anything else you'd like to know about your flight?"
    );
}

#[tokio::test]
async fn test_conversation_keeps_client_session() {
    let client = create_default_client(&agent_config(spawn_agent().await)).unwrap();
    let static_dir = tempfile::tempdir().unwrap();
    let app = build_app(Arc::new(client), &static_dir);

    for message in ["hello", "what about baggage"] {
        let (status, json) = post_json(
            &app,
            "/chat",
            json!({ "message": message, "session_id": "tab-42" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["response"], format!("[tab-42] {}", message));
    }
}

#[tokio::test]
async fn test_default_session_shared_across_requests() {
    let dialogue = Arc::new(MockDialogueClient::echo());
    let static_dir = tempfile::tempdir().unwrap();
    let app = build_app(dialogue.clone(), &static_dir);

    post_json(&app, "/chat", json!({ "message": "one" })).await;
    let (_, first) = dialogue.last_call().unwrap();
    post_json(&app, "/chat/voice", json!({ "message": "two" })).await;
    let (_, second) = dialogue.last_call().unwrap();

    assert_eq!(first, second);
    assert_eq!(dialogue.call_count(), 2);
}

#[tokio::test]
async fn test_unconfigured_backend_keeps_site_up() {
    let static_dir = tempfile::tempdir().unwrap();
    let app = build_app(Arc::new(UnconfiguredDialogueClient), &static_dir);

    let (status, json) = post_json(&app, "/chat", json!({ "message": "hello" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], APOLOGY_MESSAGE);

    let get = |uri: &str| Request::builder().uri(uri).body(Body::empty()).unwrap();

    let (status, health) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["dialogflow_configured"], false);

    let (status, _) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
}
