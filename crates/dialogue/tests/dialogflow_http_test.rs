//! Drives `DialogflowClient` against an in-process stand-in for the
//! Dialogflow REST API.

use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use secrecy::Secret;
use serde_json::{json, Value};
use travel_assistant_core::{
    config::DialogflowConfig, traits::DialogueClient, types::SessionId, Error,
};
use travel_assistant_dialogue::{create_default_client, UnconfiguredDialogueClient};

async fn fake_detect_intent(
    Path((project, session)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some("Bearer test-token");
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "unauthorized" })));
    }

    let text = body["queryInput"]["text"]["text"].as_str().unwrap_or_default();
    let reply = match text {
        "silence" => json!({ "queryResult": { "fulfillmentText": "" } }),
        _ => json!({
            "queryResult": {
                "fulfillmentText": format!("{}|{}|{}", project, session, text)
            }
        }),
    };
    (StatusCode::OK, Json(reply))
}

async fn spawn_fake() -> String {
    let app = Router::new().route(
        "/v2/projects/:project/agent/sessions/:session",
        post(fake_detect_intent),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn config(base_url: String, token: &str) -> DialogflowConfig {
    DialogflowConfig {
        base_url,
        project_id: Some("travel-agent".into()),
        access_token: Some(Secret::new(token.into())),
        language_code: "en-GB".into(),
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn test_detect_intent_round_trip() {
    let base = spawn_fake().await;
    let client = create_default_client(&config(base, "test-token")).unwrap();
    let session = SessionId::parse("session-1").unwrap();

    let replies = client
        .detect_intent(&["where is my gate".to_string(), "thanks".to_string()], &session)
        .await
        .unwrap();

    assert_eq!(
        replies,
        vec![
            "travel-agent|session-1:detectIntent|where is my gate".to_string(),
            "travel-agent|session-1:detectIntent|thanks".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_empty_fulfillment_is_returned_as_blank() {
    let base = spawn_fake().await;
    let client = create_default_client(&config(base, "test-token")).unwrap();

    let replies = client
        .detect_intent(&["silence".to_string()], &SessionId::generate())
        .await
        .unwrap();
    assert_eq!(replies, vec![String::new()]);
}

#[tokio::test]
async fn test_http_error_maps_to_dialogue_error() {
    let base = spawn_fake().await;
    let client = create_default_client(&config(base, "wrong-token")).unwrap();

    let err = client
        .detect_intent(&["hello".to_string()], &SessionId::generate())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Dialogue(_)));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_unconfigured_client() {
    assert!(create_default_client(&DialogflowConfig::default()).is_err());

    let client = UnconfiguredDialogueClient;
    assert!(!client.is_configured());
    assert!(client
        .detect_intent(&["hello".to_string()], &SessionId::generate())
        .await
        .is_err());
}
