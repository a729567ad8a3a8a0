//! Chat routes: typed text and dictated voice input.

use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use serde::de::DeserializeOwned;

use travel_assistant_core::traits::first_reply;
use travel_assistant_core::{
    ChatRequest, ChatResponse, Error, SessionId, VoiceChatRequest, VoiceChatResponse,
    DEFAULT_VOICE_CONFIDENCE,
};
use travel_assistant_governance::{track_dialogue, DialogueOutcome};
use travel_assistant_voice::{enhance_response, format_for_voice, preprocess_voice_input};

use crate::error::ApiError;
use crate::server::AppState;

/// `POST /chat`
pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let request: ChatRequest = parse_body(body?)?;
    let message = require_message(&request.message)?;
    let session = state.resolve_session(request.session_id.as_deref())?;

    let raw = ask_dialogue(&state, "/chat", message, &session).await?;

    if !request.is_voice_input {
        return Ok(Json(ChatResponse::text(raw)));
    }

    let response = enhance_response(&format_for_voice(&raw), message, true);
    Ok(Json(ChatResponse::voice(response, raw)))
}

/// `POST /chat/voice`
///
/// The transcript is cleaned up before it reaches the dialogue backend, and
/// both forms are echoed back so the widget can show what was understood.
pub async fn voice_chat_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<VoiceChatResponse>, ApiError> {
    let request: VoiceChatRequest = parse_body(body?)?;
    let original = require_message(&request.message)?;
    let processed = preprocess_voice_input(original);
    let session = state.resolve_session(request.session_id.as_deref())?;

    let raw = ask_dialogue(&state, "/chat/voice", &processed, &session).await?;
    let response = enhance_response(&format_for_voice(&raw), &processed, true);

    Ok(Json(VoiceChatResponse {
        response,
        original_message: original.to_string(),
        processed_message: processed,
        confidence: request.confidence.unwrap_or(DEFAULT_VOICE_CONFIDENCE),
        voice_optimized: true,
    }))
}

/// Decode a JSON body. Empty, `null` and unparseable bodies all count as
/// absent.
fn parse_body<T: DeserializeOwned>(body: Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::bad_request("No data provided"));
    }

    match serde_json::from_slice::<Option<T>>(&body) {
        Ok(Some(parsed)) => Ok(parsed),
        Ok(None) => Err(ApiError::bad_request("No data provided")),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected malformed JSON body");
            Err(ApiError::bad_request("No data provided"))
        }
    }
}

fn require_message(message: &str) -> Result<&str, ApiError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request("No message provided"));
    }
    Ok(trimmed)
}

async fn ask_dialogue(
    state: &AppState,
    route: &'static str,
    message: &str,
    session: &SessionId,
) -> Result<String, ApiError> {
    let start = Instant::now();
    let result = first_reply(state.dialogue.as_ref(), message, session).await;
    let latency = start.elapsed().as_secs_f64();

    let outcome = match &result {
        Ok(_) => DialogueOutcome::Replied,
        Err(Error::DialogueUnavailable) => DialogueOutcome::Empty,
        Err(_) => DialogueOutcome::Failed,
    };
    track_dialogue(route, outcome, latency);

    tracing::info!(
        route,
        session = %session,
        outcome = outcome.as_str(),
        latency_ms = (latency * 1000.0) as u64,
        "Dialogue call finished"
    );

    Ok(result?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Probe {
        #[serde(default)]
        message: String,
    }

    #[test]
    fn test_parse_body_absent() {
        for raw in ["", "   ", "null"] {
            let err = parse_body::<Probe>(Bytes::from(raw)).unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(ref m) if m == "No data provided"));
        }
    }

    #[test]
    fn test_parse_body_malformed() {
        let err = parse_body::<Probe>(Bytes::from("{not json")).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "No data provided"));
    }

    #[test]
    fn test_parse_body_object() {
        let probe: Probe = parse_body(Bytes::from(r#"{"message":"hi"}"#)).unwrap();
        assert_eq!(probe.message, "hi");
    }

    #[test]
    fn test_require_message() {
        assert!(require_message("").is_err());
        assert!(require_message(" \t\n").is_err());
        assert_eq!(require_message("  hello ").unwrap(), "hello");
    }
}
