use serde::{Deserialize, Serialize};

// =============================================================================
// Chat Payloads
// =============================================================================

/// Confidence assumed when a voice request does not report one.
pub const DEFAULT_VOICE_CONFIDENCE: f64 = 1.0;

/// Body of `POST /chat`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    /// Message text. Missing is treated the same as empty.
    #[serde(default)]
    pub message: String,
    /// Whether the message was dictated rather than typed.
    #[serde(default)]
    pub is_voice_input: bool,
    /// Conversation token chosen by the client.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Reply to `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_voice_response: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_response: Option<String>,
}

impl ChatResponse {
    /// Plain text reply.
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            is_voice_response: None,
            original_response: None,
        }
    }

    /// Voice-optimized reply that keeps the unprocessed text alongside.
    pub fn voice(response: impl Into<String>, original: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            is_voice_response: Some(true),
            original_response: Some(original.into()),
        }
    }
}

/// Body of `POST /chat/voice`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoiceChatRequest {
    #[serde(default)]
    pub message: String,
    /// Speech recognizer confidence. Echoed back, not used for routing.
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Reply to `POST /chat/voice`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoiceChatResponse {
    pub response: String,
    pub original_message: String,
    pub processed_message: String,
    pub confidence: f64,
    pub voice_optimized: bool,
}
