//! Dialogflow ES adapter.
//!
//! Each message is sent as one `detectIntent` call against
//! `v2/projects/{project}/agent/sessions/{session}:detectIntent`.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_json::json;
use url::Url;

use travel_assistant_core::{
    config::DialogflowConfig, traits::DialogueClient, types::SessionId, Error, Result,
};

/// REST client for a Dialogflow ES agent.
pub struct DialogflowClient {
    http: reqwest::Client,
    base_url: Url,
    project_id: String,
    access_token: Secret<String>,
    language_code: String,
}

impl std::fmt::Debug for DialogflowClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogflowClient")
            .field("base_url", &self.base_url.as_str())
            .field("project_id", &self.project_id)
            .field("language_code", &self.language_code)
            .finish_non_exhaustive()
    }
}

impl DialogflowClient {
    /// Build a client from configuration.
    pub fn new(config: &DialogflowConfig) -> Result<Self> {
        let project_id = config
            .project_id
            .clone()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| Error::config("dialogflow.project_id is not set"))?;
        let access_token = config
            .access_token
            .clone()
            .ok_or_else(|| Error::config("dialogflow.access_token is not set"))?;
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::config(format!("invalid dialogflow.base_url: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config("dialogflow.base_url must be an http(s) URL"));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            project_id,
            access_token,
            language_code: config.language_code.clone(),
        })
    }

    /// `detectIntent` endpoint for `session`.
    pub fn endpoint(&self, session: &SessionId) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("v2")
                .push("projects")
                .push(&self.project_id)
                .push("agent")
                .push("sessions")
                .push(&format!("{}:detectIntent", session.as_str()));
        }
        url
    }

    async fn detect_one(&self, message: &str, session: &SessionId) -> Result<String> {
        let body = json!({
            "queryInput": {
                "text": {
                    "text": message,
                    "languageCode": self.language_code,
                }
            }
        });

        let response = self
            .http
            .post(self.endpoint(session))
            .bearer_auth(self.access_token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::dialogue(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, detail = %detail, "Dialogflow rejected detectIntent");
            return Err(Error::dialogue(format!("detectIntent returned {}", status)));
        }

        let parsed: DetectIntentResponse = response
            .json()
            .await
            .map_err(|e| Error::dialogue(format!("invalid detectIntent response: {}", e)))?;

        Ok(parsed.reply_text())
    }
}

#[async_trait]
impl DialogueClient for DialogflowClient {
    async fn detect_intent(&self, messages: &[String], session: &SessionId) -> Result<Vec<String>> {
        let mut replies = Vec::with_capacity(messages.len());
        for message in messages {
            let reply = self.detect_one(message, session).await?;
            tracing::debug!(session = %session, reply_len = reply.len(), "Dialogflow reply received");
            replies.push(reply);
        }
        Ok(replies)
    }
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetectIntentResponse {
    #[serde(default)]
    query_result: Option<QueryResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryResult {
    #[serde(default)]
    fulfillment_text: String,
    #[serde(default)]
    fulfillment_messages: Vec<FulfillmentMessage>,
}

#[derive(Debug, Default, Deserialize)]
struct FulfillmentMessage {
    #[serde(default)]
    text: Option<TextMessage>,
}

#[derive(Debug, Default, Deserialize)]
struct TextMessage {
    #[serde(default)]
    text: Vec<String>,
}

impl DetectIntentResponse {
    /// `fulfillmentText`, or the text fulfillment messages joined when the
    /// agent only filled those in. Empty when the agent said nothing.
    fn reply_text(self) -> String {
        let Some(result) = self.query_result else {
            return String::new();
        };
        if !result.fulfillment_text.trim().is_empty() {
            return result.fulfillment_text;
        }
        result
            .fulfillment_messages
            .into_iter()
            .filter_map(|m| m.text)
            .flat_map(|t| t.text)
            .filter(|t| !t.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
