//! Client used when no Dialogflow agent is configured.

use async_trait::async_trait;

use travel_assistant_core::{traits::DialogueClient, types::SessionId, Error, Result};

/// Rejects every call so chat routes answer with a server error while the
/// rest of the site keeps working.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredDialogueClient;

#[async_trait]
impl DialogueClient for UnconfiguredDialogueClient {
    async fn detect_intent(&self, _messages: &[String], _session: &SessionId) -> Result<Vec<String>> {
        Err(Error::dialogue("Dialogflow is not configured"))
    }

    fn is_configured(&self) -> bool {
        false
    }
}
