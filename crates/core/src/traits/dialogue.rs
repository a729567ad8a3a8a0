//! Dialogue service traits.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::SessionId;

/// Client for an external dialogue/NLU service.
#[async_trait]
pub trait DialogueClient: Send + Sync {
    /// Send each message in order within `session` and return one reply per
    /// message, in the same order.
    async fn detect_intent(&self, messages: &[String], session: &SessionId) -> Result<Vec<String>>;

    /// Whether the client is pointed at a real backend.
    fn is_configured(&self) -> bool {
        true
    }
}

/// Send a single message and return the first non-blank reply.
///
/// An empty reply list or a blank first reply is reported as
/// [`Error::DialogueUnavailable`](crate::Error::DialogueUnavailable).
pub async fn first_reply(
    client: &dyn DialogueClient,
    message: &str,
    session: &SessionId,
) -> Result<String> {
    let replies = client
        .detect_intent(&[message.to_string()], session)
        .await?;

    match replies.into_iter().next() {
        Some(reply) if !reply.trim().is_empty() => Ok(reply),
        _ => Err(crate::Error::DialogueUnavailable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockDialogueClient;
    use crate::Error;

    #[tokio::test]
    async fn test_first_reply_returns_first() {
        let client = MockDialogueClient::with_replies(vec!["Gate 12".into(), "ignored".into()]);
        let reply = first_reply(&client, "where is my gate", &SessionId::generate())
            .await
            .unwrap();
        assert_eq!(reply, "Gate 12");
    }

    #[tokio::test]
    async fn test_first_reply_empty_list_is_unavailable() {
        let client = MockDialogueClient::empty();
        let err = first_reply(&client, "hello", &SessionId::generate())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DialogueUnavailable));
    }

    #[tokio::test]
    async fn test_first_reply_blank_is_unavailable() {
        let client = MockDialogueClient::with_replies(vec!["   ".into()]);
        let err = first_reply(&client, "hello", &SessionId::generate())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DialogueUnavailable));
    }
}
