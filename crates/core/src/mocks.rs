//! Mock implementations of core traits for testing.
//!
//! Used by unit tests here and by the gateway and workspace integration
//! tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::{traits::DialogueClient, types::SessionId, Error, Result};

// =============================================================================
// Mock Dialogue Client
// =============================================================================

#[derive(Debug, Clone)]
enum Behaviour {
    Replies(Vec<String>),
    Echo,
    Fail(String),
}

/// Scripted dialogue client that records every call.
#[derive(Debug)]
pub struct MockDialogueClient {
    behaviour: Behaviour,
    calls: Mutex<Vec<(Vec<String>, SessionId)>>,
}

impl MockDialogueClient {
    fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always return `replies`, regardless of input.
    pub fn with_replies(replies: Vec<String>) -> Self {
        Self::new(Behaviour::Replies(replies))
    }

    /// Always return the same single reply.
    pub fn constant(reply: &str) -> Self {
        Self::with_replies(vec![reply.to_string()])
    }

    /// Return an empty reply list, as an agent with no matching intent does.
    pub fn empty() -> Self {
        Self::with_replies(Vec::new())
    }

    /// Reply with `"You said: <message>"` for each message.
    pub fn echo() -> Self {
        Self::new(Behaviour::Echo)
    }

    /// Fail every call with a dialogue error.
    pub fn failing(message: &str) -> Self {
        Self::new(Behaviour::Fail(message.to_string()))
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Messages and session of the most recent call.
    pub fn last_call(&self) -> Option<(Vec<String>, SessionId)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl DialogueClient for MockDialogueClient {
    async fn detect_intent(&self, messages: &[String], session: &SessionId) -> Result<Vec<String>> {
        self.calls
            .lock()
            .unwrap()
            .push((messages.to_vec(), session.clone()));

        match &self.behaviour {
            Behaviour::Replies(replies) => Ok(replies.clone()),
            Behaviour::Echo => Ok(messages.iter().map(|m| format!("You said: {}", m)).collect()),
            Behaviour::Fail(msg) => Err(Error::dialogue(msg.clone())),
        }
    }
}
