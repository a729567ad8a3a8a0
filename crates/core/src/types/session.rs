use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Session Types
// =============================================================================

/// Longest session id the dialogue backend accepts.
pub const MAX_SESSION_ID_LEN: usize = 36;

/// Opaque token correlating conversational turns with one dialogue session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh random session id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap a caller-supplied token.
    ///
    /// Accepts 1 to [`MAX_SESSION_ID_LEN`] ASCII letters, digits, `-` or `_`
    /// after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let valid = !trimmed.is_empty()
            && trimmed.len() <= MAX_SESSION_ID_LEN
            && trimmed
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        valid.then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(SessionId::parse("   ").is_none());
        assert_eq!(SessionId::parse(" abc ").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_parse_bounds_length() {
        let longest = "a".repeat(MAX_SESSION_ID_LEN);
        assert!(SessionId::parse(&longest).is_some());
        assert!(SessionId::parse(&format!("{}a", longest)).is_none());
    }

    #[test]
    fn test_parse_restricts_charset() {
        assert!(SessionId::parse("tab_7-B").is_some());
        for raw in ["a/b", "a b", "tab?x", "sessão", "a%2F"] {
            assert!(SessionId::parse(raw).is_none(), "{}", raw);
        }
    }

    #[test]
    fn test_generated_ids_parse() {
        let id = SessionId::generate();
        assert_eq!(SessionId::parse(id.as_str()), Some(id));
    }
}
