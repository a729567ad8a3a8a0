use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
///
/// Describes this process only; the dialogue backend is never probed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub voice_enabled: bool,
    pub dialogflow_configured: bool,
}

impl HealthReport {
    pub fn healthy(dialogflow_configured: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            voice_enabled: true,
            dialogflow_configured,
        }
    }
}
