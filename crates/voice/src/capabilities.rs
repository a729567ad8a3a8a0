//! Voice feature descriptor served at `/voice/capabilities`.

use serde::Serialize;

/// Feature toggles reported to the widget.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VoiceFeatures {
    pub abbreviation_expansion: bool,
    pub speech_error_correction: bool,
    pub conversational_enhancements: bool,
}

/// What the voice pipeline supports. Fixed for the life of the process.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VoiceCapabilities {
    pub speech_recognition: bool,
    pub speech_synthesis: bool,
    pub voice_optimized_responses: bool,
    pub supported_languages: Vec<&'static str>,
    pub preferred_voice: &'static str,
    pub features: VoiceFeatures,
}

impl VoiceCapabilities {
    pub fn current() -> Self {
        Self {
            speech_recognition: true,
            speech_synthesis: true,
            voice_optimized_responses: true,
            supported_languages: vec!["en-GB", "en-US"],
            preferred_voice: "en-GB female",
            features: VoiceFeatures {
                abbreviation_expansion: true,
                speech_error_correction: true,
                conversational_enhancements: true,
            },
        }
    }
}
