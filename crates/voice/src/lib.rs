#![deny(unused)]
//! Voice text processing for the travel assistant.
//!
//! Every transform here is a pure function driven by an ordered table:
//! - `formatter`: screen-oriented reply text to speech-friendly text
//! - `enhancer`: conversational lead-ins and topic follow-ups
//! - `preprocess`: corrections for common speech-to-text mistakes
//! - `capabilities`: the static descriptor served to the widget

pub mod capabilities;
pub mod enhancer;
pub mod formatter;
pub mod preprocess;
mod text;

pub use capabilities::VoiceCapabilities;
pub use enhancer::{enhance_response, FollowUp};
pub use formatter::format_for_voice;
pub use preprocess::preprocess_voice_input;
