//! Core traits for the travel assistant.
//!
//! - `dialogue`: the conversational backend the chat routes forward to

pub mod dialogue;

pub use dialogue::*;
