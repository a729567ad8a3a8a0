//! Core type definitions for the travel assistant.
//!
//! Request/response payloads are kept separate from session and upload
//! records so the gateway can re-export just what it serves.

pub mod chat;
pub mod session;
pub mod status;
pub mod upload;

pub use chat::*;
pub use session::*;
pub use status::*;
pub use upload::*;
