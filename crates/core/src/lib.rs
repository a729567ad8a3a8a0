#![deny(unused)]
//! Core types, traits, and error definitions for the travel assistant.
//!
//! This crate provides the building blocks shared by the gateway, the
//! dialogue adapter and the voice text pipeline.

pub mod config;
pub mod error;
pub mod mocks;
pub mod template;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::*;
pub use types::*;
