//! HTTP handlers for gemini-relay.

pub mod generate;
pub mod health;
