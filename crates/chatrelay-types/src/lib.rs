//! Shared domain types for Chatrelay.
//!
//! This crate contains the chat session and message types used across the
//! service, plus their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod error;
