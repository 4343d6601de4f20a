//! Business logic and repository trait definitions for Chatrelay.
//!
//! This crate defines the "port" (the `ChatRepository` trait) that the
//! infrastructure layer implements. It depends only on `chatrelay-types`
//! -- never on `chatrelay-infra` or any HTTP/database crate.

pub mod chat;
