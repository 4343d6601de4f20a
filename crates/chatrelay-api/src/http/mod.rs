//! HTTP/REST layer for Chatrelay.
//!
//! Axum-based JSON API with open CORS and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
