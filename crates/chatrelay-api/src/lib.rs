//! REST API application layer for Chatrelay.
//!
//! Exposes the router, handlers, and application state so the binary and
//! the integration tests share one assembly path.

pub mod http;
pub mod state;
