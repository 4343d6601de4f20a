//! Chat session and message domain logic.

pub mod repository;
pub mod service;
