//! Infrastructure layer for Chatrelay.
//!
//! Contains the implementation of the repository trait defined in
//! `chatrelay-core`, backed by the Supabase data API (PostgREST), plus
//! the environment configuration it is constructed from.

pub mod config;
pub mod supabase;
