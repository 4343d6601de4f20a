//! Supabase data API client and repository implementation.

pub mod chat;
pub mod client;

pub use chat::SupabaseChatRepository;
pub use client::SupabaseClient;
