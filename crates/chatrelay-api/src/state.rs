//! Application state wiring the service to its concrete implementation.
//!
//! The service is generic over the repository trait; AppState pins it to
//! the Supabase implementation. One gateway instance is constructed at
//! process start and shared by every handler -- explicit dependency
//! injection instead of a module-global client.

use std::sync::Arc;

use chatrelay_core::chat::service::ChatService;
use chatrelay_infra::config::SupabaseConfig;
use chatrelay_infra::supabase::{SupabaseChatRepository, SupabaseClient};

/// Concrete service type pinned to the Supabase repository.
pub type ConcreteChatService = ChatService<SupabaseChatRepository>;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
}

impl AppState {
    /// Initialize from process environment variables.
    pub fn init() -> anyhow::Result<Self> {
        let config = SupabaseConfig::from_env()?;
        Self::with_config(&config)
    }

    /// Build the state against an explicit configuration. Integration
    /// tests use this to point the gateway at a local stub server.
    pub fn with_config(config: &SupabaseConfig) -> anyhow::Result<Self> {
        let client = SupabaseClient::new(config)?;
        let chat_service = ChatService::new(SupabaseChatRepository::new(client));

        Ok(Self {
            chat_service: Arc::new(chat_service),
        })
    }
}
