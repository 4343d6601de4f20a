//! Chat service holding the session lifecycle and the role-handling
//! policy for incoming messages.
//!
//! Generic over `ChatRepository` so the HTTP layer and tests can pin it
//! to different implementations (chatrelay-core never depends on
//! chatrelay-infra).

use chatrelay_types::chat::{
    ChatMessage, ChatSession, MessageRole, NewChatMessage, NewChatSession,
};
use chatrelay_types::error::ChatError;
use tracing::info;
use uuid::Uuid;

use crate::chat::repository::ChatRepository;

/// Orchestrates session CRUD and message appends against the repository.
pub struct ChatService<C: ChatRepository> {
    repo: C,
}

impl<C: ChatRepository> ChatService<C> {
    /// Create a new chat service backed by the given repository.
    pub fn new(repo: C) -> Self {
        Self { repo }
    }

    /// List sessions owned by `userid`, newest first.
    ///
    /// An empty `chat_type` disables the filter, the same as leaving it
    /// out. An empty result is not an error.
    pub async fn list_sessions(
        &self,
        userid: Uuid,
        chat_type: Option<String>,
    ) -> Result<Vec<ChatSession>, ChatError> {
        let filter = chat_type.as_deref().filter(|t| !t.is_empty());
        Ok(self.repo.list_sessions(&userid, filter).await?)
    }

    /// Create a session and return it with store-assigned id/created_at.
    pub async fn create_session(&self, new: NewChatSession) -> Result<ChatSession, ChatError> {
        let session = self.repo.create_session(&new).await?;
        info!(session_id = %session.id, chat_type = %session.chat_type, "Chat session created");
        Ok(session)
    }

    /// Get a session by ID.
    pub async fn get_session(&self, session_id: Uuid) -> Result<ChatSession, ChatError> {
        self.repo
            .get_session(&session_id)
            .await?
            .ok_or(ChatError::SessionNotFound)
    }

    /// Delete a session by ID.
    ///
    /// Reports success even when no row matched; the delete is not
    /// verified and messages are left in place.
    pub async fn delete_session(&self, session_id: Uuid) -> Result<(), ChatError> {
        self.repo.delete_session(&session_id).await?;
        info!(session_id = %session_id, "Chat session deleted");
        Ok(())
    }

    /// Append a message to a session according to its role.
    ///
    /// A `user` message becomes a fresh row with `ai_answer` unset. An
    /// `ai` message is stored as its own new row that repeats the
    /// `user_query` of the most recent row in the session -- consumers of
    /// the table rely on this shape, so the prior row is never updated.
    /// An `ai` message with no prior row in the session is rejected.
    pub async fn add_message(
        &self,
        session_id: Uuid,
        role: &str,
        content: String,
        image_urls: Vec<String>,
    ) -> Result<ChatMessage, ChatError> {
        let role: MessageRole = role.parse().map_err(|_| ChatError::InvalidRole)?;

        let new = match role {
            MessageRole::User => NewChatMessage {
                session_id,
                user_query: content,
                ai_answer: None,
                image_urls,
            },
            MessageRole::Ai => {
                let prev = self
                    .repo
                    .latest_message(&session_id)
                    .await?
                    .ok_or(ChatError::NoPriorUserMessage)?;
                NewChatMessage {
                    session_id,
                    user_query: prev.user_query,
                    ai_answer: Some(content),
                    image_urls,
                }
            }
        };

        let message = self.repo.insert_message(&new).await?;
        info!(session_id = %session_id, message_id = %message.id, role = %role, "Message appended");
        Ok(message)
    }
}
