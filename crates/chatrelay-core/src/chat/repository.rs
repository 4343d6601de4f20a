//! ChatRepository trait definition.
//!
//! CRUD operations over chat sessions and append-only chat messages.
//! The store assigns row ids and creation timestamps, so inserts take the
//! `New*` payload types and return the persisted row.

use chatrelay_types::chat::{ChatMessage, ChatSession, NewChatMessage, NewChatSession};
use chatrelay_types::error::RepositoryError;
use uuid::Uuid;

/// Repository trait for chat session and message persistence.
///
/// Implementations live in chatrelay-infra (e.g. `SupabaseChatRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ChatRepository: Send + Sync {
    /// Create a new chat session and return it with store-assigned
    /// `id` and `created_at`.
    fn create_session(
        &self,
        new: &NewChatSession,
    ) -> impl std::future::Future<Output = Result<ChatSession, RepositoryError>> + Send;

    /// Get a chat session by its unique ID.
    fn get_session(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<ChatSession>, RepositoryError>> + Send;

    /// List sessions owned by a user, ordered by created_at DESC,
    /// optionally restricted to one chat_type.
    fn list_sessions(
        &self,
        userid: &Uuid,
        chat_type: Option<&str>,
    ) -> impl std::future::Future<Output = Result<Vec<ChatSession>, RepositoryError>> + Send;

    /// Delete a session by ID. Succeeds whether or not a row matched;
    /// messages are not cascaded.
    fn delete_session(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Append a message row and return it with store-assigned fields.
    ///
    /// The session is not checked for existence before the insert.
    fn insert_message(
        &self,
        new: &NewChatMessage,
    ) -> impl std::future::Future<Output = Result<ChatMessage, RepositoryError>> + Send;

    /// Get the most recently created message row in a session
    /// (created_at DESC, limit 1).
    fn latest_message(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<ChatMessage>, RepositoryError>> + Send;
}
