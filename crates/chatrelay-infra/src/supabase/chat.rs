//! Supabase-backed chat repository.
//!
//! Implements `ChatRepository` from `chatrelay-core` against the
//! `chat_sessions` and `chat_messages` tables. Private Row structs map
//! PostgREST JSON to the domain types; the schema itself is owned by the
//! remote database.

use chatrelay_core::chat::repository::ChatRepository;
use chatrelay_types::chat::{ChatMessage, ChatSession, NewChatMessage, NewChatSession};
use chatrelay_types::error::RepositoryError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::client::SupabaseClient;

const SESSIONS_TABLE: &str = "chat_sessions";
const MESSAGES_TABLE: &str = "chat_messages";

/// Supabase implementation of `ChatRepository`.
#[derive(Debug, Clone)]
pub struct SupabaseChatRepository {
    client: SupabaseClient,
}

impl SupabaseChatRepository {
    /// Create a new repository backed by the given client.
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

// ---------------------------------------------------------------------------
// Private Row types for PostgREST-to-domain mapping
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SessionRow {
    id: Uuid,
    userid: Uuid,
    chat_type: String,
    title: Option<String>,
    created_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> ChatSession {
        ChatSession {
            id: self.id,
            userid: self.userid,
            chat_type: self.chat_type,
            title: self.title,
            created_at: self.created_at,
        }
    }
}

/// The remote column is lowercase `imageurls`; a null or missing column
/// maps to an empty list in the domain type.
#[derive(Debug, Deserialize)]
struct MessageRow {
    id: Uuid,
    session_id: Uuid,
    user_query: String,
    #[serde(default)]
    ai_answer: Option<String>,
    #[serde(default)]
    imageurls: Option<Vec<String>>,
    created_at: DateTime<Utc>,
}

impl MessageRow {
    fn into_message(self) -> ChatMessage {
        ChatMessage {
            id: self.id,
            session_id: self.session_id,
            user_query: self.user_query,
            ai_answer: self.ai_answer,
            image_urls: self.imageurls.unwrap_or_default(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
struct NewSessionRow<'a> {
    userid: &'a Uuid,
    chat_type: &'a str,
    title: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct NewMessageRow<'a> {
    session_id: &'a Uuid,
    user_query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ai_answer: Option<&'a str>,
    imageurls: &'a [String],
}

fn single_row<T>(table: &str, rows: Vec<T>) -> Result<T, RepositoryError> {
    rows.into_iter()
        .next()
        .ok_or_else(|| RepositoryError::Query(format!("{table}: insert returned no rows")))
}

// ---------------------------------------------------------------------------
// ChatRepository implementation
// ---------------------------------------------------------------------------

impl ChatRepository for SupabaseChatRepository {
    async fn create_session(&self, new: &NewChatSession) -> Result<ChatSession, RepositoryError> {
        let rows: Vec<SessionRow> = self
            .client
            .table(SESSIONS_TABLE)
            .insert(&NewSessionRow {
                userid: &new.userid,
                chat_type: &new.chat_type,
                title: new.title.as_deref(),
            })
            .await?;

        Ok(single_row(SESSIONS_TABLE, rows)?.into_session())
    }

    async fn get_session(&self, session_id: &Uuid) -> Result<Option<ChatSession>, RepositoryError> {
        let rows: Vec<SessionRow> = self
            .client
            .table(SESSIONS_TABLE)
            .eq("id", session_id)
            .fetch()
            .await?;

        Ok(rows.into_iter().next().map(SessionRow::into_session))
    }

    async fn list_sessions(
        &self,
        userid: &Uuid,
        chat_type: Option<&str>,
    ) -> Result<Vec<ChatSession>, RepositoryError> {
        let mut query = self.client.table(SESSIONS_TABLE).eq("userid", userid);
        if let Some(chat_type) = chat_type {
            query = query.eq("chat_type", chat_type);
        }

        let rows: Vec<SessionRow> = query.order_desc("created_at").fetch().await?;
        Ok(rows.into_iter().map(SessionRow::into_session).collect())
    }

    async fn delete_session(&self, session_id: &Uuid) -> Result<(), RepositoryError> {
        self.client
            .table(SESSIONS_TABLE)
            .eq("id", session_id)
            .delete()
            .await
    }

    async fn insert_message(&self, new: &NewChatMessage) -> Result<ChatMessage, RepositoryError> {
        let rows: Vec<MessageRow> = self
            .client
            .table(MESSAGES_TABLE)
            .insert(&NewMessageRow {
                session_id: &new.session_id,
                user_query: &new.user_query,
                ai_answer: new.ai_answer.as_deref(),
                imageurls: &new.image_urls,
            })
            .await?;

        Ok(single_row(MESSAGES_TABLE, rows)?.into_message())
    }

    async fn latest_message(
        &self,
        session_id: &Uuid,
    ) -> Result<Option<ChatMessage>, RepositoryError> {
        let rows: Vec<MessageRow> = self
            .client
            .table(MESSAGES_TABLE)
            .eq("session_id", session_id)
            .order_desc("created_at")
            .limit(1)
            .fetch()
            .await?;

        Ok(rows.into_iter().next().map(MessageRow::into_message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_row_maps_to_domain() {
        let row: SessionRow = serde_json::from_value(json!({
            "id": "018f4d0a-0000-7000-8000-000000000001",
            "userid": "018f4d0a-0000-7000-8000-000000000002",
            "chat_type": "main",
            "title": null,
            "created_at": "2024-05-01T10:00:00+00:00",
        }))
        .unwrap();

        let session = row.into_session();
        assert_eq!(session.chat_type, "main");
        assert_eq!(session.title, None);
    }

    #[test]
    fn test_message_row_missing_imageurls_maps_to_empty() {
        let row: MessageRow = serde_json::from_value(json!({
            "id": "018f4d0a-0000-7000-8000-000000000003",
            "session_id": "018f4d0a-0000-7000-8000-000000000001",
            "user_query": "hi",
            "created_at": "2024-05-01T10:00:01+00:00",
        }))
        .unwrap();

        let message = row.into_message();
        assert!(message.image_urls.is_empty());
        assert_eq!(message.ai_answer, None);
    }

    #[test]
    fn test_message_row_null_imageurls_maps_to_empty() {
        let row: MessageRow = serde_json::from_value(json!({
            "id": "018f4d0a-0000-7000-8000-000000000003",
            "session_id": "018f4d0a-0000-7000-8000-000000000001",
            "user_query": "hi",
            "ai_answer": "hello",
            "imageurls": null,
            "created_at": "2024-05-01T10:00:01+00:00",
        }))
        .unwrap();

        let message = row.into_message();
        assert!(message.image_urls.is_empty());
        assert_eq!(message.ai_answer.as_deref(), Some("hello"));
    }

    #[test]
    fn test_new_message_row_omits_absent_answer() {
        let session_id = Uuid::now_v7();
        let row = NewMessageRow {
            session_id: &session_id,
            user_query: "hi",
            ai_answer: None,
            imageurls: &[],
        };
        let value = serde_json::to_value(&row).unwrap();
        assert!(value.get("ai_answer").is_none());
        assert_eq!(value["imageurls"], json!([]));
    }
}
