//! Chat session and message types for Chatrelay.
//!
//! These types mirror the two remote tables: `chat_sessions` and
//! `chat_messages`. Row identifiers and creation timestamps are assigned
//! by the store, so inserts use the `New*` payload types and reads return
//! the full row types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Role of an incoming chat message.
///
/// Only `user` and `ai` are accepted; anything else is rejected at the
/// HTTP boundary with "Invalid role".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Ai,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Ai => write!(f, "ai"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(MessageRole::User),
            "ai" => Ok(MessageRole::Ai),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A chat session owned by one user, tagged with a free-form type.
///
/// `chat_type` is "main", "secondary" or "third" by convention but is not
/// enforced as an enum. Sessions are created and deleted, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub userid: Uuid,
    pub chat_type: String,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a session. `id` and `created_at` come back from
/// the store.
#[derive(Debug, Clone)]
pub struct NewChatSession {
    pub userid: Uuid,
    pub chat_type: String,
    pub title: Option<String>,
}

/// One persisted message row.
///
/// A row holds a user query and, on AI-reply rows, the answer text. The
/// image list is serialized as `imageUrls` on the wire (the remote column
/// is lowercase `imageurls`) and is never absent, only empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub session_id: Uuid,
    pub user_query: String,
    pub ai_answer: Option<String>,
    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for appending a message row.
#[derive(Debug, Clone)]
pub struct NewChatMessage {
    pub session_id: Uuid,
    pub user_query: String,
    pub ai_answer: Option<String>,
    pub image_urls: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::User, MessageRole::Ai] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_message_role_rejects_unknown() {
        assert!("system".parse::<MessageRole>().is_err());
        assert!("assistant".parse::<MessageRole>().is_err());
        assert!("USER".parse::<MessageRole>().is_err());
    }

    #[test]
    fn test_chat_session_serialize() {
        let session = ChatSession {
            id: Uuid::now_v7(),
            userid: Uuid::now_v7(),
            chat_type: "main".to_string(),
            title: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["chat_type"], "main");
        assert!(json["title"].is_null());
        assert!(json.get("userid").is_some());
    }

    #[test]
    fn test_chat_message_image_urls_wire_name() {
        let message = ChatMessage {
            id: Uuid::now_v7(),
            session_id: Uuid::now_v7(),
            user_query: "hi".to_string(),
            ai_answer: None,
            image_urls: vec!["https://example.com/a.png".to_string()],
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["imageUrls"][0], "https://example.com/a.png");
        assert!(json.get("image_urls").is_none());
    }

    #[test]
    fn test_chat_message_image_urls_default_empty() {
        let json = serde_json::json!({
            "id": Uuid::now_v7(),
            "session_id": Uuid::now_v7(),
            "user_query": "hi",
            "ai_answer": null,
            "created_at": Utc::now(),
        });
        let message: ChatMessage = serde_json::from_value(json).unwrap();
        assert!(message.image_urls.is_empty());
    }
}
