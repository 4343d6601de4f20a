//! Chat session and message HTTP handlers.
//!
//! Endpoints:
//! - GET    /chats/                    - List sessions for a user
//! - POST   /chats/                    - Create a session
//! - GET    /chats/{chat_id}           - Get a single session
//! - DELETE /chats/{chat_id}           - Delete a session
//! - POST   /chats/{chat_id}/messages  - Append a message
//!
//! The list endpoint takes its parameters as a JSON body on GET --
//! inherited contract, kept as-is for existing clients.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use chatrelay_types::chat::{ChatMessage, ChatSession, NewChatSession};

use crate::http::error::AppError;
use crate::state::AppState;

/// Body for GET /chats/.
#[derive(Debug, Deserialize)]
pub struct ListChatsRequest {
    pub userid: Uuid,
    #[serde(default)]
    pub chat_type: Option<String>,
}

/// Body for POST /chats/.
#[derive(Debug, Deserialize)]
pub struct CreateChatRequest {
    pub title: Option<String>,
    pub chat_type: String,
    pub userid: Uuid,
}

/// Body for POST /chats/{chat_id}/messages.
#[derive(Debug, Deserialize)]
pub struct AddMessageRequest {
    pub role: String,
    pub content: String,
    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,
}

/// GET /chats/ - List sessions owned by a user, newest first.
pub async fn list_chats(
    State(state): State<AppState>,
    Json(req): Json<ListChatsRequest>,
) -> Result<Json<Vec<ChatSession>>, AppError> {
    let sessions = state
        .chat_service
        .list_sessions(req.userid, req.chat_type)
        .await?;
    Ok(Json(sessions))
}

/// POST /chats/ - Create a session.
pub async fn create_chat(
    State(state): State<AppState>,
    Json(req): Json<CreateChatRequest>,
) -> Result<Json<ChatSession>, AppError> {
    let session = state
        .chat_service
        .create_session(NewChatSession {
            userid: req.userid,
            chat_type: req.chat_type,
            title: req.title,
        })
        .await?;
    Ok(Json(session))
}

/// GET /chats/{chat_id} - Get a session by ID.
pub async fn get_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<Uuid>,
) -> Result<Json<ChatSession>, AppError> {
    let session = state.chat_service.get_session(chat_id).await?;
    Ok(Json(session))
}

/// DELETE /chats/{chat_id} - Delete a session.
///
/// Reports "deleted" whether or not a row matched.
pub async fn delete_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.chat_service.delete_session(chat_id).await?;
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

/// POST /chats/{chat_id}/messages - Append a message to a session.
pub async fn add_message(
    State(state): State<AppState>,
    Path(chat_id): Path<Uuid>,
    Json(req): Json<AddMessageRequest>,
) -> Result<Json<ChatMessage>, AppError> {
    let message = state
        .chat_service
        .add_message(chat_id, &req.role, req.content, req.image_urls)
        .await?;
    Ok(Json(message))
}
