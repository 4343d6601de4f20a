//! Application error type mapping to HTTP status codes.
//!
//! Error bodies use the `{"detail": "<message>"}` shape existing clients
//! parse. Repository failures are logged and surfaced as a generic 500
//! without internal detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use chatrelay_types::error::ChatError;

/// Wrapper turning domain errors into HTTP responses.
#[derive(Debug)]
pub struct AppError(pub ChatError);

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ChatError::SessionNotFound => (StatusCode::NOT_FOUND, self.0.to_string()),
            ChatError::InvalidRole | ChatError::NoPriorUserMessage => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            ChatError::Repository(e) => {
                tracing::error!(error = %e, "Repository operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({"detail": message}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatrelay_types::error::RepositoryError;

    async fn body_detail(response: Response) -> (StatusCode, String) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, value["detail"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = AppError(ChatError::SessionNotFound).into_response();
        let (status, detail) = body_detail(response).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(detail, "Chat session not found");
    }

    #[tokio::test]
    async fn test_invalid_role_maps_to_400() {
        let response = AppError(ChatError::InvalidRole).into_response();
        let (status, detail) = body_detail(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail, "Invalid role");
    }

    #[tokio::test]
    async fn test_missing_prior_message_maps_to_400() {
        let response = AppError(ChatError::NoPriorUserMessage).into_response();
        let (status, detail) = body_detail(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail, "No previous user message found for AI reply");
    }

    #[tokio::test]
    async fn test_repository_error_is_not_leaked() {
        let err = ChatError::Repository(RepositoryError::Query(
            "chat_sessions: 500: secret internals".to_string(),
        ));
        let (status, detail) = body_detail(AppError(err).into_response()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail, "Internal server error");
    }
}
