//! Axum router configuration with middleware.
//!
//! CORS is fully open (all origins/methods/headers); tighten per
//! deployment. Both `/chats` and `/chats/` are registered for the
//! collection routes; the framework does not redirect between them.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers::chat;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/chats", get(chat::list_chats).post(chat::create_chat))
        .route("/chats/", get(chat::list_chats).post(chat::create_chat))
        .route(
            "/chats/{chat_id}",
            get(chat::get_chat).delete(chat::delete_chat),
        )
        .route("/chats/{chat_id}/messages", post(chat::add_message))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - Root greeting, kept for compatibility with existing clients.
async fn root() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({"message": "Hello World"}))
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
