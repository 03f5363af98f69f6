use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use super::AppState;
use crate::error::AppError;
use crate::models::{ChatReply, ChatRequest};

#[derive(Serialize)]
pub struct ChatResponse {
    status: &'static str,
    data: ChatReply,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .with_state(state)
}

async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let missing = || AppError::BadRequest("Missing message or user_id".into());

    let Json(request) = body.map_err(|e| {
        tracing::info!("ℹ️ Rejected chat body: {}", e);
        missing()
    })?;
    let (Some(message), Some(user_id)) = (request.message, request.user_id) else {
        return Err(missing());
    };

    let data = state.engine.process_message(&message, &user_id).await?;

    Ok(Json(ChatResponse {
        status: "success",
        data,
    }))
}
