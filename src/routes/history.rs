use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::AppState;
use crate::error::AppError;
use crate::models::{HistoryEntry, HistoryQuery};

const DEFAULT_HISTORY_LIMIT: i64 = 50;

#[derive(Serialize)]
pub struct HistoryResponse {
    status: &'static str,
    history: Vec<HistoryEntry>,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/history/:user_id", get(get_chat_history))
        .with_state(state)
}

async fn get_chat_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let turns = state.store.chat_history(&user_id, limit).await?;

    Ok(Json(HistoryResponse {
        status: "success",
        history: turns.into_iter().map(HistoryEntry::from).collect(),
    }))
}
