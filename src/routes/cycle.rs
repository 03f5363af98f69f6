use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use chrono::Local;
use serde_json::{json, Value};

use super::AppState;
use crate::chatbot::dates::cycle_length_in_range;
use crate::error::AppError;
use crate::models::UpdateCycleRequest;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/update_cycle", post(update_cycle))
        .with_state(state)
}

async fn update_cycle(
    State(state): State<AppState>,
    body: Result<Json<UpdateCycleRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let missing = || AppError::BadRequest("Missing user_id or cycle_length".into());

    let Json(request) = body.map_err(|_| missing())?;
    let (Some(user_id), Some(cycle_length)) = (request.user_id, request.cycle_length) else {
        return Err(missing());
    };

    if !cycle_length_in_range(cycle_length) {
        return Err(AppError::BadRequest(
            "Cycle length should be between 21-45 days".into(),
        ));
    }

    let today = Local::now().date_naive();
    state
        .store
        .set_cycle_length(&user_id, cycle_length as i32, today)
        .await?;

    tracing::info!("🔄 Cycle length for {} set to {}", user_id, cycle_length);

    Ok(Json(json!({
        "status": "success",
        "message": format!("Cycle length updated to {cycle_length} days"),
    })))
}
