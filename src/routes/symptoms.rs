use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::post,
    Json, Router,
};
use chrono::Local;
use serde_json::{json, Value};

use super::AppState;
use crate::error::AppError;
use crate::models::{LogSymptomRequest, NewSymptom, DATE_FORMAT, DEFAULT_SEVERITY};

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/symptoms/:user_id", post(log_symptom))
        .with_state(state)
}

async fn log_symptom(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<LogSymptomRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let missing = || AppError::BadRequest("Missing symptom data".into());

    let Json(request) = body.map_err(|_| missing())?;
    let symptom = request.symptom.ok_or_else(missing)?;

    let record = state
        .store
        .log_symptom(NewSymptom {
            user_id,
            symptom,
            severity: request
                .severity
                .unwrap_or_else(|| DEFAULT_SEVERITY.to_string()),
            date: Local::now().date_naive().format(DATE_FORMAT).to_string(),
            notes: Some(request.notes.unwrap_or_default()),
        })
        .await?;

    Ok(Json(json!({
        "status": "success",
        "message": format!("Symptom '{}' logged successfully", record.symptom),
    })))
}
