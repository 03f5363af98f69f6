use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::AppState;
use crate::chatbot::dates::{project_next_period, project_ovulation};
use crate::error::AppError;
use crate::models::{Predictions, SymptomRecord, UserCycleProfile, DATE_FORMAT};

const RECENT_SYMPTOMS: i64 = 10;

#[derive(Serialize)]
#[serde(untagged)]
pub enum UserResponse {
    Found {
        status: &'static str,
        user: UserCycleProfile,
        predictions: Predictions,
        recent_symptoms: Vec<SymptomRecord>,
    },
    Missing {
        status: &'static str,
        user: Option<UserCycleProfile>,
        message: &'static str,
    },
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/user/:user_id", get(get_user))
        .with_state(state)
}

fn predictions(profile: &UserCycleProfile) -> Predictions {
    let cycle_length = profile.cycle_length_or_default();
    let format = |date: chrono::NaiveDate| date.format(DATE_FORMAT).to_string();

    match profile.last_period_date.as_deref() {
        Some(last) => Predictions {
            next_period: project_next_period(last, cycle_length).map(format),
            ovulation_date: project_ovulation(last, cycle_length).map(format),
        },
        None => Predictions {
            next_period: None,
            ovulation_date: None,
        },
    }
}

async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let profile = state.store.profile(&user_id).await?;
    let recent_symptoms = state.store.recent_symptoms(&user_id, RECENT_SYMPTOMS).await?;

    let Some(user) = profile else {
        return Ok(Json(UserResponse::Missing {
            status: "success",
            user: None,
            message: "User not found",
        }));
    };

    Ok(Json(UserResponse::Found {
        status: "success",
        predictions: predictions(&user),
        user,
        recent_symptoms,
    }))
}
