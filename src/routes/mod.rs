use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::chatbot::ConversationEngine;
use crate::store::CycleStore;

pub mod chat;
pub mod cycle;
pub mod history;
pub mod symptoms;
pub mod user;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ConversationEngine>,
    pub store: Arc<dyn CycleStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CycleStore>) -> Self {
        AppState {
            engine: Arc::new(ConversationEngine::new(store.clone())),
            store,
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(chat::routes(state.clone()))
        .merge(user::routes(state.clone()))
        .merge(symptoms::routes(state.clone()))
        .merge(history::routes(state.clone()))
        .merge(cycle::routes(state))
        .route("/", get(index))
        .route("/health", get(|| async { "✅ Backend up" }))
}

async fn index() -> Json<Value> {
    Json(json!({
        "message": "Period Tracker Chatbot API",
        "status": "running",
        "endpoints": {
            "/chat": "POST - Send message to chatbot",
            "/user/<user_id>": "GET - Get user data",
            "/symptoms/<user_id>": "POST - Log a symptom",
            "/history/<user_id>": "GET - Get chat history",
            "/update_cycle": "POST - Update cycle length"
        }
    }))
}
