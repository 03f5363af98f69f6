use serde::{Deserialize, Serialize};

use crate::chatbot::Intent;

pub const DEFAULT_CYCLE_LENGTH: i32 = 28;
pub const DEFAULT_PERIOD_DURATION: i32 = 5;
pub const DEFAULT_SEVERITY: &str = "moderate";

/// Dates are exchanged as `YYYY-MM-DD` strings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct UserCycleProfile {
    pub user_id: String,
    pub last_period_date: Option<String>,
    pub cycle_length: Option<i32>,
    pub period_duration: Option<i32>,
    pub created_at: Option<String>,
}

impl UserCycleProfile {
    pub fn cycle_length_or_default(&self) -> i32 {
        self.cycle_length.unwrap_or(DEFAULT_CYCLE_LENGTH)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct SymptomRecord {
    pub id: i64,
    pub user_id: String,
    pub symptom: String,
    pub severity: String,
    pub date: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSymptom {
    pub user_id: String,
    pub symptom: String,
    pub severity: String,
    pub date: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ChatTurn {
    pub id: i64,
    pub user_id: String,
    pub user_message: String,
    pub bot_response: String,
    pub timestamp: String,
}

#[derive(Debug, Clone)]
pub struct NewChatTurn {
    pub user_id: String,
    pub user_message: String,
    pub bot_response: String,
    pub timestamp: String,
}

/// Result of one processed message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub intent: Intent,
    pub actions: Vec<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LogSymptomRequest {
    pub symptom: Option<String>,
    pub severity: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCycleRequest {
    pub user_id: Option<String>,
    pub cycle_length: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct Predictions {
    pub next_period: Option<String>,
    pub ovulation_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub user_message: String,
    pub bot_response: String,
    pub timestamp: String,
}

impl From<ChatTurn> for HistoryEntry {
    fn from(turn: ChatTurn) -> Self {
        HistoryEntry {
            user_message: turn.user_message,
            bot_response: turn.bot_response,
            timestamp: turn.timestamp,
        }
    }
}
