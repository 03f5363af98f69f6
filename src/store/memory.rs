use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use super::CycleStore;
use crate::error::AppError;
use crate::models::{
    ChatTurn, NewChatTurn, NewSymptom, SymptomRecord, UserCycleProfile, DATE_FORMAT,
    DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_DURATION,
};

#[derive(Default)]
struct Tables {
    users: HashMap<String, UserCycleProfile>,
    symptoms: Vec<SymptomRecord>,
    chat_history: Vec<ChatTurn>,
}

/// In-process store with the same semantics as the Postgres tables.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a profile in place as-is, bypassing the upsert rules.
    #[cfg(test)]
    pub async fn insert_profile(&self, profile: UserCycleProfile) {
        self.tables
            .lock()
            .await
            .users
            .insert(profile.user_id.clone(), profile);
    }
}

fn fresh_profile(user_id: &str, created_at: &str) -> UserCycleProfile {
    UserCycleProfile {
        user_id: user_id.to_string(),
        last_period_date: None,
        cycle_length: Some(DEFAULT_CYCLE_LENGTH),
        period_duration: Some(DEFAULT_PERIOD_DURATION),
        created_at: Some(created_at.to_string()),
    }
}

#[async_trait]
impl CycleStore for MemoryStore {
    async fn profile(&self, user_id: &str) -> Result<Option<UserCycleProfile>, AppError> {
        Ok(self.tables.lock().await.users.get(user_id).cloned())
    }

    async fn record_period_start(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<UserCycleProfile, AppError> {
        let day = date.format(DATE_FORMAT).to_string();
        let mut tables = self.tables.lock().await;
        let profile = tables
            .users
            .entry(user_id.to_string())
            .or_insert_with(|| fresh_profile(user_id, &day));
        profile.last_period_date = Some(day);
        Ok(profile.clone())
    }

    async fn set_cycle_length(
        &self,
        user_id: &str,
        cycle_length: i32,
        today: NaiveDate,
    ) -> Result<UserCycleProfile, AppError> {
        let created_at = today.format(DATE_FORMAT).to_string();
        let mut tables = self.tables.lock().await;
        let profile = tables
            .users
            .entry(user_id.to_string())
            .or_insert_with(|| fresh_profile(user_id, &created_at));
        profile.cycle_length = Some(cycle_length);
        Ok(profile.clone())
    }

    async fn log_symptom(&self, symptom: NewSymptom) -> Result<SymptomRecord, AppError> {
        let mut tables = self.tables.lock().await;
        let record = SymptomRecord {
            id: tables.symptoms.len() as i64 + 1,
            user_id: symptom.user_id,
            symptom: symptom.symptom,
            severity: symptom.severity,
            date: symptom.date,
            notes: symptom.notes,
        };
        tables.symptoms.push(record.clone());
        Ok(record)
    }

    async fn recent_symptoms(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<SymptomRecord>, AppError> {
        let tables = self.tables.lock().await;
        let mut rows: Vec<SymptomRecord> = tables
            .symptoms
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }

    async fn append_chat_turn(&self, turn: NewChatTurn) -> Result<ChatTurn, AppError> {
        let mut tables = self.tables.lock().await;
        let row = ChatTurn {
            id: tables.chat_history.len() as i64 + 1,
            user_id: turn.user_id,
            user_message: turn.user_message,
            bot_response: turn.bot_response,
            timestamp: turn.timestamp,
        };
        tables.chat_history.push(row.clone());
        Ok(row)
    }

    async fn chat_history(&self, user_id: &str, limit: i64) -> Result<Vec<ChatTurn>, AppError> {
        let tables = self.tables.lock().await;
        let mut rows: Vec<ChatTurn> = tables
            .chat_history
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }
}
