//! Read/write contract for users, symptoms and chat history.
//!
//! Each call is independent; nothing here spans a read and a later write, so
//! two concurrent requests for the same user can overwrite each other.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::{ChatTurn, NewChatTurn, NewSymptom, SymptomRecord, UserCycleProfile};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait CycleStore: Send + Sync + 'static {
    async fn profile(&self, user_id: &str) -> Result<Option<UserCycleProfile>, AppError>;

    /// Sets `last_period_date`, creating the profile on first use. An existing
    /// `cycle_length` and `created_at` are kept.
    async fn record_period_start(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<UserCycleProfile, AppError>;

    /// Overwrites `cycle_length`, creating the profile with `created_at = today`
    /// if needed. Range checks belong to the caller.
    async fn set_cycle_length(
        &self,
        user_id: &str,
        cycle_length: i32,
        today: NaiveDate,
    ) -> Result<UserCycleProfile, AppError>;

    async fn log_symptom(&self, symptom: NewSymptom) -> Result<SymptomRecord, AppError>;

    /// Newest first by date.
    async fn recent_symptoms(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<SymptomRecord>, AppError>;

    async fn append_chat_turn(&self, turn: NewChatTurn) -> Result<ChatTurn, AppError>;

    /// Newest first by timestamp.
    async fn chat_history(&self, user_id: &str, limit: i64) -> Result<Vec<ChatTurn>, AppError>;
}
