use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::CycleStore;
use crate::error::AppError;
use crate::models::{
    ChatTurn, NewChatTurn, NewSymptom, SymptomRecord, UserCycleProfile, DATE_FORMAT,
    DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_DURATION,
};

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS users (
        user_id TEXT PRIMARY KEY,
        last_period_date TEXT,
        cycle_length INTEGER DEFAULT 28,
        period_duration INTEGER DEFAULT 5,
        created_at TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS symptoms (
        id BIGSERIAL PRIMARY KEY,
        user_id TEXT NOT NULL,
        symptom TEXT NOT NULL,
        severity TEXT NOT NULL DEFAULT 'moderate',
        date TEXT NOT NULL,
        notes TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS chat_history (
        id BIGSERIAL PRIMARY KEY,
        user_id TEXT NOT NULL,
        user_message TEXT NOT NULL,
        bot_response TEXT NOT NULL,
        timestamp TEXT NOT NULL
    )
    "#,
];

const PROFILE_COLUMNS: &str = "user_id, last_period_date, cycle_length, period_duration, created_at";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(PgStore::new(pool))
    }

    /// One-time table creation, run by the service at startup.
    pub async fn bootstrap(&self) -> Result<(), AppError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        tracing::info!("🗄️ Schema ready");
        Ok(())
    }
}

#[async_trait]
impl CycleStore for PgStore {
    async fn profile(&self, user_id: &str) -> Result<Option<UserCycleProfile>, AppError> {
        let profile = sqlx::query_as::<_, UserCycleProfile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn record_period_start(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<UserCycleProfile, AppError> {
        let day = date.format(DATE_FORMAT).to_string();
        let profile = sqlx::query_as::<_, UserCycleProfile>(&format!(
            "INSERT INTO users (user_id, last_period_date, cycle_length, period_duration, created_at)
             VALUES ($1, $2, $3, $4, $2)
             ON CONFLICT (user_id) DO UPDATE SET last_period_date = EXCLUDED.last_period_date
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&day)
        .bind(DEFAULT_CYCLE_LENGTH)
        .bind(DEFAULT_PERIOD_DURATION)
        .fetch_one(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn set_cycle_length(
        &self,
        user_id: &str,
        cycle_length: i32,
        today: NaiveDate,
    ) -> Result<UserCycleProfile, AppError> {
        let created_at = today.format(DATE_FORMAT).to_string();
        let profile = sqlx::query_as::<_, UserCycleProfile>(&format!(
            "INSERT INTO users (user_id, cycle_length, period_duration, created_at)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id) DO UPDATE SET cycle_length = EXCLUDED.cycle_length
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(cycle_length)
        .bind(DEFAULT_PERIOD_DURATION)
        .bind(&created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn log_symptom(&self, symptom: NewSymptom) -> Result<SymptomRecord, AppError> {
        let record = sqlx::query_as::<_, SymptomRecord>(
            "INSERT INTO symptoms (user_id, symptom, severity, date, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, user_id, symptom, severity, date, notes",
        )
        .bind(&symptom.user_id)
        .bind(&symptom.symptom)
        .bind(&symptom.severity)
        .bind(&symptom.date)
        .bind(&symptom.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn recent_symptoms(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<SymptomRecord>, AppError> {
        let rows = sqlx::query_as::<_, SymptomRecord>(
            "SELECT id, user_id, symptom, severity, date, notes
             FROM symptoms
             WHERE user_id = $1
             ORDER BY date DESC, id DESC
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn append_chat_turn(&self, turn: NewChatTurn) -> Result<ChatTurn, AppError> {
        let row = sqlx::query_as::<_, ChatTurn>(
            "INSERT INTO chat_history (user_id, user_message, bot_response, timestamp)
             VALUES ($1, $2, $3, $4)
             RETURNING id, user_id, user_message, bot_response, timestamp",
        )
        .bind(&turn.user_id)
        .bind(&turn.user_message)
        .bind(&turn.bot_response)
        .bind(&turn.timestamp)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn chat_history(&self, user_id: &str, limit: i64) -> Result<Vec<ChatTurn>, AppError> {
        let rows = sqlx::query_as::<_, ChatTurn>(
            "SELECT id, user_id, user_message, bot_response, timestamp
             FROM chat_history
             WHERE user_id = $1
             ORDER BY timestamp DESC, id DESC
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
