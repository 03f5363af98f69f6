//! Message handling: classify, consult the stored cycle profile, build the
//! reply, and record the exchange.
//!
//! Persistence failures inside an intent are logged and only drop the part of
//! the reply that depended on them. The chat turn is always written once a
//! reply exists; a failure there is the only error returned.

use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};

use super::dates::{self, FertileWindow};
use super::intent::{Intent, IntentClassifier};
use super::replies;
use super::symptoms::extract_symptoms;
use crate::error::AppError;
use crate::models::{
    ChatReply, NewChatTurn, NewSymptom, UserCycleProfile, DATE_FORMAT, DEFAULT_CYCLE_LENGTH,
    DEFAULT_SEVERITY, TIMESTAMP_FORMAT,
};
use crate::store::CycleStore;

struct Reply {
    text: String,
    actions: Vec<String>,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            actions: Vec::new(),
        }
    }

    fn with_actions(text: impl Into<String>, actions: &[&str]) -> Self {
        Reply {
            text: text.into(),
            actions: actions.iter().map(|a| a.to_string()).collect(),
        }
    }
}

pub struct ConversationEngine {
    classifier: IntentClassifier,
    store: Arc<dyn CycleStore>,
}

impl ConversationEngine {
    pub fn new(store: Arc<dyn CycleStore>) -> Self {
        Self::with_classifier(IntentClassifier::new(), store)
    }

    pub fn with_classifier(classifier: IntentClassifier, store: Arc<dyn CycleStore>) -> Self {
        ConversationEngine { classifier, store }
    }

    pub async fn process_message(
        &self,
        message: &str,
        user_id: &str,
    ) -> Result<ChatReply, AppError> {
        self.process_message_at(message, user_id, Local::now().naive_local())
            .await
    }

    pub async fn process_message_at(
        &self,
        message: &str,
        user_id: &str,
        now: NaiveDateTime,
    ) -> Result<ChatReply, AppError> {
        let intent = self.classifier.classify(message);
        let today = now.date();

        let profile = match self.store.profile(user_id).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::error!("❌ Failed to load profile for {}: {}", user_id, e);
                None
            }
        };

        let reply = match intent {
            Intent::Greeting => Reply::text(replies::GREETING),
            Intent::PeriodStart => self.period_start(user_id, today, profile.as_ref()).await,
            Intent::NextPeriod => next_period(profile.as_ref(), today),
            Intent::Symptoms => self.symptoms(message, user_id, today).await,
            Intent::CycleInfo => {
                Reply::text(replies::cycle_info(profile.as_ref().and_then(|p| p.cycle_length)))
            }
            Intent::Pms => Reply::text(replies::PMS),
            Intent::PainRelief => Reply::text(replies::PAIN_RELIEF),
            Intent::Ovulation => ovulation(profile.as_ref()),
            Intent::SetReminder => Reply::with_actions(
                replies::REMINDER_MENU,
                &["Period start", "Ovulation", "Medication", "Symptoms"],
            ),
            // period_end is recognised but has no handler of its own.
            Intent::PeriodEnd | Intent::Unknown => Reply::text(replies::FALLBACK),
        };

        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
        self.store
            .append_chat_turn(NewChatTurn {
                user_id: user_id.to_string(),
                user_message: message.to_string(),
                bot_response: reply.text.clone(),
                timestamp: timestamp.clone(),
            })
            .await?;

        tracing::info!("💬 {} -> {}", user_id, intent);

        Ok(ChatReply {
            response: reply.text,
            intent,
            actions: reply.actions,
            timestamp,
        })
    }

    async fn period_start(
        &self,
        user_id: &str,
        today: NaiveDate,
        profile: Option<&UserCycleProfile>,
    ) -> Reply {
        let cycle_length = match self.store.record_period_start(user_id, today).await {
            Ok(stored) => stored.cycle_length_or_default(),
            Err(e) => {
                tracing::error!("❌ Failed to record period start for {}: {}", user_id, e);
                profile.map_or(DEFAULT_CYCLE_LENGTH, |p| p.cycle_length_or_default())
            }
        };

        let day = today.format(DATE_FORMAT).to_string();
        let next = dates::project_next_period(&day, cycle_length);
        let ovulation = dates::project_ovulation(&day, cycle_length);

        Reply::with_actions(
            replies::period_logged(today, next, ovulation),
            &["Log symptoms", "Set reminder", "Calculate ovulation"],
        )
    }

    async fn symptoms(&self, message: &str, user_id: &str, today: NaiveDate) -> Reply {
        let detected = extract_symptoms(message);
        if detected.is_empty() {
            return Reply::with_actions(
                replies::SYMPTOM_PROMPT,
                &["Cramps", "Headache", "Bloating", "Mood swings", "Fatigue"],
            );
        }

        let date = today.format(DATE_FORMAT).to_string();
        for symptom in &detected {
            let logged = self
                .store
                .log_symptom(NewSymptom {
                    user_id: user_id.to_string(),
                    symptom: symptom.to_string(),
                    severity: DEFAULT_SEVERITY.to_string(),
                    date: date.clone(),
                    notes: None,
                })
                .await;
            if let Err(e) = logged {
                tracing::error!("❌ Failed to log symptom {} for {}: {}", symptom, user_id, e);
            }
        }

        Reply::text(replies::symptoms_logged(&detected))
    }
}

fn last_period(profile: Option<&UserCycleProfile>) -> Option<(&str, i32)> {
    let profile = profile?;
    let last = profile.last_period_date.as_deref().filter(|d| !d.is_empty())?;
    Some((last, profile.cycle_length_or_default()))
}

fn ovulation_with_window(last: &str, cycle_length: i32) -> Option<(NaiveDate, FertileWindow)> {
    let ovulation = dates::project_ovulation(last, cycle_length)?;
    Some((ovulation, FertileWindow::around(ovulation)))
}

fn next_period(profile: Option<&UserCycleProfile>, today: NaiveDate) -> Reply {
    let Some((last, cycle_length)) = last_period(profile) else {
        return Reply::text(replies::NO_HISTORY_NEXT_PERIOD);
    };
    let Some(next) = dates::project_next_period(last, cycle_length) else {
        return Reply::text(replies::UNPARSEABLE_NEXT_PERIOD);
    };

    Reply::text(replies::next_period(
        last,
        next,
        dates::days_until(today, next),
        ovulation_with_window(last, cycle_length),
    ))
}

fn ovulation(profile: Option<&UserCycleProfile>) -> Reply {
    let Some((last, cycle_length)) = last_period(profile) else {
        return Reply::text(replies::NO_HISTORY_OVULATION);
    };
    match ovulation_with_window(last, cycle_length) {
        Some((ovulation, window)) => {
            Reply::text(replies::ovulation(last, cycle_length, ovulation, window))
        }
        None => Reply::text(replies::UNPARSEABLE_OVULATION),
    }
}
