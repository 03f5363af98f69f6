pub mod dates;
pub mod engine;
pub mod intent;
mod replies;
pub mod symptoms;

pub use engine::ConversationEngine;
pub use intent::{Intent, IntentClassifier};
