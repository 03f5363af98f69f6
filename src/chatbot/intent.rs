//! Keyword intent classification.
//!
//! Rules are an ordered list of `(intent, patterns)`. The first intent with any
//! matching pattern wins, so a message such as "hello, I have cramps" is a
//! greeting because greetings are declared before symptoms.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    PeriodStart,
    PeriodEnd,
    NextPeriod,
    Symptoms,
    CycleInfo,
    Pms,
    PainRelief,
    Ovulation,
    SetReminder,
    Unknown,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::PeriodStart => "period_start",
            Intent::PeriodEnd => "period_end",
            Intent::NextPeriod => "next_period",
            Intent::Symptoms => "symptoms",
            Intent::CycleInfo => "cycle_info",
            Intent::Pms => "pms",
            Intent::PainRelief => "pain_relief",
            Intent::Ovulation => "ovulation",
            Intent::SetReminder => "set_reminder",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Built-in rule table, in evaluation order.
pub const INTENT_RULES: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &[r"hello", r"hi", r"hey", r"good morning", r"good afternoon"],
    ),
    (
        Intent::PeriodStart,
        &[
            r"period (started|began)",
            r"start(ed|ing) (my )?period",
            r"got my period",
            r"my period (started|began)",
            r"menstruation (started|began)",
            r"period date today",
            r"log period (today|now)",
        ],
    ),
    (
        Intent::PeriodEnd,
        &[r"period (ended|finished|stopped)", r"end(ed|ing) (my )?period"],
    ),
    (
        Intent::NextPeriod,
        &[
            r"when (is|will be) my next period",
            r"next period date",
            r"predict my period",
            r"when (should|will) i get my period",
            r"period prediction",
        ],
    ),
    (
        Intent::Symptoms,
        &[
            r"(cramps|headache|bloating|pain|tired|fatigue|nausea)",
            r"i have (.*) pain",
            r"feeling (.*)",
            r"symptom(s)?",
            r"i feel (.*)",
            r"logging symptoms",
            r"log symptom",
        ],
    ),
    (
        Intent::CycleInfo,
        &[
            r"my cycle length",
            r"average cycle",
            r"cycle days",
            r"how long is my cycle",
        ],
    ),
    (
        Intent::Pms,
        &[
            r"what is pms",
            r"premenstrual syndrome",
            r"pms symptoms",
            r"before period symptoms",
        ],
    ),
    (
        Intent::PainRelief,
        &[
            r"how to (relieve|reduce|stop) (pain|cramps)",
            r"pain relief",
            r"cramp relief",
            r"what helps with (cramps|pain)",
        ],
    ),
    (
        Intent::Ovulation,
        &[
            r"when do i ovulate",
            r"ovulation (date|time)",
            r"fertile window",
            r"ovulation calculator",
        ],
    ),
    (
        Intent::SetReminder,
        &[
            r"set reminder",
            r"remind me",
            r"notification",
            r"alert me before period",
        ],
    ),
];

struct IntentRule {
    intent: Intent,
    patterns: Vec<Regex>,
}

pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl IntentClassifier {
    pub fn new() -> Self {
        Self::from_rules(INTENT_RULES).expect("built-in intent patterns compile")
    }

    /// Compiles a custom rule table. Order of `rules` is the tie-break order.
    pub fn from_rules(rules: &[(Intent, &[&str])]) -> Result<Self, regex::Error> {
        let rules = rules
            .iter()
            .map(|(intent, patterns)| -> Result<IntentRule, regex::Error> {
                Ok(IntentRule {
                    intent: *intent,
                    patterns: patterns
                        .iter()
                        .map(|p| Regex::new(p))
                        .collect::<Result<Vec<_>, _>>()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(IntentClassifier { rules })
    }

    pub fn classify(&self, message: &str) -> Intent {
        let lowered = message.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.patterns.iter().any(|p| p.is_match(&lowered)))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Unknown)
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classifies_each_intent() {
        let classifier = IntentClassifier::new();
        let cases = [
            ("Hello there", Intent::Greeting),
            ("My period started today", Intent::PeriodStart),
            ("I got my period", Intent::PeriodStart),
            ("my period ended", Intent::PeriodEnd),
            ("When is my next period?", Intent::NextPeriod),
            ("I have cramps", Intent::Symptoms),
            ("how long is my cycle", Intent::CycleInfo),
            ("what is pms", Intent::Pms),
            ("premenstrual syndrome", Intent::Pms),
            ("cramp relief", Intent::PainRelief),
            ("when do i ovulate", Intent::Ovulation),
            ("fertile window", Intent::Ovulation),
            ("remind me", Intent::SetReminder),
            ("xyz", Intent::Unknown),
        ];

        for (message, expected) in cases {
            assert_eq!(classifier.classify(message), expected, "message: {message}");
        }
    }

    #[test]
    fn matching_ignores_case() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("MY PERIOD STARTED"), Intent::PeriodStart);
        assert_eq!(classifier.classify("Fertile Window"), Intent::Ovulation);
    }

    #[test]
    fn earlier_intent_wins_ties() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("hello, I have cramps"), Intent::Greeting);
        // "pain relief" also contains "pain", and symptoms come first.
        assert_eq!(classifier.classify("pain relief"), Intent::Symptoms);
        assert_eq!(classifier.classify("pms symptoms"), Intent::Symptoms);
    }

    #[test]
    fn substring_matches_count() {
        // "hi" inside "this" is still a greeting match.
        assert_eq!(IntentClassifier::new().classify("this"), Intent::Greeting);
    }

    #[test]
    fn custom_rule_order_changes_tie_break() {
        let rules: &[(Intent, &[&str])] = &[
            (Intent::Symptoms, &["cramps"]),
            (Intent::Greeting, &["hello"]),
        ];
        let classifier = IntentClassifier::from_rules(rules).unwrap();
        assert_eq!(classifier.classify("hello, I have cramps"), Intent::Symptoms);
    }

    #[test]
    fn invalid_custom_pattern_is_rejected() {
        let rules: &[(Intent, &[&str])] = &[(Intent::Greeting, &["(unclosed"])];
        assert!(IntentClassifier::from_rules(rules).is_err());
    }

    #[test]
    fn labels_serialize_as_snake_case() {
        assert_eq!(serde_json::to_string(&Intent::PeriodStart).unwrap(), "\"period_start\"");
        assert_eq!(Intent::SetReminder.to_string(), "set_reminder");
    }

    proptest! {
        #[test]
        fn classification_is_deterministic(message in ".{0,80}") {
            let classifier = IntentClassifier::new();
            prop_assert_eq!(classifier.classify(&message), classifier.classify(&message));
        }

        #[test]
        fn greeting_prefix_always_wins(rest in "[a-z ]{0,40}") {
            let classifier = IntentClassifier::new();
            let message = format!("hello {rest}");
            prop_assert_eq!(classifier.classify(&message), Intent::Greeting);
        }
    }
}
