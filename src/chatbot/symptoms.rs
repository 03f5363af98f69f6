/// Recognised symptom keywords, in reporting order.
pub const SYMPTOM_VOCABULARY: [&str; 10] = [
    "cramps",
    "headache",
    "bloating",
    "back pain",
    "breast tenderness",
    "mood swings",
    "fatigue",
    "nausea",
    "acne",
    "food cravings",
];

/// Vocabulary entries found in `message`, in vocabulary order.
pub fn extract_symptoms(message: &str) -> Vec<&'static str> {
    let lowered = message.to_lowercase();
    SYMPTOM_VOCABULARY
        .iter()
        .copied()
        .filter(|symptom| lowered.contains(symptom))
        .collect()
}
