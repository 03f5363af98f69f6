use std::fmt::Write;

use chrono::NaiveDate;

use super::dates::FertileWindow;

pub const GREETING: &str = "👋 Hello! I'm your Period Tracking Assistant. I can help you:\n\
• Log period start/end dates\n\
• Predict your next period\n\
• Track symptoms\n\
• Calculate ovulation\n\
• Answer questions about menstrual health\n\n\
How can I help you today?";

pub const NO_HISTORY_NEXT_PERIOD: &str = "I don't have your period history yet. Please tell me when your period started (e.g., 'My period started today').";

pub const UNPARSEABLE_NEXT_PERIOD: &str =
    "I couldn't calculate your next period. Please log your period start date first.";

pub const NO_HISTORY_OVULATION: &str =
    "I need your period history to calculate ovulation. Please log your last period first.";

pub const UNPARSEABLE_OVULATION: &str =
    "I need your last period date to calculate ovulation. Say 'My period started [date]'.";

pub const SYMPTOM_PROMPT: &str = "I can help you log symptoms like cramps, headache, bloating, mood swings, etc. What symptoms are you experiencing?";

pub const PMS: &str = "**Premenstrual Syndrome (PMS)** refers to physical and emotional symptoms that occur 1-2 weeks before your period.

**Common symptoms include:**
• Mood swings, irritability, or depression
• Bloating and weight gain
• Breast tenderness
• Fatigue
• Food cravings
• Headaches
• Acne

**Management tips:**
1. **Exercise regularly** - even light activity helps
2. **Balanced diet** - reduce salt, sugar, and caffeine
3. **Stress management** - yoga, meditation, deep breathing
4. **Adequate sleep** - 7-9 hours per night
5. **Over-the-counter** pain relievers if needed

Symptoms usually improve within a few days of starting your period.";

pub const PAIN_RELIEF: &str = "**Period Pain Relief Methods:**

**Immediate Relief:**
1. **Heat therapy** - Hot water bottle or heating pad on abdomen
2. **OTC medication** - Ibuprofen, Naproxen (take at first sign)
3. **Gentle massage** - Circular motions on lower abdomen

**Lifestyle Changes:**
• **Regular exercise** - Increases endorphins
• **Warm baths** - Relaxes muscles
• **Dietary changes**:
  - Omega-3 fatty acids (fish, flaxseed)
  - Reduce caffeine and alcohol
  - Magnesium-rich foods (nuts, leafy greens)
• **Hydration** - Drink plenty of water

**Alternative Therapies:**
• Acupuncture/acupressure
• Herbal teas (ginger, chamomile)
• Yoga stretches (child's pose, cat-cow)

**When to see a doctor:**
• Pain prevents normal activities
• Symptoms worsen over time
• Heavy bleeding with clots
• Pain with fever";

pub const REMINDER_MENU: &str = "I can remind you about:\n\n\
1. **Period start** - 2 days before expected date\n\
2. **Ovulation** - When you're most fertile\n\
3. **Pill/Medication** - Daily reminders\n\
4. **Symptom check-ins** - How you're feeling\n\n\
What would you like me to remind you about?";

pub const FALLBACK: &str = "I'm here to help with period tracking and menstrual health! I can:\n\n\
• Log your period start/end dates\n\
• Predict your next period\n\
• Track symptoms and suggest relief\n\
• Calculate ovulation dates\n\
• Answer questions about PMS, pain relief, etc.\n\n\
Try saying:\n'My period started today'\n'When is my next period?'\n'I have cramps'\n'What helps with period pain?'";

const OVULATION_SIGNS: &str = "**Ovulation signs to watch for:**\n\
• Egg-white cervical mucus\n\
• Mild pelvic pain (mittelschmerz)\n\
• Slight rise in basal body temperature\n\
• Increased libido\n\
• Breast tenderness";

/// Relief tips for the symptoms that have them, in vocabulary order.
const RELIEF_TIPS: [(&str, &str); 3] = [
    (
        "cramps",
        "• Apply heat pad to lower abdomen\n• Gentle exercise or walking\n• Over-the-counter pain relievers\n• Drink warm herbal tea\n",
    ),
    (
        "headache",
        "• Stay hydrated\n• Rest in a dark room\n• Cold compress on forehead\n• Avoid caffeine\n",
    ),
    (
        "bloating",
        "• Reduce salt intake\n• Drink plenty of water\n• Eat smaller, frequent meals\n• Avoid carbonated drinks\n",
    ),
];

pub fn period_logged(
    today: NaiveDate,
    next_period: Option<NaiveDate>,
    ovulation: Option<NaiveDate>,
) -> String {
    let mut text = format!("✅ I've logged that your period started today ({today}).\n\n");
    if let Some(next) = next_period {
        let _ = writeln!(
            text,
            "📅 Your next period is predicted to start around **{next}**."
        );
        if let Some(ovulation) = ovulation {
            let _ = write!(
                text,
                "🥚 Your estimated ovulation date is around **{ovulation}**.\n\n"
            );
        }
    }
    text.push_str("Would you like to log any symptoms?");
    text
}

pub fn next_period(
    last_period: &str,
    next: NaiveDate,
    days_until: i64,
    ovulation: Option<(NaiveDate, FertileWindow)>,
) -> String {
    let mut text = format!("Based on your last period on **{last_period}**:\n\n");
    let _ = writeln!(text, "📅 **Next period:** {next}");
    let _ = write!(text, "⏳ **Days until:** {days_until} days\n\n");
    if let Some((ovulation, window)) = ovulation {
        let _ = writeln!(text, "🥚 **Estimated ovulation:** {ovulation}");
        let _ = write!(
            text,
            "🌡️ **Fertile window:** {} to {}",
            window.start, window.end
        );
    }
    text
}

pub fn ovulation(
    last_period: &str,
    cycle_length: i32,
    ovulation: NaiveDate,
    window: FertileWindow,
) -> String {
    let mut text = String::from("**Ovulation Calculation:**\n\n");
    let _ = writeln!(text, "📅 Last period: {last_period}");
    let _ = writeln!(text, "🔄 Cycle length: {cycle_length} days");
    let _ = writeln!(text, "🥚 **Estimated ovulation:** {ovulation}");
    let _ = write!(
        text,
        "🌡️ **Fertile window:** {} to {}\n\n",
        window.start, window.end
    );
    text.push_str(OVULATION_SIGNS);
    text
}

pub fn symptoms_logged(symptoms: &[&str]) -> String {
    let mut text = format!("✅ I've logged your symptoms: {}\n\n", symptoms.join(", "));
    text.push_str("💡 **Tips for relief:**\n");
    for (symptom, tips) in RELIEF_TIPS {
        if symptoms.contains(&symptom) {
            text.push_str(tips);
        }
    }
    text.push_str("\nWould you like to set a reminder for pain medication?");
    text
}

pub fn cycle_info(cycle_length: Option<i32>) -> String {
    match cycle_length {
        Some(days) => format!(
            "Your current cycle length is set to **{days} days**.\n\n\
             **Normal cycle ranges:** 21-35 days\n\
             **Average cycle:** 28 days\n\n\
             To update your cycle length, say: 'My cycle is X days'"
        ),
        None => "I don't have your cycle information yet. The default is 28 days.\n\n\
                 You can update it by saying: 'My cycle is 30 days' or similar."
            .to_string(),
    }
}
