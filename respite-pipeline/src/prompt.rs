//! Prompt construction for the three agent roles. Structural vocabulary
//! (category strings, JSON keys) always stays canonical English; the language
//! directive only governs generated natural-language content.

use respite_core::{Activity, ActivityCategory, EnergyLevel, Language, UserProfile};

/// History entries folded into the researcher prompt.
const HISTORY_WINDOW: usize = 5;

pub fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::Hi => {
            "IMPORTANT: Output EVERYTHING in Hindi (Devanagari script), including titles, descriptions, steps, and quiz content."
        }
        Language::En => "Output in English.",
    }
}

fn language_name(language: Language) -> &'static str {
    match language {
        Language::Hi => "Hindi",
        Language::En => "English",
    }
}

/// Compacts the most recent history into one line per entry so the model
/// sees what the user has already done and how it landed.
fn history_summary(profile: &UserProfile) -> String {
    let lines: Vec<String> = profile
        .recent_history(HISTORY_WINDOW)
        .iter()
        .map(|entry| {
            let date = entry.timestamp.format("%Y-%m-%d");
            match &entry.feedback {
                Some(feedback) => format!(
                    "- Did \"{}\" on {} (Feedback: {}, {})",
                    entry.activity_title,
                    date,
                    feedback.enjoyment.as_str(),
                    feedback.difficulty.as_str()
                ),
                None => format!("- Did \"{}\" on {}", entry.activity_title, date),
            }
        })
        .collect();

    if lines.is_empty() { "None".to_string() } else { lines.join("\n") }
}

pub fn researcher_prompt(profile: &UserProfile, minutes: u32, energy: EnergyLevel) -> String {
    format!(
        r#"You are the "Content Planner Agent" in a multi-agent concierge system.

**User Profile**: "{persona}" named {name}.
**Goals**: {goals}.
**Current Context**: {minutes} minutes available, Energy Level: "{energy}".
**History**: {history}
**Language Preference**: {language}

**Task**:
Find or Create 3 distinct micro-activities.

1. **Physical/External**: A stretch, movement, or specific technique (e.g. 4-7-8 breathing).
2. **Generative/In-App**: A mental challenge we can generate RIGHT NOW.
   - Examples: A specific Logic Puzzle, a Trivia Question about a user interest, or a "Micro-Read" (a 100-word interesting fact or story).
   - Explicitly write out the quiz question/answer or the reading text.
3. **Creative/Reflection**: A specific prompt or creative micro-task.

Ensure the activities are doable *right now*.
{language_directive}
Return a detailed text description of these 3 options."#,
        persona = profile.persona,
        name = profile.name,
        goals = profile.goals.join(", "),
        minutes = minutes,
        energy = energy,
        history = history_summary(profile),
        language = language_name(profile.language),
        language_directive = language_instruction(profile.language),
    )
}

pub fn architect_prompt(
    research: &str,
    profile: &UserProfile,
    minutes: u32,
    energy: EnergyLevel,
) -> String {
    let categories = ActivityCategory::ALL
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are the "Architect Agent". Format the raw research into strict JSON.

**Raw Research**:
{research}

**Instructions**:
1. Extract 3 activities.
2. Map to JSON schema.
3. **Important**: If the activity is a Quiz, Trivia, or Logic Puzzle, set 'interactive' object with type='QUIZ', populate 'quizData'.
4. **Important**: If the activity is a short Story, Fact, or Reading, set 'interactive' object with type='READING', populate 'content' string.
5. Otherwise, leave 'interactive' null.
6. 'durationMinutes' should be approx {minutes}.
7. 'rationale' must explain fit for {name} ({energy}).
8. {language_directive} Ensure the JSON values (titles, descriptions, etc.) are in the correct language. Keys must remain in English.
9. For 'category', use exactly one of these strings: {categories}."#,
        research = research,
        minutes = minutes,
        name = profile.name,
        energy = energy,
        language_directive = language_instruction(profile.language),
        categories = categories,
    )
}

pub fn coach_prompt(profile: &UserProfile, activity: &Activity) -> String {
    format!(
        r#"The user ({persona}) just completed: "{title}".
Give a very short (1 sentence) encouraging remark based on their persona.
{language_directive}"#,
        persona = profile.persona,
        title = activity.title,
        language_directive = language_instruction(profile.language),
    )
}
