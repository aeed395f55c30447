use crate::{RespiteError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Fixed category vocabulary. Serialized with the canonical wire strings the
/// structuring stage is instructed to emit; anything else fails to parse and
/// is treated as a contract violation upstream of rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityCategory {
    #[serde(rename = "Brain & Cognition")]
    Brain,
    #[serde(rename = "Body & Mobility")]
    Body,
    #[serde(rename = "Skills & Growth")]
    Skills,
    #[serde(rename = "Hobbies & Creativity")]
    Creative,
    #[serde(rename = "Emotional Reflection")]
    Reflection,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 5] = [
        ActivityCategory::Brain,
        ActivityCategory::Body,
        ActivityCategory::Skills,
        ActivityCategory::Creative,
        ActivityCategory::Reflection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Brain => "Brain & Cognition",
            ActivityCategory::Body => "Body & Mobility",
            ActivityCategory::Skills => "Skills & Growth",
            ActivityCategory::Creative => "Hobbies & Creativity",
            ActivityCategory::Reflection => "Emotional Reflection",
        }
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizData {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

/// In-app interactive payload. Exactly one variant, discriminated by the wire
/// `type` tag; the variant's required fields must be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Interactive {
    #[serde(rename = "QUIZ")]
    Quiz {
        #[serde(rename = "quizData")]
        quiz_data: QuizData,
    },
    #[serde(rename = "READING")]
    Reading { content: String },
}

impl Interactive {
    /// Checks the invariants the wire tag alone cannot express.
    pub fn validate(&self) -> Result<()> {
        match self {
            Interactive::Quiz { quiz_data } => {
                if quiz_data.options.is_empty() {
                    return Err(RespiteError::Schema("quiz has no answer options".to_string()));
                }
                if !quiz_data.options.contains(&quiz_data.correct_answer) {
                    return Err(RespiteError::Schema(
                        "quiz correct answer is not among the options".to_string(),
                    ));
                }
                Ok(())
            }
            Interactive::Reading { content } => {
                if content.trim().is_empty() {
                    return Err(RespiteError::Schema("reading passage is empty".to_string()));
                }
                Ok(())
            }
        }
    }
}

/// One proposed or selected micro-activity. A value object: produced fresh on
/// each generation call, no back-reference to the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ActivityCategory,
    #[serde(deserialize_with = "minutes_from_number")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub steps: Vec<String>,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive: Option<Interactive>,
}

impl Activity {
    /// Fills in a fresh id when the structuring stage omitted one.
    pub fn ensure_id(&mut self) {
        if self.id.trim().is_empty() {
            self.id = uuid::Uuid::new_v4().to_string();
        }
    }

    /// Re-checks what the advisory backend schema cannot enforce.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(RespiteError::Schema("activity title is empty".to_string()));
        }
        if let Some(interactive) = &self.interactive {
            interactive.validate()?;
        }
        Ok(())
    }
}

/// Backends emit `durationMinutes` as a JSON number and occasionally produce
/// a float (e.g. 15.0). Round instead of failing the whole parse.
fn minutes_from_number<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() || raw < 0.0 {
        return Err(serde::de::Error::custom(format!("invalid duration: {raw}")));
    }
    Ok(raw.round() as u32)
}
