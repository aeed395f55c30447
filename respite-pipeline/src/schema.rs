use respite_core::{Activity, ActivityCategory, RespiteError, Result};
use serde::Deserialize;

/// Advisory schema passed to the structuring agent. The backend's
/// structured-output mode is best effort, so [`parse_activities`] re-checks
/// everything that matters after parsing.
pub fn activity_response_schema() -> serde_json::Value {
    let categories: Vec<&str> = ActivityCategory::ALL.iter().map(|c| c.as_str()).collect();
    serde_json::json!({
        "type": "object",
        "properties": {
            "activities": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "title": { "type": "string" },
                        "description": { "type": "string" },
                        "category": { "type": "string", "enum": categories },
                        "durationMinutes": { "type": "number" },
                        "steps": { "type": "array", "items": { "type": "string" } },
                        "rationale": { "type": "string" },
                        "sourceUrl": { "type": "string", "nullable": true },
                        "interactive": {
                            "type": "object",
                            "nullable": true,
                            "properties": {
                                "type": { "type": "string", "enum": ["QUIZ", "READING"] },
                                "content": { "type": "string", "nullable": true },
                                "quizData": {
                                    "type": "object",
                                    "nullable": true,
                                    "properties": {
                                        "question": { "type": "string" },
                                        "options": { "type": "array", "items": { "type": "string" } },
                                        "correctAnswer": { "type": "string" },
                                        "explanation": { "type": "string" }
                                    }
                                }
                            }
                        }
                    },
                    "required": ["title", "description", "category", "durationMinutes", "steps", "rationale", "id"]
                }
            }
        }
    })
}

#[derive(Debug, Deserialize)]
struct ActivityListPayload {
    #[serde(default)]
    activities: Vec<Activity>,
}

/// Parses the structuring agent's output and enforces the parts of the
/// contract the advisory schema cannot: category membership comes from the
/// typed enum, interactive payloads must match their declared variant, and
/// the list must be non-empty. Missing ids are filled in.
pub fn parse_activities(text: &str) -> Result<Vec<Activity>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RespiteError::EmptyResult);
    }

    let payload: ActivityListPayload =
        serde_json::from_str(trimmed).map_err(|e| RespiteError::Schema(e.to_string()))?;

    if payload.activities.is_empty() {
        return Err(RespiteError::EmptyResult);
    }

    let mut activities = payload.activities;
    for activity in &mut activities {
        activity.ensure_id();
        activity.validate()?;
    }
    Ok(activities)
}
