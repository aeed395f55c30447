use crate::prompt;
use respite_agent::Agent;
use respite_core::{Activity, Llm, Result, UserProfile};
use std::sync::Arc;

/// Served whenever the coach cannot run or returns nothing. The call is
/// decorative, so one shared default covers every degrade path.
pub const DEFAULT_ENCOURAGEMENT: &str = "Great job! Keep it up.";

/// Single-call, single-fallback-tier sibling of the generation pipeline:
/// one short congratulatory line after a completed activity.
pub struct EncouragementPipeline {
    coach: Agent,
}

impl EncouragementPipeline {
    pub fn new(coach: Agent) -> Self {
        Self { coach }
    }

    /// Wires the standard coach agent: no tools, no schema.
    pub fn standard(model: Option<Arc<dyn Llm>>, model_id: &str) -> Result<Self> {
        let coach = Agent::builder("coach").model_id(model_id).model(model).build()?;
        Ok(Self::new(coach))
    }

    /// Never fails and never retries. No credential means no backend call at
    /// all; any failure or empty reply degrades to the fixed default.
    pub async fn generate_encouragement(
        &self,
        profile: &UserProfile,
        activity: &Activity,
    ) -> String {
        if !self.coach.has_model() {
            return DEFAULT_ENCOURAGEMENT.to_string();
        }

        match self.coach.run(&prompt::coach_prompt(profile, activity)).await {
            Ok(reply) if !reply.text.trim().is_empty() => reply.text.trim().to_string(),
            Ok(_) => DEFAULT_ENCOURAGEMENT.to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "coach call failed; serving the default line");
                DEFAULT_ENCOURAGEMENT.to_string()
            }
        }
    }
}
