use crate::{mock_data, prompt, schema};
use respite_agent::{Agent, AgentReply};
use respite_core::{
    Activity, EnergyLevel, GroundingChunk, Llm, RespiteError, Result, ToolGrant, UserProfile,
};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_MODEL_ID: &str = "gemini-2.5-flash";

/// Pacing for the fallback set so the generating state stays visible. Not a
/// retry or backoff.
pub const MOCK_PACING_DELAY: Duration = Duration::from_millis(1500);

const RESEARCHER_INSTRUCTION: &str = "You are a helpful researcher. For physical tasks, use search to verify. For mental tasks, be creative and generate the content yourself.";

const RESEARCHER_FALLBACK_INSTRUCTION: &str = "You are a helpful researcher working from your own knowledge. Do not verify externally; generate all content yourself.";

/// Orchestrates research, structuring, citation augmentation, and the
/// degradation ladder down to the fixed fallback set.
///
/// The public contract never fails: every path terminates in a non-empty,
/// validated activity list. Agents run strictly sequentially; the structuring
/// stage consumes whichever research tier produced output.
pub struct GenerationPipeline {
    researcher: Agent,
    researcher_fallback: Agent,
    architect: Agent,
    mock_delay: Duration,
}

impl GenerationPipeline {
    pub fn new(researcher: Agent, researcher_fallback: Agent, architect: Agent) -> Self {
        Self { researcher, researcher_fallback, architect, mock_delay: MOCK_PACING_DELAY }
    }

    /// Wires the standard three agents against one shared transport. `None`
    /// builds the credential-less pipeline that always serves the fallback
    /// set.
    pub fn standard(model: Option<Arc<dyn Llm>>, model_id: &str) -> Result<Self> {
        let researcher = Agent::builder("researcher")
            .model_id(model_id)
            .model(model.clone())
            .instruction(RESEARCHER_INSTRUCTION)
            .tool(ToolGrant::GoogleSearch)
            .build()?;

        let researcher_fallback = Agent::builder("researcher-fallback")
            .model_id(model_id)
            .model(model.clone())
            .instruction(RESEARCHER_FALLBACK_INSTRUCTION)
            .build()?;

        let architect = Agent::builder("architect")
            .model_id(model_id)
            .model(model)
            .output_schema(schema::activity_response_schema())
            .build()?;

        Ok(Self::new(researcher, researcher_fallback, architect))
    }

    pub fn with_mock_delay(mut self, delay: Duration) -> Self {
        self.mock_delay = delay;
        self
    }

    /// Produces a ranked, non-empty activity list for the given check-in.
    /// Position 0 is the top pick by convention.
    pub async fn generate_activities(
        &self,
        profile: &UserProfile,
        minutes: u32,
        energy: EnergyLevel,
    ) -> Vec<Activity> {
        if !self.researcher.has_model() {
            tracing::warn!("no API credential configured; serving the fallback set");
            return self.mock_tier(minutes).await;
        }

        let research = match self.research(profile, minutes, energy).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "all research tiers failed; serving the fallback set");
                return self.mock_tier(minutes).await;
            }
        };

        match self.structure(&research.text, profile, minutes, energy).await {
            Ok(mut activities) => {
                attach_citations(&mut activities, &research.citations);
                tracing::info!(count = activities.len(), "generated activities");
                activities
            }
            Err(err) => {
                tracing::warn!(error = %err, "structuring failed; serving the fallback set");
                self.mock_tier(minutes).await
            }
        }
    }

    /// The research stage as an ordered list of degradation tiers: the
    /// tool-granted researcher first, then the tool-free fallback. Citations
    /// come only from the tier that produced the output.
    async fn research(
        &self,
        profile: &UserProfile,
        minutes: u32,
        energy: EnergyLevel,
    ) -> Result<AgentReply> {
        let prompt = prompt::researcher_prompt(profile, minutes, energy);

        let mut last_error = RespiteError::EmptyResult;
        for tier in [&self.researcher, &self.researcher_fallback] {
            match tier.run(&prompt).await {
                Ok(reply) if !reply.text.trim().is_empty() => {
                    tracing::debug!(agent = tier.name(), "research tier succeeded");
                    return Ok(reply);
                }
                Ok(_) => {
                    tracing::warn!(agent = tier.name(), "research tier returned empty text");
                    last_error = RespiteError::EmptyResult;
                }
                Err(err) => {
                    tracing::warn!(agent = tier.name(), error = %err, "research tier failed");
                    last_error = err;
                }
            }
        }
        Err(last_error)
    }

    async fn structure(
        &self,
        research: &str,
        profile: &UserProfile,
        minutes: u32,
        energy: EnergyLevel,
    ) -> Result<Vec<Activity>> {
        let prompt = prompt::architect_prompt(research, profile, minutes, energy);
        let reply = self.architect.run(&prompt).await?;
        schema::parse_activities(&reply.text)
    }

    async fn mock_tier(&self, minutes: u32) -> Vec<Activity> {
        if !self.mock_delay.is_zero() {
            tokio::time::sleep(self.mock_delay).await;
        }
        mock_data::mock_activities(minutes)
    }
}

/// Best-effort positional pairing of grounding citations onto activities.
/// Index-based, not content-matched: position i's citation goes to position
/// i's activity, and only when that activity has neither an existing URL nor
/// an interactive payload. Fewer citations than activities is fine.
fn attach_citations(activities: &mut [Activity], citations: &[GroundingChunk]) {
    for (activity, chunk) in activities.iter_mut().zip(citations) {
        if activity.source_url.is_none() && activity.interactive.is_none() {
            activity.source_url = Some(chunk.uri.clone());
        }
    }
}
