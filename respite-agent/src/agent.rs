use respite_core::{GroundingChunk, Llm, LlmRequest, RespiteError, Result, ToolGrant};
use std::sync::Arc;

/// A stateless, single-attempt invocation unit: a name, a model id, optional
/// instruction, optional tool grants, and an optional output-schema
/// constraint bound together for reuse.
///
/// An agent without an attached model represents the no-credential
/// configuration; [`Agent::run`] reports that distinctly so callers can pick
/// a silent degrade path. Retry and fallback policy belong to the caller.
pub struct Agent {
    name: String,
    model_id: String,
    model: Option<Arc<dyn Llm>>,
    instruction: Option<String>,
    tools: Vec<ToolGrant>,
    output_schema: Option<serde_json::Value>,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("model_id", &self.model_id)
            .field("has_model", &self.model.is_some())
            .field("instruction", &self.instruction)
            .field("tools", &self.tools)
            .field("structured", &self.output_schema.is_some())
            .finish()
    }
}

/// What one invocation produced: the model's text plus any grounding
/// citations collected when a search grant was used.
#[derive(Debug, Clone, Default)]
pub struct AgentReply {
    pub text: String,
    pub citations: Vec<GroundingChunk>,
}

impl Agent {
    pub fn builder(name: impl Into<String>) -> AgentBuilder {
        AgentBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a transport (and therefore a credential) is attached.
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    pub async fn run(&self, prompt: &str) -> Result<AgentReply> {
        let Some(model) = &self.model else {
            tracing::warn!(agent = %self.name, "cannot run: no API credential");
            return Err(RespiteError::NoCredential);
        };

        tracing::debug!(agent = %self.name, model = %self.model_id, "running agent");

        let mut req = LlmRequest::new(&self.model_id, prompt);
        if let Some(instruction) = &self.instruction {
            req = req.with_system_instruction(instruction);
        }
        for grant in &self.tools {
            req = req.with_tool(*grant);
        }
        if let Some(schema) = &self.output_schema {
            req = req.with_response_schema(schema.clone());
        }

        let response = model.generate(req).await?;
        Ok(AgentReply { text: response.text, citations: response.grounding })
    }
}

pub struct AgentBuilder {
    name: String,
    model_id: Option<String>,
    model: Option<Arc<dyn Llm>>,
    instruction: Option<String>,
    tools: Vec<ToolGrant>,
    output_schema: Option<serde_json::Value>,
}

impl AgentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model_id: None,
            model: None,
            instruction: None,
            tools: Vec::new(),
            output_schema: None,
        }
    }

    pub fn model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    /// Attach a transport. `None` builds a credential-less agent whose `run`
    /// reports [`RespiteError::NoCredential`].
    pub fn model(mut self, model: Option<Arc<dyn Llm>>) -> Self {
        self.model = model;
        self
    }

    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    pub fn tool(mut self, grant: ToolGrant) -> Self {
        self.tools.push(grant);
        self
    }

    pub fn output_schema(mut self, schema: serde_json::Value) -> Self {
        self.output_schema = Some(schema);
        self
    }

    pub fn build(self) -> Result<Agent> {
        let model_id = self
            .model_id
            .ok_or_else(|| RespiteError::Config("model id is required".to_string()))?;

        Ok(Agent {
            name: self.name,
            model_id,
            model: self.model,
            instruction: self.instruction,
            tools: self.tools,
            output_schema: self.output_schema,
        })
    }
}
