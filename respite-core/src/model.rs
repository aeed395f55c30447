use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single-attempt, non-streaming LLM transport.
///
/// Implementations carry their own credential and HTTP machinery; callers see
/// one suspend point per invocation. Retry and fallback policy live in the
/// orchestrating pipeline, never here.
#[async_trait]
pub trait Llm: Send + Sync {
    fn name(&self) -> &str;
    async fn generate(&self, req: LlmRequest) -> Result<LlmResponse>;
}

/// Capabilities a request may grant to the model.
///
/// Google Search runs inside Gemini itself; granting it requires no local
/// execution, only the request-level opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolGrant {
    GoogleSearch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    pub model: String,
    pub prompt: String,
    pub system_instruction: Option<String>,
    pub tools: Vec<ToolGrant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    pub response_mime_type: Option<String>,
}

impl LlmRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            system_instruction: None,
            tools: Vec::new(),
            response_schema: None,
            response_mime_type: None,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_tool(mut self, grant: ToolGrant) -> Self {
        self.tools.push(grant);
        self
    }

    /// Set the response schema for structured output, forcing JSON output.
    pub fn with_response_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_schema = Some(schema);
        self.response_mime_type = Some("application/json".to_string());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmResponse {
    pub text: String,
    /// Source references attached by the model when a search grant was used.
    pub grounding: Vec<GroundingChunk>,
}

/// One opaque source reference from search grounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundingChunk {
    pub uri: String,
    pub title: Option<String>,
}

impl LlmResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), grounding: Vec::new() }
    }

    pub fn with_grounding(mut self, chunks: Vec<GroundingChunk>) -> Self {
        self.grounding = chunks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_request_creation() {
        let req = LlmRequest::new("test-model", "hello");
        assert_eq!(req.model, "test-model");
        assert_eq!(req.prompt, "hello");
        assert!(req.tools.is_empty());
        assert!(req.response_schema.is_none());
    }

    #[test]
    fn test_llm_request_with_tool() {
        let req = LlmRequest::new("test-model", "hello").with_tool(ToolGrant::GoogleSearch);
        assert_eq!(req.tools, vec![ToolGrant::GoogleSearch]);
    }

    #[test]
    fn test_llm_request_with_response_schema() {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" }
            }
        });
        let req = LlmRequest::new("test-model", "hello").with_response_schema(schema.clone());

        assert_eq!(req.response_schema, Some(schema));
        assert_eq!(req.response_mime_type.as_deref(), Some("application/json"));
    }

    #[test]
    fn test_llm_response_creation() {
        let resp = LlmResponse::new("output");
        assert_eq!(resp.text, "output");
        assert!(resp.grounding.is_empty());
    }

    #[test]
    fn test_llm_response_with_grounding() {
        let resp = LlmResponse::new("output").with_grounding(vec![GroundingChunk {
            uri: "https://example.com".to_string(),
            title: Some("Example".to_string()),
        }]);
        assert_eq!(resp.grounding.len(), 1);
        assert_eq!(resp.grounding[0].uri, "https://example.com");
    }

    #[test]
    fn test_llm_response_roundtrip() {
        let resp = LlmResponse::new("hello").with_grounding(vec![GroundingChunk {
            uri: "https://example.com".to_string(),
            title: None,
        }]);
        let encoded = serde_json::to_string(&resp).expect("serialize");
        let decoded: LlmResponse = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded.text, resp.text);
        assert_eq!(decoded.grounding, resp.grounding);
    }
}
