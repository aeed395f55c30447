use async_trait::async_trait;
use respite_core::{GroundingChunk, Llm, LlmRequest, LlmResponse, RespiteError, Result, ToolGrant};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini REST transport (Google AI Studio backend).
///
/// One `generateContent` call per [`Llm::generate`] invocation. The search
/// tool grant maps to Gemini's built-in `googleSearch` tool, which executes
/// inside the model; grounding references come back on the first candidate.
pub struct GeminiModel {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiModel {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the transport at a different endpoint (local test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_body(req: &LlmRequest) -> GenerateContentBody<'_> {
        let generation_config = if req.response_schema.is_some() || req.response_mime_type.is_some()
        {
            Some(GenerationConfig {
                response_mime_type: req.response_mime_type.as_deref(),
                response_schema: req.response_schema.as_ref(),
            })
        } else {
            None
        };

        GenerateContentBody {
            contents: vec![WireContent {
                role: Some("user"),
                parts: vec![WirePart { text: &req.prompt }],
            }],
            system_instruction: req
                .system_instruction
                .as_deref()
                .map(|text| WireContent { role: None, parts: vec![WirePart { text }] }),
            tools: req
                .tools
                .iter()
                .map(|grant| match grant {
                    ToolGrant::GoogleSearch => WireTool { google_search: serde_json::json!({}) },
                })
                .collect(),
            generation_config,
        }
    }

    fn convert_response(resp: GenerateContentResponse) -> LlmResponse {
        let Some(candidate) = resp.candidates.into_iter().next() else {
            return LlmResponse::default();
        };

        let text = candidate
            .content
            .map(|content| {
                content.parts.into_iter().filter_map(|part| part.text).collect::<Vec<_>>().join("")
            })
            .unwrap_or_default();

        let grounding = candidate
            .grounding_metadata
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.web)
                    .filter_map(|web| {
                        web.uri.map(|uri| GroundingChunk { uri, title: web.title })
                    })
                    .collect()
            })
            .unwrap_or_default();

        LlmResponse { text, grounding }
    }
}

#[async_trait]
impl Llm for GeminiModel {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, req: LlmRequest) -> Result<LlmResponse> {
        let url = format!("{}/models/{}:generateContent", self.base_url, req.model);
        let body = Self::build_body(&req);

        tracing::debug!(model = %req.model, tools = req.tools.len(), "gemini generateContent");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| RespiteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(RespiteError::Transport(format!("HTTP {status}: {detail}")));
        }

        let parsed: GenerateContentResponse =
            response.json().await.map_err(|e| RespiteError::Transport(e.to_string()))?;

        Ok(Self::convert_response(parsed))
    }
}

// --- Wire format (camelCase, Google AI Studio `v1beta`) ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    contents: Vec<WireContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<WireContent<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct WireContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<WirePart<'a>>,
}

#[derive(Debug, Serialize)]
struct WirePart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct WireTool {
    #[serde(rename = "googleSearch")]
    google_search: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<WireGroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireGroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<WireGroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct WireGroundingChunk {
    web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
struct WebSource {
    uri: Option<String>,
    title: Option<String>,
}
