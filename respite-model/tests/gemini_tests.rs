use respite_core::{Llm, LlmRequest, RespiteError, ToolGrant};
use respite_model::GeminiModel;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_generate_parses_text_and_grounding() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "tools": [{ "googleSearch": {} }],
            "systemInstruction": { "parts": [{ "text": "You are a helpful researcher." }] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "Three activities, verified." }]
                },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "uri": "https://example.com/breathing", "title": "Breathing" } }
                    ]
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let model = GeminiModel::new("test-key").with_base_url(server.uri());
    let req = LlmRequest::new("gemini-2.5-flash", "find activities")
        .with_system_instruction("You are a helpful researcher.")
        .with_tool(ToolGrant::GoogleSearch);

    let response = model.generate(req).await.unwrap();
    assert_eq!(response.text, "Three activities, verified.");
    assert_eq!(response.grounding.len(), 1);
    assert_eq!(response.grounding[0].uri, "https://example.com/breathing");
}

#[tokio::test]
async fn test_generate_sends_structured_output_config() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": { "type": "object" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "{\"activities\":[]}" }] }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let model = GeminiModel::new("test-key").with_base_url(server.uri());
    let req = LlmRequest::new("gemini-2.5-flash", "structure this")
        .with_response_schema(serde_json::json!({ "type": "object" }));

    let response = model.generate(req).await.unwrap();
    assert_eq!(response.text, "{\"activities\":[]}");
    assert!(response.grounding.is_empty());
}

#[tokio::test]
async fn test_http_error_maps_to_transport() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let model = GeminiModel::new("test-key").with_base_url(server.uri());
    let result = model.generate(LlmRequest::new("gemini-2.5-flash", "hello")).await;

    match result {
        Err(RespiteError::Transport(msg)) => {
            assert!(msg.contains("429"), "unexpected message: {msg}");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_maps_to_transport() {
    // Nothing listens on this port.
    let model = GeminiModel::new("test-key").with_base_url("http://127.0.0.1:9");
    let result = model.generate(LlmRequest::new("gemini-2.5-flash", "hello")).await;
    assert!(matches!(result, Err(RespiteError::Transport(_))));
}
