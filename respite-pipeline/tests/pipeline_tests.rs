use respite_core::{
    EnergyLevel, GroundingChunk, Language, Llm, LlmResponse, Persona, RespiteError, ToolGrant,
    UserProfile,
};
use respite_model::MockLlm;
use respite_pipeline::{
    DEFAULT_ENCOURAGEMENT, DEFAULT_MODEL_ID, EncouragementPipeline, GenerationPipeline,
    mock_activities,
};
use std::sync::Arc;
use std::time::Duration;

fn profile() -> UserProfile {
    UserProfile::new(
        "Maya",
        Persona::Professional,
        vec!["Reduce stress".to_string(), "Improve focus".to_string()],
        Language::En,
    )
}

fn architect_payload() -> String {
    serde_json::json!({
        "activities": [
            {
                "id": "gen-1",
                "title": "Desk Shoulder Rolls",
                "description": "Release upper-body tension without leaving your chair.",
                "category": "Body & Mobility",
                "durationMinutes": 15,
                "steps": ["Sit tall.", "Roll shoulders back ten times."],
                "rationale": "Gentle movement suits Maya at medium energy."
            },
            {
                "id": "gen-2",
                "title": "Quick Logic Teaser",
                "description": "One riddle to sharpen your focus.",
                "category": "Brain & Cognition",
                "durationMinutes": 15,
                "steps": [],
                "rationale": "A light challenge fits medium energy.",
                "interactive": {
                    "type": "QUIZ",
                    "quizData": {
                        "question": "What has keys but no locks?",
                        "options": ["A map", "A piano", "A clock"],
                        "correctAnswer": "A piano",
                        "explanation": "A piano has keys you play, not keys that lock."
                    }
                }
            },
            {
                "id": "gen-3",
                "title": "Two-Minute Gratitude Note",
                "description": "Write down one thing that went well today.",
                "category": "Emotional Reflection",
                "durationMinutes": 15,
                "steps": ["Grab a pen.", "Write one sentence."],
                "rationale": "Reflection rounds out the session for Maya."
            }
        ]
    })
    .to_string()
}

fn pipeline(mock: &Arc<MockLlm>) -> GenerationPipeline {
    GenerationPipeline::standard(Some(mock.clone() as Arc<dyn Llm>), DEFAULT_MODEL_ID)
        .unwrap()
        .with_mock_delay(Duration::ZERO)
}

#[tokio::test]
async fn test_happy_path_returns_structured_activities() {
    let mock = Arc::new(
        MockLlm::new("scripted")
            .with_response(LlmResponse::new("Three researched options."))
            .with_response(LlmResponse::new(architect_payload())),
    );

    let activities = pipeline(&mock).generate_activities(&profile(), 15, EnergyLevel::Medium).await;

    assert_eq!(activities.len(), 3);
    assert_eq!(activities[0].title, "Desk Shoulder Rolls");
    assert!(activities.iter().all(|a| a.validate().is_ok()));

    // Researcher then architect, strictly sequential, nothing extra.
    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].tools, vec![ToolGrant::GoogleSearch]);
    assert!(requests[1].tools.is_empty());
    assert!(requests[1].response_schema.is_some());
    assert!(requests[1].prompt.contains("Three researched options."));
}

#[tokio::test]
async fn test_researcher_failure_invokes_fallback_tier() {
    let mock = Arc::new(
        MockLlm::new("scripted")
            .with_failure(RespiteError::Transport("search tool unavailable".to_string()))
            .with_response(LlmResponse::new("Fallback research from internal knowledge."))
            .with_response(LlmResponse::new(architect_payload())),
    );

    let activities = pipeline(&mock).generate_activities(&profile(), 15, EnergyLevel::Medium).await;
    assert_eq!(activities.len(), 3);

    let requests = mock.requests();
    assert_eq!(requests.len(), 3);
    // The fallback tier runs the same task without a tool grant.
    assert_eq!(requests[1].prompt, requests[0].prompt);
    assert!(requests[1].tools.is_empty());
    assert_ne!(requests[1].system_instruction, requests[0].system_instruction);
    // The architect consumed the fallback tier's output.
    assert!(requests[2].prompt.contains("Fallback research from internal knowledge."));
}

#[tokio::test]
async fn test_empty_research_text_counts_as_tier_failure() {
    let mock = Arc::new(
        MockLlm::new("scripted")
            .with_response(LlmResponse::new("   "))
            .with_response(LlmResponse::new("Fallback research."))
            .with_response(LlmResponse::new(architect_payload())),
    );

    let activities = pipeline(&mock).generate_activities(&profile(), 15, EnergyLevel::Medium).await;
    assert_eq!(activities.len(), 3);
    assert_eq!(mock.call_count(), 3);
}

#[tokio::test]
async fn test_both_research_tiers_failing_serves_mock_set() {
    let mock = Arc::new(
        MockLlm::new("scripted")
            .with_failure(RespiteError::Transport("503".to_string()))
            .with_failure(RespiteError::Transport("503 again".to_string())),
    );

    let activities = pipeline(&mock).generate_activities(&profile(), 20, EnergyLevel::Low).await;

    assert_eq!(activities, mock_activities(20));
    // The architect never ran.
    assert_eq!(mock.call_count(), 2);
}

#[tokio::test]
async fn test_unparseable_architect_output_serves_mock_set() {
    let mock = Arc::new(
        MockLlm::new("scripted")
            .with_response(LlmResponse::new("Three researched options."))
            .with_response(LlmResponse::new("sorry, here is prose instead of JSON")),
    );

    let activities = pipeline(&mock).generate_activities(&profile(), 15, EnergyLevel::Medium).await;
    assert_eq!(activities, mock_activities(15));
}

#[tokio::test]
async fn test_empty_architect_list_serves_mock_set() {
    let mock = Arc::new(
        MockLlm::new("scripted")
            .with_response(LlmResponse::new("Three researched options."))
            .with_response(LlmResponse::new(r#"{"activities":[]}"#)),
    );

    let activities = pipeline(&mock).generate_activities(&profile(), 15, EnergyLevel::Medium).await;
    assert_eq!(activities, mock_activities(15));
}

#[tokio::test]
async fn test_invalid_category_serves_mock_set_not_partial_list() {
    let payload = architect_payload().replace("Body & Mobility", "Mindfulness & Meditation");
    let mock = Arc::new(
        MockLlm::new("scripted")
            .with_response(LlmResponse::new("Three researched options."))
            .with_response(LlmResponse::new(payload)),
    );

    let activities = pipeline(&mock).generate_activities(&profile(), 15, EnergyLevel::Medium).await;
    assert_eq!(activities, mock_activities(15));
}

#[tokio::test]
async fn test_citation_augmentation_skips_interactive_activities() {
    let research = LlmResponse::new("Three researched options.").with_grounding(vec![
        GroundingChunk { uri: "https://example.com/stretch".to_string(), title: None },
        GroundingChunk { uri: "https://example.com/quiz".to_string(), title: None },
        GroundingChunk { uri: "https://example.com/gratitude".to_string(), title: None },
    ]);
    let mock = Arc::new(
        MockLlm::new("scripted")
            .with_response(research)
            .with_response(LlmResponse::new(architect_payload())),
    );

    let activities = pipeline(&mock).generate_activities(&profile(), 15, EnergyLevel::Medium).await;

    assert_eq!(activities[0].source_url.as_deref(), Some("https://example.com/stretch"));
    // The quiz activity is self-contained and must never gain a citation.
    assert!(activities[1].source_url.is_none());
    assert_eq!(activities[2].source_url.as_deref(), Some("https://example.com/gratitude"));
}

#[tokio::test]
async fn test_no_credential_serves_mock_set_without_any_call() {
    let pipeline = GenerationPipeline::standard(None, DEFAULT_MODEL_ID)
        .unwrap()
        .with_mock_delay(Duration::ZERO);

    let activities = pipeline.generate_activities(&profile(), 15, EnergyLevel::Medium).await;

    assert_eq!(activities.len(), 3);
    assert_eq!(activities[0].title, "The 4-7-8 Breathing Technique");
    assert_eq!(activities[1].title, "Logic Puzzle: The Two Doors");
    assert_eq!(activities[2].title, "Micro-Reading: The Stoic View");
    assert!(activities.iter().all(|a| a.duration_minutes == 15));

    // Deterministic: a second run returns the identical set.
    let again = pipeline.generate_activities(&profile(), 15, EnergyLevel::Medium).await;
    assert_eq!(again, activities);
}

#[tokio::test]
async fn test_mock_durations_follow_requested_minutes() {
    let pipeline = GenerationPipeline::standard(None, DEFAULT_MODEL_ID)
        .unwrap()
        .with_mock_delay(Duration::ZERO);

    let activities = pipeline.generate_activities(&profile(), 30, EnergyLevel::Medium).await;
    assert_eq!(activities[0].title, "The 4-7-8 Breathing Technique");
    assert!(activities.iter().all(|a| a.duration_minutes == 30));
}

#[tokio::test]
async fn test_encouragement_without_credential_is_fixed_default() {
    let pipeline = EncouragementPipeline::standard(None, DEFAULT_MODEL_ID).unwrap();
    let activity = mock_activities(10).remove(0);

    let line = pipeline.generate_encouragement(&profile(), &activity).await;
    assert_eq!(line, DEFAULT_ENCOURAGEMENT);
}

#[tokio::test]
async fn test_encouragement_failure_is_fixed_default() {
    let mock = Arc::new(
        MockLlm::new("scripted").with_failure(RespiteError::Transport("down".to_string())),
    );
    let pipeline =
        EncouragementPipeline::standard(Some(mock.clone() as Arc<dyn Llm>), DEFAULT_MODEL_ID)
            .unwrap();
    let activity = mock_activities(10).remove(0);

    let line = pipeline.generate_encouragement(&profile(), &activity).await;
    assert_eq!(line, DEFAULT_ENCOURAGEMENT);
    // Single attempt, no retry.
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_encouragement_empty_reply_is_fixed_default() {
    let mock = Arc::new(MockLlm::new("scripted").with_response(LlmResponse::new("  ")));
    let pipeline =
        EncouragementPipeline::standard(Some(mock as Arc<dyn Llm>), DEFAULT_MODEL_ID).unwrap();
    let activity = mock_activities(10).remove(0);

    let line = pipeline.generate_encouragement(&profile(), &activity).await;
    assert_eq!(line, DEFAULT_ENCOURAGEMENT);
}

#[tokio::test]
async fn test_encouragement_returns_coach_line() {
    let mock = Arc::new(
        MockLlm::new("scripted").with_response(LlmResponse::new("That focus paid off, Maya!\n")),
    );
    let pipeline =
        EncouragementPipeline::standard(Some(mock.clone() as Arc<dyn Llm>), DEFAULT_MODEL_ID)
            .unwrap();
    let activity = mock_activities(10).remove(0);

    let line = pipeline.generate_encouragement(&profile(), &activity).await;
    assert_eq!(line, "That focus paid off, Maya!");

    let requests = mock.requests();
    assert!(requests[0].prompt.contains("Busy Professional"));
    assert!(requests[0].prompt.contains("The 4-7-8 Breathing Technique"));
    assert!(requests[0].tools.is_empty());
    assert!(requests[0].response_schema.is_none());
}
