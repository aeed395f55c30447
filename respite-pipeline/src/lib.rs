//! # respite-pipeline
//!
//! The activity generation and encouragement pipelines.
//!
//! ## Degradation ladder
//!
//! [`GenerationPipeline::generate_activities`] drives a tool-granted
//! researcher, a tool-free researcher fallback, and a structuring architect
//! with an advisory output schema, then re-validates the result.
//! Every failure tier lands on the fixed fallback set from [`mock_data`], so
//! the caller always receives a non-empty, well-typed list. A check-in flow
//! must never see an error screen; the pipeline degrades in quality instead.
//!
//! [`EncouragementPipeline`] is the single-call sibling: one coach
//! invocation, one fixed default string on any failure.

pub mod encourage;
pub mod generate;
pub mod mock_data;
pub mod prompt;
pub mod schema;

pub use encourage::{DEFAULT_ENCOURAGEMENT, EncouragementPipeline};
pub use generate::{DEFAULT_MODEL_ID, GenerationPipeline, MOCK_PACING_DELAY};
pub use mock_data::mock_activities;
pub use schema::{activity_response_schema, parse_activities};
