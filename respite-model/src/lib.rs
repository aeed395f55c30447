//! # respite-model
//!
//! [`respite_core::Llm`] transport implementations.
//!
//! - [`gemini::GeminiModel`] - Gemini REST transport (Google AI Studio),
//!   with the built-in `googleSearch` tool grant and grounding extraction.
//! - [`mock::MockLlm`] - scripted transport for tests.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiModel;
pub use mock::MockLlm;
