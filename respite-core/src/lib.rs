//! # respite-core
//!
//! Core traits and types for the Respite wellbeing concierge.
//!
//! ## Overview
//!
//! This crate provides the foundational abstractions shared by the rest of
//! the workspace:
//!
//! - [`Llm`] - the single-attempt LLM transport contract
//! - [`LlmRequest`] / [`LlmResponse`] - prompt, configuration, tool grants,
//!   and grounded output
//! - [`UserProfile`] / [`Activity`] - the domain model
//! - [`RespiteError`] / [`Result`] - unified error handling
//!
//! ## Error taxonomy
//!
//! Four conditions matter to the generation pipeline and are modeled
//! explicitly: [`RespiteError::NoCredential`] (configuration absence,
//! expected and silent), [`RespiteError::Transport`] (backend failure,
//! handled by fallback tiers), [`RespiteError::Schema`] (structured output
//! that parsed but violates the contract), and
//! [`RespiteError::EmptyResult`]. None of them ever crosses the pipeline
//! boundary - callers only see degraded results.

pub mod activity;
pub mod error;
pub mod model;
pub mod profile;

pub use activity::{Activity, ActivityCategory, Interactive, QuizData};
pub use error::{RespiteError, Result};
pub use model::{GroundingChunk, Llm, LlmRequest, LlmResponse, ToolGrant};
pub use profile::{
    ActivityLog, Difficulty, EnergyLevel, Enjoyment, Feedback, HISTORY_LIMIT, Language, Persona,
    SessionContext, UserProfile,
};
