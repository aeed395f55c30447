//! # respite-agent
//!
//! The [`Agent`] invocation unit: binds a name, model id, optional system
//! instruction, tool grants, and an optional output schema into one
//! reusable value. Agents are immutable configuration constructed once at
//! startup and threaded into the pipelines - no process-wide singletons.

pub mod agent;

pub use agent::{Agent, AgentBuilder, AgentReply};
