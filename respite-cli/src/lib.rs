//! # respite-cli
//!
//! Console front end for the Respite wellbeing concierge: a clap command
//! surface, an interactive check-in flow, translation-string lookup, and
//! tracing setup.

pub mod cli;
pub mod config;
pub mod console;
pub mod i18n;
pub mod telemetry;

pub use cli::{Cli, Commands};
pub use console::Console;
