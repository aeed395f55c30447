use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "respite")]
#[command(about = "Personal wellbeing concierge", long_about = None)]
pub struct Cli {
    /// Path to the stored profile (defaults to ~/.respite/profile.json)
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Gemini model id used for all agents
    #[arg(long, default_value = respite_pipeline::DEFAULT_MODEL_ID)]
    pub model: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a check-in session (the default)
    CheckIn,

    /// Show the activity history
    History,

    /// Show the stored profile
    Profile,

    /// Delete the stored profile
    Reset,
}
