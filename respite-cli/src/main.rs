use anyhow::Result;
use clap::Parser;
use respite_cli::{Cli, Commands, Console};
use respite_core::Llm;
use respite_model::GeminiModel;
use respite_pipeline::{EncouragementPipeline, GenerationPipeline};
use respite_session::{FileProfileStore, ProfileStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    respite_cli::telemetry::init_telemetry("respite");

    let cli = Cli::parse();

    let profile_path =
        cli.profile.clone().unwrap_or_else(respite_cli::config::default_profile_path);
    let store: Arc<dyn ProfileStore> = Arc::new(FileProfileStore::new(profile_path));

    let model: Option<Arc<dyn Llm>> = match respite_cli::config::api_key_from_env() {
        Some(key) => Some(Arc::new(GeminiModel::new(key))),
        None => {
            tracing::warn!("no API credential configured; running in offline mode");
            None
        }
    };

    match cli.command.unwrap_or(Commands::CheckIn) {
        Commands::CheckIn => {
            let generation = GenerationPipeline::standard(model.clone(), &cli.model)?;
            let encouragement = EncouragementPipeline::standard(model, &cli.model)?;
            Console::new(store, generation, encouragement).run().await?;
        }
        Commands::History => match store.load().await? {
            Some(profile) => respite_cli::console::show_history_view(&profile),
            None => println!("No profile yet. Run `respite` to get started."),
        },
        Commands::Profile => match store.load().await? {
            Some(profile) => respite_cli::console::show_profile_view(&profile),
            None => println!("No profile yet. Run `respite` to get started."),
        },
        Commands::Reset => {
            store.clear().await?;
            println!("Profile deleted.");
        }
    }

    Ok(())
}
