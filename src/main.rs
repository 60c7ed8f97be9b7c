use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use ui_code_eval::cli::{Cli, Commands};
use ui_code_eval::commands;
use ui_code_eval::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };

    match cli.command {
        Commands::Run {
            images_dir,
            code_dir,
            results_dir,
            judge_model,
        } => {
            commands::handle_run(config, images_dir, code_dir, results_dir, judge_model).await
        }
        Commands::Analyze { snapshot } => commands::handle_analyze(&config, &snapshot),
        Commands::Compare { snapshot } => commands::handle_compare(&config, &snapshot),
        Commands::Report { snapshot, out } => {
            commands::handle_report(&config, &snapshot, out.as_deref())
        }
    }
}
