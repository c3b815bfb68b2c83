pub mod commands;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "brewery-api")]
#[command(about = "REST backend for user-owned brewery records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Listen port, overrides PORT")]
        port: Option<u16>,
    },

    #[command(about = "Apply database migrations and exit")]
    Migrate,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    tracing::info!("Starting in {:?} mode", config.environment);

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => commands::serve::handle(config, port).await,
        Commands::Migrate => commands::migrate::handle(config).await,
    }
}
