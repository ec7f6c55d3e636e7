//! Metal Factor bot binary.
//!
//! Loads configuration, opens the campaign database, connects to Discord and
//! runs until CTRL+C or SIGTERM.

use clap::Parser;
use metalfactor::commands::CommandInterpreter;
use metalfactor::database::SqlitePoolStore;
use metalfactor::social::MetalFactorBot;
use metalfactor::{
    BotConfig, ObservabilityConfig, init_observability_with_config, shutdown_observability,
};
use std::sync::Arc;
use tracing::{error, info};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::Cli;

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = BotConfig::load(cli.config.as_deref(), cli.overrides())?;

    init_observability_with_config(ObservabilityConfig::from(config.logging()))?;

    let result = run(config).await;
    if let Err(e) = &result {
        error!(error = %e, "Bot exited with an error");
    }

    shutdown_observability();
    result
}

async fn run(config: BotConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqlitePoolStore::open(config.database_path())?;
    info!(path = %config.database_path().display(), "Campaign database ready");

    let interpreter = Arc::new(CommandInterpreter::new(
        Arc::new(store),
        config.commands().clone(),
    ));

    let mut bot = MetalFactorBot::new(config.require_token()?, interpreter).await?;

    let shard_manager = bot.shard_manager();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("Shutdown signal received, stopping gracefully...");
        shard_manager.shutdown_all().await;
    });

    info!("Bot is now running. Press CTRL+C to exit.");
    bot.start().await?;
    info!("Bot stopped");

    Ok(())
}

/// Resolves on CTRL+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
