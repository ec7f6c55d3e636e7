//! CLI definitions.

use clap::Parser;
use metalfactor::ConfigOverrides;
use std::path::PathBuf;

/// Metal Factor - Discord bot that tracks dice pools per guild
#[derive(Parser, Debug)]
#[command(name = "metalfactor")]
#[command(about = "Discord bot that tracks Metal Factor dice pools per guild", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Discord bot token (defaults to DISCORD_TOKEN)
    #[arg(short, long)]
    pub token: Option<String>,

    /// SQLite database file (defaults to METALFACTOR_DATABASE, then campaigns.db)
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit JSON log lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Overrides to apply on top of file and environment configuration.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            token: self.token.clone(),
            database_path: self.database.clone(),
            log_level: self.verbose.then(|| "debug".to_string()),
            json_logs: self.json_logs,
        }
    }
}
