//! Discord bot client setup and lifecycle management.

use super::{DiscordError, DiscordErrorKind, DiscordResult, handler::MetalFactorHandler};
use metalfactor_commands::CommandInterpreter;
use serenity::Client;
use serenity::gateway::ShardManager;
use std::sync::Arc;
use tracing::{info, instrument};

/// Main Discord bot client for Metal Factor.
///
/// # Example
/// ```no_run
/// use metalfactor_commands::{CommandInterpreter, InterpreterConfig};
/// use metalfactor_database::SqlitePoolStore;
/// use metalfactor_social::MetalFactorBot;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let token = std::env::var("DISCORD_TOKEN")?;
///     let store = Arc::new(SqlitePoolStore::open("campaigns.db")?);
///     let interpreter = Arc::new(CommandInterpreter::new(store, InterpreterConfig::default()));
///
///     let mut bot = MetalFactorBot::new(&token, interpreter).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct MetalFactorBot {
    /// Serenity client instance
    client: Client,
}

impl MetalFactorBot {
    /// Create a new MetalFactorBot instance.
    ///
    /// # Errors
    /// Returns an error if the token is malformed or the Serenity client fails
    /// to initialize.
    #[instrument(skip(token, interpreter), fields(token_len = token.len()))]
    pub async fn new(token: &str, interpreter: Arc<CommandInterpreter>) -> DiscordResult<Self> {
        info!("Initializing Metal Factor Discord bot");

        if token.trim().is_empty() {
            return Err(DiscordError::new(DiscordErrorKind::InvalidToken(
                "token is empty".to_string(),
            )));
        }

        let handler = MetalFactorHandler::new(interpreter);
        let intents = MetalFactorHandler::intents();

        info!("Building Serenity client with intents: {:?}", intents);

        let client = Client::builder(token, intents)
            .event_handler(handler)
            .await?;

        info!("Serenity client built successfully");

        Ok(Self { client })
    }

    /// Handle for shutting the gateway connection down from another task.
    pub fn shard_manager(&self) -> Arc<ShardManager> {
        self.client.shard_manager.clone()
    }

    /// Start the Discord bot.
    ///
    /// Runs until the shard manager is shut down.
    ///
    /// # Errors
    /// Returns an error if the client fails to start or encounters a fatal error.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> DiscordResult<()> {
        info!("Starting Discord bot");

        self.client.start().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "Client error: {}",
                e
            )))
        })?;

        Ok(())
    }
}
