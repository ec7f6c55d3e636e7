//! Message handling: prefix check, parsing, store access, reply rendering.

use crate::{Command, CommandParseError, CommandParseErrorKind, InterpreterConfig, replies};
use metalfactor_interface::{GuildKey, PoolError, PoolErrorKind, PoolStore};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// A chat message as seen by the interpreter.
///
/// Platform integrations convert their own message events into this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Message text
    pub content: String,
    /// Author's platform id
    pub author_id: u64,
    /// Whether the bot itself wrote the message
    pub from_self: bool,
    /// Guild the message was posted in, `None` for direct messages
    pub guild_id: Option<GuildKey>,
    /// Channel the reply goes to
    pub channel_id: u64,
}

impl InboundMessage {
    /// A message from another user, outside any guild.
    pub fn new(content: impl Into<String>, author_id: u64, channel_id: u64) -> Self {
        Self {
            content: content.into(),
            author_id,
            from_self: false,
            guild_id: None,
            channel_id,
        }
    }

    /// Set the guild the message was posted in.
    pub fn with_guild(mut self, guild_id: impl Into<GuildKey>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    /// Mark whether the bot itself wrote the message.
    pub fn with_from_self(mut self, from_self: bool) -> Self {
        self.from_self = from_self;
        self
    }
}

/// Turns inbound messages into store operations and reply text.
///
/// Holds no state between messages; every call is bound only by the
/// message's guild.
pub struct CommandInterpreter {
    store: Arc<dyn PoolStore>,
    config: InterpreterConfig,
}

impl CommandInterpreter {
    /// Create an interpreter backed by `store`.
    pub fn new(store: Arc<dyn PoolStore>, config: InterpreterConfig) -> Self {
        Self { store, config }
    }

    /// Whether the message is a command for this bot.
    pub fn is_addressed(&self, message: &InboundMessage) -> bool {
        !message.from_self && message.content.starts_with(self.config.prefix().as_str())
    }

    /// Handle one message, returning the reply to send, if any.
    ///
    /// Messages that are not addressed to the bot, and commands sent outside
    /// a guild, produce no reply and never touch the store.
    #[instrument(
        skip(self, message),
        fields(author_id = message.author_id, channel_id = message.channel_id, guild_id, command)
    )]
    pub async fn handle(&self, message: &InboundMessage) -> Option<String> {
        if !self.is_addressed(message) {
            return None;
        }

        let Some(guild) = &message.guild_id else {
            debug!("Ignoring command sent outside a guild");
            return None;
        };
        tracing::Span::current().record("guild_id", guild.as_str());

        let reply = match Command::parse(&message.content) {
            Ok(command) => {
                tracing::Span::current().record("command", command.name());
                debug!("Executing command");
                self.execute(guild, command).await
            }
            Err(err) => self.reject(&err),
        };

        Some(reply)
    }

    async fn execute(&self, guild: &GuildKey, command: Command) -> String {
        let prefix = self.config.prefix();
        let policy = *self.config.pool_policy();

        match command {
            Command::Greeting => replies::GREETING.to_string(),
            Command::Help => replies::help(prefix),
            Command::Rickroll => replies::RICKROLL.to_string(),
            Command::Transfer(transfer) => match self.store.adjust(guild, transfer, policy).await {
                Ok(pools) => {
                    info!(player = pools.player, dm = pools.dm, "Pools adjusted");
                    replies::adjusted(pools)
                }
                Err(err) => self.store_failure(&err),
            },
            Command::Set {
                pools,
                player_literal,
                dm_literal,
            } => match self.store.overwrite(guild, pools, policy).await {
                Ok(()) => {
                    info!(player = pools.player, dm = pools.dm, "Pools set");
                    replies::placed(&player_literal, &dm_literal)
                }
                Err(err) => self.store_failure(&err),
            },
            Command::Start {
                starting_player_pool,
                literal,
            } => match self
                .store
                .create_or_replace(guild, starting_player_pool, policy)
                .await
            {
                Ok(()) => {
                    info!(player = starting_player_pool, "Campaign started");
                    replies::started(&literal)
                }
                Err(err) => self.store_failure(&err),
            },
            Command::Check => match self.store.read(guild).await {
                Ok(pools) => replies::pools(pools),
                Err(err) => self.store_failure(&err),
            },
        }
    }

    fn reject(&self, err: &CommandParseError) -> String {
        let prefix = self.config.prefix();
        match (&err.kind, err.category()) {
            (CommandParseErrorKind::InvalidInteger { .. }, Some(category)) => {
                warn!(error = %err, "Failed to parse integer argument");
                replies::malformed(prefix, category)
            }
            (_, Some(category)) => {
                debug!(error = %err, "Malformed command");
                replies::malformed(prefix, category)
            }
            (_, None) => {
                debug!(error = %err, "Unknown command");
                replies::unknown(prefix)
            }
        }
    }

    fn store_failure(&self, err: &PoolError) -> String {
        match &err.kind {
            PoolErrorKind::NegativePool { side, value } => {
                info!(%side, value, "Pool policy rejected write");
                replies::negative_pool(*side, *value)
            }
            PoolErrorKind::Overflow | PoolErrorKind::Storage(_) => {
                error!(error = %err, "Pool store operation failed");
                replies::APOLOGY.to_string()
            }
        }
    }
}
