//! Serenity event handler for the Discord bot.

use super::{DiscordError, DiscordErrorKind, DiscordResult};
use metalfactor_commands::{CommandInterpreter, InboundMessage};
use serenity::all::{ChannelId, Message, Ready, UserId};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::gateway::GatewayIntents;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, info};

/// Event handler for the Metal Factor Discord bot.
///
/// Converts gateway messages into [`InboundMessage`]s, runs them through the
/// interpreter and posts the reply to the originating channel.
pub struct MetalFactorHandler {
    interpreter: Arc<CommandInterpreter>,
    /// Bot's own user id, known once the gateway reports ready.
    bot_user: OnceLock<UserId>,
}

impl MetalFactorHandler {
    /// Create a handler that answers through `interpreter`.
    pub fn new(interpreter: Arc<CommandInterpreter>) -> Self {
        Self {
            interpreter,
            bot_user: OnceLock::new(),
        }
    }

    /// Required gateway intents for the bot.
    ///
    /// Guild messages, with content, are the only events the bot reads.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
    }

    fn inbound(&self, msg: &Message) -> InboundMessage {
        let from_self = self.bot_user.get() == Some(&msg.author.id);
        let inbound = InboundMessage::new(msg.content.clone(), msg.author.id.get(), msg.channel_id.get())
            .with_from_self(from_self);

        match msg.guild_id {
            Some(guild_id) => inbound.with_guild(guild_id.get()),
            None => inbound,
        }
    }
}

#[async_trait]
impl EventHandler for MetalFactorHandler {
    /// Called when the bot successfully connects to Discord.
    async fn ready(&self, _ctx: Context, ready: Ready) {
        if self.bot_user.set(ready.user.id).is_err() {
            debug!("Bot user already recorded, keeping first value");
        }
        info!(
            bot_user = %ready.user.name,
            bot_id = %ready.user.id,
            guilds = ready.guilds.len(),
            "Bot connected to Discord"
        );
    }

    /// Called for every message the bot can see.
    async fn message(&self, ctx: Context, msg: Message) {
        let inbound = self.inbound(&msg);
        let Some(reply) = self.interpreter.handle(&inbound).await else {
            return;
        };

        if let Err(e) = send_reply(&ctx, msg.channel_id, reply).await {
            error!(channel_id = %msg.channel_id, error = %e, "Failed to send reply");
        }
    }
}

async fn send_reply(ctx: &Context, channel_id: ChannelId, reply: String) -> DiscordResult<()> {
    channel_id
        .say(&ctx.http, reply)
        .await
        .map_err(send_failure)?;
    Ok(())
}

#[track_caller]
fn send_failure(err: serenity::Error) -> DiscordError {
    DiscordError::new(DiscordErrorKind::MessageSendFailed(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_include_message_content() {
        let intents = MetalFactorHandler::intents();
        assert!(intents.contains(GatewayIntents::GUILD_MESSAGES));
        assert!(intents.contains(GatewayIntents::MESSAGE_CONTENT));
        assert!(!intents.contains(GatewayIntents::GUILD_MEMBERS));
    }

    #[test]
    fn send_failures_keep_the_cause() {
        let err = send_failure(serenity::Error::Other("channel gone"));
        assert_eq!(
            err.kind(),
            &DiscordErrorKind::MessageSendFailed("channel gone".to_string())
        );
        assert!(err.to_string().contains("Message send failed"));
    }
}
