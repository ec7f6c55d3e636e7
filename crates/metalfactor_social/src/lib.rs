//! Chat platform integrations for Metal Factor.
//!
//! Each platform lives in its own submodule and adapts the platform's
//! message events to [`metalfactor_commands::InboundMessage`].
//!
//! - `discord` - Discord bot built on Serenity

#![warn(missing_docs)]

mod discord;

pub use discord::{DiscordError, DiscordErrorKind, DiscordResult, MetalFactorBot, MetalFactorHandler};
