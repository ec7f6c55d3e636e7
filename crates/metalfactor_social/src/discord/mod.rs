//! Discord integration for Metal Factor.
//!
//! This module connects to the Discord gateway with Serenity, listens for
//! guild messages and answers the ones addressed to the bot.
//!
//! ## Integration Layer
//! - **client**: Serenity client setup and lifecycle management
//! - **handler**: Event handler implementing Serenity's EventHandler trait
//! - **error**: Discord-specific error types
//!
//! # Usage
//!
//! ```rust,ignore
//! use metalfactor_social::MetalFactorBot;
//!
//! let mut bot = MetalFactorBot::new(&token, interpreter).await?;
//! bot.start().await?;
//! ```

mod client;
mod error;
mod handler;

pub use client::MetalFactorBot;
pub use error::{DiscordError, DiscordErrorKind, DiscordResult};
pub use handler::MetalFactorHandler;
