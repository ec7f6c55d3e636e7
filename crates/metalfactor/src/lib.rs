//! Metal Factor: a Discord bot that tracks a shared dice pool per guild.
//!
//! The workspace is split by concern:
//! - `metalfactor_error` - error types
//! - `metalfactor_interface` - campaign types and the `PoolStore` trait
//! - `metalfactor_database` - SQLite persistence
//! - `metalfactor_commands` - command parsing and replies
//! - `metalfactor_social` - Discord integration
//!
//! This crate wires them together: configuration loading, logging setup and
//! the `metalfactor` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;

pub use config::{
    BotConfig, ConfigOverrides, DATABASE_ENV, LoggingConfig, PREFIX_ENV, TOKEN_ENV,
};
pub use observability::{
    ObservabilityConfig, init_observability_with_config, shutdown_observability,
};

// Re-export the workspace crates for embedding the bot in another binary.
pub use metalfactor_commands as commands;
pub use metalfactor_database as database;
pub use metalfactor_error as error;
pub use metalfactor_interface as interface;
pub use metalfactor_social as social;
