//! Text command interpreter for the Metal Factor bot.
//!
//! Messages addressed to the bot start with a trigger prefix (`*mf` by
//! default). The interpreter tokenizes them into a [`Command`], runs the
//! command against an injected [`PoolStore`](metalfactor_interface::PoolStore)
//! and renders the reply text.
//!
//! # Commands
//!
//! ```text
//! *mf                  greeting
//! *mf help             usage text
//! *mf start <n>        create campaign, player=<n>, dm=0
//! *mf check            report current pools
//! *mf pc <n>           shift n from player to dm pool
//! *mf dm <n>           shift n from dm to player pool
//! *mf set <p> <d>      set player=<p>, dm=<d>
//! *mf rickroll         static link reply
//! ```
//!
//! # Example
//!
//! ```
//! use metalfactor_commands::{CommandInterpreter, InboundMessage, InterpreterConfig};
//! use metalfactor_interface::InMemoryPoolStore;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let interpreter = CommandInterpreter::new(
//!     Arc::new(InMemoryPoolStore::new()),
//!     InterpreterConfig::default(),
//! );
//! let message = InboundMessage::new("*mf check", 7, 1).with_guild(42_u64);
//! let reply = interpreter.handle(&message).await;
//! assert_eq!(reply.as_deref(), Some("PC 0 | 0 DM"));
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod config;
mod interpreter;
pub mod replies;

pub use command::{Command, CommandCategory, CommandParseError, CommandParseErrorKind};
pub use config::{DEFAULT_PREFIX, InterpreterConfig};
pub use interpreter::{CommandInterpreter, InboundMessage};
