//! Error types for the Metal Factor bot.
//!
//! This crate provides the foundation error types shared by the Metal Factor
//! workspace crates.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use metalfactor_error::{ConfigError, MetalFactorResult};
//!
//! fn load_token() -> MetalFactorResult<String> {
//!     Err(ConfigError::new("DISCORD_TOKEN not set"))?
//! }
//!
//! match load_token() {
//!     Ok(token) => println!("Got {} bytes", token.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod database;
mod error;

pub use config::ConfigError;
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{MetalFactorError, MetalFactorErrorKind, MetalFactorResult};
