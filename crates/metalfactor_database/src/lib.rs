//! SQLite integration for Metal Factor.
//!
//! This crate provides the schema, row models, connection bootstrap and the
//! diesel-backed [`SqlitePoolStore`].
//!
//! # Example
//!
//! ```rust,no_run
//! use metalfactor_database::SqlitePoolStore;
//! use metalfactor_interface::{GuildKey, PoolStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqlitePoolStore::open("campaigns.db")?;
//! let pools = store.read(&GuildKey::new("1234")).await?;
//! println!("PC {} | {} DM", pools.player, pools.dm);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod connection;
mod models;
mod repository;

pub mod schema;

pub use connection::{DEFAULT_DATABASE_PATH, establish_connection, open_database, run_migrations};
pub use models::{CampaignRow, NewCampaign};
pub use repository::SqlitePoolStore;

use metalfactor_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
