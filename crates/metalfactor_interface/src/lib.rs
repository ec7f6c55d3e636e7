//! Campaign types and the pool store interface for Metal Factor.
//!
//! A campaign is one guild's pair of dice pools. This crate defines the
//! value types that describe pools and transfers between them, the
//! [`PoolStore`] trait every persistence backend implements, and an
//! in-memory backend used by tests.
//!
//! # Example
//!
//! ```
//! use metalfactor_interface::{Pools, Transfer, TransferDirection};
//!
//! let pools = Pools::new(10, 0);
//! let shifted = pools
//!     .apply(Transfer::new(TransferDirection::PlayersToDm, 4))
//!     .expect("no overflow");
//! assert_eq!(shifted, Pools::new(6, 4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod in_memory;
mod policy;
mod store;
mod types;

pub use error::{PoolError, PoolErrorKind, PoolResult};
pub use in_memory::InMemoryPoolStore;
pub use policy::PoolPolicy;
pub use store::PoolStore;
pub use types::{GuildKey, PoolSide, Pools, Transfer, TransferDirection};
