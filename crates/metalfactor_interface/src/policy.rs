//! Rules for whether a pool may hold a negative count.

use crate::{PoolError, PoolErrorKind, PoolResult, Pools};
use serde::{Deserialize, Serialize};

/// Whether writes that leave a pool below zero are accepted.
///
/// The bot has always let pools go negative, so that is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum PoolPolicy {
    /// Any value is stored as-is
    #[default]
    #[display("allow_negative")]
    AllowNegative,
    /// Writes that would leave a pool negative are rejected
    #[display("reject_negative")]
    RejectNegative,
}

impl PoolPolicy {
    /// Check pools about to be written.
    ///
    /// # Errors
    ///
    /// Returns [`PoolErrorKind::NegativePool`] under `RejectNegative` when
    /// either pool is below zero.
    pub fn check(&self, pools: &Pools) -> PoolResult<()> {
        match (self, pools.negative_side()) {
            (PoolPolicy::RejectNegative, Some((side, value))) => {
                Err(PoolError::new(PoolErrorKind::NegativePool { side, value }))
            }
            _ => Ok(()),
        }
    }
}
