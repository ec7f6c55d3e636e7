//! The pool store trait.

use crate::{GuildKey, PoolPolicy, PoolResult, Pools, Transfer};
use async_trait::async_trait;

/// Persistence for campaigns, one row per guild.
///
/// Implementations are shared between concurrently running message
/// handlers, so every operation takes `&self`.
#[async_trait]
pub trait PoolStore: Send + Sync {
    /// Create the guild's campaign with `starting_player_pool` player dice
    /// and an empty DM pool, fully replacing any existing campaign.
    ///
    /// A start rejected by `policy` leaves any existing campaign untouched.
    async fn create_or_replace(
        &self,
        guild: &GuildKey,
        starting_player_pool: i64,
        policy: PoolPolicy,
    ) -> PoolResult<()>;

    /// Read the guild's pools.
    ///
    /// A guild without a campaign reads as `Pools::default()`; absence is
    /// not an error.
    async fn read(&self, guild: &GuildKey) -> PoolResult<Pools>;

    /// Shift dice between the pools and return the new values.
    ///
    /// The read and the write are atomic with respect to other calls on the
    /// same store. When the guild has no campaign the shift is computed from
    /// zero pools and returned, but nothing is persisted.
    async fn adjust(
        &self,
        guild: &GuildKey,
        transfer: Transfer,
        policy: PoolPolicy,
    ) -> PoolResult<Pools>;

    /// Overwrite both pools with absolute values.
    ///
    /// Overwriting a guild without a campaign changes nothing and is not an
    /// error.
    async fn overwrite(&self, guild: &GuildKey, pools: Pools, policy: PoolPolicy)
    -> PoolResult<()>;
}
