//! In-memory implementation of PoolStore for testing.
//!
//! Campaigns live in a HashMap behind an RwLock and are lost when the store
//! is dropped.

use crate::{GuildKey, PoolError, PoolErrorKind, PoolPolicy, PoolResult, PoolStore, Pools, Transfer};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// In-memory pool store.
///
/// # Example
/// ```
/// use metalfactor_interface::{GuildKey, InMemoryPoolStore, PoolPolicy, PoolStore, Pools};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = InMemoryPoolStore::new();
/// let guild = GuildKey::new("42");
/// store
///     .create_or_replace(&guild, 6, PoolPolicy::AllowNegative)
///     .await
///     .unwrap();
/// assert_eq!(store.read(&guild).await.unwrap(), Pools::new(6, 0));
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryPoolStore {
    campaigns: Arc<RwLock<HashMap<GuildKey, Pools>>>,
}

impl InMemoryPoolStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored campaigns (for testing).
    pub async fn len(&self) -> usize {
        self.campaigns.read().await.len()
    }

    /// Check whether any campaign exists (for testing).
    pub async fn is_empty(&self) -> bool {
        self.campaigns.read().await.is_empty()
    }
}

#[async_trait]
impl PoolStore for InMemoryPoolStore {
    #[instrument(skip(self), fields(guild_id = %guild))]
    async fn create_or_replace(
        &self,
        guild: &GuildKey,
        starting_player_pool: i64,
        policy: PoolPolicy,
    ) -> PoolResult<()> {
        let pools = Pools::new(starting_player_pool, 0);
        policy.check(&pools)?;
        self.campaigns.write().await.insert(guild.clone(), pools);
        debug!("Campaign stored");
        Ok(())
    }

    #[instrument(skip(self), fields(guild_id = %guild))]
    async fn read(&self, guild: &GuildKey) -> PoolResult<Pools> {
        Ok(self
            .campaigns
            .read()
            .await
            .get(guild)
            .copied()
            .unwrap_or_default())
    }

    #[instrument(skip(self), fields(guild_id = %guild))]
    async fn adjust(
        &self,
        guild: &GuildKey,
        transfer: Transfer,
        policy: PoolPolicy,
    ) -> PoolResult<Pools> {
        let mut campaigns = self.campaigns.write().await;
        let current = campaigns.get(guild).copied().unwrap_or_default();
        let next = current
            .apply(transfer)
            .ok_or_else(|| PoolError::new(PoolErrorKind::Overflow))?;
        policy.check(&next)?;
        if let Some(pools) = campaigns.get_mut(guild) {
            *pools = next;
        }
        Ok(next)
    }

    #[instrument(skip(self), fields(guild_id = %guild))]
    async fn overwrite(&self, guild: &GuildKey, pools: Pools, policy: PoolPolicy) -> PoolResult<()> {
        policy.check(&pools)?;
        if let Some(stored) = self.campaigns.write().await.get_mut(guild) {
            *stored = pools;
        }
        Ok(())
    }
}
