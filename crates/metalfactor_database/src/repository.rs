//! SQLite repository for campaigns.

use crate::schema::campaigns;
use crate::{CampaignRow, DatabaseResult, NewCampaign, open_database};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use metalfactor_error::DatabaseError;
use metalfactor_interface::{
    GuildKey, PoolError, PoolErrorKind, PoolPolicy, PoolResult, PoolStore, Pools, Transfer,
};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

/// SQLite-backed pool store.
///
/// # Example
/// ```no_run
/// use metalfactor_database::SqlitePoolStore;
///
/// let store = SqlitePoolStore::open("campaigns.db").expect("database opens");
/// ```
pub struct SqlitePoolStore {
    /// Single connection shared by every handler.
    ///
    /// Each operation holds the lock for one statement or one transaction.
    conn: Arc<Mutex<SqliteConnection>>,
}

impl SqlitePoolStore {
    /// Wrap an already migrated connection.
    pub fn new(conn: SqliteConnection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Open (creating if needed) and migrate the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> DatabaseResult<Self> {
        open_database(path).map(Self::new)
    }

    /// A migrated private in-memory database.
    pub fn in_memory() -> DatabaseResult<Self> {
        Self::open(":memory:")
    }
}

fn load_pools(conn: &mut SqliteConnection, guild: &GuildKey) -> DatabaseResult<Pools> {
    let row = campaigns::table
        .find(guild.as_str())
        .select(CampaignRow::as_select())
        .first(conn)
        .optional()
        .map_err(DatabaseError::from)?;

    Ok(row.map(|r| r.pools()).unwrap_or_default())
}

fn write_pools(conn: &mut SqliteConnection, guild: &GuildKey, pools: Pools) -> DatabaseResult<usize> {
    diesel::update(campaigns::table.find(guild.as_str()))
        .set((
            campaigns::player_pool.eq(Some(pools.player)),
            campaigns::dm_pool.eq(Some(pools.dm)),
        ))
        .execute(conn)
        .map_err(DatabaseError::from)
}

#[async_trait]
impl PoolStore for SqlitePoolStore {
    #[instrument(skip(self), fields(guild_id = %guild))]
    async fn create_or_replace(
        &self,
        guild: &GuildKey,
        starting_player_pool: i64,
        policy: PoolPolicy,
    ) -> PoolResult<()> {
        policy.check(&Pools::new(starting_player_pool, 0))?;

        let mut conn = self.conn.lock().await;

        diesel::replace_into(campaigns::table)
            .values(&NewCampaign::starting(guild.as_str(), starting_player_pool))
            .execute(&mut *conn)
            .map_err(DatabaseError::from)?;

        debug!("Campaign stored");
        Ok(())
    }

    #[instrument(skip(self), fields(guild_id = %guild))]
    async fn read(&self, guild: &GuildKey) -> PoolResult<Pools> {
        let mut conn = self.conn.lock().await;
        Ok(load_pools(&mut conn, guild)?)
    }

    #[instrument(skip(self), fields(guild_id = %guild, affected))]
    async fn adjust(
        &self,
        guild: &GuildKey,
        transfer: Transfer,
        policy: PoolPolicy,
    ) -> PoolResult<Pools> {
        let mut conn = self.conn.lock().await;

        conn.immediate_transaction::<_, PoolError, _>(|conn| {
            let current = load_pools(conn, guild)?;
            let next = current
                .apply(transfer)
                .ok_or_else(|| PoolError::new(PoolErrorKind::Overflow))?;
            policy.check(&next)?;

            let affected = write_pools(conn, guild, next)?;
            tracing::Span::current().record("affected", affected);
            if affected == 0 {
                warn!("No campaign for guild, adjustment not persisted");
            }

            Ok(next)
        })
    }

    #[instrument(skip(self), fields(guild_id = %guild, affected))]
    async fn overwrite(&self, guild: &GuildKey, pools: Pools, policy: PoolPolicy) -> PoolResult<()> {
        policy.check(&pools)?;

        let mut conn = self.conn.lock().await;
        let affected = write_pools(&mut conn, guild, pools)?;
        tracing::Span::current().record("affected", affected);
        if affected == 0 {
            warn!("No campaign for guild, overwrite not persisted");
        }

        Ok(())
    }
}
