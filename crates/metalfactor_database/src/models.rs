//! Campaign row models.

use diesel::prelude::*;
use metalfactor_interface::Pools;

/// Database row for the campaigns table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::campaigns)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CampaignRow {
    pub id: String,
    pub player_pool: Option<i64>,
    pub dm_pool: Option<i64>,
}

impl CampaignRow {
    /// Pools held by this row; NULL columns read as zero.
    pub fn pools(&self) -> Pools {
        Pools::new(self.player_pool.unwrap_or(0), self.dm_pool.unwrap_or(0))
    }
}

/// Insertable campaign.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::campaigns)]
pub struct NewCampaign<'a> {
    pub id: &'a str,
    pub player_pool: Option<i64>,
    pub dm_pool: Option<i64>,
}

impl<'a> NewCampaign<'a> {
    /// A fresh campaign: the players hold `starting_player_pool`, the DM holds nothing.
    pub fn starting(id: &'a str, starting_player_pool: i64) -> Self {
        Self {
            id,
            player_pool: Some(starting_player_pool),
            dm_pool: Some(0),
        }
    }
}
