//! Value types for campaigns and pool transfers.

use serde::{Deserialize, Serialize};

/// Identifier of the guild a campaign belongs to.
///
/// Stored as text so the key is independent of the platform's id width.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct GuildKey(String);

impl GuildKey {
    /// Create a key from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for GuildKey {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for GuildKey {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for GuildKey {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// The two dice pools of a campaign.
///
/// `Pools::default()` is what a guild without a campaign reads as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pools {
    /// Dice held by the players
    pub player: i64,
    /// Dice held by the DM
    pub dm: i64,
}

impl Pools {
    /// Create a pool pair.
    pub fn new(player: i64, dm: i64) -> Self {
        Self { player, dm }
    }

    /// Apply a transfer, returning `None` if either pool would overflow.
    pub fn apply(self, transfer: Transfer) -> Option<Self> {
        let amount = transfer.amount;
        match transfer.direction {
            TransferDirection::PlayersToDm => Some(Self {
                player: self.player.checked_sub(amount)?,
                dm: self.dm.checked_add(amount)?,
            }),
            TransferDirection::DmToPlayers => Some(Self {
                player: self.player.checked_add(amount)?,
                dm: self.dm.checked_sub(amount)?,
            }),
        }
    }

    /// The first pool (player before DM) holding a negative count, if any.
    pub fn negative_side(&self) -> Option<(PoolSide, i64)> {
        if self.player < 0 {
            Some((PoolSide::Player, self.player))
        } else if self.dm < 0 {
            Some((PoolSide::Dm, self.dm))
        } else {
            None
        }
    }
}

/// Which pool a value belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
pub enum PoolSide {
    /// The players' pool
    #[display("player")]
    Player,
    /// The DM's pool
    #[display("DM")]
    Dm,
}

/// Direction of a relative transfer between the pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum TransferDirection {
    /// `pc`: the players hand dice to the DM
    #[display("pc")]
    PlayersToDm,
    /// `dm`: the DM hands dice to the players
    #[display("dm")]
    DmToPlayers,
}

/// A relative shift of `amount` dice in `direction`.
///
/// Negative amounts are accepted and shift the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transfer {
    /// Which way the dice move
    pub direction: TransferDirection,
    /// How many dice move
    pub amount: i64,
}

impl Transfer {
    /// Create a transfer.
    pub fn new(direction: TransferDirection, amount: i64) -> Self {
        Self { direction, amount }
    }
}
