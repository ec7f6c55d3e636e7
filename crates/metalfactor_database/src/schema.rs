//! Diesel table definitions.

diesel::table! {
    /// One campaign per guild.
    campaigns (id) {
        /// Guild identifier
        id -> Text,
        /// Dice held by the players
        player_pool -> Nullable<BigInt>,
        /// Dice held by the DM
        dm_pool -> Nullable<BigInt>,
    }
}
