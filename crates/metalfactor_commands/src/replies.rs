//! Reply texts sent back to the channel.

use crate::CommandCategory;
use metalfactor_interface::{PoolSide, Pools};

/// Reply to the bare prefix.
pub const GREETING: &str = "Hi!";

/// Reply when the store fails.
pub const APOLOGY: &str = "Ooopsie, something went wrong! I must have drunk too much rhum!";

/// Reply to `rickroll`.
pub const RICKROLL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// Usage text for `help`.
pub fn help(prefix: &str) -> String {
    format!(
        "Available commands:\n\
         - `{prefix} start <number>`    Create a Metal Factor dice pool with `<number>` in the player's pool\n\
         - `{prefix} check`    Check the contents of each pool\n\
         - `{prefix} pc <number>`    Remove `<number>` from the player's Metal Factor pool and adds it to the DM's\n\
         - `{prefix} dm <number>`    Remove `<number>` from the DM's Metal Factor pool and adds it to the player's\n\
         - `{prefix} set <player_value> <dm_value>`    Set the player's pool to `<player_value>` and the DM's pool to `<dm_value>`"
    )
}

/// Reply to an operation token that matches no command.
pub fn unknown(prefix: &str) -> String {
    format!("Unknown command, type `{prefix} help` for a list of commands")
}

/// Reply to a command with the wrong arguments.
pub fn malformed(prefix: &str, category: CommandCategory) -> String {
    format!("Malformed {category} command, type `{prefix} help` for a list of commands")
}

/// Reply after `pc` or `dm`.
pub fn adjusted(pools: Pools) -> String {
    format!(
        "Metal Factor Updated!\n\
         The players have {} dice in their pool\n\
         The DM has {} dice in their pool",
        pools.player, pools.dm
    )
}

/// Reply after `set`, echoing the arguments as typed.
pub fn placed(player_literal: &str, dm_literal: &str) -> String {
    format!(
        "The dice have been... not cast I guess, but placed!\n\
         The players have {player_literal} dice in their pool\n\
         The DM has {dm_literal} dice in their pool"
    )
}

/// Reply after `start`, echoing the argument as typed.
pub fn started(literal: &str) -> String {
    format!(
        "Campaign created with {literal} dice in the player's pool\n\
         Adventure awaits! Go plunder that booty! \u{1F3F4}\u{200D}\u{2620}\u{FE0F}"
    )
}

/// Reply to `check`.
pub fn pools(pools: Pools) -> String {
    format!("PC {} | {} DM", pools.player, pools.dm)
}

/// Reply when the pool policy rejects a write.
pub fn negative_pool(side: PoolSide, value: i64) -> String {
    format!("Not enough dice for that! The {side} pool would drop to {value}")
}
