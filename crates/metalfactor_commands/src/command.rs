//! Parsing of command text into [`Command`] values.

use metalfactor_interface::{Pools, Transfer, TransferDirection};

/// A fully validated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Just the prefix.
    Greeting,
    /// `help`
    Help,
    /// `pc <n>` or `dm <n>`
    Transfer(Transfer),
    /// `set <p> <d>`
    Set {
        /// Parsed values to store
        pools: Pools,
        /// Player argument exactly as typed
        player_literal: String,
        /// DM argument exactly as typed
        dm_literal: String,
    },
    /// `start <n>`
    Start {
        /// Parsed starting player pool
        starting_player_pool: i64,
        /// Argument exactly as typed
        literal: String,
    },
    /// `check`
    Check,
    /// `rickroll`
    Rickroll,
}

/// Groups of commands that share a malformed-command reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CommandCategory {
    /// `pc` and `dm`
    #[display("adjustment")]
    Adjustment,
    /// `set`
    #[display("set")]
    Set,
    /// `start`
    #[display("start")]
    Start,
    /// `check`
    #[display("check")]
    Check,
    /// `rickroll`
    #[display("rickroll")]
    Rickroll,
}

/// Reasons command text fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CommandParseErrorKind {
    /// The operation token matches no command.
    #[display("Unknown command: {}", _0)]
    UnknownCommand(String),

    /// Wrong number of tokens for the command.
    #[display("{} command expects {} tokens, got {}", category, expected, found)]
    ArgumentCount {
        /// Command group
        category: CommandCategory,
        /// Tokens required, prefix included
        expected: usize,
        /// Tokens present
        found: usize,
    },

    /// A numeric argument is not an integer.
    #[display("{} command argument {:?} is not an integer: {}", category, token, reason)]
    InvalidInteger {
        /// Command group
        category: CommandCategory,
        /// Offending token
        token: String,
        /// Parser message
        reason: String,
    },
}

/// Command parse error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Command Parse Error: {} at line {} in {}", kind, line, file)]
pub struct CommandParseError {
    /// The kind of error that occurred
    pub kind: CommandParseErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CommandParseError {
    /// Create a new CommandParseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CommandParseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Command group of a malformed command, `None` for unknown commands.
    pub fn category(&self) -> Option<CommandCategory> {
        match &self.kind {
            CommandParseErrorKind::UnknownCommand(_) => None,
            CommandParseErrorKind::ArgumentCount { category, .. }
            | CommandParseErrorKind::InvalidInteger { category, .. } => Some(*category),
        }
    }
}

impl Command {
    /// Parse message content that starts with the trigger prefix.
    ///
    /// The content is trimmed and split on single spaces, so repeated spaces
    /// produce empty tokens that count toward the argument count. The first
    /// token is the prefix and is not inspected.
    ///
    /// # Examples
    ///
    /// ```
    /// use metalfactor_commands::Command;
    /// use metalfactor_interface::{Transfer, TransferDirection};
    ///
    /// let command = Command::parse("*mf pc 3").unwrap();
    /// assert_eq!(
    ///     command,
    ///     Command::Transfer(Transfer::new(TransferDirection::PlayersToDm, 3))
    /// );
    /// assert!(Command::parse("*mf pc three").is_err());
    /// ```
    pub fn parse(content: &str) -> Result<Self, CommandParseError> {
        let tokens: Vec<&str> = content.trim().split(' ').collect();

        let Some(operation) = tokens.get(1) else {
            return Ok(Command::Greeting);
        };

        match *operation {
            "help" => Ok(Command::Help),
            "pc" => parse_transfer(&tokens, TransferDirection::PlayersToDm),
            "dm" => parse_transfer(&tokens, TransferDirection::DmToPlayers),
            "set" => {
                expect_tokens(&tokens, CommandCategory::Set, 4)?;
                let player = parse_integer(tokens[2], CommandCategory::Set)?;
                let dm = parse_integer(tokens[3], CommandCategory::Set)?;
                Ok(Command::Set {
                    pools: Pools::new(player, dm),
                    player_literal: tokens[2].to_string(),
                    dm_literal: tokens[3].to_string(),
                })
            }
            "start" => {
                expect_tokens(&tokens, CommandCategory::Start, 3)?;
                let starting_player_pool = parse_integer(tokens[2], CommandCategory::Start)?;
                Ok(Command::Start {
                    starting_player_pool,
                    literal: tokens[2].to_string(),
                })
            }
            "check" => {
                expect_tokens(&tokens, CommandCategory::Check, 2)?;
                Ok(Command::Check)
            }
            "rickroll" => {
                expect_tokens(&tokens, CommandCategory::Rickroll, 2)?;
                Ok(Command::Rickroll)
            }
            other => Err(CommandParseError::new(
                CommandParseErrorKind::UnknownCommand(other.to_string()),
            )),
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Greeting => "greeting",
            Command::Help => "help",
            Command::Transfer(transfer) => match transfer.direction {
                TransferDirection::PlayersToDm => "pc",
                TransferDirection::DmToPlayers => "dm",
            },
            Command::Set { .. } => "set",
            Command::Start { .. } => "start",
            Command::Check => "check",
            Command::Rickroll => "rickroll",
        }
    }
}

fn parse_transfer(
    tokens: &[&str],
    direction: TransferDirection,
) -> Result<Command, CommandParseError> {
    expect_tokens(tokens, CommandCategory::Adjustment, 3)?;
    let amount = parse_integer(tokens[2], CommandCategory::Adjustment)?;
    Ok(Command::Transfer(Transfer::new(direction, amount)))
}

#[track_caller]
fn expect_tokens(
    tokens: &[&str],
    category: CommandCategory,
    expected: usize,
) -> Result<(), CommandParseError> {
    if tokens.len() == expected {
        Ok(())
    } else {
        Err(CommandParseError::new(
            CommandParseErrorKind::ArgumentCount {
                category,
                expected,
                found: tokens.len(),
            },
        ))
    }
}

#[track_caller]
fn parse_integer(token: &str, category: CommandCategory) -> Result<i64, CommandParseError> {
    token.parse::<i64>().map_err(|e| {
        CommandParseError::new(CommandParseErrorKind::InvalidInteger {
            category,
            token: token.to_string(),
            reason: e.to_string(),
        })
    })
}
