//! Interpreter configuration.

use metalfactor_error::ConfigError;
use metalfactor_interface::PoolPolicy;
use serde::{Deserialize, Serialize};

/// Trigger prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "*mf";

/// Settings for the command interpreter.
///
/// Appears as the `[commands]` table of the bot's TOML configuration.
///
/// # Examples
///
/// ```
/// use metalfactor_commands::InterpreterConfig;
/// use metalfactor_interface::PoolPolicy;
///
/// let config = InterpreterConfig::default();
/// assert_eq!(config.prefix(), "*mf");
/// assert_eq!(*config.pool_policy(), PoolPolicy::AllowNegative);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default, deny_unknown_fields)]
pub struct InterpreterConfig {
    /// Token that must open a message for it to be treated as a command.
    prefix: String,

    /// Whether pools may go negative.
    pool_policy: PoolPolicy,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            pool_policy: PoolPolicy::default(),
        }
    }
}

impl InterpreterConfig {
    /// Set the trigger prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the pool policy.
    pub fn with_pool_policy(mut self, pool_policy: PoolPolicy) -> Self {
        self.pool_policy = pool_policy;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is empty or contains whitespace, since
    /// the prefix must survive tokenization as a single token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::new("Command prefix must not be empty"));
        }
        if self.prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::new(format!(
                "Command prefix must not contain whitespace, got {:?}",
                self.prefix
            )));
        }
        Ok(())
    }
}
