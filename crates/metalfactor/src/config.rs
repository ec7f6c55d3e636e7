//! Bot configuration.
//!
//! Values are layered, later layers winning:
//! 1. built-in defaults
//! 2. an optional TOML file
//! 3. environment variables
//! 4. command-line overrides

use derive_getters::Getters;
use metalfactor_commands::InterpreterConfig;
use metalfactor_database::DEFAULT_DATABASE_PATH;
use metalfactor_error::{ConfigError, MetalFactorResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the Discord bot token.
pub const TOKEN_ENV: &str = "DISCORD_TOKEN";
/// Environment variable overriding the database file path.
pub const DATABASE_ENV: &str = "METALFACTOR_DATABASE";
/// Environment variable overriding the command prefix.
pub const PREFIX_ENV: &str = "METALFACTOR_PREFIX";

/// Configuration for the bot process.
///
/// # Examples
///
/// ```
/// use metalfactor::BotConfig;
///
/// let config = BotConfig::from_toml_str(
///     r#"
///     database_path = "/var/lib/metalfactor/campaigns.db"
///
///     [commands]
///     pool_policy = "reject_negative"
///     "#,
/// )
/// .unwrap();
/// assert_eq!(config.commands().prefix(), "*mf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default, deny_unknown_fields)]
pub struct BotConfig {
    /// Discord bot token
    token: Option<String>,
    /// SQLite database file
    database_path: PathBuf,
    /// Command interpreter settings
    commands: InterpreterConfig,
    /// Log output settings
    logging: LoggingConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: None,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            commands: InterpreterConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    level: String,
    /// Emit JSON lines instead of text
    json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Bot token
    pub token: Option<String>,
    /// Database file
    pub database_path: Option<PathBuf>,
    /// Log filter directive
    pub log_level: Option<String>,
    /// Force JSON logs
    pub json_logs: bool,
}

impl BotConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> MetalFactorResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> MetalFactorResult<Self> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }

    /// Apply the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Apply environment values read through `lookup`. Empty values are ignored.
    pub fn with_env_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(token) = get(TOKEN_ENV) {
            self.token = Some(token);
        }
        if let Some(path) = get(DATABASE_ENV) {
            self.database_path = PathBuf::from(path);
        }
        if let Some(prefix) = get(PREFIX_ENV) {
            self.commands = self.commands.with_prefix(prefix);
        }
        self
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(token) = overrides.token {
            self.token = Some(token);
        }
        if let Some(path) = overrides.database_path {
            self.database_path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.json_logs {
            self.logging.json = true;
        }
        self
    }

    /// Check that the configuration can start a bot.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is set or the command settings are invalid.
    pub fn validate(&self) -> MetalFactorResult<()> {
        self.require_token()?;
        self.commands.validate()?;
        Ok(())
    }

    /// The bot token, or an error naming where to provide it.
    pub fn require_token(&self) -> MetalFactorResult<&str> {
        match self.token.as_deref() {
            Some(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(ConfigError::new(format!(
                "No bot token: pass --token or set {}",
                TOKEN_ENV
            ))
            .into()),
        }
    }

    /// Build the full configuration: defaults, then `file` if given, then the
    /// process environment, then `overrides`.
    pub fn load(file: Option<&Path>, overrides: ConfigOverrides) -> MetalFactorResult<Self> {
        let base = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = base.with_env().with_overrides(overrides);
        config.validate()?;
        Ok(config)
    }
}
