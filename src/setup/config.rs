//! Configuration for running this bot.

use std::collections::HashSet;
use std::time::Duration;

use poise::Framework;
use serde::Deserialize;
use serde::Serialize;
use serenity::ChannelId;
use serenity::UserId;

use crate::error::ConfigError;
use crate::serenity;

/// The path to the config file
const CONFIG_PATH: &str = "config.toml";

/// Account id of the PokéMeow bot.
const POKEMEOW_ID: u64 = 664508672713424926;

/// Settings read from [CONFIG_PATH] that modify bot behavior.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Token needed to use a bot account.
    discord_token: String,

    /// See [LoggingConfig]
    logging: LoggingConfig,

    /// See [PokeMeowConfig]
    pokemeow: PokeMeowConfig,

    /// Useful developer specific configs.
    dev_utils: DevConfig,
}

impl Config {
    /// Tries to read [CONFIG_PATH] to extract a [Config].
    /// If a file doesn't exists, create the default config file and returns error.
    /// If a file exists but is empty, re-write the default values and return error.
    /// If a file exists but is incomplete, show error and don't change files.
    /// If a file exists and is complete, read file to create a config.
    pub fn read() -> Result<Config, ConfigError> {
        match std::fs::read_to_string(CONFIG_PATH) {
            Ok(content) if content.trim().is_empty() => {
                write_file(&Config::default())?;
                Err(ConfigError::InvalidConfig {
                    reason: format!("Empty config file! Rewriting {CONFIG_PATH} ..."),
                })
            }
            Ok(content) => Config::parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                write_file(&Config::default())?;
                Err(ConfigError::MissingConfig {
                    action_msg: format!("Creating {CONFIG_PATH}..."),
                })
            }
            Err(e) => Err(ConfigError::IoError(e)),
        }
    }

    /// Parse config file contents, naming the offending field on failure.
    fn parse(content: &str) -> Result<Config, ConfigError> {
        let de = toml::Deserializer::new(content);
        serde_path_to_error::deserialize(de).map_err(|error| ConfigError::InvalidConfig {
            reason: error.to_string(),
        })
    }

    /// Basic sanity check for if a token was given.
    pub fn token(&self) -> Result<&str, ConfigError> {
        let default_token = Config::default().discord_token;
        let given_token = &self.discord_token;

        if given_token.is_empty() || given_token.contains(&default_token) {
            Err(ConfigError::InvalidConfig {
                reason: "Missing discord token".to_string(),
            })
        } else {
            Ok(given_token)
        }
    }

    /// Construct a bug notification notify list based on the config.
    /// Wrapper for [NotifyConfig::notify_list]
    pub fn notify_list<U, E>(&self, fw: &Framework<U, E>) -> HashSet<UserId> {
        self.dev_utils.notifications.notify_list(fw)
    }

    /// Directory for log files.
    pub fn log_dir(&self) -> &str {
        &self.logging.log_dir
    }

    /// Is debug mode enabled for console logs
    pub fn console_debug(&self) -> bool {
        self.logging.console_debug
    }

    /// Is file logging enabled.
    pub fn logs_enabled(&self) -> bool {
        self.logging.logs_enabled
    }

    /// The PokéMeow account whose messages are read.
    pub fn game_bot(&self) -> UserId {
        self.pokemeow.bot_id
    }

    /// Path of the player settings file.
    pub fn settings_path(&self) -> &str {
        &self.pokemeow.settings_path
    }

    /// How often player settings are reloaded. Never shorter than a minute.
    pub fn reload_interval(&self) -> Duration {
        Duration::from_secs(self.pokemeow.reload_interval_secs.max(60))
    }

    /// Channels with an active catch boost.
    pub fn boosted_channels(&self) -> HashSet<ChannelId> {
        self.pokemeow.boosted_channels.iter().copied().collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discord_token: "put_token_here".to_string(),

            logging: LoggingConfig {
                console_debug: false,
                logs_enabled: true,
                log_dir: "logs".to_string(),
            },

            pokemeow: PokeMeowConfig {
                bot_id: UserId::new(POKEMEOW_ID),
                settings_path: "settings.toml".to_string(),
                reload_interval_secs: 3600,
                boosted_channels: vec![],
            },

            dev_utils: DevConfig {
                notifications: NotifyConfig {
                    enabled: false,
                    add_owners: true,
                    userids: vec![],
                },
            },
        }
    }
}

/// Configs for logging.
#[derive(Debug, Serialize, Deserialize)]
struct LoggingConfig {
    /// Print debug traces to console?
    console_debug: bool,
    /// Enable writing to log file?
    logs_enabled: bool,
    /// Directory to store log files
    log_dir: String,
}

/// Where spawns come from and how player settings are kept.
#[derive(Debug, Serialize, Deserialize)]
struct PokeMeowConfig {
    /// Only messages from this account are classified.
    bot_id: UserId,
    /// TOML file holding every player's settings.
    settings_path: String,
    /// Seconds between settings reloads.
    reload_interval_secs: u64,
    /// Channels that give +5% to every catch.
    boosted_channels: Vec<ChannelId>,
}

/// Optional configs to enable developer-specific behavior.
#[derive(Debug, Serialize, Deserialize)]
struct DevConfig {
    /// See [NotifyConfig]
    notifications: NotifyConfig,
}

/// Configs for notification behavior when encountering unexpected errors.
#[derive(Debug, Serialize, Deserialize)]
struct NotifyConfig {
    /// Enable this behavior or not. (bot sends a private message)
    enabled: bool,
    /// Whether to automatically add owners to the notify list.
    add_owners: bool,
    /// Additional users to add to the notify list.
    userids: Vec<UserId>,
}

impl NotifyConfig {
    /// Construct a bug notification notify list based on the config.
    fn notify_list<U, E>(&self, fw: &Framework<U, E>) -> HashSet<UserId> {
        if !self.enabled {
            return HashSet::new();
        }

        let owners = if self.add_owners {
            fw.options().owners.iter().copied().collect()
        } else {
            vec![]
        };

        owners.into_iter().chain(self.userids.iter().copied()).collect()
    }
}

/// Write the given config to [CONFIG_PATH].
fn write_file(config: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(config).expect("config serialization can't fail");
    std::fs::write(CONFIG_PATH, content).map_err(ConfigError::IoError)
}
