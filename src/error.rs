//! Error types.

use thiserror::Error;

use crate::serenity;

/// Anything that can go wrong while running the bot.
#[derive(Error, Debug)]
pub enum MinccinoError {
    #[error("Discord error: {0}")]
    Serenity(#[from] serenity::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Problems with `config.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No config file found. {action_msg}")]
    MissingConfig { action_msg: String },
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
    #[error("Could not access config file: {0}")]
    IoError(std::io::Error),
}

/// Problems loading player settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not read settings from {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Malformed settings: {0}")]
    Parse(#[from] serde_path_to_error::Error<toml::de::Error>),
    #[error("'{id}' is not a discord user id.")]
    InvalidUserId { id: String },
}
