//! Reads player settings from a TOML file.
//!
//! ```toml
//! [users.123456789012345678]
//! enabled = true
//! catch_rate_bonus = 10.0
//! display_mode = "all_items"
//!
//! [users.123456789012345678.wild_pokemon]
//! legendary = true
//! shiny = true
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use async_trait::async_trait;
use serde::Deserialize;

use super::settings_cache::SettingsSource;
use super::DisplayMode;
use super::UserCatchSettings;
use crate::error::SettingsError;
use crate::serenity::UserId;
use crate::spawn::Rarity;

/// A [SettingsSource] backed by a TOML file on disk.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    /// Location of the file.
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsSource for SettingsFile {
    async fn load_all(&self) -> Result<HashMap<UserId, UserCatchSettings>, SettingsError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => parse(&content),
            // Nobody has configured anything yet.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("No settings file at {}.", self.path.display());
                Ok(HashMap::new())
            }
            Err(source) => Err(SettingsError::Io {
                path: self.path.display().to_string(),
                source,
            }),
        }
    }
}

/// Layout of the whole file.
#[derive(Debug, Default, Deserialize)]
struct FileLayout {
    /// Keyed by discord user id.
    #[serde(default)]
    users: HashMap<String, UserEntry>,
}

/// One `[users.<id>]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UserEntry {
    enabled: bool,
    catch_rate_bonus: f64,
    is_patreon: bool,
    display_mode: DisplayMode,
    wild_pokemon: HashMap<String, bool>,
    held_item_pokemon: HashMap<String, bool>,
    fishing: HashMap<String, bool>,
}

/// Parse the contents of a settings file.
/// Unknown rarity names are skipped with a warning, a bad user id fails the whole file.
pub fn parse(content: &str) -> Result<HashMap<UserId, UserCatchSettings>, SettingsError> {
    let de = toml::Deserializer::new(content);
    let layout: FileLayout = serde_path_to_error::deserialize(de)?;

    layout
        .users
        .into_iter()
        .map(|(id, entry)| -> Result<_, SettingsError> {
            let user = parse_user_id(&id)?;
            Ok((user, entry.into_settings(&id)))
        })
        .collect()
}

fn parse_user_id(id: &str) -> Result<UserId, SettingsError> {
    match id.parse::<u64>() {
        Ok(raw) if raw != 0 => Ok(UserId::new(raw)),
        _ => Err(SettingsError::InvalidUserId { id: id.to_string() }),
    }
}

impl UserEntry {
    fn into_settings(self, id: &str) -> UserCatchSettings {
        let bonus = self.catch_rate_bonus;
        let catch_rate_bonus = if (0.0..=100.0).contains(&bonus) {
            bonus
        } else {
            tracing::warn!("User {id} has catch_rate_bonus {bonus}, clamping to [0, 100].");
            bonus.max(0.0).min(100.0)
        };

        UserCatchSettings {
            enabled: self.enabled,
            catch_rate_bonus,
            is_patreon: self.is_patreon,
            channel_boost: false,
            wild_pokemon: rarity_map(id, self.wild_pokemon),
            held_item_pokemon: rarity_map(id, self.held_item_pokemon),
            fishing: rarity_map(id, self.fishing),
            display_mode: self.display_mode,
        }
    }
}

fn rarity_map(id: &str, raw: HashMap<String, bool>) -> HashMap<Rarity, bool> {
    raw.into_iter()
        .filter_map(|(name, flag)| match Rarity::from_str(&name) {
            Ok(rarity) => Some((rarity, flag)),
            Err(e) => {
                tracing::warn!("Skipping subscription for user {id}: {e}");
                None
            }
        })
        .collect()
}
