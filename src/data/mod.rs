//! This module contains everything relating to [Data].

mod settings;
mod settings_cache;
mod settings_file;

use std::collections::HashSet;
use std::sync::Arc;

use serenity::ChannelId;
use serenity::UserId;

use crate::error::SettingsError;
use crate::serenity;
pub use settings::DisplayMode;
pub use settings::UserCatchSettings;
pub use settings_cache::reload_periodically;
pub use settings_cache::SettingsCache;
pub use settings_cache::SettingsSource;
pub use settings_file::SettingsFile;

/// The data kept between shards
pub struct Data {
    /// List of users to send bug notifications
    pub notify_list: HashSet<UserId>,
    /// The PokéMeow bot account. Only its messages are classified.
    pub game_bot: UserId,
    /// Channels with an active catch boost.
    pub boosted_channels: HashSet<ChannelId>,
    /// Player settings, reloaded in the background.
    pub settings: SettingsCache,
    /// Where [settings](Data::settings) is reloaded from.
    pub settings_source: Arc<dyn SettingsSource>,
}

impl Data {
    /// The player's settings as seen from `channel`, with the channel boost filled in.
    /// `None` means the player never set anything up.
    pub async fn snapshot_for(
        &self,
        user: UserId,
        channel: ChannelId,
    ) -> Option<UserCatchSettings> {
        let mut snapshot = self.settings.snapshot(user).await?;
        snapshot.channel_boost = self.boosted_channels.contains(&channel);
        Some(snapshot)
    }

    /// Reload [settings](Data::settings) from [settings_source](Data::settings_source).
    pub async fn reload_settings(&self) -> Result<(), SettingsError> {
        self.settings.reload(self.settings_source.as_ref()).await
    }
}
