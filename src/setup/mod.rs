//! Builds the bot client from a [Config].

mod config;
mod framework;

use crate::serenity;
use crate::MinccinoError;

pub use config::Config;

/// Constructs a [serenity::Client] that listens to guild messages.
pub(super) async fn client(config: Config) -> Result<serenity::Client, MinccinoError> {
    // Get discord token from config file
    let token = config.token()?.to_string();

    // Spawns are embeds posted by another bot, reading them needs message content.
    // See https://discord.com/developers/docs/topics/gateway#gateway-intents
    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let client = serenity::ClientBuilder::new(token, intents)
        .framework(framework::framework(config))
        .await?;

    Ok(client)
}
