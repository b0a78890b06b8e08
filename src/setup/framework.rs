//! Setup for [poise::Framework]

use std::sync::Arc;

use crate::data::reload_periodically;
use crate::data::SettingsFile;
use crate::lib;
use crate::serenity;
use crate::Config;
use crate::Data;
use crate::MinccinoError;

/// Convenient type alias, only this [poise::Framework] type is used.
type Framework = poise::Framework<Data, MinccinoError>;

/// Construct a [poise::Framework]
pub(super) fn framework(config: Config) -> Framework {
    poise::Framework::builder()
        .options(framework_options())
        .setup(|ctx, rdy, fw| framework_setup(ctx, rdy, fw, config))
        .build()
}

/// Configure options for the [Framework]
fn framework_options() -> poise::FrameworkOptions<Data, MinccinoError> {
    poise::FrameworkOptions {
        // Handle framework errors
        on_error: |e| crate::log::handle_framework_error(e),
        // Every spawn arrives as a plain message event
        event_handler: |ctx, event, fw, data| {
            Box::pin(lib::events::event_handler(ctx, event, fw, data))
        },
        ..Default::default()
    }
}

/// Construct future that runs on startup
fn framework_setup<'a>(
    _ctx: &'a serenity::Context,
    rdy: &'a serenity::Ready,
    fw: &'a Framework,
    config: Config,
) -> poise::BoxFuture<'a, Result<Data, MinccinoError>> {
    Box::pin(async move {
        let bot_name = &rdy.user.name;
        tracing::info!("{bot_name} is ready!");

        let data = Data {
            notify_list: config.notify_list(fw),
            game_bot: config.game_bot(),
            boosted_channels: config.boosted_channels(),
            settings: Default::default(),
            settings_source: Arc::new(SettingsFile::new(config.settings_path())),
        };

        // A broken settings file fails startup.
        data.reload_settings().await?;
        if data.settings.is_empty().await {
            tracing::warn!("No player settings loaded, nobody will be pinged.");
        }
        tracing::info!(
            "Loaded settings for {} players, watching {} in {} boosted channels.",
            data.settings.len().await,
            data.game_bot,
            data.boosted_channels.len()
        );

        // The first tick would repeat the load above.
        let period = config.reload_interval();
        let cache = data.settings.clone();
        let source = data.settings_source.clone();
        tokio::spawn(async move {
            tokio::time::sleep(period).await;
            reload_periodically(cache, source, period).await
        });

        Ok(data)
    })
}
