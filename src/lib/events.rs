//! Event handling
//!
//! Every message from the PokéMeow bot is classified. Spawns belonging to a
//! subscribed player get a one-line ball recommendation in the same channel.

use serenity::CreateAllowedMentions;
use serenity::CreateMessage;
use serenity::FullEvent;
use serenity::Message;
use tracing::instrument;

use crate::serenity;
use crate::spawn;
use crate::spawn::classify::EmbedText;
use crate::spawn::RawMessage;
use crate::Data;
use crate::MinccinoError;

/// Entry point for every gateway event poise hands us.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &FullEvent,
    _fw: poise::FrameworkContext<'_, Data, MinccinoError>,
    data: &Data,
) -> Result<(), MinccinoError> {
    match event {
        FullEvent::Message { new_message } if new_message.author.id == data.game_bot => {
            on_game_message(ctx, new_message, data).await
        }
        _ => Ok(()),
    }
}

/// Classify a PokéMeow message and answer it if it's a spawn someone wants to hear about.
#[instrument(skip_all, fields(message = %message.id, channel = %message.channel_id))]
async fn on_game_message(
    ctx: &serenity::Context,
    message: &Message,
    data: &Data,
) -> Result<(), MinccinoError> {
    let Some(spawn) = spawn::classify(&RawMessage::from(message)) else {
        return Ok(());
    };
    tracing::debug!(?spawn, "Detected spawn.");

    let user = spawn.subject_user_id;
    let Some(settings) = data.snapshot_for(user, message.channel_id).await else {
        tracing::debug!("No settings for {user}.");
        return Ok(());
    };

    let Some(reco) = spawn::recommend(&spawn, &settings) else {
        return Ok(());
    };

    let line = spawn::display::render(&spawn, &reco, settings.display_mode);
    let reply = CreateMessage::new()
        .content(line)
        .allowed_mentions(CreateAllowedMentions::new().users(vec![user]));

    message.channel_id.send_message(ctx, reply).await?;
    tracing::info!(
        patreon = settings.is_patreon,
        boosted = settings.channel_boost,
        "Recommended {} ({:.0}%) to {user}.",
        reco.ball,
        reco.success_percent
    );

    Ok(())
}

impl From<&Message> for RawMessage {
    fn from(message: &Message) -> Self {
        let embed = message.embeds.first().map(|e| EmbedText {
            title: e.title.clone(),
            description: e.description.clone(),
            colour: e.colour.map(|c| c.0),
            footer: e.footer.as_ref().map(|f| f.text.clone()),
        });

        RawMessage {
            content: message.content.clone(),
            embed,
            reply_to: message.referenced_message.as_ref().map(|m| m.author.id),
        }
    }
}
