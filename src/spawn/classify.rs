//! Turns PokéMeow messages into [SpawnEvent]s.
//!
//! Everything here matches against PokéMeow's message layout (phrases, embed
//! colours, footer text). When PokéMeow changes its messages, this is the file
//! to update.

use std::sync::LazyLock;

use regex::Regex;

use super::Category;
use super::Rarity;
use super::SpawnEvent;
use super::WaterState;
use crate::serenity::UserId;

/// The parts of a chat message the classifier looks at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMessage {
    pub content: String,
    /// First embed of the message, if any.
    pub embed: Option<EmbedText>,
    /// Author of the message this one replies to.
    pub reply_to: Option<UserId>,
}

/// Text and colour of an embed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedText {
    pub title: Option<String>,
    pub description: Option<String>,
    pub colour: Option<u32>,
    pub footer: Option<String>,
}

/// Embed colour of each rarity. Shiny variants share a colour and are told apart by text.
const RARITY_COLOURS: [(u32, Rarity); 7] = [
    (0x0855FB, Rarity::Common),
    (0x00FFE4, Rarity::Uncommon),
    (0xFF8C00, Rarity::Rare),
    (0xF8F407, Rarity::Superrare),
    (0xA007F8, Rarity::Legendary),
    (0xFF99CC, Rarity::Shiny),
    (0xFFD700, Rarity::Golden),
];

static FISHING: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)fished out an? (wild|shiny|golden)"));
static HELD_ITEM: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)is holding|:held_item:"));
static WILD: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)found an? (wild|shiny|golden)"));
static EVENT_EXCLUSIVE: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)event[ -]exclusive"));
static FULL_ODDS: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)full[ -]odds"));
static EVENT_SHINY: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)event shiny"));
static WATER_STATE: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)water state:?\s*\**\s*(\d+)"));
static MENTION: LazyLock<Regex> = LazyLock::new(|| re(r"<@!?(\d+)>"));

/// Compile a pattern that is known to be valid.
fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hardcoded pattern can't fail to compile")
}

/// Classify a message. `None` means "not a spawn" and is the common case.
///
/// A spawn whose tier can't be read still classifies, with `rarity: None`.
pub fn classify(message: &RawMessage) -> Option<SpawnEvent> {
    let text = message.searchable_text();

    let category = if FISHING.is_match(&text) {
        Category::Fishing
    } else if WILD.is_match(&text) {
        if HELD_ITEM.is_match(&text) {
            Category::HeldItemPokemon
        } else {
            Category::WildPokemon
        }
    } else {
        return None;
    };

    let subject_user_id = message.reply_to.or_else(|| first_mention(&text))?;

    let water_state = match category {
        Category::Fishing => message
            .embed
            .as_ref()
            .and_then(|e| e.footer.as_deref())
            .and_then(water_state),
        _ => None,
    };

    let colour = message.embed.as_ref().and_then(|e| e.colour);
    let rarity = colour.and_then(|c| rarity(c, &text));

    Some(SpawnEvent {
        category,
        rarity,
        water_state,
        event_exclusive: EVENT_EXCLUSIVE.is_match(&text),
        subject_user_id,
    })
}

impl RawMessage {
    /// Content and every embed text field, one per line.
    fn searchable_text(&self) -> String {
        let mut parts = vec![self.content.as_str()];
        if let Some(embed) = &self.embed {
            parts.extend(
                [&embed.title, &embed.description, &embed.footer]
                    .into_iter()
                    .flatten()
                    .map(String::as_str),
            );
        }
        parts.join("\n")
    }
}

fn rarity(colour: u32, text: &str) -> Option<Rarity> {
    let (_, rarity) = RARITY_COLOURS.iter().find(|(c, _)| *c == colour)?;

    let rarity = match rarity {
        Rarity::Shiny if FULL_ODDS.is_match(text) => Rarity::FullOddsShiny,
        Rarity::Shiny if EVENT_SHINY.is_match(text) => Rarity::EventShiny,
        other => *other,
    };
    Some(rarity)
}

fn water_state(footer: &str) -> Option<WaterState> {
    let code = WATER_STATE.captures(footer)?.get(1)?.as_str().parse().ok()?;
    WaterState::from_code(code)
}

fn first_mention(text: &str) -> Option<UserId> {
    MENTION
        .captures_iter(text)
        .filter_map(|c| c.get(1)?.as_str().parse::<u64>().ok())
        .find(|id| *id != 0)
        .map(UserId::new)
}
