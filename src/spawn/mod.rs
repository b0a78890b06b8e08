//! Spawn detection and ball recommendations.
//!
//! A [SpawnEvent] is produced by [classify] from a PokéMeow message and fed to
//! [recommend] together with the player's [UserCatchSettings](crate::data::UserCatchSettings).

pub mod catch_rate;
pub mod classify;
pub mod display;
pub mod recommend;

use std::fmt::Display;
use std::str::FromStr;

use crate::serenity::UserId;

pub use classify::classify;
pub use classify::RawMessage;
pub use recommend::recommend;
pub use recommend::Recommendation;

/// What kind of encounter a spawn is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    WildPokemon,
    HeldItemPokemon,
    Fishing,
}

/// Rarity tiers, from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Superrare,
    Legendary,
    Shiny,
    Golden,
    FullOddsShiny,
    EventShiny,
}

impl Rarity {
    /// Every tier, in order.
    pub const ALL: [Rarity; 9] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Superrare,
        Rarity::Legendary,
        Rarity::Shiny,
        Rarity::Golden,
        Rarity::FullOddsShiny,
        Rarity::EventShiny,
    ];

    /// Name used in settings files and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Superrare => "superrare",
            Rarity::Legendary => "legendary",
            Rarity::Shiny => "shiny",
            Rarity::Golden => "golden",
            Rarity::FullOddsShiny => "full_odds_shiny",
            Rarity::EventShiny => "event_shiny",
        }
    }

    /// Shiny and event tiers, the only ones a masterball is offered for.
    pub fn is_shiny_tier(&self) -> bool {
        matches!(
            self,
            Rarity::Shiny | Rarity::Golden | Rarity::FullOddsShiny | Rarity::EventShiny
        )
    }

    /// Legendary and above. Scarce balls are never offered below this.
    pub fn is_legendary_or_above(&self) -> bool {
        *self >= Rarity::Legendary
    }
}

impl Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown rarity '{s}'"))
    }
}

/// Fishing-only environmental modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaterState {
    Calm,
    Moderate,
    Strong,
    Intense,
    Special,
}

impl WaterState {
    /// Maps the numeric code shown in fishing embed footers.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(WaterState::Calm),
            2 => Some(WaterState::Moderate),
            3 => Some(WaterState::Strong),
            4 => Some(WaterState::Intense),
            5 => Some(WaterState::Special),
            _ => None,
        }
    }
}

/// Capture items, cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ball {
    Pokeball,
    Greatball,
    Ultraball,
    Premierball,
    Beastball,
    Diveball,
    Masterball,
}

impl Ball {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ball::Pokeball => "pokeball",
            Ball::Greatball => "greatball",
            Ball::Ultraball => "ultraball",
            Ball::Premierball => "premierball",
            Ball::Beastball => "beastball",
            Ball::Diveball => "diveball",
            Ball::Masterball => "masterball",
        }
    }
}

impl Display for Ball {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected spawn, derived from a single PokéMeow message.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnEvent {
    pub category: Category,
    /// `None` when the message looked like a spawn but its tier couldn't be read.
    pub rarity: Option<Rarity>,
    pub water_state: Option<WaterState>,
    pub event_exclusive: bool,
    /// The player this spawn belongs to.
    pub subject_user_id: UserId,
}
