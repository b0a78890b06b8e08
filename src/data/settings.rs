//! Per-user catch settings.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::spawn::Category;
use crate::spawn::Rarity;

/// How a recommendation is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Only the recommended ball.
    #[default]
    BestItem,
    /// The recommended ball followed by every ball considered.
    AllItems,
}

/// A player's recommendation preferences.
/// The recommendation engine only ever sees a cloned snapshot of this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserCatchSettings {
    /// Master switch.
    pub enabled: bool,
    /// Flat bonus added to every rate, in `[0, 100]`.
    pub catch_rate_bonus: f64,
    /// Stored but not applied when computing rates.
    pub is_patreon: bool,
    /// Whether the spawn's channel is boosted. Filled in per spawn, never stored.
    pub channel_boost: bool,
    pub wild_pokemon: HashMap<Rarity, bool>,
    pub held_item_pokemon: HashMap<Rarity, bool>,
    pub fishing: HashMap<Rarity, bool>,
    pub display_mode: DisplayMode,
}

impl UserCatchSettings {
    /// Does the player want pings for this kind of spawn?
    /// Rarities missing from the map count as unsubscribed.
    pub fn is_subscribed(&self, category: Category, rarity: Rarity) -> bool {
        let map = match category {
            Category::WildPokemon => &self.wild_pokemon,
            Category::HeldItemPokemon => &self.held_item_pokemon,
            Category::Fishing => &self.fishing,
        };
        map.get(&rarity).copied().unwrap_or(false)
    }
}
