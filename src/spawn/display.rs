//! Chat rendering of a [Recommendation].

use itertools::Itertools;

use super::Ball;
use super::Rarity;
use super::Recommendation;
use super::SpawnEvent;
use crate::data::DisplayMode;

/// Icon used for event-exclusive spawns and spawns with an unreadable tier.
const EVENT_ICON: &str = ":tickets:";

/// Renders `"<@user> <rarity-icon> → <ball-icon> (NN%)"`.
///
/// With [DisplayMode::AllItems] a second line lists every ball considered.
pub fn render(spawn: &SpawnEvent, reco: &Recommendation, mode: DisplayMode) -> String {
    let user = spawn.subject_user_id;
    let rarity = match spawn.rarity {
        Some(rarity) if !spawn.event_exclusive => rarity_icon(rarity),
        _ => EVENT_ICON,
    };
    let ball = ball_icon(reco.ball);
    let chance = percent(reco.success_percent);

    let headline = format!("<@{user}> {rarity} → {ball} ({chance}%)");

    match mode {
        DisplayMode::AllItems if reco.all_rates.len() > 1 => {
            let all = reco
                .all_rates
                .iter()
                .map(|(ball, rate)| format!("{} {}%", ball_icon(*ball), percent(*rate)))
                .join(" · ");
            format!("{headline}\n{all}")
        }
        _ => headline,
    }
}

/// Whole percent, truncated.
pub fn percent(rate: f64) -> u8 {
    rate.max(0.0).min(100.0).trunc() as u8
}

fn rarity_icon(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => ":white_circle:",
        Rarity::Uncommon => ":green_circle:",
        Rarity::Rare => ":orange_circle:",
        Rarity::Superrare => ":yellow_circle:",
        Rarity::Legendary => ":purple_circle:",
        Rarity::Shiny => ":sparkles:",
        Rarity::Golden => ":star2:",
        Rarity::FullOddsShiny => ":dizzy:",
        Rarity::EventShiny => ":tada:",
    }
}

fn ball_icon(ball: Ball) -> &'static str {
    match ball {
        Ball::Pokeball => ":pokeball:",
        Ball::Greatball => ":greatball:",
        Ball::Ultraball => ":ultraball:",
        Ball::Premierball => ":premierball:",
        Ball::Beastball => ":beastball:",
        Ball::Diveball => ":diveball:",
        Ball::Masterball => ":masterball:",
    }
}
