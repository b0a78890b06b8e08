//! Picks the ball to recommend for a spawn.

use super::catch_rate;
use super::catch_rate::CHANNEL_BOOST;
use super::Ball;
use super::Category;
use super::Rarity;
use super::SpawnEvent;
use crate::data::UserCatchSettings;

/// The ball to throw and how likely it is to work.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub ball: Ball,
    /// Success chance in `[0, 100]`.
    pub success_percent: f64,
    /// Every ball that was considered, in priority order. Only used for display.
    pub all_rates: Vec<(Ball, f64)>,
}

impl Recommendation {
    /// Masterball at 100%, used for event-exclusive spawns.
    fn guaranteed() -> Self {
        Self {
            ball: Ball::Masterball,
            success_percent: 100.0,
            all_rates: vec![(Ball::Masterball, 100.0)],
        }
    }
}

/// Recommend the cheapest ball with the best success chance.
///
/// Returns `None` when the player has recommendations disabled, isn't
/// subscribed to this rarity, or the rarity is unknown. Event-exclusive spawns
/// skip all of that and always get a masterball.
pub fn recommend(spawn: &SpawnEvent, settings: &UserCatchSettings) -> Option<Recommendation> {
    if !settings.enabled {
        return None;
    }

    if spawn.event_exclusive {
        return Some(Recommendation::guaranteed());
    }

    let rarity = spawn.rarity?;
    if !settings.is_subscribed(spawn.category, rarity) {
        return None;
    }

    let all_rates: Vec<(Ball, f64)> = catch_rate::priority(spawn.category)
        .iter()
        .copied()
        .filter(|ball| is_available(*ball, rarity))
        .filter_map(|ball| success_rate(spawn, rarity, ball, settings).map(|rate| (ball, rate)))
        .collect();

    // Strictly greater, so the earlier (cheaper) ball keeps ties.
    let (ball, success_percent) = all_rates.iter().copied().fold(None, |best, (ball, rate)| {
        match best {
            Some((_, best_rate)) if best_rate >= rate => best,
            _ => Some((ball, rate)),
        }
    })?;

    Some(Recommendation {
        ball,
        success_percent,
        all_rates,
    })
}

/// Scarce balls are reserved for rare spawns, whatever their numbers say.
fn is_available(ball: Ball, rarity: Rarity) -> bool {
    match ball {
        Ball::Masterball => rarity.is_shiny_tier(),
        Ball::Premierball | Ball::Diveball => rarity.is_legendary_or_above(),
        Ball::Pokeball | Ball::Greatball | Ball::Ultraball | Ball::Beastball => true,
    }
}

fn success_rate(
    spawn: &SpawnEvent,
    rarity: Rarity,
    ball: Ball,
    settings: &UserCatchSettings,
) -> Option<f64> {
    let base = catch_rate::base_rate(spawn.category, rarity, ball)?;

    let mut rate = clamp(base + settings.catch_rate_bonus);

    if settings.channel_boost {
        rate = clamp(rate + CHANNEL_BOOST);
    }

    if let (Category::Fishing, Some(state)) = (spawn.category, spawn.water_state) {
        let mut delta = catch_rate::water_delta(state);
        // A guaranteed dive/master catch can't be penalised by rough water.
        if matches!(ball, Ball::Diveball | Ball::Masterball) && base >= 100.0 {
            delta = delta.max(0.0);
        }
        rate = clamp(rate + delta);
    }

    Some(rate)
}

/// Clamp to `[0, 100]`. NaN becomes 0.
fn clamp(rate: f64) -> f64 {
    rate.max(0.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::serenity::UserId;
    use crate::spawn::WaterState;

    fn subscribed(bonus: f64) -> UserCatchSettings {
        let all: HashMap<Rarity, bool> = Rarity::ALL.into_iter().map(|r| (r, true)).collect();
        UserCatchSettings {
            enabled: true,
            catch_rate_bonus: bonus,
            wild_pokemon: all.clone(),
            held_item_pokemon: all.clone(),
            fishing: all,
            ..Default::default()
        }
    }

    fn spawn(category: Category, rarity: Rarity) -> SpawnEvent {
        SpawnEvent {
            category,
            rarity: Some(rarity),
            water_state: None,
            event_exclusive: false,
            subject_user_id: UserId::new(1),
        }
    }

    fn pick(spawn: &SpawnEvent, settings: &UserCatchSettings) -> (Ball, f64) {
        let reco = recommend(spawn, settings).expect("expected a recommendation");
        (reco.ball, reco.success_percent)
    }

    #[test]
    fn common_wild_gets_pokeball() {
        let reco = pick(&spawn(Category::WildPokemon, Rarity::Common), &subscribed(0.0));
        assert_eq!(reco, (Ball::Pokeball, 80.0));
    }

    #[test]
    fn held_item_legendary_with_bonus_and_boost() {
        let settings = UserCatchSettings {
            channel_boost: true,
            ..subscribed(10.0)
        };
        let reco = recommend(&spawn(Category::HeldItemPokemon, Rarity::Legendary), &settings)
            .expect("expected a recommendation");

        assert_eq!((reco.ball, reco.success_percent), (Ball::Premierball, 65.0));
        assert!(reco.all_rates.contains(&(Ball::Ultraball, 50.0)));
        assert!(reco.all_rates.contains(&(Ball::Beastball, 15.0)));
        assert!(!reco.all_rates.iter().any(|(b, _)| *b == Ball::Masterball));
    }

    #[test]
    fn water_state_shifts_fishing_rates() {
        let settings = subscribed(0.0);
        let mut fish = spawn(Category::Fishing, Rarity::Common);

        fish.water_state = Some(WaterState::Intense);
        assert_eq!(pick(&fish, &settings), (Ball::Pokeball, 45.0));

        fish.water_state = Some(WaterState::Calm);
        assert_eq!(pick(&fish, &settings), (Ball::Pokeball, 60.0));
    }

    #[test]
    fn rough_water_does_not_penalise_guaranteed_diveball() {
        let mut fish = spawn(Category::Fishing, Rarity::Legendary);
        fish.water_state = Some(WaterState::Intense);

        let reco = recommend(&fish, &subscribed(0.0)).expect("expected a recommendation");
        assert_eq!((reco.ball, reco.success_percent), (Ball::Diveball, 100.0));
        // Premier ball takes the full penalty.
        assert!(reco.all_rates.contains(&(Ball::Premierball, 30.0)));
    }

    #[test]
    fn event_exclusive_always_gets_masterball() {
        let event = SpawnEvent {
            category: Category::WildPokemon,
            rarity: None,
            water_state: None,
            event_exclusive: true,
            subject_user_id: UserId::new(7),
        };
        let no_subscriptions = UserCatchSettings {
            enabled: true,
            ..Default::default()
        };

        assert_eq!(pick(&event, &no_subscriptions), (Ball::Masterball, 100.0));
    }

    #[test]
    fn disabled_users_get_nothing() {
        let settings = UserCatchSettings {
            enabled: false,
            ..subscribed(0.0)
        };
        let mut event = spawn(Category::WildPokemon, Rarity::Shiny);
        assert_eq!(recommend(&event, &settings), None);

        event.event_exclusive = true;
        assert_eq!(recommend(&event, &settings), None);
    }

    #[test]
    fn unsubscribed_rarity_gets_nothing() {
        let mut settings = subscribed(0.0);
        settings.wild_pokemon.insert(Rarity::Rare, false);
        settings.fishing.remove(&Rarity::Rare);

        assert_eq!(recommend(&spawn(Category::WildPokemon, Rarity::Rare), &settings), None);
        assert_eq!(recommend(&spawn(Category::Fishing, Rarity::Rare), &settings), None);
        assert!(recommend(&spawn(Category::HeldItemPokemon, Rarity::Rare), &settings).is_some());
    }

    #[test]
    fn unknown_rarity_gets_nothing() {
        let mut event = spawn(Category::WildPokemon, Rarity::Common);
        event.rarity = None;
        assert_eq!(recommend(&event, &subscribed(0.0)), None);
    }

    #[test]
    fn ties_go_to_the_cheaper_ball() {
        let reco = pick(&spawn(Category::WildPokemon, Rarity::Legendary), &subscribed(0.0));
        assert_eq!(reco, (Ball::Ultraball, 55.0));
    }

    #[test]
    fn scarce_balls_never_recommended_below_legendary() {
        let low = [Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Superrare];
        let categories = [Category::WildPokemon, Category::HeldItemPokemon, Category::Fishing];

        for bonus in [0.0, 25.0, 60.0, 999.0] {
            for category in categories {
                for rarity in low {
                    let (ball, _) = pick(&spawn(category, rarity), &subscribed(bonus));
                    assert!(
                        !matches!(ball, Ball::Premierball | Ball::Diveball | Ball::Masterball),
                        "{category:?}/{rarity} with bonus {bonus} picked {ball}"
                    );
                }
            }
        }
    }

    #[test]
    fn huge_bonus_is_clamped() {
        let settings = UserCatchSettings {
            channel_boost: true,
            ..subscribed(999.0)
        };
        for rarity in Rarity::ALL {
            let mut fish = spawn(Category::Fishing, rarity);
            fish.water_state = Some(WaterState::Special);
            for event in [spawn(Category::WildPokemon, rarity), fish] {
                let reco = recommend(&event, &settings).expect("expected a recommendation");
                assert!(reco.all_rates.iter().all(|(_, rate)| *rate <= 100.0));
                assert_eq!(reco.success_percent, 100.0);
            }
        }
    }

    #[test]
    fn bonus_never_lowers_the_pick() {
        let categories = [Category::WildPokemon, Category::HeldItemPokemon, Category::Fishing];
        for category in categories {
            for rarity in Rarity::ALL {
                let mut previous = 0.0;
                for bonus in (0..=110).step_by(5) {
                    let (_, rate) = pick(&spawn(category, rarity), &subscribed(f64::from(bonus)));
                    assert!(rate >= previous, "{category:?}/{rarity} dropped at bonus {bonus}");
                    previous = rate;
                }
            }
        }
    }

    #[test]
    fn shiny_spawns_get_masterball() {
        for rarity in [Rarity::Shiny, Rarity::Golden, Rarity::FullOddsShiny, Rarity::EventShiny] {
            let reco = pick(&spawn(Category::WildPokemon, rarity), &subscribed(0.0));
            assert_eq!(reco, (Ball::Masterball, 100.0));
        }
    }
}
