//! Base catch rates.
//!
//! Rows are indexed by [Rarity] and hold one base percentage per ball, in the
//! category's priority order ([STANDARD_PRIORITY] or [FISHING_PRIORITY]).

use super::Ball;
use super::Category;
use super::Rarity;
use super::WaterState;

/// Ball order for wild and held-item Pokémon, cheapest first.
pub const STANDARD_PRIORITY: [Ball; 6] = [
    Ball::Pokeball,
    Ball::Greatball,
    Ball::Ultraball,
    Ball::Premierball,
    Ball::Beastball,
    Ball::Masterball,
];

/// Ball order for fishing, cheapest first.
pub const FISHING_PRIORITY: [Ball; 7] = [
    Ball::Pokeball,
    Ball::Greatball,
    Ball::Ultraball,
    Ball::Premierball,
    Ball::Beastball,
    Ball::Diveball,
    Ball::Masterball,
];

/// Flat bonus for spawns in a boosted channel.
pub const CHANNEL_BOOST: f64 = 5.0;

// pokeball, greatball, ultraball, premierball, beastball, masterball
static WILD: [(Rarity, [u8; 6]); 9] = [
    (Rarity::Common, [80, 80, 80, 80, 0, 100]),
    (Rarity::Uncommon, [60, 75, 75, 75, 0, 100]),
    (Rarity::Rare, [35, 50, 65, 65, 0, 100]),
    (Rarity::Superrare, [10, 25, 45, 45, 0, 100]),
    (Rarity::Legendary, [0, 5, 55, 55, 0, 100]),
    (Rarity::Shiny, [0, 0, 20, 40, 0, 100]),
    (Rarity::Golden, [0, 0, 10, 30, 0, 100]),
    (Rarity::FullOddsShiny, [0, 0, 20, 40, 0, 100]),
    (Rarity::EventShiny, [0, 0, 20, 40, 0, 100]),
];

// pokeball, greatball, ultraball, premierball, beastball, masterball
static HELD_ITEM: [(Rarity, [u8; 6]); 9] = [
    (Rarity::Common, [70, 70, 70, 70, 0, 100]),
    (Rarity::Uncommon, [50, 65, 65, 65, 0, 100]),
    (Rarity::Rare, [25, 40, 55, 55, 0, 100]),
    (Rarity::Superrare, [5, 20, 40, 40, 0, 100]),
    (Rarity::Legendary, [0, 5, 35, 50, 0, 100]),
    (Rarity::Shiny, [0, 0, 15, 35, 0, 100]),
    (Rarity::Golden, [0, 0, 5, 25, 0, 100]),
    (Rarity::FullOddsShiny, [0, 0, 15, 35, 0, 100]),
    (Rarity::EventShiny, [0, 0, 15, 35, 0, 100]),
];

// pokeball, greatball, ultraball, premierball, beastball, diveball, masterball
static FISHING: [(Rarity, [u8; 7]); 9] = [
    (Rarity::Common, [55, 55, 55, 55, 0, 90, 100]),
    (Rarity::Uncommon, [40, 50, 50, 50, 0, 80, 100]),
    (Rarity::Rare, [20, 35, 45, 45, 0, 70, 100]),
    (Rarity::Superrare, [5, 15, 30, 30, 0, 60, 100]),
    (Rarity::Legendary, [0, 0, 25, 40, 0, 100, 100]),
    (Rarity::Shiny, [0, 0, 10, 30, 0, 100, 100]),
    (Rarity::Golden, [0, 0, 5, 20, 0, 100, 100]),
    (Rarity::FullOddsShiny, [0, 0, 10, 30, 0, 100, 100]),
    (Rarity::EventShiny, [0, 0, 10, 30, 0, 100, 100]),
];

/// Ball priority for a category.
pub fn priority(category: Category) -> &'static [Ball] {
    match category {
        Category::WildPokemon | Category::HeldItemPokemon => &STANDARD_PRIORITY,
        Category::Fishing => &FISHING_PRIORITY,
    }
}

/// Base rate of `ball` against a spawn, or `None` if the category's table has no entry.
///
/// Patron players have no table of their own; every wild lookup reads the
/// non-patron rows.
pub fn base_rate(category: Category, rarity: Rarity, ball: Ball) -> Option<f64> {
    let order = priority(category);
    let index = order.iter().position(|b| *b == ball)?;

    let rate = match category {
        Category::WildPokemon => row(&WILD, rarity)?.get(index).copied(),
        Category::HeldItemPokemon => row(&HELD_ITEM, rarity)?.get(index).copied(),
        Category::Fishing => row(&FISHING, rarity)?.get(index).copied(),
    }?;

    Some(f64::from(rate))
}

/// Signed percentage shift applied to fishing rates.
pub fn water_delta(state: WaterState) -> f64 {
    match state {
        WaterState::Calm => 5.0,
        WaterState::Moderate => 0.0,
        WaterState::Strong => -5.0,
        WaterState::Intense => -10.0,
        WaterState::Special => 10.0,
    }
}

fn row<const N: usize>(table: &'static [(Rarity, [u8; N])], rarity: Rarity) -> Option<&'static [u8]> {
    table
        .iter()
        .find(|(r, _)| *r == rarity)
        .map(|(_, rates)| rates.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: [Category; 3] = [
        Category::WildPokemon,
        Category::HeldItemPokemon,
        Category::Fishing,
    ];

    #[test]
    fn every_table_covers_every_rarity_and_ball() {
        for category in CATEGORIES {
            for rarity in Rarity::ALL {
                for ball in priority(category) {
                    let rate = base_rate(category, rarity, *ball);
                    assert!(
                        matches!(rate, Some(r) if (0.0..=100.0).contains(&r)),
                        "{category:?}/{rarity}/{ball} -> {rate:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn diveball_only_exists_for_fishing() {
        assert_eq!(base_rate(Category::WildPokemon, Rarity::Common, Ball::Diveball), None);
        assert_eq!(
            base_rate(Category::HeldItemPokemon, Rarity::Shiny, Ball::Diveball),
            None
        );
        assert_eq!(base_rate(Category::Fishing, Rarity::Legendary, Ball::Diveball), Some(100.0));
    }

    #[test]
    fn masterball_is_last_in_every_order() {
        for category in CATEGORIES {
            assert_eq!(priority(category).last(), Some(&Ball::Masterball));
        }
    }

    #[test]
    fn known_table_values() {
        assert_eq!(base_rate(Category::WildPokemon, Rarity::Common, Ball::Pokeball), Some(80.0));
        assert_eq!(
            base_rate(Category::HeldItemPokemon, Rarity::Legendary, Ball::Premierball),
            Some(50.0)
        );
        assert_eq!(base_rate(Category::Fishing, Rarity::Common, Ball::Pokeball), Some(55.0));
        assert_eq!(water_delta(WaterState::Intense), -10.0);
        assert_eq!(water_delta(WaterState::Calm), 5.0);
    }
}
