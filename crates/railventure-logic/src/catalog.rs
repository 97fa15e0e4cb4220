//! Default data tables — captains, trains, cards, events, carts,
//! cargo, and the country route.
//!
//! The embedding UI may ship its own tables; these defaults make the
//! engine playable and testable stand-alone. Every table is a plain
//! function returning owned data, so callers can freely extend or
//! replace entries.

use serde::{Deserialize, Serialize};

use crate::captain::{Captain, CaptainStats, StatKind, Train};
use crate::cards::BonusCard;
use crate::cargo::{CargoItem, CargoReward, Rarity};
use crate::carts::{Cart, CartEffect};
use crate::crew::{CrewMember, CrewRole};
use crate::events::{GameEvent, Penalty, PenaltyKind};
use crate::resources::{MaxResources, ResourceKind, Resources};
use crate::shop::ResourcePrices;

/// One stop on the journey. Arriving at the last country wins the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    /// Progress needed to reach this country's station.
    pub distance_required: u32,
}

fn country(name: &str, distance_required: u32) -> Country {
    Country {
        name: name.to_string(),
        distance_required,
    }
}

/// The default route, west across Europe. Six stops.
pub fn default_route() -> Vec<Country> {
    vec![
        country("Finland", 10),
        country("Sweden", 12),
        country("Denmark", 12),
        country("Germany", 14),
        country("France", 13),
        country("Spain", 15),
    ]
}

/// Selectable captains.
pub fn default_captains() -> Vec<Captain> {
    vec![
        Captain {
            id: 1,
            name: "Ada Lindqvist".to_string(),
            stats: CaptainStats {
                engineering: 4,
                food: 3,
                security: 2,
            },
        },
        Captain {
            id: 2,
            name: "Marco Rossi".to_string(),
            stats: CaptainStats {
                engineering: 2,
                food: 4,
                security: 3,
            },
        },
        Captain {
            id: 3,
            name: "Nina Petrova".to_string(),
            stats: CaptainStats {
                engineering: 3,
                food: 2,
                security: 4,
            },
        },
    ]
}

/// Selectable trains.
pub fn default_trains() -> Vec<Train> {
    vec![
        Train {
            id: 1,
            name: "Swift Arrow".to_string(),
            speed: 5,
            reliability: 3,
            power: 2,
        },
        Train {
            id: 2,
            name: "Iron Duke".to_string(),
            speed: 2,
            reliability: 5,
            power: 4,
        },
        Train {
            id: 3,
            name: "Meridian".to_string(),
            speed: 4,
            reliability: 4,
            power: 3,
        },
    ]
}

/// The fixed six-card bonus pool cards are drawn from.
pub fn default_card_pool() -> Vec<BonusCard> {
    vec![
        BonusCard {
            id: 1,
            stat: StatKind::Engineering,
            bonus: 2,
        },
        BonusCard {
            id: 2,
            stat: StatKind::Engineering,
            bonus: 3,
        },
        BonusCard {
            id: 3,
            stat: StatKind::Food,
            bonus: 2,
        },
        BonusCard {
            id: 4,
            stat: StatKind::Food,
            bonus: 4,
        },
        BonusCard {
            id: 5,
            stat: StatKind::Security,
            bonus: 2,
        },
        BonusCard {
            id: 6,
            stat: StatKind::Security,
            bonus: 3,
        },
    ]
}

fn event(
    id: u32,
    name: &str,
    description: &str,
    stat_tested: StatKind,
    difficulty: u32,
    penalty: Penalty,
) -> GameEvent {
    GameEvent {
        id,
        name: name.to_string(),
        description: description.to_string(),
        stat_tested,
        difficulty,
        penalty,
    }
}

/// The event catalog. Covers all three stats and both penalty kinds.
pub fn default_events() -> Vec<GameEvent> {
    vec![
        event(
            1,
            "Engine overheat",
            "The boiler is running far too hot.",
            StatKind::Engineering,
            9,
            Penalty {
                kind: PenaltyKind::Resource(ResourceKind::Fuel),
                amount: 15,
            },
        ),
        event(
            2,
            "Water tank leak",
            "A seam has split on the tender tank.",
            StatKind::Engineering,
            10,
            Penalty {
                kind: PenaltyKind::Resource(ResourceKind::Water),
                amount: 12,
            },
        ),
        event(
            3,
            "Signal failure",
            "The line ahead is dark. Proceed carefully or wait.",
            StatKind::Engineering,
            11,
            Penalty {
                kind: PenaltyKind::Progress,
                amount: 4,
            },
        ),
        event(
            4,
            "Spoiled provisions",
            "Something in the pantry has gone off.",
            StatKind::Food,
            8,
            Penalty {
                kind: PenaltyKind::Resource(ResourceKind::Food),
                amount: 12,
            },
        ),
        event(
            5,
            "Galley fire",
            "Grease fire in the dining car kitchen.",
            StatKind::Food,
            10,
            Penalty {
                kind: PenaltyKind::Resource(ResourceKind::Food),
                amount: 18,
            },
        ),
        event(
            6,
            "Track bandits",
            "Riders are pacing the train.",
            StatKind::Security,
            10,
            Penalty {
                kind: PenaltyKind::Resource(ResourceKind::Money),
                amount: 20,
            },
        ),
        event(
            7,
            "Pickpockets aboard",
            "A light-fingered stowaway works the corridor.",
            StatKind::Security,
            8,
            Penalty {
                kind: PenaltyKind::Resource(ResourceKind::Money),
                amount: 10,
            },
        ),
        event(
            8,
            "Landslide on the line",
            "Rubble blocks the cutting ahead.",
            StatKind::Security,
            12,
            Penalty {
                kind: PenaltyKind::Progress,
                amount: 6,
            },
        ),
    ]
}

/// The cart shop. One cart per effect kind.
pub fn default_carts() -> Vec<Cart> {
    vec![
        Cart {
            id: 1,
            name: "Fuel tender".to_string(),
            price: 60,
            effect: CartEffect::MaxFuel(30),
        },
        Cart {
            id: 2,
            name: "Refrigerator car".to_string(),
            price: 55,
            effect: CartEffect::MaxFood(30),
        },
        Cart {
            id: 3,
            name: "Water tanker".to_string(),
            price: 50,
            effect: CartEffect::MaxWater(30),
        },
        Cart {
            id: 4,
            name: "Streamlined fairing".to_string(),
            price: 70,
            effect: CartEffect::FuelEfficiency(2),
        },
        Cart {
            id: 5,
            name: "Armored car".to_string(),
            price: 80,
            effect: CartEffect::Security(5),
        },
        Cart {
            id: 6,
            name: "Dining car".to_string(),
            price: 90,
            effect: CartEffect::Income(10),
        },
    ]
}

/// The cargo catalog.
pub fn default_cargo() -> Vec<CargoItem> {
    let item = |id: u32, name: &str, rarity: Rarity, resource: ResourceKind, amount: u32| CargoItem {
        id,
        name: name.to_string(),
        rarity,
        reward: CargoReward { resource, amount },
    };
    vec![
        item(1, "Crate of preserves", Rarity::Common, ResourceKind::Food, 10),
        item(2, "Coal bundle", Rarity::Common, ResourceKind::Fuel, 10),
        item(3, "Spring water barrels", Rarity::Common, ResourceKind::Water, 10),
        item(4, "Bolt of silk", Rarity::Rare, ResourceKind::Money, 25),
        item(5, "Clockwork toy", Rarity::Rare, ResourceKind::Money, 15),
        item(6, "Golden pocket watch", Rarity::Legendary, ResourceKind::Money, 40),
    ]
}

/// The starting crew of four, one per role.
pub fn starting_crew() -> Vec<CrewMember> {
    let member = |id: u32, name: &str, role: CrewRole, avatar: &str| CrewMember {
        id,
        name: name.to_string(),
        role,
        avatar: avatar.to_string(),
    };
    vec![
        member(1, "Otto", CrewRole::Engineer, "wrench"),
        member(2, "Greta", CrewRole::Cook, "ladle"),
        member(3, "Sigrid", CrewRole::Security, "shield"),
        member(4, "Per", CrewRole::Free, "cap"),
    ]
}

/// Starting resource pools.
pub fn starting_resources() -> Resources {
    Resources {
        food: 80,
        fuel: 100,
        water: 90,
        money: 120,
    }
}

/// Base resource caps before cart effects.
pub fn base_max_resources() -> MaxResources {
    MaxResources {
        food: 100,
        fuel: 120,
        water: 100,
    }
}

/// Per-unit shop prices, the same at every station.
pub fn shop_prices() -> ResourcePrices {
    ResourcePrices {
        food: 2,
        fuel: 3,
        water: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_has_at_least_six_countries() {
        let route = default_route();
        assert!(route.len() >= 6);
        for c in &route {
            assert!(c.distance_required > 0);
        }
    }

    #[test]
    fn captains_and_trains_stats_in_range() {
        for c in default_captains() {
            for stat in StatKind::ALL {
                let v = c.stats.get(stat);
                assert!((1..=6).contains(&v), "{}: {} = {v}", c.name, stat.label());
            }
        }
        for t in default_trains() {
            assert!((1..=6).contains(&t.speed));
            assert!((1..=6).contains(&t.reliability));
            assert!((1..=6).contains(&t.power));
        }
    }

    #[test]
    fn card_pool_is_six_with_bonus_range() {
        let pool = default_card_pool();
        assert_eq!(pool.len(), 6);
        for card in &pool {
            assert!((2..=4).contains(&card.bonus));
        }
    }

    #[test]
    fn events_cover_all_stats_and_penalty_kinds() {
        let events = default_events();
        let stats: HashSet<_> = events.iter().map(|e| e.stat_tested).collect();
        assert_eq!(stats.len(), StatKind::ALL.len());
        assert!(events
            .iter()
            .any(|e| matches!(e.penalty.kind, PenaltyKind::Progress)));
        assert!(events
            .iter()
            .any(|e| matches!(e.penalty.kind, PenaltyKind::Resource(_))));
    }

    #[test]
    fn carts_cover_every_effect_kind() {
        let carts = default_carts();
        assert!(carts.iter().any(|c| matches!(c.effect, CartEffect::MaxFuel(_))));
        assert!(carts.iter().any(|c| matches!(c.effect, CartEffect::MaxFood(_))));
        assert!(carts.iter().any(|c| matches!(c.effect, CartEffect::MaxWater(_))));
        assert!(carts
            .iter()
            .any(|c| matches!(c.effect, CartEffect::FuelEfficiency(_))));
        assert!(carts.iter().any(|c| matches!(c.effect, CartEffect::Security(_))));
        assert!(carts.iter().any(|c| matches!(c.effect, CartEffect::Income(_))));
    }

    #[test]
    fn cargo_covers_every_rarity() {
        let cargo = default_cargo();
        for rarity in [Rarity::Common, Rarity::Rare, Rarity::Legendary] {
            assert!(cargo.iter().any(|c| c.rarity == rarity));
        }
    }

    #[test]
    fn unique_ids_per_table() {
        fn all_unique(ids: Vec<u32>) -> bool {
            let set: HashSet<_> = ids.iter().collect();
            set.len() == ids.len()
        }
        assert!(all_unique(default_captains().iter().map(|c| c.id).collect()));
        assert!(all_unique(default_trains().iter().map(|t| t.id).collect()));
        assert!(all_unique(default_card_pool().iter().map(|c| c.id).collect()));
        assert!(all_unique(default_events().iter().map(|e| e.id).collect()));
        assert!(all_unique(default_carts().iter().map(|c| c.id).collect()));
        assert!(all_unique(default_cargo().iter().map(|c| c.id).collect()));
        assert!(all_unique(starting_crew().iter().map(|m| m.id).collect()));
    }

    #[test]
    fn tables_serialize_for_the_ui() {
        let json = serde_json::to_string(&default_events()).expect("events serialize");
        let back: Vec<GameEvent> = serde_json::from_str(&json).expect("events deserialize");
        assert_eq!(back, default_events());
        let json = serde_json::to_string(&default_route()).expect("route serializes");
        let back: Vec<Country> = serde_json::from_str(&json).expect("route deserializes");
        assert_eq!(back, default_route());
    }

    #[test]
    fn starting_resources_within_base_caps() {
        let res = starting_resources();
        let max = base_max_resources();
        assert!(res.food <= max.food);
        assert!(res.fuel <= max.fuel);
        assert!(res.water <= max.water);
    }
}
