//! Cargo — collectible crates found en route.
//!
//! A cargo discovery is a separate random roll from event triggering.
//! Discovered items ride in the hold until the next station, where
//! each one is opened for a single resource reward. Rarity is a badge
//! only; the reward comes from the item definition.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::resources::ResourceKind;

/// Probability that a turn discovers a cargo item.
pub const CARGO_DISCOVERY_CHANCE: f64 = 0.2;

/// Cosmetic rarity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

/// What opening a cargo item yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoReward {
    pub resource: ResourceKind,
    pub amount: u32,
}

/// A discoverable cargo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoItem {
    pub id: u32,
    pub name: String,
    pub rarity: Rarity,
    pub reward: CargoReward,
}

/// One discovery check per turn.
pub fn should_discover_cargo(rng: &mut impl Rng) -> bool {
    rng.gen_bool(CARGO_DISCOVERY_CHANCE)
}

/// Uniform pick from the cargo catalog. `None` on an empty catalog.
pub fn select_random_cargo(catalog: &[CargoItem], rng: &mut impl Rng) -> Option<CargoItem> {
    if catalog.is_empty() {
        return None;
    }
    Some(catalog[rng.gen_range(0..catalog.len())].clone())
}
