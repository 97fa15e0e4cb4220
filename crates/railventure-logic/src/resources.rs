//! Resource pools and their caps.
//!
//! Four depleting resources (food, fuel, water, money) drive the whole
//! game. Food, fuel and water are capped by [`MaxResources`] (raised by
//! owned carts); money is uncapped. Every mutation goes through the
//! clamped/floored helpers here, which keeps the core invariant —
//! `0 ≤ value ≤ max` for capped resources — in one place.

use serde::{Deserialize, Serialize};

/// The four resource categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Food,
    Fuel,
    Water,
    Money,
}

impl ResourceKind {
    /// All resource kinds, in the deterministic game-over check order.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Food,
        ResourceKind::Fuel,
        ResourceKind::Water,
        ResourceKind::Money,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Food => "food",
            ResourceKind::Fuel => "fuel",
            ResourceKind::Water => "water",
            ResourceKind::Money => "money",
        }
    }
}

/// Current resource pools. All values are non-negative integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub food: u32,
    pub fuel: u32,
    pub water: u32,
    pub money: u32,
}

/// Caps for the three storable resources. Money has no cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxResources {
    pub food: u32,
    pub fuel: u32,
    pub water: u32,
}

impl MaxResources {
    /// Cap for a resource kind; `None` for money (uncapped).
    pub fn cap(&self, kind: ResourceKind) -> Option<u32> {
        match kind {
            ResourceKind::Food => Some(self.food),
            ResourceKind::Fuel => Some(self.fuel),
            ResourceKind::Water => Some(self.water),
            ResourceKind::Money => None,
        }
    }
}

impl Resources {
    pub fn get(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Food => self.food,
            ResourceKind::Fuel => self.fuel,
            ResourceKind::Water => self.water,
            ResourceKind::Money => self.money,
        }
    }

    fn set(&mut self, kind: ResourceKind, value: u32) {
        match kind {
            ResourceKind::Food => self.food = value,
            ResourceKind::Fuel => self.fuel = value,
            ResourceKind::Water => self.water = value,
            ResourceKind::Money => self.money = value,
        }
    }

    /// Add `amount`, clamped to the cap for that kind (money is uncapped).
    pub fn add_clamped(&mut self, kind: ResourceKind, amount: u32, max: &MaxResources) {
        let raised = self.get(kind).saturating_add(amount);
        let value = match max.cap(kind) {
            Some(cap) => raised.min(cap),
            None => raised,
        };
        self.set(kind, value);
    }

    /// Subtract `amount`, floored at 0.
    pub fn subtract_floored(&mut self, kind: ResourceKind, amount: u32) {
        self.set(kind, self.get(kind).saturating_sub(amount));
    }

    pub fn is_depleted(&self, kind: ResourceKind) -> bool {
        self.get(kind) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> (Resources, MaxResources) {
        (
            Resources {
                food: 50,
                fuel: 60,
                water: 70,
                money: 100,
            },
            MaxResources {
                food: 100,
                fuel: 80,
                water: 90,
            },
        )
    }

    #[test]
    fn add_clamps_to_cap() {
        let (mut res, max) = base();
        res.add_clamped(ResourceKind::Fuel, 500, &max);
        assert_eq!(res.fuel, 80);
    }

    #[test]
    fn add_below_cap_is_exact() {
        let (mut res, max) = base();
        res.add_clamped(ResourceKind::Food, 10, &max);
        assert_eq!(res.food, 60);
    }

    #[test]
    fn money_is_uncapped() {
        let (mut res, max) = base();
        res.add_clamped(ResourceKind::Money, 1_000_000, &max);
        assert_eq!(res.money, 1_000_100);
    }

    #[test]
    fn subtract_floors_at_zero() {
        let (mut res, _) = base();
        res.subtract_floored(ResourceKind::Water, 1000);
        assert_eq!(res.water, 0);
        assert!(res.is_depleted(ResourceKind::Water));
    }

    #[test]
    fn kind_labels() {
        assert_eq!(ResourceKind::Food.label(), "food");
        assert_eq!(ResourceKind::Fuel.label(), "fuel");
        assert_eq!(ResourceKind::Water.label(), "water");
        assert_eq!(ResourceKind::Money.label(), "money");
    }

    #[test]
    fn check_order_is_food_fuel_water_money() {
        assert_eq!(
            ResourceKind::ALL,
            [
                ResourceKind::Food,
                ResourceKind::Fuel,
                ResourceKind::Water,
                ResourceKind::Money
            ]
        );
    }
}
