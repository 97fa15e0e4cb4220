//! Station shop — buying consumable resources.
//!
//! The shop works on a quantity order priced per unit. All checks are
//! boolean gates decided by the caller before any state mutation;
//! nothing here panics or errors. Money is deducted by the caller
//! after the affordability gate, never by [`apply_purchase`].

use serde::{Deserialize, Serialize};

use crate::resources::{MaxResources, ResourceKind, Resources};

/// Quantities of consumables the player wants to buy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceOrder {
    pub food: u32,
    pub fuel: u32,
    pub water: u32,
}

/// Per-unit prices at the station shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePrices {
    pub food: u32,
    pub fuel: u32,
    pub water: u32,
}

/// Total cost of an order, saturating at `u32::MAX` so absurd
/// quantities from the UI can never wrap past the affordability gate.
pub fn order_total(order: &ResourceOrder, prices: &ResourcePrices) -> u32 {
    order
        .food
        .saturating_mul(prices.food)
        .saturating_add(order.fuel.saturating_mul(prices.fuel))
        .saturating_add(order.water.saturating_mul(prices.water))
}

/// Whether the order fits the player's money (boundary inclusive).
pub fn can_afford(order: &ResourceOrder, prices: &ResourcePrices, money: u32) -> bool {
    order_total(order, prices) <= money
}

/// Add the ordered quantities, each independently clamped to its cap.
/// Never decreases any resource and never touches money.
pub fn apply_purchase(resources: Resources, order: &ResourceOrder, max: &MaxResources) -> Resources {
    let mut out = resources;
    out.add_clamped(ResourceKind::Food, order.food, max);
    out.add_clamped(ResourceKind::Fuel, order.fuel, max);
    out.add_clamped(ResourceKind::Water, order.water, max);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices() -> ResourcePrices {
        ResourcePrices {
            food: 2,
            fuel: 3,
            water: 1,
        }
    }

    fn state() -> (Resources, MaxResources) {
        (
            Resources {
                food: 90,
                fuel: 50,
                water: 40,
                money: 100,
            },
            MaxResources {
                food: 100,
                fuel: 120,
                water: 100,
            },
        )
    }

    #[test]
    fn total_is_weighted_sum() {
        let order = ResourceOrder {
            food: 10,
            fuel: 5,
            water: 20,
        };
        assert_eq!(order_total(&order, &prices()), 10 * 2 + 5 * 3 + 20 * 1);
    }

    #[test]
    fn afford_boundary_inclusive() {
        let order = ResourceOrder {
            food: 10,
            fuel: 0,
            water: 0,
        };
        assert!(can_afford(&order, &prices(), 20));
        assert!(!can_afford(&order, &prices(), 19));
    }

    #[test]
    fn purchase_clamps_each_resource_independently() {
        let (res, max) = state();
        let order = ResourceOrder {
            food: 50, // would exceed 100
            fuel: 10,
            water: 0,
        };
        let out = apply_purchase(res, &order, &max);
        assert_eq!(out.food, 100);
        assert_eq!(out.fuel, 60);
        assert_eq!(out.water, 40);
    }

    #[test]
    fn purchase_never_decreases_and_never_touches_money() {
        let (res, max) = state();
        let out = apply_purchase(
            res,
            &ResourceOrder {
                food: 1,
                fuel: 1,
                water: 1,
            },
            &max,
        );
        assert!(out.food >= res.food);
        assert!(out.fuel >= res.fuel);
        assert!(out.water >= res.water);
        assert_eq!(out.money, res.money);
    }

    #[test]
    fn absurd_order_saturates_instead_of_wrapping() {
        let order = ResourceOrder {
            food: u32::MAX / 2,
            fuel: u32::MAX / 2,
            water: 3,
        };
        assert_eq!(order_total(&order, &prices()), u32::MAX);
        assert!(!can_afford(&order, &prices(), u32::MAX - 1));
    }

    #[test]
    fn empty_order_is_free_noop() {
        let (res, max) = state();
        let order = ResourceOrder::default();
        assert_eq!(order_total(&order, &prices()), 0);
        assert!(can_afford(&order, &prices(), 0));
        assert_eq!(apply_purchase(res, &order, &max), res);
    }
}
