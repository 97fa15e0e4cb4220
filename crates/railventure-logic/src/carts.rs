//! Carts — purchasable permanent train upgrades.
//!
//! Each owned cart contributes one effect: raising a resource cap,
//! improving fuel efficiency, hardening against event penalties, or
//! generating station income. Effects of the same kind stack
//! additively across owned carts.

use serde::{Deserialize, Serialize};

use crate::resources::MaxResources;

/// What a cart does. One effect per cart; same-kind effects stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEffect {
    /// Raises the fuel cap.
    MaxFuel(u32),
    /// Raises the food cap.
    MaxFood(u32),
    /// Raises the water cap.
    MaxWater(u32),
    /// Reduces fuel burned per turn.
    FuelEfficiency(u32),
    /// Flat reduction of applied event penalties.
    Security(u32),
    /// Extra money earned at each station.
    Income(u32),
}

/// A purchasable cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub id: u32,
    pub name: String,
    pub price: u32,
    pub effect: CartEffect,
}

/// Whether the player can buy this cart. Boundary inclusive:
/// money equal to the price is enough.
pub fn can_purchase_cart(cart: &Cart, money: u32) -> bool {
    money >= cart.price
}

/// Effective resource caps: base caps plus every owned max-raising
/// cart. Non-cap effects leave the caps untouched.
pub fn apply_cart_effects(owned: &[Cart], base: MaxResources) -> MaxResources {
    let mut max = base;
    for cart in owned {
        match cart.effect {
            CartEffect::MaxFuel(v) => max.fuel += v,
            CartEffect::MaxFood(v) => max.food += v,
            CartEffect::MaxWater(v) => max.water += v,
            CartEffect::FuelEfficiency(_) | CartEffect::Security(_) | CartEffect::Income(_) => {}
        }
    }
    max
}

/// Total fuel saved per turn from fuel-efficiency carts.
pub fn fuel_efficiency_bonus(owned: &[Cart]) -> u32 {
    owned
        .iter()
        .map(|c| match c.effect {
            CartEffect::FuelEfficiency(v) => v,
            _ => 0,
        })
        .sum()
}

/// Total flat penalty reduction from security carts.
pub fn security_bonus(owned: &[Cart]) -> u32 {
    owned
        .iter()
        .map(|c| match c.effect {
            CartEffect::Security(v) => v,
            _ => 0,
        })
        .sum()
}

/// Total extra station income from income carts.
pub fn income_bonus(owned: &[Cart]) -> u32 {
    owned
        .iter()
        .map(|c| match c.effect {
            CartEffect::Income(v) => v,
            _ => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart(id: u32, price: u32, effect: CartEffect) -> Cart {
        Cart {
            id,
            name: format!("Cart {id}"),
            price,
            effect,
        }
    }

    fn base_max() -> MaxResources {
        MaxResources {
            food: 100,
            fuel: 120,
            water: 100,
        }
    }

    #[test]
    fn purchase_boundary_inclusive() {
        let c = cart(1, 70, CartEffect::Income(10));
        assert!(!can_purchase_cart(&c, 50));
        assert!(can_purchase_cart(&c, 70));
        assert!(can_purchase_cart(&c, 71));
    }

    #[test]
    fn max_effects_stack_additively() {
        let owned = vec![
            cart(1, 60, CartEffect::MaxFuel(30)),
            cart(2, 60, CartEffect::MaxFuel(30)),
        ];
        let max = apply_cart_effects(&owned, base_max());
        assert_eq!(max.fuel, 120 + 60);
        assert_eq!(max.food, 100);
        assert_eq!(max.water, 100);
    }

    #[test]
    fn non_cap_effects_leave_maxes_untouched() {
        let owned = vec![
            cart(1, 70, CartEffect::FuelEfficiency(2)),
            cart(2, 80, CartEffect::Security(5)),
            cart(3, 90, CartEffect::Income(10)),
        ];
        assert_eq!(apply_cart_effects(&owned, base_max()), base_max());
    }

    #[test]
    fn aggregators_sum_their_kind_only() {
        let owned = vec![
            cart(1, 70, CartEffect::FuelEfficiency(2)),
            cart(2, 70, CartEffect::FuelEfficiency(3)),
            cart(3, 80, CartEffect::Security(5)),
            cart(4, 90, CartEffect::Income(10)),
            cart(5, 60, CartEffect::MaxFood(30)),
        ];
        assert_eq!(fuel_efficiency_bonus(&owned), 5);
        assert_eq!(security_bonus(&owned), 5);
        assert_eq!(income_bonus(&owned), 10);
    }

    #[test]
    fn empty_ownership_means_no_bonuses() {
        assert_eq!(fuel_efficiency_bonus(&[]), 0);
        assert_eq!(security_bonus(&[]), 0);
        assert_eq!(income_bonus(&[]), 0);
        assert_eq!(apply_cart_effects(&[], base_max()), base_max());
    }
}
