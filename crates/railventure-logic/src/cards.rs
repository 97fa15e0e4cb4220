//! Bonus card hand management.
//!
//! Cards are drawn uniformly at random from a fixed pool (duplicates
//! allowed) into a hand of [`HAND_SIZE`]. Playing cards removes them
//! by id; the hand is replenished back to full size from the same
//! pool. Outside a mid-resolution transient the hand always holds
//! exactly [`HAND_SIZE`] cards.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::captain::StatKind;

/// Cards held in hand at any time outside event resolution.
pub const HAND_SIZE: usize = 3;

/// A single-use card adding a flat bonus to one stat during event
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusCard {
    pub id: u32,
    pub stat: StatKind,
    /// Flat bonus (2–4 in the default pool).
    pub bonus: u32,
}

fn draw_one(pool: &[BonusCard], rng: &mut impl Rng) -> Option<BonusCard> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.gen_range(0..pool.len())])
}

/// Draw a fresh hand of [`HAND_SIZE`] independent uniform picks from
/// the pool. Duplicates are allowed. An empty pool yields an empty
/// hand.
pub fn draw_initial_hand(pool: &[BonusCard], rng: &mut impl Rng) -> Vec<BonusCard> {
    (0..HAND_SIZE)
        .filter_map(|_| draw_one(pool, rng))
        .collect()
}

/// Remove every card whose id appears in `ids`. Unknown ids are
/// silently ignored. The input hand is not mutated.
pub fn play_cards(hand: &[BonusCard], ids: &[u32]) -> Vec<BonusCard> {
    hand.iter()
        .filter(|c| !ids.contains(&c.id))
        .copied()
        .collect()
}

/// Draw uniformly from the pool until the hand reaches [`HAND_SIZE`].
/// A hand already at or above full size (or an empty pool) leaves the
/// hand unchanged. The input hand is not mutated.
pub fn replenish_hand(hand: &[BonusCard], pool: &[BonusCard], rng: &mut impl Rng) -> Vec<BonusCard> {
    let mut out = hand.to_vec();
    while out.len() < HAND_SIZE {
        match draw_one(pool, rng) {
            Some(card) => out.push(card),
            None => break,
        }
    }
    out
}
