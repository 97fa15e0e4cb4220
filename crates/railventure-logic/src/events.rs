//! Event resolution — random skill checks along the route.
//!
//! Each triggered event tests one stat against a difficulty:
//!
//! `total = dice + captain stat + matching card bonuses + matching crew count`
//!
//! The check succeeds when `total >= difficulty`. On failure the
//! event's penalty is returned verbatim — scaling by the security
//! multiplier happens at the state-commit layer, not here. Cards and
//! crew whose stat does not match the tested stat contribute exactly
//! nothing (exact-match filter, no partial credit).
//!
//! Dice are rolled by the caller and passed in, which keeps resolution
//! deterministic and unit-testable.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::captain::{CaptainStats, StatKind};
use crate::cards::BonusCard;
use crate::crew::{crew_event_bonus, security_penalty_multiplier, CrewMember};
use crate::resources::ResourceKind;

/// Probability that a turn (not ending in arrival or game end)
/// triggers an event.
pub const EVENT_TRIGGER_CHANCE: f64 = 0.4;

/// What a failed event costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenaltyKind {
    /// Lose an amount of the named resource.
    Resource(ResourceKind),
    /// Lose progress within the current country.
    Progress,
}

/// Penalty attached to an event definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Penalty {
    pub kind: PenaltyKind,
    pub amount: u32,
}

/// A skill-check event from the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub stat_tested: StatKind,
    pub difficulty: u32,
    pub penalty: Penalty,
}

/// Outcome of resolving one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResult {
    pub success: bool,
    /// The full score that was compared against the difficulty.
    pub total: u32,
    /// The event's penalty, unscaled, present only on failure.
    pub penalty: Option<Penalty>,
}

/// One trigger check per turn.
pub fn should_trigger_event(rng: &mut impl Rng) -> bool {
    rng.gen_bool(EVENT_TRIGGER_CHANCE)
}

/// Uniform pick from the event catalog. `None` on an empty catalog.
pub fn select_random_event(catalog: &[GameEvent], rng: &mut impl Rng) -> Option<GameEvent> {
    if catalog.is_empty() {
        return None;
    }
    Some(catalog[rng.gen_range(0..catalog.len())].clone())
}

/// Event dice: 2d6.
pub fn roll_event_dice(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=6) + rng.gen_range(1..=6)
}

/// Resolve an event against a dice roll already made.
pub fn resolve_event(
    event: &GameEvent,
    played_cards: &[BonusCard],
    captain: &CaptainStats,
    dice: u32,
    crew: &[CrewMember],
) -> EventResult {
    let card_bonus: u32 = played_cards
        .iter()
        .filter(|c| c.stat == event.stat_tested)
        .map(|c| c.bonus)
        .sum();
    let total = dice
        + u32::from(captain.get(event.stat_tested))
        + card_bonus
        + crew_event_bonus(crew, event.stat_tested);
    let success = total >= event.difficulty;

    EventResult {
        success,
        total,
        penalty: if success { None } else { Some(event.penalty) },
    }
}

/// Penalty amount after the security-crew multiplier, floored.
/// Applied by the state layer when a failed event is committed.
pub fn scaled_penalty_amount(amount: u32, security_crew: i32) -> u32 {
    (amount as f32 * security_penalty_multiplier(security_crew)).floor() as u32
}
