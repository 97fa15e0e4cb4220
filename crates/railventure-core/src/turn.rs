//! Turn processing — one atomic state transition per player turn.
//!
//! A turn, in order: roll movement, consume resources, advance
//! position (with station arrival handling), then evaluate terminal
//! conditions. Event triggering and cargo discovery are surfaced as
//! pending flags on the [`TurnResult`] — they may need player
//! interaction (card selection) before they can be committed, so the
//! turn processor never resolves them itself.
//!
//! The processor never panics in normal play; the session guards the
//! "no captain/train selected" case before anything reaches here.

use rand::Rng;

use railventure_logic::cargo::{select_random_cargo, should_discover_cargo, CargoItem};
use railventure_logic::carts::{fuel_efficiency_bonus, income_bonus};
use railventure_logic::crew::{engineer_fuel_savings, CrewRole};
use railventure_logic::events::{select_random_event, should_trigger_event, GameEvent};
use railventure_logic::resources::ResourceKind;

use crate::state::{GameState, GameStatus, TurnDeltas, TurnResult};

/// Fixed per-turn consumption baselines.
pub mod consumption {
    /// Food eaten per turn by the whole crew.
    pub const FOOD_PER_TURN: u32 = 4;
    /// Water drunk per turn.
    pub const WATER_PER_TURN: u32 = 5;
    /// Fuel burned per turn before engineer and cart savings.
    pub const BASE_FUEL_BURN: u32 = 8;
    /// The engine always burns at least this much.
    pub const MIN_FUEL_BURN: u32 = 1;
}

/// Money granted on every station arrival, before income carts.
pub const STATION_MONEY_BASE: u32 = 25;

/// Fuel burned this turn after engineer and fuel-efficiency savings,
/// never below [`consumption::MIN_FUEL_BURN`].
pub fn fuel_burn(state: &GameState) -> u32 {
    let savings = engineer_fuel_savings(state.crew_in_role(CrewRole::Engineer))
        + fuel_efficiency_bonus(&state.owned_carts);
    consumption::BASE_FUEL_BURN
        .saturating_sub(savings)
        .max(consumption::MIN_FUEL_BURN)
}

/// Advance the game by one turn.
///
/// Mutates `state` in place and returns the [`TurnResult`] the UI
/// renders. A non-playing state is left untouched.
pub fn process_turn(
    state: &mut GameState,
    event_catalog: &[GameEvent],
    cargo_catalog: &[CargoItem],
    rng: &mut impl Rng,
) -> TurnResult {
    if state.status != GameStatus::Playing {
        return TurnResult {
            dice: 0,
            movement: 0,
            deltas: TurnDeltas::default(),
            country_index: state.current_country_index,
            progress_in_country: state.progress_in_country,
            arrived_at_station: false,
            opened_cargo: Vec::new(),
            pending_event: None,
            discovered_cargo: None,
            status: state.status,
        };
    }

    state.turn_count += 1;

    // 1. Movement roll.
    let dice: u32 = rng.gen_range(1..=6);
    let movement = dice + state.train.movement_bonus();

    // 2. Resource consumption.
    let fuel_consumed = fuel_burn(state);
    state.resources.subtract_floored(ResourceKind::Food, consumption::FOOD_PER_TURN);
    state.resources.subtract_floored(ResourceKind::Fuel, fuel_consumed);
    state
        .resources
        .subtract_floored(ResourceKind::Water, consumption::WATER_PER_TURN);

    // 3. Position update and station arrival.
    state.progress_in_country += movement;
    let distance = state.current_country().distance_required;
    let mut arrived = false;
    let mut reached_terminus = false;
    let mut money_earned = 0;
    let mut opened_cargo = Vec::new();

    if state.progress_in_country >= distance && !state.at_final_country() {
        arrived = true;
        // Carry the remainder into the next country.
        state.progress_in_country -= distance;
        state.current_country_index += 1;
        reached_terminus = state.at_final_country();

        let max = state.max_resources();
        state.resources.add_clamped(ResourceKind::Water, max.water, &max);
        money_earned = STATION_MONEY_BASE + income_bonus(&state.owned_carts);
        state.resources.add_clamped(ResourceKind::Money, money_earned, &max);

        // Open everything carried since the last station.
        for item in state.cargo_hold.drain(..) {
            state
                .resources
                .add_clamped(item.reward.resource, item.reward.amount, &max);
            opened_cargo.push(item);
        }
    }

    // 4. Terminal evaluation: depletion wins over victory.
    state.status = match state.depletion_reason() {
        Some(reason) => GameStatus::GameOver(reason),
        None if reached_terminus => GameStatus::Victory,
        None => GameStatus::Playing,
    };

    // 5. Pending flags, suppressed on arrival/terminal turns.
    let mut pending_event = None;
    if state.status == GameStatus::Playing && !arrived && should_trigger_event(rng) {
        pending_event = select_random_event(event_catalog, rng);
        state.pending_event = pending_event.clone();
    }

    let mut discovered_cargo = None;
    if state.status == GameStatus::Playing && should_discover_cargo(rng) {
        if let Some(item) = select_random_cargo(cargo_catalog, rng) {
            state.cargo_hold.push(item.clone());
            discovered_cargo = Some(item);
        }
    }

    TurnResult {
        dice,
        movement,
        deltas: TurnDeltas {
            food_consumed: consumption::FOOD_PER_TURN,
            fuel_consumed,
            water_consumed: consumption::WATER_PER_TURN,
            money_earned,
        },
        country_index: state.current_country_index,
        progress_in_country: state.progress_in_country,
        arrived_at_station: arrived,
        opened_cargo,
        pending_event,
        discovered_cargo,
        status: state.status,
    }
}
