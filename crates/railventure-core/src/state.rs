//! Canonical game state and per-turn result types.
//!
//! [`GameState`] is the single aggregate the whole game mutates —
//! there is no global store. It is owned by the session controller
//! and passed by reference into the turn processor. [`TurnResult`] is
//! the ephemeral record of one turn, handed to the UI and explicitly
//! cleared once displayed.

use serde::{Deserialize, Serialize};

use railventure_logic::captain::{Captain, Train};
use railventure_logic::cards::BonusCard;
use railventure_logic::cargo::CargoItem;
use railventure_logic::carts::{apply_cart_effects, Cart};
use railventure_logic::catalog::Country;
use railventure_logic::crew::{CrewMember, CrewRole};
use railventure_logic::events::GameEvent;
use railventure_logic::resources::{MaxResources, ResourceKind, Resources};

/// Why the journey ended early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    Starvation,
    OutOfFuel,
    Dehydration,
    Broke,
}

impl GameOverReason {
    pub fn label(&self) -> &'static str {
        match self {
            GameOverReason::Starvation => "starvation",
            GameOverReason::OutOfFuel => "out_of_fuel",
            GameOverReason::Dehydration => "dehydration",
            GameOverReason::Broke => "broke",
        }
    }

    fn from_resource(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Food => GameOverReason::Starvation,
            ResourceKind::Fuel => GameOverReason::OutOfFuel,
            ResourceKind::Water => GameOverReason::Dehydration,
            ResourceKind::Money => GameOverReason::Broke,
        }
    }
}

/// Derived game status, re-evaluated on every committed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Victory,
    GameOver(GameOverReason),
}

/// The complete mutable state of one game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub captain: Captain,
    pub train: Train,
    pub crew: Vec<CrewMember>,
    pub resources: Resources,
    /// Caps before cart effects; effective caps come from
    /// [`GameState::max_resources`].
    pub base_max: MaxResources,
    pub owned_carts: Vec<Cart>,
    pub hand: Vec<BonusCard>,
    /// Cargo carried until the next station.
    pub cargo_hold: Vec<CargoItem>,
    pub route: Vec<Country>,
    pub current_country_index: usize,
    pub progress_in_country: u32,
    pub turn_count: u32,
    pub status: GameStatus,
    /// Event awaiting player card selection before resolution.
    pub pending_event: Option<GameEvent>,
}

impl GameState {
    /// Effective resource caps: base caps plus owned cart effects.
    pub fn max_resources(&self) -> MaxResources {
        apply_cart_effects(&self.owned_carts, self.base_max)
    }

    pub fn current_country(&self) -> &Country {
        &self.route[self.current_country_index]
    }

    pub fn at_final_country(&self) -> bool {
        self.current_country_index + 1 == self.route.len()
    }

    /// Number of crew in a given role.
    pub fn crew_in_role(&self, role: CrewRole) -> i32 {
        self.crew.iter().filter(|m| m.role == role).count() as i32
    }

    /// First depleted resource in the fixed check order
    /// food, fuel, water, money — the deterministic tie-break.
    pub fn depletion_reason(&self) -> Option<GameOverReason> {
        ResourceKind::ALL
            .iter()
            .find(|&&kind| self.resources.is_depleted(kind))
            .map(|&kind| GameOverReason::from_resource(kind))
    }
}

/// Resource movement during one turn, as displayed by the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnDeltas {
    pub food_consumed: u32,
    pub fuel_consumed: u32,
    pub water_consumed: u32,
    pub money_earned: u32,
}

/// Everything that happened in one processed turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnResult {
    pub dice: u32,
    pub movement: u32,
    pub deltas: TurnDeltas,
    pub country_index: usize,
    pub progress_in_country: u32,
    pub arrived_at_station: bool,
    /// Cargo opened at this turn's station arrival (rewards already
    /// committed).
    pub opened_cargo: Vec<CargoItem>,
    /// Event awaiting resolution; also stored on the state.
    pub pending_event: Option<GameEvent>,
    pub discovered_cargo: Option<CargoItem>,
    pub status: GameStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use railventure_logic::catalog::{
        base_max_resources, default_captains, default_route, default_trains, starting_crew,
        starting_resources,
    };

    fn state() -> GameState {
        GameState {
            captain: default_captains()[0].clone(),
            train: default_trains()[0].clone(),
            crew: starting_crew(),
            resources: starting_resources(),
            base_max: base_max_resources(),
            owned_carts: Vec::new(),
            hand: Vec::new(),
            cargo_hold: Vec::new(),
            route: default_route(),
            current_country_index: 0,
            progress_in_country: 0,
            turn_count: 0,
            status: GameStatus::Playing,
            pending_event: None,
        }
    }

    #[test]
    fn no_depletion_at_start() {
        assert_eq!(state().depletion_reason(), None);
    }

    #[test]
    fn depletion_tie_break_is_food_first() {
        let mut s = state();
        s.resources.food = 0;
        s.resources.fuel = 0;
        s.resources.money = 0;
        assert_eq!(s.depletion_reason(), Some(GameOverReason::Starvation));
        s.resources.food = 10;
        assert_eq!(s.depletion_reason(), Some(GameOverReason::OutOfFuel));
        s.resources.fuel = 10;
        assert_eq!(s.depletion_reason(), Some(GameOverReason::Broke));
    }

    #[test]
    fn final_country_detection() {
        let mut s = state();
        assert!(!s.at_final_country());
        s.current_country_index = s.route.len() - 1;
        assert!(s.at_final_country());
    }

    #[test]
    fn crew_role_counts() {
        let s = state();
        assert_eq!(s.crew_in_role(CrewRole::Engineer), 1);
        assert_eq!(s.crew_in_role(CrewRole::Cook), 1);
        assert_eq!(s.crew_in_role(CrewRole::Security), 1);
        assert_eq!(s.crew_in_role(CrewRole::Free), 1);
    }

    #[test]
    fn game_over_reason_labels() {
        assert_eq!(GameOverReason::Starvation.label(), "starvation");
        assert_eq!(GameOverReason::OutOfFuel.label(), "out_of_fuel");
        assert_eq!(GameOverReason::Dehydration.label(), "dehydration");
        assert_eq!(GameOverReason::Broke.label(), "broke");
    }

    #[test]
    fn turn_result_serializes_for_the_ui() {
        let result = TurnResult {
            dice: 4,
            movement: 6,
            deltas: TurnDeltas {
                food_consumed: 4,
                fuel_consumed: 6,
                water_consumed: 5,
                money_earned: 0,
            },
            country_index: 0,
            progress_in_country: 6,
            arrived_at_station: false,
            opened_cargo: Vec::new(),
            pending_event: None,
            discovered_cargo: None,
            status: GameStatus::Playing,
        };
        let json = serde_json::to_string(&result).expect("serialize");
        let back: TurnResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.movement, 6);
        assert_eq!(back.status, GameStatus::Playing);
    }
}
