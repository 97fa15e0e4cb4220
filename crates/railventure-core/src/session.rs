//! Game session controller — the single owner of game state.
//!
//! Replaces the usual global store with an explicit controller: it
//! owns the [`GameState`], the injected RNG, and the static data
//! tables, and exposes every UI-facing action as a method. Guarded
//! actions (unknown id, missing selection, wrong phase, not enough
//! money) are no-ops signaled by `bool`/`Option` returns — nothing in
//! here panics during normal play.

use rand::Rng;
use serde::{Deserialize, Serialize};

use railventure_logic::captain::{Captain, Train};
use railventure_logic::cards::{draw_initial_hand, play_cards, replenish_hand, BonusCard};
use railventure_logic::cargo::CargoItem;
use railventure_logic::carts::{can_purchase_cart, security_bonus, Cart};
use railventure_logic::catalog::{self, Country};
use railventure_logic::crew::{cycle_role, CrewMember, CrewRole};
use railventure_logic::events::{
    resolve_event, roll_event_dice, scaled_penalty_amount, EventResult, GameEvent, PenaltyKind,
};
use railventure_logic::resources::{MaxResources, ResourceKind, Resources};
use railventure_logic::rewards::{minigame_reward, quiz_reward};
use railventure_logic::shop::{apply_purchase, can_afford, order_total, ResourceOrder, ResourcePrices};

use crate::state::{GameState, GameStatus, TurnResult};
use crate::turn::process_turn;

/// Cap on a single mini-game payout.
pub const MINIGAME_MAX_REWARD: u32 = 50;

/// Static data tables a session runs on. [`Default`] wires up the
/// built-in catalog; the UI may substitute its own tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameData {
    pub captains: Vec<Captain>,
    pub trains: Vec<Train>,
    pub card_pool: Vec<BonusCard>,
    pub events: Vec<GameEvent>,
    pub shop_carts: Vec<Cart>,
    pub cargo_items: Vec<CargoItem>,
    pub route: Vec<Country>,
    pub prices: ResourcePrices,
    pub starting_crew: Vec<CrewMember>,
    pub starting_resources: Resources,
    pub base_max: MaxResources,
}

impl Default for GameData {
    fn default() -> Self {
        Self {
            captains: catalog::default_captains(),
            trains: catalog::default_trains(),
            card_pool: catalog::default_card_pool(),
            events: catalog::default_events(),
            shop_carts: catalog::default_carts(),
            cargo_items: catalog::default_cargo(),
            route: catalog::default_route(),
            prices: catalog::shop_prices(),
            starting_crew: catalog::starting_crew(),
            starting_resources: catalog::starting_resources(),
            base_max: catalog::base_max_resources(),
        }
    }
}

/// Penalty actually committed after security scaling, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedPenalty {
    pub kind: PenaltyKind,
    pub amount: u32,
}

/// Everything the UI needs to present one resolved event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOutcome {
    pub event: GameEvent,
    pub dice: u32,
    pub result: EventResult,
    pub applied_penalty: Option<AppliedPenalty>,
}

/// One game from captain pick to victory or game over.
pub struct GameSession<R: Rng> {
    data: GameData,
    rng: R,
    captain: Option<Captain>,
    train: Option<Train>,
    state: Option<GameState>,
    last_turn: Option<TurnResult>,
}

impl<R: Rng> GameSession<R> {
    /// Session on the built-in data tables.
    pub fn new(rng: R) -> Self {
        Self::with_data(GameData::default(), rng)
    }

    /// Session on caller-supplied data tables.
    pub fn with_data(data: GameData, rng: R) -> Self {
        Self {
            data,
            rng,
            captain: None,
            train: None,
            state: None,
            last_turn: None,
        }
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn last_turn(&self) -> Option<&TurnResult> {
        self.last_turn.as_ref()
    }

    /// Drop the displayed turn result. Called by the UI after rendering.
    pub fn clear_turn_result(&mut self) {
        self.last_turn = None;
    }

    // ── Setup ──────────────────────────────────────────────────────

    /// Pick a captain by id. No-op once the journey has started or
    /// for an unknown id.
    pub fn select_captain(&mut self, id: u32) -> bool {
        if self.state.is_some() {
            return false;
        }
        match self.data.captains.iter().find(|c| c.id == id) {
            Some(captain) => {
                self.captain = Some(captain.clone());
                true
            }
            None => false,
        }
    }

    /// Pick a train by id. Same guards as [`Self::select_captain`].
    pub fn select_train(&mut self, id: u32) -> bool {
        if self.state.is_some() {
            return false;
        }
        match self.data.trains.iter().find(|t| t.id == id) {
            Some(train) => {
                self.train = Some(train.clone());
                true
            }
            None => false,
        }
    }

    /// Begin the journey: hire the starting crew and draw the opening
    /// hand. Requires both picks; otherwise a warned no-op.
    pub fn start_journey(&mut self) -> bool {
        if self.state.is_some() {
            log::warn!("journey already started");
            return false;
        }
        let (Some(captain), Some(train)) = (self.captain.clone(), self.train.clone()) else {
            log::warn!("cannot start journey without captain and train");
            return false;
        };

        let hand = draw_initial_hand(&self.data.card_pool, &mut self.rng);
        log::info!(
            "journey started: captain {}, train {}, {} stops",
            captain.name,
            train.name,
            self.data.route.len()
        );
        self.state = Some(GameState {
            captain,
            train,
            crew: self.data.starting_crew.clone(),
            resources: self.data.starting_resources,
            base_max: self.data.base_max,
            owned_carts: Vec::new(),
            hand,
            cargo_hold: Vec::new(),
            route: self.data.route.clone(),
            current_country_index: 0,
            progress_in_country: 0,
            turn_count: 0,
            status: GameStatus::Playing,
            pending_event: None,
        });
        true
    }

    // ── Turn flow ──────────────────────────────────────────────────

    /// Advance one turn. `None` before the journey starts, after it
    /// ends, or while an event is still awaiting resolution.
    pub fn execute_turn(&mut self) -> Option<TurnResult> {
        let state = self.state.as_mut()?;
        if state.status != GameStatus::Playing || state.pending_event.is_some() {
            return None;
        }

        let result = process_turn(state, &self.data.events, &self.data.cargo_items, &mut self.rng);
        log::info!(
            "turn {}: moved {} to {} ({}/{})",
            state.turn_count,
            result.movement,
            state.current_country().name,
            result.progress_in_country,
            state.current_country().distance_required
        );
        if let Some(item) = &result.discovered_cargo {
            log::info!(
                "discovered cargo '{}' (+{} {})",
                item.name,
                item.reward.amount,
                item.reward.resource.label()
            );
        }
        if let GameStatus::GameOver(reason) = result.status {
            log::info!("game over: {}", reason.label());
        } else if result.status == GameStatus::Victory {
            log::info!("victory at {}", state.current_country().name);
        }
        self.last_turn = Some(result.clone());
        Some(result)
    }

    /// Resolve the pending event with the chosen cards. Rolls the
    /// event dice, commits the scaled penalty on failure, and
    /// replenishes the hand. `None` when no event is pending.
    pub fn resolve_pending_event(&mut self, card_ids: &[u32]) -> Option<EventOutcome> {
        let state = self.state.as_mut()?;
        let event = state.pending_event.take()?;

        let played: Vec<BonusCard> = state
            .hand
            .iter()
            .filter(|c| card_ids.contains(&c.id))
            .copied()
            .collect();
        let dice = roll_event_dice(&mut self.rng);
        let result = resolve_event(&event, &played, &state.captain.stats, dice, &state.crew);

        let remaining = play_cards(&state.hand, card_ids);
        state.hand = replenish_hand(&remaining, &self.data.card_pool, &mut self.rng);

        let applied_penalty = result.penalty.map(|penalty| {
            let scaled =
                scaled_penalty_amount(penalty.amount, state.crew_in_role(CrewRole::Security));
            let amount = scaled.saturating_sub(security_bonus(&state.owned_carts));
            match penalty.kind {
                PenaltyKind::Resource(kind) => state.resources.subtract_floored(kind, amount),
                PenaltyKind::Progress => {
                    state.progress_in_country = state.progress_in_country.saturating_sub(amount);
                }
            }
            AppliedPenalty {
                kind: penalty.kind,
                amount,
            }
        });

        if let Some(applied) = applied_penalty {
            match applied.kind {
                PenaltyKind::Resource(kind) => {
                    log::info!("penalty: -{} {}", applied.amount, kind.label());
                }
                PenaltyKind::Progress => {
                    log::info!("penalty: -{} progress", applied.amount);
                }
            }
        }

        // A resource penalty can end the game.
        if state.status == GameStatus::Playing {
            if let Some(reason) = state.depletion_reason() {
                state.status = GameStatus::GameOver(reason);
                log::info!("game over: {}", reason.label());
            }
        }

        log::info!(
            "event '{}' {}: total {} vs difficulty {}",
            event.name,
            if result.success { "passed" } else { "failed" },
            result.total,
            event.difficulty
        );
        Some(EventOutcome {
            event,
            dice,
            result,
            applied_penalty,
        })
    }

    // ── Crew ───────────────────────────────────────────────────────

    /// Cycle a crew member's role. Unknown id is a no-op.
    pub fn cycle_crew_role(&mut self, crew_id: u32) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        match state.crew.iter_mut().find(|m| m.id == crew_id) {
            Some(member) => {
                member.role = cycle_role(member.role);
                true
            }
            None => false,
        }
    }

    // ── Shop ───────────────────────────────────────────────────────

    /// Buy a cart by id. Gated on phase, catalog lookup, and money;
    /// duplicates are allowed and stack.
    pub fn purchase_cart(&mut self, cart_id: u32) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        if state.status != GameStatus::Playing {
            return false;
        }
        let Some(cart) = self.data.shop_carts.iter().find(|c| c.id == cart_id) else {
            return false;
        };
        if !can_purchase_cart(cart, state.resources.money) {
            return false;
        }
        state.resources.subtract_floored(ResourceKind::Money, cart.price);
        state.owned_carts.push(cart.clone());
        log::info!("purchased cart '{}' for {}", cart.name, cart.price);
        true
    }

    /// Buy consumables. Money is deducted here, after the
    /// affordability gate; quantities clamp to the effective caps.
    pub fn purchase_supplies(&mut self, order: ResourceOrder) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        if state.status != GameStatus::Playing {
            return false;
        }
        if !can_afford(&order, &self.data.prices, state.resources.money) {
            return false;
        }
        let total = order_total(&order, &self.data.prices);
        let max = state.max_resources();
        state.resources = apply_purchase(state.resources, &order, &max);
        state.resources.subtract_floored(ResourceKind::Money, total);
        true
    }

    // ── Station rewards ────────────────────────────────────────────

    /// Commit a mini-game result, returning the money earned.
    pub fn claim_minigame_reward(&mut self, score: u32, max_score: u32) -> Option<u32> {
        let state = self.state.as_mut()?;
        let amount = minigame_reward(score, max_score, MINIGAME_MAX_REWARD);
        let max = state.max_resources();
        state.resources.add_clamped(ResourceKind::Money, amount, &max);
        Some(amount)
    }

    /// Commit a quiz result, returning the money earned and rating.
    pub fn claim_quiz_reward(&mut self, correct: u32) -> Option<(u32, &'static str)> {
        let state = self.state.as_mut()?;
        let (amount, rating) = quiz_reward(correct);
        let max = state.max_resources();
        state.resources.add_clamped(ResourceKind::Money, amount, &max);
        Some((amount, rating))
    }
}
