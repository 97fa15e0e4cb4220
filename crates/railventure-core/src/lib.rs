//! Railventure game engine.
//!
//! Owns the canonical [`state::GameState`], processes turns atomically,
//! and exposes every UI-facing action through [`session::GameSession`].
//! All rules live in `railventure-logic`; this crate is the state
//! layer that commits them. Randomness is injected (`rand::Rng`) so a
//! seeded generator replays a whole journey deterministically.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | Owning controller: setup, turns, events, shop, rewards |
//! | [`state`] | `GameState`, `GameStatus`, `TurnResult` |
//! | [`turn`] | The atomic per-turn state transition |

pub mod session;
pub mod state;
pub mod turn;

pub use session::{AppliedPenalty, EventOutcome, GameData, GameSession};
pub use state::{GameOverReason, GameState, GameStatus, TurnResult};
