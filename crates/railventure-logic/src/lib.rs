//! Pure rules logic for Railventure.
//!
//! This crate contains all game rules that are independent of any
//! state container, UI, or runtime. Functions take plain data and
//! return results; every random decision takes an injected
//! `rand::Rng`, so the whole rule set is deterministic under a seeded
//! generator and unit-testable.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`captain`] | Captain/train picks and the tested stat categories |
//! | [`cards`] | Bonus card hand: draw, play, replenish |
//! | [`cargo`] | Cargo discovery and station-opening rewards |
//! | [`carts`] | Cart upgrades: cap raises and passive bonuses |
//! | [`catalog`] | Default data tables and the country route |
//! | [`crew`] | Crew roles, role cycling, passive crew bonuses |
//! | [`events`] | Skill-check resolution: dice + stat + cards + crew |
//! | [`resources`] | Resource pools, caps, clamped mutation |
//! | [`rewards`] | Mini-game and quiz reward calculators |
//! | [`shop`] | Station shop orders, affordability, purchase |

pub mod captain;
pub mod cards;
pub mod cargo;
pub mod carts;
pub mod catalog;
pub mod crew;
pub mod events;
pub mod resources;
pub mod rewards;
pub mod shop;
