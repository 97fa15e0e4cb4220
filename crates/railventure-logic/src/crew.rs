//! Crew roles and their passive bonuses.
//!
//! Each crew member holds one of four roles, cyclable by the player in
//! a fixed order. Roles grant passive effects:
//!
//! | Role | Effect |
//! |------|--------|
//! | Engineer | −2 fuel burned per turn each |
//! | Cook | +1 to food-stat event checks each |
//! | Security | −15% event penalty each (capped at 4) |
//! | Free | no passive effect |
//!
//! An engineer also counts toward engineering-stat event checks, and a
//! security member toward security-stat checks.

use serde::{Deserialize, Serialize};

use crate::captain::StatKind;

/// A crew member's assigned role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrewRole {
    Engineer,
    Cook,
    Security,
    Free,
}

impl CrewRole {
    /// All roles in cycle order.
    pub const ALL: [CrewRole; 4] = [
        CrewRole::Engineer,
        CrewRole::Cook,
        CrewRole::Security,
        CrewRole::Free,
    ];

    /// The stat this role contributes to in event checks, if any.
    pub fn event_stat(&self) -> Option<StatKind> {
        match self {
            CrewRole::Engineer => Some(StatKind::Engineering),
            CrewRole::Cook => Some(StatKind::Food),
            CrewRole::Security => Some(StatKind::Security),
            CrewRole::Free => None,
        }
    }
}

/// A single crew member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: u32,
    pub name: String,
    pub role: CrewRole,
    pub avatar: String,
}

/// Advance a role to the next in the fixed cycle
/// engineer → cook → security → free → engineer.
pub fn cycle_role(role: CrewRole) -> CrewRole {
    match role {
        CrewRole::Engineer => CrewRole::Cook,
        CrewRole::Cook => CrewRole::Security,
        CrewRole::Security => CrewRole::Free,
        CrewRole::Free => CrewRole::Engineer,
    }
}

/// Fuel saved per turn by engineers: 2 per engineer, never negative.
pub fn engineer_fuel_savings(count: i32) -> u32 {
    count.max(0) as u32 * 2
}

/// Penalty multiplier from security crew: `1 − 0.15 × clamp(count, 0, 4)`.
///
/// Ranges from 1.00 (no security) down to 0.40 (4 or more), and is
/// monotonically non-increasing in `count`.
pub fn security_penalty_multiplier(count: i32) -> f32 {
    1.0 - 0.15 * count.clamp(0, 4) as f32
}

/// Number of crew whose role matches the tested stat. Free crew never
/// contribute. Used additively in event resolution.
pub fn crew_event_bonus(crew: &[CrewMember], stat: StatKind) -> u32 {
    crew.iter()
        .filter(|m| m.role.event_stat() == Some(stat))
        .count() as u32
}
