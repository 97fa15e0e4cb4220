//! Captains and trains — the two immutable picks made at game start.
//!
//! A captain carries one stat per tested category (engineering, food,
//! security), each in 1–6. A train carries speed/reliability/power in
//! the same range. Both are chosen once per session and never mutated.

use serde::{Deserialize, Serialize};

/// Stat categories tested by events and boosted by cards and crew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Engineering,
    Food,
    Security,
}

impl StatKind {
    /// All stat categories in order.
    pub const ALL: [StatKind; 3] = [StatKind::Engineering, StatKind::Food, StatKind::Security];

    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Engineering => "engineering",
            StatKind::Food => "food",
            StatKind::Security => "security",
        }
    }
}

/// Captain stat block (each value 1–6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptainStats {
    pub engineering: u8,
    pub food: u8,
    pub security: u8,
}

impl CaptainStats {
    /// Stat value for a tested category.
    pub fn get(&self, kind: StatKind) -> u8 {
        match kind {
            StatKind::Engineering => self.engineering,
            StatKind::Food => self.food,
            StatKind::Security => self.security,
        }
    }
}

/// A selectable captain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captain {
    pub id: u32,
    pub name: String,
    pub stats: CaptainStats,
}

/// A selectable train (each stat 1–6).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    pub id: u32,
    pub name: String,
    pub speed: u8,
    pub reliability: u8,
    pub power: u8,
}

impl Train {
    /// Flat bonus added to the movement die (speed 1–6 maps to 0–3).
    pub fn movement_bonus(&self) -> u32 {
        u32::from(self.speed) / 2
    }
}
