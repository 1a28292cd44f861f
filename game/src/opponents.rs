//! Enemy roster generation
//!
//! Enemies get bigger and stronger as turns pass: one more unit every two
//! turns, one more tier every three, capped by the team size and
//! [`MAX_ENEMY_TIER`].

use alloc::vec::Vec;

use mb_battle::{Unit, UnitDefinition, UnitFactory};

use crate::config::{ENEMY_BASE_TEAM_SIZE, MAX_ENEMY_TIER};

/// `min(team_slots, 3 + turn / 2)`
pub fn enemy_team_size(turn: u32, team_slots: u32) -> u32 {
    team_slots.min(ENEMY_BASE_TEAM_SIZE.saturating_add(turn / 2))
}

/// `min(8, 1 + turn / 3)`
pub fn enemy_tier(turn: u32) -> u32 {
    MAX_ENEMY_TIER.min(1 + turn / 3)
}

/// Build the enemy roster for `turn`, cycling through the catalog in
/// registration order. Deterministic: no randomness involved.
pub fn generate_enemy_team(factory: &UnitFactory, turn: u32, team_slots: u32) -> Vec<Unit> {
    let definitions: Vec<&UnitDefinition> = factory.catalog().iter().map(|(_, def)| def).collect();
    if definitions.is_empty() {
        return Vec::new();
    }

    let tier = enemy_tier(turn);
    (0..enemy_team_size(turn, team_slots) as usize)
        .map(|i| UnitFactory::create_from_definition(definitions[i % definitions.len()], tier))
        .collect()
}
