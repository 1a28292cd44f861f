//! Live game state: phase, turn, slots, shop and coins.
//!
//! Slot vectors are sized once from [`GameConfig`] and never change length.

use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use mb_battle::{BattleResult, Unit};

use crate::config::GameConfig;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Prepare,
    Battle,
    Reward,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Prepare => "prepare",
            GamePhase::Battle => "battle",
            GamePhase::Reward => "reward",
        }
    }
}

/// A unit on offer and what it costs
#[derive(Debug, PartialEq, Eq)]
pub struct ShopEntry {
    pub unit: Unit,
    pub price: u32,
}

/// Live game state, owned by the manager. Never handed out directly; see
/// [`crate::snapshot::GameSnapshot`].
#[derive(Debug)]
pub struct GameState {
    pub phase: GamePhase,
    /// Starts at 1, bumped once per battle
    pub turn: u32,
    /// Fixed length `bench_size`
    pub bench: Vec<Option<Unit>>,
    /// Fixed length `team_slots`
    pub team: Vec<Option<Unit>>,
    pub shop: Vec<ShopEntry>,
    pub last_battle_result: Option<BattleResult>,
    pub coins: u32,
}

impl GameState {
    /// Empty bench and team, no shop yet
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: GamePhase::Prepare,
            turn: 1,
            bench: empty_slots(config.bench_size),
            team: empty_slots(config.team_slots),
            shop: Vec::new(),
            last_battle_result: None,
            coins: config.initial_coins,
        }
    }

    /// Lowest empty bench index
    pub fn find_empty_bench_slot(&self) -> Option<usize> {
        self.bench.iter().position(Option::is_none)
    }

    pub fn bench_unit_count(&self) -> usize {
        self.bench.iter().flatten().count()
    }

    pub fn team_unit_count(&self) -> usize {
        self.team.iter().flatten().count()
    }
}

fn empty_slots(len: u32) -> Vec<Option<Unit>> {
    (0..len).map(|_| None).collect()
}
