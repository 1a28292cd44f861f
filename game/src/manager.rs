//! The game manager
//!
//! Owns coins, shop, bench and team, drives the
//! `prepare -> battle -> reward -> prepare` cycle, and announces every
//! mutation on the event bus.

use alloc::format;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use mb_battle::{
    can_merge, merge_units, simulate_battle, BattleOptions, BattleResult, EngineError,
    EngineResult, MergeOptions, Unit, UnitFactory, UnitRecord, Winner, XorShiftRng,
};

use crate::config::*;
use crate::events::{EventBus, EventKind, GameEvent, Subscription};
use crate::log;
use crate::opponents::generate_enemy_team;
use crate::rejection::{ActionResult, ListenerError, Rejection};
use crate::shop::generate_shop;
use crate::snapshot::{shop_views, GameSnapshot};
use crate::state::{GamePhase, GameState, ShopEntry};

/// Mixes the turn into the game seed so each battle gets its own stream
const TURN_SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seed of the battle fought on `turn`
pub fn battle_seed(game_seed: u64, turn: u32) -> u64 {
    game_seed ^ (turn as u64).wrapping_mul(TURN_SEED_MIX)
}

/// Coins granted for a battle fought on `turn`
pub fn battle_reward(winner: Winner, turn: u32) -> u32 {
    match winner {
        Winner::Allies => WIN_REWARD_BASE.saturating_add(WIN_REWARD_PER_TURN.saturating_mul(turn)),
        Winner::Draw => DRAW_REWARD,
        Winner::Enemies => LOSS_REWARD,
    }
}

/// Refund for selling a unit of `tier`: `max(1, tier^2 * 2)`
pub fn sell_refund(tier: u32) -> u32 {
    tier.saturating_mul(tier)
        .saturating_mul(SELL_REFUND_FACTOR)
        .max(MIN_SELL_REFUND)
}

/// What [`GameManager::next_turn`] hands back
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnOutcome {
    pub result: BattleResult,
    pub reward: u32,
    /// Battle seed, enough to replay the fight
    pub seed: u64,
}

#[derive(Debug)]
pub struct GameManager {
    config: GameConfig,
    factory: UnitFactory,
    merge_options: MergeOptions,
    rng: XorShiftRng,
    state: GameState,
    events: EventBus,
}

impl GameManager {
    /// Fresh game over `factory`. Fails only for an empty catalog.
    pub fn new(config: GameConfig, factory: UnitFactory) -> EngineResult<Self> {
        if factory.catalog().is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        log::info("=== MERGE BATTLE GAME INITIALIZED ===");
        let mut manager = Self {
            rng: XorShiftRng::seed_from_u64(config.seed),
            state: GameState::new(&config),
            config,
            factory,
            merge_options: MergeOptions::default(),
            events: EventBus::new(),
        };
        manager.state.shop = manager.roll_shop();
        manager.log_state();
        Ok(manager)
    }

    /// Fresh game over the shipped unit catalog
    pub fn with_default_catalog(config: GameConfig) -> EngineResult<Self> {
        Self::new(config, mb_assets::default_factory()?)
    }

    /// Override the scale factors used when a merge falls back to synthesis
    pub fn with_merge_options(mut self, options: MergeOptions) -> Self {
        self.merge_options = options;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn factory(&self) -> &UnitFactory {
        &self.factory
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn turn(&self) -> u32 {
        self.state.turn
    }

    pub fn coins(&self) -> u32 {
        self.state.coins
    }

    /// Serializable snapshot of the whole game
    pub fn get_state(&self) -> GameSnapshot {
        GameSnapshot::from(&self.state)
    }

    // ==========================================
    // EVENTS
    // ==========================================

    pub fn on<F>(&mut self, kind: EventKind, listener: F) -> Subscription
    where
        F: FnMut(&GameEvent) -> Result<(), ListenerError> + 'static,
    {
        self.events.on(kind, listener)
    }

    pub fn off(&mut self, subscription: Subscription) -> bool {
        self.events.off(subscription)
    }

    pub fn clear_listeners(&mut self) {
        self.events.clear();
    }

    // ==========================================
    // SHOP
    // ==========================================

    /// Buy shop entry `index` into the lowest empty bench slot. Returns that
    /// slot. The whole shop is rerolled afterwards.
    pub fn buy_from_shop(&mut self, index: usize) -> ActionResult<usize> {
        log::action("buy_from_shop", &format!("index={index}"));
        let Some(entry) = self.state.shop.get(index) else {
            return reject(Rejection::NoEntry);
        };
        if self.state.coins < entry.price {
            return reject(Rejection::NoCoins);
        }
        let Some(slot) = self.state.find_empty_bench_slot() else {
            return reject(Rejection::NoBenchSpace);
        };

        let entry = self.state.shop.remove(index);
        self.state.coins -= entry.price;
        log::result(true, &format!("bought {} for {} into bench {slot}", entry.unit.name, entry.price));
        self.state.bench[slot] = Some(entry.unit);

        self.regenerate_shop();
        self.emit_state();
        Ok(slot)
    }

    /// Sell the unit on bench slot `index`. Returns the refund.
    pub fn sell_bench(&mut self, index: usize) -> ActionResult<u32> {
        log::action("sell_bench", &format!("index={index}"));
        let Some(unit) = self.state.bench.get_mut(index).and_then(Option::take) else {
            return reject(Rejection::Empty);
        };

        let refund = sell_refund(unit.tier);
        self.state.coins = self.state.coins.saturating_add(refund);
        log::result(true, &format!("sold {} (tier {}) for {refund}", unit.name, unit.tier));

        self.emit_state();
        Ok(refund)
    }

    // ==========================================
    // SLOT MOVES
    // ==========================================

    pub fn move_bench_to_team(&mut self, bench_index: usize, team_index: usize) -> ActionResult<()> {
        log::action("move_bench_to_team", &format!("bench={bench_index} team={team_index}"));
        if team_index >= self.state.team.len() {
            return reject(Rejection::BadTeamIndex);
        }
        if bench_index >= self.state.bench.len() {
            return reject(Rejection::BadBenchIndex);
        }
        if self.state.bench[bench_index].is_none() {
            return reject(Rejection::NoUnit);
        }
        if self.state.team[team_index].is_some() {
            return reject(Rejection::TeamSlotTaken);
        }

        self.state.team[team_index] = self.state.bench[bench_index].take();
        log::result(true, "moved to team");
        self.emit_state();
        Ok(())
    }

    pub fn move_team_to_bench(&mut self, team_index: usize, bench_index: usize) -> ActionResult<()> {
        log::action("move_team_to_bench", &format!("team={team_index} bench={bench_index}"));
        if team_index >= self.state.team.len() {
            return reject(Rejection::BadTeamIndex);
        }
        if bench_index >= self.state.bench.len() {
            return reject(Rejection::BadBenchIndex);
        }
        if self.state.team[team_index].is_none() {
            return reject(Rejection::NoUnit);
        }
        if self.state.bench[bench_index].is_some() {
            return reject(Rejection::BenchTaken);
        }

        self.state.bench[bench_index] = self.state.team[team_index].take();
        log::result(true, "moved to bench");
        self.emit_state();
        Ok(())
    }

    /// Merge bench slots `index_a` and `index_b`. The result lands on
    /// `index_a` and `index_b` is cleared.
    pub fn try_merge_bench(&mut self, index_a: usize, index_b: usize) -> ActionResult<UnitRecord> {
        log::action("try_merge_bench", &format!("a={index_a} b={index_b}"));
        if index_a == index_b {
            return reject(Rejection::SameIndex);
        }
        let len = self.state.bench.len();
        if index_a >= len || index_b >= len {
            return reject(Rejection::BadIndex);
        }
        let (Some(a), Some(b)) = (&self.state.bench[index_a], &self.state.bench[index_b]) else {
            return reject(Rejection::EmptySlot);
        };
        if !can_merge(a, b) {
            return reject(Rejection::CannotMerge);
        }
        let merged = match merge_units(&self.factory, a, b, &self.merge_options) {
            Ok(unit) => unit,
            Err(_) => return reject(Rejection::CannotMerge),
        };

        let record = merged.to_record();
        log::result(true, &format!("merged into {} tier {}", merged.name, merged.tier));
        self.state.bench[index_a] = Some(merged);
        self.state.bench[index_b] = None;

        self.events.emit(&GameEvent::Merge {
            index_a: index_a as u32,
            index_b: index_b as u32,
            result: record.clone(),
        });
        self.emit_state();
        Ok(record)
    }

    /// Swap two bench slots. Out-of-range or equal indices do nothing.
    pub fn swap_bench(&mut self, index_a: usize, index_b: usize) {
        log::action("swap_bench", &format!("a={index_a} b={index_b}"));
        let len = self.state.bench.len();
        if index_a == index_b || index_a >= len || index_b >= len {
            return;
        }
        self.state.bench.swap(index_a, index_b);
        self.emit_state();
    }

    // ==========================================
    // TURN FLOW
    // ==========================================

    /// Fight this turn's battle and settle the reward.
    ///
    /// Emits `StateUpdate` as the battle starts, `ShopUpdate` when the shop
    /// is rerolled, `StateUpdate` once settled, then `BattleResult`.
    pub fn next_turn(&mut self, options: &BattleOptions) -> ActionResult<TurnOutcome> {
        log::action("next_turn", &format!("turn={}", self.state.turn));
        if self.state.phase != GamePhase::Prepare {
            return reject(Rejection::NotInPrepare);
        }

        let turn = self.state.turn;
        let allies: Vec<Unit> = self.state.team.iter().flatten().map(Unit::fresh_clone).collect();
        let enemies = generate_enemy_team(&self.factory, turn, self.config.team_slots);

        self.state.phase = GamePhase::Battle;
        self.emit_state();

        log::info(&format!(
            "=== BATTLE START === turn={turn} allies={} enemies={}",
            allies.len(),
            enemies.len()
        ));
        let seed = battle_seed(self.config.seed, turn);
        let mut battle_rng = XorShiftRng::seed_from_u64(seed);
        let result = simulate_battle(&allies, &enemies, options, &mut battle_rng);

        let reward = battle_reward(result.winner, turn);
        self.state.coins = self.state.coins.saturating_add(reward);
        self.state.last_battle_result = Some(result.clone());
        self.state.phase = GamePhase::Reward;
        self.state.turn += 1;
        self.state.team = self
            .state
            .team
            .iter()
            .map(|slot| slot.as_ref().map(Unit::fresh_clone))
            .collect();
        log::info(&format!("=== BATTLE END === winner={} reward={reward}", result.winner.as_str()));

        self.regenerate_shop();
        self.emit_state();
        self.events.emit(&GameEvent::BattleResult {
            result: result.clone(),
            reward,
        });

        Ok(TurnOutcome { result, reward, seed })
    }

    /// Leave the reward phase and start preparing for the next battle
    pub fn continue_after_battle(&mut self) -> ActionResult<()> {
        log::action("continue_after_battle", "back to prepare");
        if self.state.phase != GamePhase::Reward {
            return reject(Rejection::NotInReward);
        }
        self.state.phase = GamePhase::Prepare;
        self.emit_state();
        Ok(())
    }

    /// Start over with the construction-time coins, slots and phase. The
    /// shop RNG keeps running, so the new shop differs from the last match's.
    pub fn reset_for_new_match(&mut self) {
        log::action("reset_for_new_match", "starting fresh match");
        self.state = GameState::new(&self.config);
        self.regenerate_shop();
        self.emit_state();
    }

    // ==========================================
    // INTERNALS
    // ==========================================

    fn roll_shop(&mut self) -> Vec<ShopEntry> {
        generate_shop(&self.factory, self.config.shop_size as usize, &mut self.rng)
    }

    fn regenerate_shop(&mut self) {
        self.state.shop = self.roll_shop();
        self.events.emit(&GameEvent::ShopUpdate {
            entries: shop_views(&self.state.shop),
        });
    }

    fn emit_state(&mut self) {
        self.log_state();
        if self.events.listener_count(EventKind::StateUpdate) == 0 {
            return;
        }
        let snapshot = self.get_state();
        self.events.emit(&GameEvent::StateUpdate { snapshot });
    }

    fn log_state(&self) {
        log::state_summary(
            self.state.phase.as_str(),
            self.state.turn,
            self.state.coins,
            self.state.bench_unit_count(),
            self.state.team_unit_count(),
        );
    }
}

fn reject<T>(reason: Rejection) -> ActionResult<T> {
    log::result(false, reason.reason());
    Err(reason)
}
