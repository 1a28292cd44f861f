//! Tick-based battle resolution
//!
//! Two rosters fight until one side has no living units or the tick limit
//! runs out. Every swing lands in the returned log.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::log;
use crate::rng::BattleRng;
use crate::unit::{Unit, UnitId, UnitRecord};

pub const DEFAULT_MAX_TICKS: u32 = 1000;
/// 5% in basis points
pub const DEFAULT_CRIT_CHANCE_BP: u32 = 500;
/// x1.5 in percent
pub const DEFAULT_CRIT_MULTIPLIER_PCT: u32 = 150;

/// Knobs for a single battle. Echoed back in the result.
///
/// A zero `max_ticks` or `crit_multiplier_pct` means "use the default".
/// A zero `crit_chance_bp` disables crits.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BattleOptions {
    pub max_ticks: u32,
    pub crit_chance_bp: u32,
    pub crit_multiplier_pct: u32,
}

impl BattleOptions {
    /// Copy with zeroed fields replaced by their defaults
    pub fn effective(&self) -> Self {
        Self {
            max_ticks: if self.max_ticks == 0 {
                DEFAULT_MAX_TICKS
            } else {
                self.max_ticks
            },
            crit_chance_bp: self.crit_chance_bp,
            crit_multiplier_pct: if self.crit_multiplier_pct == 0 {
                DEFAULT_CRIT_MULTIPLIER_PCT
            } else {
                self.crit_multiplier_pct
            },
        }
    }
}

impl Default for BattleOptions {
    fn default() -> Self {
        Self {
            max_ticks: DEFAULT_MAX_TICKS,
            crit_chance_bp: DEFAULT_CRIT_CHANCE_BP,
            crit_multiplier_pct: DEFAULT_CRIT_MULTIPLIER_PCT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Allies,
    Enemies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Allies,
    Enemies,
    Draw,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Allies => "allies",
            Winner::Enemies => "enemies",
            Winner::Draw => "draw",
        }
    }
}

/// One attack, as recorded in the battle log
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleAction {
    pub tick: u32,
    pub attacker_side: Side,
    pub attacker_id: UnitId,
    pub attacker_name: String,
    pub attacker_tier: u32,
    pub target_id: UnitId,
    pub target_name: String,
    pub target_tier: u32,
    /// Damage as reported by the target, overkill included
    pub damage: i32,
    pub is_crit: bool,
    pub target_remaining: i32,
    pub target_dead: bool,
}

/// Outcome of [`simulate_battle`]. Rosters are the engine's own clones.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleResult {
    pub winner: Winner,
    /// Final state of every ally, dead ones included
    pub allies: Vec<UnitRecord>,
    pub enemies: Vec<UnitRecord>,
    pub allies_alive: Vec<UnitRecord>,
    pub enemies_alive: Vec<UnitRecord>,
    pub log: Vec<BattleAction>,
    pub ticks: u32,
    pub options_used: BattleOptions,
}

// ==========================================
// HELPERS
// ==========================================

fn any_alive(units: &[Unit]) -> bool {
    units.iter().any(Unit::is_alive)
}

/// Lowest current health among the living; the first one found wins ties
fn pick_lowest_health(units: &[Unit]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, unit) in units.iter().enumerate() {
        if unit.is_dead() {
            continue;
        }
        match best {
            Some(b) if units[b].health() <= unit.health() => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// Returns `(damage, is_crit)` for one swing
fn compute_damage<R: BattleRng>(attacker: &Unit, options: &BattleOptions, rng: &mut R) -> (i32, bool) {
    let damage = attacker.attack;
    if rng.roll_basis_points(options.crit_chance_bp) {
        let boosted = (damage as i64 * options.crit_multiplier_pct as i64 + 50).div_euclid(100);
        let boosted = boosted.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        return (boosted, true);
    }
    (damage, false)
}

/// A living unit's slot in this tick's turn order
struct TurnSlot {
    side: Side,
    index: usize,
    speed: u32,
    attack: i32,
    tiebreak: u32,
}

/// Living units sorted fastest first, then strongest; remaining ties are
/// broken by a draw from `rng`, so the order is random but replayable.
fn build_turn_order<R: BattleRng>(allies: &[Unit], enemies: &[Unit], rng: &mut R) -> Vec<TurnSlot> {
    let mut order: Vec<TurnSlot> = Vec::with_capacity(allies.len() + enemies.len());
    for (side, units) in [(Side::Allies, allies), (Side::Enemies, enemies)] {
        for (index, unit) in units.iter().enumerate() {
            if unit.is_alive() {
                order.push(TurnSlot {
                    side,
                    index,
                    speed: unit.speed,
                    attack: unit.attack,
                    tiebreak: rng.next_u32(),
                });
            }
        }
    }
    order.sort_by(|a, b| {
        b.speed
            .cmp(&a.speed)
            .then(b.attack.cmp(&a.attack))
            .then(a.tiebreak.cmp(&b.tiebreak))
    });
    order
}

// ==========================================
// MAIN BATTLE RESOLVER
// ==========================================

/// Play out a battle between two rosters.
///
/// The rosters are cloned on entry (fresh ids, full health); the caller's
/// units are never touched. Runs until one side has no living units or
/// `options.max_ticks` ticks have elapsed. Zeroed options are resolved
/// through [`BattleOptions::effective`] first.
pub fn simulate_battle<R: BattleRng>(
    ally_units: &[Unit],
    enemy_units: &[Unit],
    options: &BattleOptions,
    rng: &mut R,
) -> BattleResult {
    let options = &options.effective();
    let mut allies: Vec<Unit> = ally_units.iter().map(Unit::fresh_clone).collect();
    let mut enemies: Vec<Unit> = enemy_units.iter().map(Unit::fresh_clone).collect();
    let mut log_entries: Vec<BattleAction> = Vec::new();
    let mut tick: u32 = 0;

    log::debug(
        "simulate_battle",
        &format!("allies={} enemies={} max_ticks={}", allies.len(), enemies.len(), options.max_ticks),
    );

    while tick < options.max_ticks && any_alive(&allies) && any_alive(&enemies) {
        tick += 1;

        for slot in build_turn_order(&allies, &enemies, rng) {
            let (own, opponents) = match slot.side {
                Side::Allies => (&allies, &mut enemies),
                Side::Enemies => (&enemies, &mut allies),
            };
            let actor = &own[slot.index];
            if actor.is_dead() {
                continue;
            }
            let Some(target_idx) = pick_lowest_health(opponents) else {
                break;
            };

            let (damage, is_crit) = compute_damage(actor, options, rng);
            let target = &mut opponents[target_idx];
            let applied = target.take_damage(damage);

            log_entries.push(BattleAction {
                tick,
                attacker_side: slot.side,
                attacker_id: actor.id(),
                attacker_name: actor.name.clone(),
                attacker_tier: actor.tier,
                target_id: target.id(),
                target_name: target.name.clone(),
                target_tier: target.tier,
                damage: applied,
                is_crit,
                target_remaining: target.health(),
                target_dead: target.is_dead(),
            });
        }
    }

    let allies_alive: Vec<UnitRecord> = allies.iter().filter(|u| u.is_alive()).map(Unit::to_record).collect();
    let enemies_alive: Vec<UnitRecord> = enemies.iter().filter(|u| u.is_alive()).map(Unit::to_record).collect();

    let winner = match (allies_alive.is_empty(), enemies_alive.is_empty()) {
        (false, true) => Winner::Allies,
        (true, false) => Winner::Enemies,
        _ => Winner::Draw,
    };

    log::battle_summary(
        winner.as_str(),
        tick,
        log_entries.len(),
        allies_alive.len(),
        enemies_alive.len(),
    );

    BattleResult {
        winner,
        allies: allies.iter().map(Unit::to_record).collect(),
        enemies: enemies.iter().map(Unit::to_record).collect(),
        allies_alive,
        enemies_alive,
        log: log_entries,
        ticks: tick,
        options_used: options.clone(),
    }
}
