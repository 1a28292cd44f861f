//! Game configuration and economy constants.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INITIAL_COINS: u32 = 50;
pub const DEFAULT_TEAM_SLOTS: u32 = 6;
pub const DEFAULT_BENCH_SIZE: u32 = 8;
pub const DEFAULT_SHOP_SIZE: u32 = 5;
pub const DEFAULT_SEED: u64 = 42;

// ==========================================
// SHOP
// ==========================================

/// Tier every shop unit is rolled at
pub const SHOP_TIER: u32 = 1;
pub const SHOP_BASE_PRICE: u32 = 5;
pub const SHOP_TIER_PRICE: u32 = 3;
/// Exclusive upper bound of the random price surcharge
pub const SHOP_PRICE_JITTER: u32 = 3;

/// Smallest refund a sale can give
pub const MIN_SELL_REFUND: u32 = 1;
/// Refund is `tier^2 * SELL_REFUND_FACTOR`
pub const SELL_REFUND_FACTOR: u32 = 2;

// ==========================================
// REWARDS
// ==========================================

pub const WIN_REWARD_BASE: u32 = 10;
pub const WIN_REWARD_PER_TURN: u32 = 2;
pub const DRAW_REWARD: u32 = 5;
pub const LOSS_REWARD: u32 = 2;

// ==========================================
// OPPONENTS
// ==========================================

/// Enemy roster size on turn 0, before the team-slot cap
pub const ENEMY_BASE_TEAM_SIZE: u32 = 3;
pub const MAX_ENEMY_TIER: u32 = 8;

/// Knobs fixed at construction. Missing JSON fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub initial_coins: u32,
    pub team_slots: u32,
    pub bench_size: u32,
    pub shop_size: u32,
    /// Seeds the shop RNG and every per-turn battle seed
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_coins: DEFAULT_INITIAL_COINS,
            team_slots: DEFAULT_TEAM_SLOTS,
            bench_size: DEFAULT_BENCH_SIZE,
            shop_size: DEFAULT_SHOP_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}
