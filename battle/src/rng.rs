//! Deterministic RNG for shop rolls and battle resolution
//!
//! A tiny seedable generator behind a trait, so the game can replay a battle
//! from its seed and tests can pin outcomes.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

/// Denominator for probabilities expressed in basis points
pub const BASIS_POINTS: u32 = 10_000;

/// Randomness source for turn-order ties, crit rolls and shop picks
pub trait BattleRng {
    fn next_u32(&mut self) -> u32;

    /// Uniform-ish index below `max`; 0 when `max` is 0
    fn gen_range(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        (self.next_u32() as usize) % max
    }

    /// Returns true with probability `bp / 10_000`
    fn roll_basis_points(&mut self, bp: u32) -> bool {
        if bp == 0 {
            return false;
        }
        if bp >= BASIS_POINTS {
            return true;
        }
        (self.next_u32() % BASIS_POINTS) < bp
    }
}

/// 32-bit xorshift generator.
///
/// Its whole state is one encodable word, so a battle can be replayed from
/// the seed stored in a turn outcome.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    /// Fold both halves of `seed` into the state. A zero fold becomes 1,
    /// since xorshift never leaves the all-zero state.
    pub fn seed_from_u64(seed: u64) -> Self {
        let state = ((seed as u32) ^ ((seed >> 32) as u32)).max(1);
        Self { state }
    }
}

impl BattleRng for XorShiftRng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}
