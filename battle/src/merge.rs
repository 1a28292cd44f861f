//! Merge rules: when two units may combine and what they combine into.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::factory::UnitFactory;
use crate::unit::{Speed, Unit, UnitParams, MIN_SPEED};

/// Units at this tier can no longer be merged
pub const MAX_TIER: u32 = 10;

/// Scale factors for units the factory cannot re-derive, in percent
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeOptions {
    pub attack_scale_pct: u32,
    pub health_scale_pct: u32,
    pub speed_scale_pct: u32,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            attack_scale_pct: 80,
            health_scale_pct: 90,
            speed_scale_pct: 102,
        }
    }
}

/// `round(value * pct / 100)`, half up
fn apply_pct(value: i64, pct: u32) -> i64 {
    (value * pct as i64 + 50).div_euclid(100)
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Whether `a` and `b` can be merged. Symmetric.
pub fn can_merge(a: &Unit, b: &Unit) -> bool {
    if a.is_dead() || b.is_dead() {
        return false;
    }
    if a.merge_tag != b.merge_tag {
        return false;
    }
    if a.tier != b.tier {
        return false;
    }
    a.tier < MAX_TIER
}

/// Combine two units into one of the next tier.
///
/// The result is re-derived from the factory under the shared merge tag when
/// the catalog knows it; otherwise the stats are synthesized from both inputs
/// using `options`. Either way the result has a new identity, the summed xp,
/// and full health. Inputs are left untouched.
pub fn merge_units(
    factory: &UnitFactory,
    a: &Unit,
    b: &Unit,
    options: &MergeOptions,
) -> EngineResult<Unit> {
    if !can_merge(a, b) {
        return Err(EngineError::CannotMerge);
    }
    let next_tier = a.tier + 1;

    let mut merged = match factory.create_base_unit(&a.merge_tag, next_tier) {
        Ok(unit) => unit,
        Err(_) => {
            let attack = apply_pct(a.attack as i64 + b.attack as i64, options.attack_scale_pct);
            let max_health = apply_pct(
                a.max_health() as i64 + b.max_health() as i64,
                options.health_scale_pct,
            );
            let fastest = a.speed.max(b.speed) as i64;
            let speed = apply_pct(fastest, options.speed_scale_pct)
                .clamp(MIN_SPEED as i64, Speed::MAX as i64) as Speed;

            Unit::new(UnitParams {
                name: a.name.clone(),
                tier: next_tier,
                attack: clamp_i32(attack.max(1)),
                health: clamp_i32(max_health.max(1)),
                speed,
                merge_tag: Some(a.merge_tag.clone()),
                xp: 0,
            })
        }
    };

    merged.xp = a.xp.saturating_add(b.xp);
    merged.revive_to_full();
    Ok(merged)
}
