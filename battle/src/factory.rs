//! Unit creation and tier scaling.

use alloc::string::String;
use alloc::vec::Vec;

use crate::catalog::{UnitCatalog, UnitDefinition};
use crate::error::{EngineError, EngineResult};
use crate::unit::{Speed, Unit, UnitParams, MIN_SPEED, SPEED_SCALE};

/// Attack/health at `tier`: `round(base * (1 + 0.5 * (tier - 1)))`
///
/// Tier 1 (and the degenerate tier 0) return `base` unchanged. Rounds half
/// up.
pub fn scale_stat_for_tier(base: i32, tier: u32) -> i32 {
    if tier <= 1 {
        return base;
    }
    // base * (tier + 1) / 2, rounded half up
    let doubled = base as i64 * (tier as i64 + 1);
    let scaled = (doubled + 1).div_euclid(2);
    scaled.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Speed at `tier`: `max(0.20, round2(base * (1 + 0.03 * (tier - 1))))`
pub fn speed_for_tier(base: Speed, tier: u32) -> Speed {
    let steps = tier.saturating_sub(1) as u64;
    let factor = SPEED_SCALE as u64 + 3 * steps;
    let scaled = (base as u64 * factor + SPEED_SCALE as u64 / 2) / SPEED_SCALE as u64;
    (scaled.min(Speed::MAX as u64) as Speed).max(MIN_SPEED)
}

/// Produces units from a catalog of type definitions
#[derive(Debug, Clone, Default)]
pub struct UnitFactory {
    catalog: UnitCatalog,
}

impl UnitFactory {
    pub fn new(catalog: UnitCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &UnitCatalog {
        &self.catalog
    }

    /// A fresh, full-health unit of `type_id` scaled to `tier`
    pub fn create_base_unit(&self, type_id: &str, tier: u32) -> EngineResult<Unit> {
        let def = self
            .catalog
            .get(type_id)
            .ok_or_else(|| EngineError::UnknownType {
                type_id: String::from(type_id),
            })?;
        Ok(Self::create_from_definition(def, tier))
    }

    /// Same scaling as [`Self::create_base_unit`] for a definition already in hand
    pub fn create_from_definition(def: &UnitDefinition, tier: u32) -> Unit {
        Unit::new(UnitParams {
            name: def.name.clone(),
            tier,
            attack: scale_stat_for_tier(def.attack, tier),
            health: scale_stat_for_tier(def.health, tier),
            speed: speed_for_tier(def.speed, tier),
            merge_tag: Some(def.merge_tag.clone()),
            xp: 0,
        })
    }

    /// Registered type ids, in registration order
    pub fn available_types(&self) -> Vec<String> {
        self.catalog.type_ids().to_vec()
    }

    pub fn register_type(&mut self, type_id: &str, def: UnitDefinition) -> EngineResult<()> {
        self.catalog.register(type_id, def)
    }
}
