//! The unit: the atomic value type of the engine.
//!
//! A `Unit` is deliberately not `Clone`. Copying a unit always goes through
//! [`Unit::fresh_clone`], which hands out a new identity, so two containers
//! can never hold units that share an id by accident.

use alloc::format;
use alloc::string::String;
use core::sync::atomic::{AtomicU32, Ordering};
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Speed is stored in hundredths (1.00 => 100)
pub type Speed = u32;

/// Fixed-point scale for [`Speed`]
pub const SPEED_SCALE: u32 = 100;
/// Slowest speed any scaling formula may produce (0.20)
pub const MIN_SPEED: Speed = 20;

pub const DEFAULT_NAME: &str = "Unit";
pub const DEFAULT_TIER: u32 = 1;
pub const DEFAULT_ATTACK: i32 = 1;
pub const DEFAULT_HEALTH: i32 = 5;
pub const DEFAULT_SPEED: Speed = SPEED_SCALE;

static NEXT_UNIT_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique unit identity
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Encode,
    Decode,
    TypeInfo,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Hand out the next identity. Monotonic for the lifetime of the process.
    pub fn next() -> Self {
        UnitId(NEXT_UNIT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl core::fmt::Display for UnitId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "u{}", self.0)
    }
}

/// `tag-<lowercased name>`, the tag a unit gets when none is given
pub fn default_merge_tag(name: &str) -> String {
    format!("tag-{}", name.to_lowercase())
}

/// Field set for building a unit. Unset fields take the engine defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitParams {
    pub name: String,
    pub tier: u32,
    pub attack: i32,
    pub health: i32,
    pub speed: Speed,
    pub merge_tag: Option<String>,
    pub xp: u32,
}

impl Default for UnitParams {
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_NAME),
            tier: DEFAULT_TIER,
            attack: DEFAULT_ATTACK,
            health: DEFAULT_HEALTH,
            speed: DEFAULT_SPEED,
            merge_tag: None,
            xp: 0,
        }
    }
}

/// A live combat unit
#[derive(Debug, PartialEq, Eq)]
pub struct Unit {
    id: UnitId,
    pub name: String,
    pub tier: u32,
    pub attack: i32,
    max_health: i32,
    health: i32,
    pub speed: Speed,
    pub merge_tag: String,
    pub xp: u32,
}

impl Unit {
    /// Build a unit at full health with a fresh identity
    pub fn new(params: UnitParams) -> Self {
        let max_health = params.health.max(0);
        let merge_tag = params
            .merge_tag
            .filter(|tag| !tag.is_empty())
            .unwrap_or_else(|| default_merge_tag(&params.name));
        Self {
            id: UnitId::next(),
            name: params.name,
            tier: params.tier,
            attack: params.attack,
            max_health,
            health: max_health,
            speed: params.speed,
            merge_tag,
            xp: params.xp,
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }

    /// Independent copy with a new identity, back at full health
    pub fn fresh_clone(&self) -> Self {
        Self {
            id: UnitId::next(),
            name: self.name.clone(),
            tier: self.tier,
            attack: self.attack,
            max_health: self.max_health,
            health: self.max_health,
            speed: self.speed,
            merge_tag: self.merge_tag.clone(),
            xp: self.xp,
        }
    }

    /// Subtract `amount` (negative counts as 0), flooring health at 0.
    ///
    /// Returns the clamped amount, not the health actually lost: overkill is
    /// reported in full.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let dmg = amount.max(0);
        self.health = self.health.saturating_sub(dmg).max(0);
        dmg
    }

    /// Add `amount` (negative counts as 0), capped at max health
    pub fn heal(&mut self, amount: i32) {
        let value = amount.max(0);
        self.health = self.health.saturating_add(value).min(self.max_health);
    }

    pub fn revive_to_full(&mut self) {
        self.health = self.max_health;
    }

    pub fn to_record(&self) -> UnitRecord {
        UnitRecord::from(self)
    }

    /// Rebuild a live unit from its record.
    ///
    /// Missing or zero fields fall back to the construction defaults, the id
    /// is kept when present, and the unit comes back at full health.
    pub fn from_record(record: &UnitRecord) -> Self {
        let name = if record.name.is_empty() {
            String::from(DEFAULT_NAME)
        } else {
            record.name.clone()
        };
        let max_health = if record.max_health > 0 {
            record.max_health
        } else if record.health > 0 {
            record.health
        } else {
            DEFAULT_HEALTH
        };
        let merge_tag = if record.merge_tag.is_empty() {
            default_merge_tag(&name)
        } else {
            record.merge_tag.clone()
        };
        Self {
            id: record.id.unwrap_or_else(UnitId::next),
            name,
            tier: if record.tier == 0 { DEFAULT_TIER } else { record.tier },
            attack: if record.attack == 0 { DEFAULT_ATTACK } else { record.attack },
            max_health,
            health: max_health,
            speed: if record.speed == 0 { DEFAULT_SPEED } else { record.speed },
            merge_tag,
            xp: record.xp,
        }
    }
}

impl From<&UnitRecord> for Unit {
    fn from(record: &UnitRecord) -> Self {
        Unit::from_record(record)
    }
}

/// Plain attribute record of a unit, the only form that leaves the engine
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(default, rename_all = "camelCase")]
pub struct UnitRecord {
    pub id: Option<UnitId>,
    pub name: String,
    pub tier: u32,
    pub attack: i32,
    pub health: i32,
    pub max_health: i32,
    pub speed: Speed,
    pub merge_tag: String,
    pub xp: u32,
    pub is_dead: bool,
}

impl From<&Unit> for UnitRecord {
    fn from(unit: &Unit) -> Self {
        Self {
            id: Some(unit.id),
            name: unit.name.clone(),
            tier: unit.tier,
            attack: unit.attack,
            health: unit.health,
            max_health: unit.max_health,
            speed: unit.speed,
            merge_tag: unit.merge_tag.clone(),
            xp: unit.xp,
            is_dead: unit.is_dead(),
        }
    }
}
