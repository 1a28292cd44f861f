//! Default game assets for Merge Battle.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod units;

pub use units::get_all_unit_types;

use mb_battle::{EngineResult, UnitCatalog, UnitFactory};

/// The catalog the game ships with: soldier, sniper, tank, mage
pub fn default_catalog() -> EngineResult<UnitCatalog> {
    UnitCatalog::from_definitions(get_all_unit_types())
}

/// A factory over [`default_catalog`]
pub fn default_factory() -> EngineResult<UnitFactory> {
    default_catalog().map(UnitFactory::new)
}
