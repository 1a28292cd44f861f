mod battle;

use alloc::string::String;

use crate::catalog::{UnitCatalog, UnitDefinition};
use crate::factory::UnitFactory;
use crate::rng::XorShiftRng;
use crate::unit::{Unit, UnitParams};

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

/// The four base types the game ships with
fn test_catalog() -> UnitCatalog {
    let mut catalog = UnitCatalog::new();
    catalog
        .register("soldier", UnitDefinition::new("Soldier", 3, 10, 100, "soldier"))
        .unwrap();
    catalog
        .register("sniper", UnitDefinition::new("Sniper", 5, 6, 120, "sniper"))
        .unwrap();
    catalog
        .register("tank", UnitDefinition::new("Tank", 7, 18, 60, "tank"))
        .unwrap();
    catalog
        .register("mage", UnitDefinition::new("Mage", 4, 8, 110, "mage"))
        .unwrap();
    catalog
}

fn test_factory() -> UnitFactory {
    UnitFactory::new(test_catalog())
}

fn create_unit(name: &str, attack: i32, health: i32, speed: u32) -> Unit {
    Unit::new(UnitParams {
        name: String::from(name),
        attack,
        health,
        speed,
        ..Default::default()
    })
}

fn create_tagged_unit(tag: &str, tier: u32, attack: i32, health: i32, speed: u32) -> Unit {
    Unit::new(UnitParams {
        name: String::from("Custom"),
        tier,
        attack,
        health,
        speed,
        merge_tag: Some(String::from(tag)),
        xp: 0,
    })
}

fn seeded_rng(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}
