mod shop;
mod snapshot;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use mb_battle::{UnitCatalog, UnitDefinition, UnitFactory};

use crate::config::GameConfig;
use crate::events::{EventKind, GameEvent};
use crate::manager::GameManager;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

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

/// Every shop roll is a tier-1 soldier, so any two purchases can merge
fn soldier_only_factory() -> UnitFactory {
    let mut catalog = UnitCatalog::new();
    catalog
        .register("soldier", UnitDefinition::new("Soldier", 3, 10, 100, "soldier"))
        .unwrap();
    UnitFactory::new(catalog)
}

fn test_manager() -> GameManager {
    GameManager::new(GameConfig::default(), test_factory()).unwrap()
}

fn soldier_manager(config: GameConfig) -> GameManager {
    GameManager::new(config, soldier_only_factory()).unwrap()
}

/// Plenty of coins so purchases never run dry mid-test
fn rich_config() -> GameConfig {
    GameConfig {
        initial_coins: 1_000,
        ..Default::default()
    }
}

type EventLog = Rc<RefCell<Vec<GameEvent>>>;

/// Capture every event on every channel, in emission order
fn record_all(manager: &mut GameManager) -> EventLog {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    for kind in EventKind::ALL {
        let sink = log.clone();
        manager.on(kind, move |event| {
            sink.borrow_mut().push(event.clone());
            Ok(())
        });
    }
    log
}

fn kinds(log: &EventLog) -> Vec<EventKind> {
    log.borrow().iter().map(GameEvent::kind).collect()
}
