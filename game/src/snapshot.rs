//! Serializable views of the game state
//!
//! Everything a UI sees goes through these records. They own their data and
//! hold no references into the live state.

use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use mb_battle::{BattleResult, Unit, UnitRecord};

use crate::state::{GamePhase, GameState, ShopEntry};

/// View of a shop entry
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEntryView {
    pub unit: UnitRecord,
    pub price: u32,
}

impl From<&ShopEntry> for ShopEntryView {
    fn from(entry: &ShopEntry) -> Self {
        Self {
            unit: entry.unit.to_record(),
            price: entry.price,
        }
    }
}

/// The complete game view
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub turn: u32,
    /// One entry per bench slot, `None` for empty
    pub bench: Vec<Option<UnitRecord>>,
    /// One entry per team slot, `None` for empty
    pub team: Vec<Option<UnitRecord>>,
    pub shop: Vec<ShopEntryView>,
    pub last_battle_result: Option<BattleResult>,
    pub coins: u32,
}

fn slot_records(slots: &[Option<Unit>]) -> Vec<Option<UnitRecord>> {
    slots.iter().map(|slot| slot.as_ref().map(Unit::to_record)).collect()
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            turn: state.turn,
            bench: slot_records(&state.bench),
            team: slot_records(&state.team),
            shop: shop_views(&state.shop),
            last_battle_result: state.last_battle_result.clone(),
            coins: state.coins,
        }
    }
}

pub fn shop_views(shop: &[ShopEntry]) -> Vec<ShopEntryView> {
    shop.iter().map(ShopEntryView::from).collect()
}
