//! Merge Battle: a match/merge auto-battler engine.
//!
//! - [`battle`]: units, the unit factory, merge rules and the combat resolver
//! - [`assets`]: the shipped unit catalog
//! - [`game`]: the game manager with its economy, phases and event feed

#![cfg_attr(not(feature = "std"), no_std)]

pub use mb_assets as assets;
pub use mb_battle as battle;
pub use mb_game as game;

pub use mb_battle::{BattleOptions, BattleResult, Unit, UnitFactory, UnitRecord, Winner};
pub use mb_game::{EventKind, GameConfig, GameEvent, GameManager, GameSnapshot, Rejection};
