//! Merge Battle game layer
//!
//! Economy, phase state machine and event feed built on top of the
//! `mb-battle` engine.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod config;
pub mod events;
pub mod log;
pub mod manager;
pub mod opponents;
pub mod rejection;
pub mod shop;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests;

pub use config::*;
pub use events::*;
pub use manager::*;
pub use opponents::generate_enemy_team;
pub use rejection::*;
pub use shop::{generate_shop, shop_price};
pub use snapshot::*;
pub use state::*;
