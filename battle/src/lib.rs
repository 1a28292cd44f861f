//! Core battle engine for Merge Battle.
//!
//! Units and their tier scaling, the merge rules, and the tick-based battle
//! simulator. Everything here is `no_std` compatible; the `std` feature only
//! forwards to the codec crates.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod battle;
pub mod catalog;
pub mod error;
pub mod factory;
pub mod log;
pub mod merge;
pub mod rng;
pub mod unit;

#[cfg(test)]
mod tests;

pub use battle::*;
pub use catalog::*;
pub use error::*;
pub use factory::*;
pub use merge::*;
pub use rng::{BattleRng, XorShiftRng};
pub use unit::*;
