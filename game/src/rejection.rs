//! Player-facing rejection codes
//!
//! Every manager operation that can be refused returns one of these instead
//! of panicking. The serialized form is the bare snake_case reason code.

use alloc::string::String;
use core::fmt;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// No shop entry at that index
    NoEntry,
    NoCoins,
    NoBenchSpace,
    /// Sold slot is empty or out of range
    Empty,
    BadTeamIndex,
    BadBenchIndex,
    /// Source slot of a move is empty
    NoUnit,
    TeamSlotTaken,
    BenchTaken,
    SameIndex,
    BadIndex,
    EmptySlot,
    CannotMerge,
    NotInPrepare,
    NotInReward,
}

impl Rejection {
    /// The wire reason code
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::NoEntry => "no_entry",
            Rejection::NoCoins => "no_coins",
            Rejection::NoBenchSpace => "no_bench_space",
            Rejection::Empty => "empty",
            Rejection::BadTeamIndex => "bad_team_index",
            Rejection::BadBenchIndex => "bad_bench_index",
            Rejection::NoUnit => "no_unit",
            Rejection::TeamSlotTaken => "team_slot_taken",
            Rejection::BenchTaken => "bench_taken",
            Rejection::SameIndex => "same_index",
            Rejection::BadIndex => "bad_index",
            Rejection::EmptySlot => "empty_slot",
            Rejection::CannotMerge => "cannot_merge",
            Rejection::NotInPrepare => "not_in_prepare",
            Rejection::NotInReward => "not_in_reward",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Result type alias for manager operations
pub type ActionResult<T> = Result<T, Rejection>;

/// Returned by an event listener that could not handle an event.
///
/// The bus logs it and carries on delivering to the other listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerError(pub String);

impl ListenerError {
    pub fn new(msg: &str) -> Self {
        Self(String::from(msg))
    }
}

impl fmt::Display for ListenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener failed: {}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ListenerError {}
