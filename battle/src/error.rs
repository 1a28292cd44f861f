//! Error types for engine operations
//!
//! These are contract violations (a bad catalog, a merge that should have
//! been checked first), not expected player mistakes. Player-facing
//! rejections live in the game crate.

use alloc::string::String;
use core::fmt;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Errors raised by the factory and merge system
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EngineError {
    /// No definition is registered under this type id
    #[serde(rename_all = "camelCase")]
    UnknownType { type_id: String },
    /// Empty type id or a definition with missing/non-positive stats
    #[serde(rename_all = "camelCase")]
    InvalidRegistration { type_id: String },
    /// `merge_units` was called on a pair that `can_merge` rejects
    CannotMerge,
    /// A game needs at least one unit type to fill its shop
    EmptyCatalog,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownType { type_id } => write!(f, "unknown unit type: {type_id}"),
            EngineError::InvalidRegistration { type_id } => {
                write!(f, "invalid type registration: {type_id:?}")
            }
            EngineError::CannotMerge => write!(f, "units cannot be merged"),
            EngineError::EmptyCatalog => write!(f, "unit catalog is empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
