//! Unit type definitions and the catalog that holds them.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::unit::Speed;

/// Tier-1 stats of a unit type
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitDefinition {
    pub name: String,
    pub attack: i32,
    pub health: i32,
    pub speed: Speed,
    pub merge_tag: String,
}

impl UnitDefinition {
    pub fn new(name: &str, attack: i32, health: i32, speed: Speed, merge_tag: &str) -> Self {
        Self {
            name: String::from(name),
            attack,
            health,
            speed,
            merge_tag: String::from(merge_tag),
        }
    }

    fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && !self.merge_tag.is_empty()
            && self.attack > 0
            && self.health > 0
            && self.speed > 0
    }
}

/// Ordered registry of unit types.
///
/// Iteration order is registration order. Overwriting an existing id keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitCatalog {
    order: Vec<String>,
    definitions: BTreeMap<String, UnitDefinition>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from `(type_id, definition)` pairs, in order
    pub fn from_definitions<I>(entries: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = (String, UnitDefinition)>,
    {
        let mut catalog = Self::new();
        for (type_id, def) in entries {
            catalog.register(&type_id, def)?;
        }
        Ok(catalog)
    }

    /// Insert or overwrite a definition
    pub fn register(&mut self, type_id: &str, def: UnitDefinition) -> EngineResult<()> {
        if type_id.is_empty() || !def.is_valid() {
            return Err(EngineError::InvalidRegistration {
                type_id: String::from(type_id),
            });
        }
        if !self.definitions.contains_key(type_id) {
            self.order.push(String::from(type_id));
        }
        self.definitions.insert(String::from(type_id), def);
        Ok(())
    }

    pub fn get(&self, type_id: &str) -> Option<&UnitDefinition> {
        self.definitions.get(type_id)
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.definitions.contains_key(type_id)
    }

    /// Type ids in registration order
    pub fn type_ids(&self) -> &[String] {
        &self.order
    }

    /// `(type_id, definition)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UnitDefinition)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.definitions.get(id).map(|def| (id.as_str(), def)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
