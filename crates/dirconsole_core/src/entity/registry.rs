//! Process-wide entity registry.
//!
//! # Responsibility
//! - Publish entity descriptors under validated, unique names.
//! - Provide lookup for navigation and rendering, plus teardown.
//!
//! # Invariants
//! - The registry is an owned object injected at startup; there is no
//!   global mutable instance.
//! - Registered names are attribute-shaped and unique.

use crate::entity::Entity;
use crate::model::is_valid_attribute_name;
use log::info;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Registration and lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRegistryError {
    InvalidEntityName(String),
    DuplicateEntityName(String),
    EntityNotFound(String),
}

impl Display for EntityRegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEntityName(value) => write!(f, "entity name is invalid: {value}"),
            Self::DuplicateEntityName(value) => {
                write!(f, "entity name already registered: {value}")
            }
            Self::EntityNotFound(value) => write!(f, "entity not found: {value}"),
        }
    }
}

impl Error for EntityRegistryError {}

/// In-process registry of entity descriptors.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entries: BTreeMap<String, Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one entity descriptor.
    ///
    /// # Errors
    /// - `InvalidEntityName` when the name is not attribute-shaped.
    /// - `DuplicateEntityName` when the name is already registered.
    pub fn register(&mut self, entity: Entity) -> Result<(), EntityRegistryError> {
        let name = entity.name().trim().to_string();
        if !is_valid_attribute_name(&name) {
            return Err(EntityRegistryError::InvalidEntityName(name));
        }
        if self.entries.contains_key(name.as_str()) {
            return Err(EntityRegistryError::DuplicateEntityName(name));
        }

        info!(
            "event=entity_registered module=registry status=ok entity={name} facets={} dialogs={}",
            entity.facet_names().len(),
            entity.dialog_names().len()
        );
        self.entries.insert(name, entity);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns sorted registered entity names.
    pub fn entity_names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Returns one entity by name.
    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entries.get(name.trim())
    }

    /// Returns one entity by name for initialization.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.entries.get_mut(name.trim())
    }

    /// Removes every registered entity; part of console teardown.
    pub fn clear(&mut self) {
        info!(
            "event=registry_clear module=registry status=ok entities={}",
            self.entries.len()
        );
        self.entries.clear();
    }
}
