//! Entity records and the entity registry.
//!
//! An entity is metadata (a link, a mention, an inline widget) attached to a span of block text.
//! Blocks only store [`EntityKey`]s; the records themselves live in an [`EntityMap`].

use std::collections::HashMap;
use std::fmt;

/// Opaque key identifying an entity record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityKey(String);

impl EntityKey {
    /// Create an entity key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for EntityKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// How removal is allowed to touch an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    /// Freely editable, like plain text.
    Mutable,
    /// Atomic: any removal touching the entity removes all of it.
    Immutable,
    /// Removable only in whole segments (e.g. word by word).
    Segmented,
}

impl fmt::Display for Mutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mutable => "MUTABLE",
            Self::Immutable => "IMMUTABLE",
            Self::Segmented => "SEGMENTED",
        })
    }
}

/// An entity record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Integration-defined type tag (e.g. `"LINK"`, `"MENTION"`).
    pub entity_type: String,
    /// Removal policy.
    pub mutability: Mutability,
    /// Optional integration-specific payload (JSON text).
    pub data_json: Option<String>,
}

impl Entity {
    /// Create an entity record without a payload.
    pub fn new(entity_type: impl Into<String>, mutability: Mutability) -> Self {
        Self {
            entity_type: entity_type.into(),
            mutability,
            data_json: None,
        }
    }

    /// Attach a JSON payload.
    pub fn with_data_json(mut self, data_json: impl Into<String>) -> Self {
        self.data_json = Some(data_json.into());
        self
    }
}

/// Resolves entity keys to records.
pub trait EntityLookup {
    /// The record for `key`, if registered.
    fn entity(&self, key: &EntityKey) -> Option<&Entity>;
}

/// In-memory entity registry.
#[derive(Debug, Clone, Default)]
pub struct EntityMap {
    entities: HashMap<EntityKey, Entity>,
    next_key: u64,
}

impl EntityMap {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new entity under a freshly allocated key and return the key.
    ///
    /// Keys are allocated sequentially (`"1"`, `"2"`, ...), skipping keys already taken by
    /// [`EntityMap::insert`].
    pub fn create(&mut self, entity: Entity) -> EntityKey {
        loop {
            self.next_key += 1;
            let key = EntityKey::new(self.next_key.to_string());
            if !self.entities.contains_key(&key) {
                self.entities.insert(key.clone(), entity);
                return key;
            }
        }
    }

    /// Register (or replace) an entity under an explicit key.
    pub fn insert(&mut self, key: impl Into<EntityKey>, entity: Entity) -> Option<Entity> {
        self.entities.insert(key.into(), entity)
    }

    /// The record for `key`.
    pub fn get(&self, key: &EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    /// Number of registered entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// `true` if no entity is registered.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityLookup for EntityMap {
    fn entity(&self, key: &EntityKey) -> Option<&Entity> {
        self.get(key)
    }
}
