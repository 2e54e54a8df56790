//! Entity loading and reference resolution.

use crate::Entity;
use csp_types::{EntityId, Result};
use std::collections::HashMap;
use tracing::debug;

/// Loads entities and resolves reference fields to their targets.
pub trait EntityStore: Send + Sync {
    /// Loads one entity; `Ok(None)` when it does not exist.
    fn load(&self, entity_type: &str, id: EntityId) -> Result<Option<Entity>>;

    /// Loads the targets of a reference field, in item order.
    ///
    /// Items whose target no longer exists are skipped. Duplicate items
    /// yield duplicate entities.
    fn referenced_entities(&self, entity: &Entity, field_name: &str) -> Result<Vec<Entity>> {
        let mut targets = Vec::new();
        for item in entity.references(field_name)? {
            match self.load(&item.target_type, item.target_id)? {
                Some(target) => targets.push(target),
                None => debug!(
                    field = field_name,
                    target_type = %item.target_type,
                    target_id = %item.target_id,
                    "Skipping dangling reference"
                ),
            }
        }
        Ok(targets)
    }
}

/// A `HashMap`-backed store.
#[derive(Debug, Clone, Default)]
pub struct MemoryEntityStore {
    entities: HashMap<(String, EntityId), Entity>,
}

impl MemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an entity, returning the one it replaced.
    pub fn insert(&mut self, entity: Entity) -> Option<Entity> {
        self.entities
            .insert((entity.entity_type.clone(), entity.id), entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityStore for MemoryEntityStore {
    fn load(&self, entity_type: &str, id: EntityId) -> Result<Option<Entity>> {
        Ok(self.entities.get(&(entity_type.to_string(), id)).cloned())
    }
}
