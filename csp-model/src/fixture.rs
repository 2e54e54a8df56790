//! JSON site fixtures: a schema plus content, loaded in one go.
//!
//! ```json
//! {
//!   "fields": [
//!     {"entity_type": "node", "bundle": "page", "name": "field_sections",
//!      "field_type": "entity_reference_revisions"}
//!   ],
//!   "entities": [
//!     {"id": 1, "entity_type": "node", "bundle": "page",
//!      "data": {"field_sections": [{"target_type": "paragraph", "target_id": 10}]}}
//!   ]
//! }
//! ```

use crate::{Entity, FieldDefinition, FieldOrigin, MemoryEntityStore, SchemaRegistry};
use csp_types::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One field definition, flattened with the bundle it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRecord {
    pub entity_type: String,
    pub bundle: String,
    pub name: String,
    pub field_type: String,
    #[serde(default)]
    pub origin: FieldOrigin,
}

/// A site's field schema and content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteFixture {
    #[serde(default)]
    pub fields: Vec<FieldRecord>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl SiteFixture {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a fixture file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Builds the registry and store described by this fixture.
    ///
    /// Every bundle used by an entity is declared, so bundles without
    /// fields resolve to an empty definition list.
    pub fn into_parts(self) -> (SchemaRegistry, MemoryEntityStore) {
        let mut registry = SchemaRegistry::new();
        for record in self.fields {
            registry.register(
                &record.entity_type,
                &record.bundle,
                FieldDefinition {
                    name: record.name,
                    field_type: record.field_type,
                    origin: record.origin,
                },
            );
        }

        let mut store = MemoryEntityStore::new();
        for entity in self.entities {
            registry.register_bundle(&entity.entity_type, &entity.bundle);
            store.insert(entity);
        }
        (registry, store)
    }
}
