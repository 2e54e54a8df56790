//! In-memory field schema.

use crate::schema::{FieldDefinition, FieldMap, FieldSchema};
use csp_types::{Error, Result};
use std::collections::BTreeMap;

/// Field definitions for every known bundle, built up by the caller.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    bundles: BTreeMap<(String, String), Vec<FieldDefinition>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a bundle, possibly without any fields.
    pub fn register_bundle(&mut self, entity_type: &str, bundle: &str) -> &mut Self {
        self.bundles
            .entry((entity_type.to_string(), bundle.to_string()))
            .or_default();
        self
    }

    /// Adds a field to a bundle, declaring the bundle if needed.
    ///
    /// A definition with an already registered name replaces the old one
    /// in place, so declaration order is kept.
    pub fn register(
        &mut self,
        entity_type: &str,
        bundle: &str,
        definition: FieldDefinition,
    ) -> &mut Self {
        let fields = self
            .bundles
            .entry((entity_type.to_string(), bundle.to_string()))
            .or_default();
        match fields.iter_mut().find(|f| f.name == definition.name) {
            Some(existing) => *existing = definition,
            None => fields.push(definition),
        }
        self
    }

    pub fn has_bundle(&self, entity_type: &str, bundle: &str) -> bool {
        self.bundles
            .contains_key(&(entity_type.to_string(), bundle.to_string()))
    }

    /// Number of declared bundles.
    pub fn bundle_count(&self) -> usize {
        self.bundles.len()
    }
}

impl FieldSchema for SchemaRegistry {
    fn field_map_by_type(&self, field_type: &str) -> Result<FieldMap> {
        let mut map = FieldMap::new();
        for ((entity_type, bundle), fields) in &self.bundles {
            for field in fields.iter().filter(|f| f.field_type == field_type) {
                map.entry(entity_type.clone())
                    .or_default()
                    .entry(field.name.clone())
                    .or_default()
                    .push(bundle.clone());
            }
        }
        Ok(map)
    }

    fn field_definitions(&self, entity_type: &str, bundle: &str) -> Result<Vec<FieldDefinition>> {
        self.bundles
            .get(&(entity_type.to_string(), bundle.to_string()))
            .cloned()
            .ok_or_else(|| Error::UnknownBundle {
                entity_type: entity_type.to_string(),
                bundle: bundle.to_string(),
            })
    }
}
