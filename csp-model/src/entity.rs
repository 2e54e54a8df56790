use csp_types::{EntityId, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A loaded content entity.
///
/// `data` is a JSON object keyed by field name. Reference fields hold an
/// array of [`EntityRef`] items; other fields hold whatever their type
/// stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub entity_type: String,
    pub bundle: String,
    #[serde(default = "empty_object")]
    pub data: serde_json::Value,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// One item of a reference field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub target_type: String,
    pub target_id: EntityId,
    /// Pinned revision, set by revision-aware reference fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_revision_id: Option<u64>,
}

impl EntityRef {
    /// A reference to the current revision of an entity.
    pub fn to(target_type: &str, target_id: u64) -> Self {
        Self {
            target_type: target_type.to_string(),
            target_id: EntityId::new(target_id),
            target_revision_id: None,
        }
    }
}

impl Entity {
    /// Creates an entity with no field data.
    pub fn new(entity_type: &str, bundle: &str, id: u64) -> Self {
        Self {
            id: EntityId::new(id),
            entity_type: entity_type.to_string(),
            bundle: bundle.to_string(),
            data: empty_object(),
        }
    }

    /// Builder-style setter for a single field value.
    #[must_use]
    pub fn with_field(mut self, field_name: &str, value: serde_json::Value) -> Self {
        if !self.data.is_object() {
            self.data = empty_object();
        }
        if let Some(map) = self.data.as_object_mut() {
            map.insert(field_name.to_string(), value);
        }
        self
    }

    /// Builder-style setter for a reference field.
    #[must_use]
    pub fn with_references(self, field_name: &str, refs: &[EntityRef]) -> Self {
        let items = refs
            .iter()
            .map(|r| {
                let mut item = json!({
                    "target_type": r.target_type,
                    "target_id": r.target_id.get(),
                });
                if let Some(revision) = r.target_revision_id {
                    item["target_revision_id"] = json!(revision);
                }
                item
            })
            .collect();
        self.with_field(field_name, serde_json::Value::Array(items))
    }

    /// Whether this entity is of the given entity type.
    pub fn is(&self, entity_type: &str) -> bool {
        self.entity_type == entity_type
    }

    /// Decodes the reference items stored in `field_name`.
    ///
    /// A missing or null field has no references. Anything else that is not
    /// an array of reference items is a serialization error.
    pub fn references(&self, field_name: &str) -> Result<Vec<EntityRef>> {
        match self.data.get(field_name) {
            None | Some(serde_json::Value::Null) => Ok(Vec::new()),
            Some(value) => Ok(Vec::<EntityRef>::deserialize(value)?),
        }
    }
}
