use crate::Entity;
use csp_types::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where a field definition comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrigin {
    /// Intrinsic to the entity type (id, title, status, ...).
    Base,
    /// Added to a bundle by site configuration.
    #[default]
    Configurable,
}

/// A field declared on one `(entity_type, bundle)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    /// Field type id, e.g. `entity_reference`.
    pub field_type: String,
    #[serde(default)]
    pub origin: FieldOrigin,
}

impl FieldDefinition {
    fn with_origin(name: &str, field_type: &str, origin: FieldOrigin) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            origin,
        }
    }

    /// Shorthand for a base field.
    pub fn base(name: &str, field_type: &str) -> Self {
        Self::with_origin(name, field_type, FieldOrigin::Base)
    }

    /// Shorthand for a configurable field.
    pub fn configurable(name: &str, field_type: &str) -> Self {
        Self::with_origin(name, field_type, FieldOrigin::Configurable)
    }

    pub fn is_configurable(&self) -> bool {
        self.origin == FieldOrigin::Configurable
    }
}

/// Fields of one field type across the site:
/// `entity_type -> field_name -> bundles using it`.
pub type FieldMap = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// Field metadata lookups.
///
/// Implementors supply the two primitive queries; `fields_of_type` is
/// derived from them and is what callers normally use.
pub trait FieldSchema: Send + Sync {
    /// All fields of `field_type`, grouped by entity type.
    fn field_map_by_type(&self, field_type: &str) -> Result<FieldMap>;

    /// Field definitions of one bundle, in declaration order.
    fn field_definitions(&self, entity_type: &str, bundle: &str) -> Result<Vec<FieldDefinition>>;

    /// Names of the configurable fields of `field_type` on a bundle.
    ///
    /// A field qualifies only when its definition is configurable and its
    /// name is listed under `entity_type` in the field map for `field_type`.
    /// Base fields never qualify, even when their type matches. Names come
    /// back in declaration order.
    fn fields_of_type(
        &self,
        entity_type: &str,
        bundle: &str,
        field_type: &str,
    ) -> Result<Vec<String>> {
        let type_fields = self.field_map_by_type(field_type)?;
        let definitions = self.field_definitions(entity_type, bundle)?;
        let Some(names) = type_fields.get(entity_type) else {
            return Ok(Vec::new());
        };

        Ok(definitions
            .into_iter()
            .filter(|def| def.is_configurable() && names.contains_key(&def.name))
            .map(|def| def.name)
            .collect())
    }

    /// `fields_of_type` for a loaded entity's own type and bundle.
    fn entity_fields_of_type(&self, entity: &Entity, field_type: &str) -> Result<Vec<String>> {
        self.fields_of_type(&entity.entity_type, &entity.bundle, field_type)
    }
}
