//! Cache tags for nodes whose paragraphs reference other nodes.
//!
//! A node embeds paragraphs through paragraph-reference fields, and those
//! paragraphs may reference further nodes. The node's render depends on
//! those nodes, so it must carry their cache tags.

use crate::config::CollectorConfig;
use csp_model::{Entity, EntityStore, FieldSchema, entity_types};
use csp_types::{CacheTag, EntityId, Result};
use std::sync::Arc;
use tracing::debug;

/// Collects `node:<id>` tags for nodes referenced one paragraph level down.
pub struct ParagraphReference {
    schema: Arc<dyn FieldSchema>,
    store: Arc<dyn EntityStore>,
    config: CollectorConfig,
}

impl ParagraphReference {
    /// Creates a collector with the default field and entity types.
    pub fn new(schema: Arc<dyn FieldSchema>, store: Arc<dyn EntityStore>) -> Self {
        Self::with_config(schema, store, CollectorConfig::default())
    }

    pub fn with_config(
        schema: Arc<dyn FieldSchema>,
        store: Arc<dyn EntityStore>,
        config: CollectorConfig,
    ) -> Self {
        Self {
            schema,
            store,
            config,
        }
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Tags for every target entity referenced by the node's paragraphs.
    ///
    /// Tags come back in discovery order and are not deduplicated: a node
    /// referenced from two fields is tagged twice. Errors from the schema
    /// or the store are returned as-is.
    pub fn collect_tags(&self, node: &Entity) -> Result<Vec<CacheTag>> {
        let mut tags = Vec::new();

        for field_name in self.paragraph_fields(node)? {
            for paragraph in self.store.referenced_entities(node, &field_name)? {
                for reference_field in self.entity_reference_fields(&paragraph)? {
                    for reference in self.store.referenced_entities(&paragraph, &reference_field)? {
                        if reference.is(&self.config.target_entity_type) {
                            tags.push(CacheTag::for_entity(
                                &self.config.target_entity_type,
                                reference.id,
                            ));
                        }
                    }
                }
            }
        }

        debug!(
            node_id = %node.id,
            bundle = %node.bundle,
            tags = tags.len(),
            "Collected paragraph cache tags"
        );
        Ok(tags)
    }

    /// Loads node `id` and collects its tags; `Ok(None)` when there is no
    /// such node.
    ///
    /// The input is always looked up as a node, whatever entity type the
    /// tags are configured to target.
    pub fn collect_node_tags(&self, id: EntityId) -> Result<Option<Vec<CacheTag>>> {
        let Some(node) = self.store.load(entity_types::NODE, id)? else {
            return Ok(None);
        };
        debug!(node_id = %node.id, bundle = %node.bundle, "Inspecting node");
        self.collect_tags(&node).map(Some)
    }

    /// Paragraph-reference field names on a node's bundle.
    pub fn paragraph_fields(&self, node: &Entity) -> Result<Vec<String>> {
        self.schema
            .entity_fields_of_type(node, &self.config.paragraph_field_type)
    }

    /// Entity-reference field names on a paragraph's bundle.
    pub fn entity_reference_fields(&self, paragraph: &Entity) -> Result<Vec<String>> {
        self.schema
            .entity_fields_of_type(paragraph, &self.config.reference_field_type)
    }
}
