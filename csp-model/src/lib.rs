//! Entity and field-schema model for csp-cache.
//!
//! Defines the collaborators the reference collector reads from:
//! - [`Entity`] — a loaded content entity (type, bundle, id, JSON field data)
//! - [`EntityRef`] — one item of a reference field
//! - [`FieldDefinition`] — a field declared on an `(entity_type, bundle)` pair
//! - [`FieldSchema`] — field metadata lookups, with the `fields_of_type` rule
//! - [`SchemaRegistry`] — an explicitly constructed, in-memory `FieldSchema`
//! - [`EntityStore`] / [`MemoryEntityStore`] — reference resolution
//! - [`SiteFixture`] — a JSON description of a site's schema and content
//!
//! Nothing here is global: a registry and a store are built by the caller
//! and handed to whatever needs them.

mod entity;
mod fixture;
mod registry;
mod schema;
mod store;

pub use entity::{Entity, EntityRef};
pub use fixture::{FieldRecord, SiteFixture};
pub use registry::SchemaRegistry;
pub use schema::{FieldDefinition, FieldMap, FieldOrigin, FieldSchema};
pub use store::{EntityStore, MemoryEntityStore};

/// Well-known entity type ids.
pub mod entity_types {
    /// Top-level content items.
    pub const NODE: &str = "node";
    /// Embedded sub-components.
    pub const PARAGRAPH: &str = "paragraph";
}

/// Well-known field type ids.
pub mod field_types {
    /// Revision-aware reference, used only to embed paragraphs.
    pub const ENTITY_REFERENCE_REVISIONS: &str = "entity_reference_revisions";
    /// Plain reference to any entity.
    pub const ENTITY_REFERENCE: &str = "entity_reference";
    pub const STRING: &str = "string";
    pub const TEXT_LONG: &str = "text_long";
}
