//! Core type definitions for csp-cache.
//!
//! This crate defines the small, schema-agnostic types shared by the model
//! and the collector:
//! - Entity identifiers (numeric, as issued by the content store)
//! - Cache tags (`<entity_type>:<id>`)
//! - The shared error type
//!
//! Field definitions, entities and the collector live in `csp-model` and
//! `csp-cache`.

mod ids;
mod tag;

pub use ids::EntityId;
pub use tag::{CacheTag, merge_tags};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the schema and storage collaborators.
///
/// The collector adds no variants of its own; whatever a collaborator
/// reports is passed through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no field definitions for bundle '{bundle}' of entity type '{entity_type}'")]
    UnknownBundle { entity_type: String, bundle: String },

    #[error("invalid cache tag: {0}")]
    InvalidCacheTag(String),

    #[error("invalid entity id: {0}")]
    InvalidEntityId(#[from] std::num::ParseIntError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
