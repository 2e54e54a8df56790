//! Cache invalidation tags derived from paragraph references.
//!
//! [`ParagraphReference`] walks a node's paragraph fields, then each
//! paragraph's entity-reference fields, and emits a tag for every
//! referenced node. The field schema and the entity store are injected;
//! see `csp-model` for the traits and in-memory implementations.

mod collector;
mod config;

pub use collector::ParagraphReference;
pub use config::CollectorConfig;
pub use csp_types::{CacheTag, merge_tags};
