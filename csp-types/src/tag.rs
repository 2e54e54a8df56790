//! Cache invalidation tags.
//!
//! A tag is an opaque key; invalidating it signals every render that
//! carries it to refresh. Entity tags follow the `<entity_type>:<id>` form,
//! e.g. `node:42`.

use crate::{EntityId, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A single cache invalidation tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CacheTag(String);

impl CacheTag {
    /// Creates a tag from an arbitrary key.
    ///
    /// Keys must be non-empty and contain no whitespace.
    pub fn new(tag: impl Into<String>) -> crate::Result<Self> {
        let tag = tag.into();
        if tag.is_empty() || tag.chars().any(char::is_whitespace) {
            return Err(Error::InvalidCacheTag(tag));
        }
        Ok(Self(tag))
    }

    /// The tag identifying one entity, e.g. `node:5`.
    ///
    /// `entity_type` must be a plain id: non-empty, no whitespace, no `:`.
    #[must_use]
    pub fn for_entity(entity_type: &str, id: EntityId) -> Self {
        debug_assert!(
            is_entity_type_id(entity_type),
            "invalid entity type for cache tag: {entity_type:?}"
        );
        Self(format!("{entity_type}:{id}"))
    }

    /// Splits an entity tag back into its entity type and id.
    ///
    /// Returns `None` for tags that are not of the `<entity_type>:<id>` form.
    #[must_use]
    pub fn entity_parts(&self) -> Option<(&str, EntityId)> {
        let (entity_type, id) = self.0.split_once(':')?;
        if entity_type.is_empty() {
            return None;
        }
        let id = id.parse::<u64>().ok()?;
        Some((entity_type, EntityId::new(id)))
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CacheTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CacheTag {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CacheTag> for String {
    fn from(tag: CacheTag) -> Self {
        tag.0
    }
}

impl AsRef<str> for CacheTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_entity_type_id(entity_type: &str) -> bool {
    !entity_type.is_empty() && !entity_type.chars().any(|c| c.is_whitespace() || c == ':')
}

/// Merges `additional` into `existing`, keeping first-seen order and
/// dropping duplicates from both inputs.
pub fn merge_tags<I>(existing: &[CacheTag], additional: I) -> Vec<CacheTag>
where
    I: IntoIterator<Item = CacheTag>,
{
    let mut seen: HashSet<CacheTag> = HashSet::with_capacity(existing.len());
    let mut merged = Vec::with_capacity(existing.len());
    for tag in existing.iter().cloned().chain(additional) {
        if seen.insert(tag.clone()) {
            merged.push(tag);
        }
    }
    merged
}
