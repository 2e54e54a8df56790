use csp_types::{CacheTag, EntityId, Error, merge_tags};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn tag(s: &str) -> CacheTag {
    CacheTag::new(s).unwrap()
}

// ── Construction ─────────────────────────────────────────────────

#[test]
fn for_entity_formats_type_and_id() {
    let t = CacheTag::for_entity("node", EntityId::new(5));
    assert_eq!(t.as_str(), "node:5");
    assert_eq!(t.to_string(), "node:5");
}

#[test]
fn for_entity_output_passes_validation() {
    let t = CacheTag::for_entity("taxonomy_term", EntityId::new(9));
    let back: CacheTag = serde_json::from_str(&serde_json::to_string(&t).unwrap()).unwrap();
    assert_eq!(back, t);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "invalid entity type")]
fn for_entity_rejects_whitespace_in_type() {
    let _ = CacheTag::for_entity("node x", EntityId::new(5));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "invalid entity type")]
fn for_entity_rejects_colon_in_type() {
    let _ = CacheTag::for_entity("node:page", EntityId::new(5));
}

#[test]
fn new_accepts_non_entity_tags() {
    let t = tag("node_list");
    assert_eq!(t.as_str(), "node_list");
    assert!(t.entity_parts().is_none());
}

#[test]
fn new_rejects_empty() {
    assert!(matches!(CacheTag::new(""), Err(Error::InvalidCacheTag(_))));
}

#[test]
fn new_rejects_whitespace() {
    assert!(matches!(CacheTag::new("node: 5"), Err(Error::InvalidCacheTag(_))));
}

#[test]
fn from_str_parses() {
    let t: CacheTag = "node:12".parse().unwrap();
    assert_eq!(t, CacheTag::for_entity("node", EntityId::new(12)));
}

// ── entity_parts ─────────────────────────────────────────────────

#[test]
fn entity_parts_splits_entity_tag() {
    let t = tag("taxonomy_term:8");
    assert_eq!(t.entity_parts(), Some(("taxonomy_term", EntityId::new(8))));
}

#[test]
fn entity_parts_rejects_non_numeric_id() {
    assert!(tag("config:system.site").entity_parts().is_none());
}

#[test]
fn entity_parts_rejects_missing_type() {
    assert!(tag(":3").entity_parts().is_none());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_plain_string() {
    let json = serde_json::to_string(&tag("node:1")).unwrap();
    assert_eq!(json, "\"node:1\"");
}

#[test]
fn deserialize_validates() {
    assert!(serde_json::from_str::<CacheTag>("\"\"").is_err());
    let t: CacheTag = serde_json::from_str("\"node:4\"").unwrap();
    assert_eq!(t, tag("node:4"));
}

// ── merge_tags ───────────────────────────────────────────────────

#[test]
fn merge_appends_new_tags_in_order() {
    let existing = vec![tag("node:1"), tag("user:2")];
    let merged = merge_tags(&existing, vec![tag("node:5"), tag("node:3")]);
    assert_eq!(
        merged,
        vec![tag("node:1"), tag("user:2"), tag("node:5"), tag("node:3")]
    );
}

#[test]
fn merge_drops_duplicates() {
    let existing = vec![tag("node:1")];
    let merged = merge_tags(&existing, vec![tag("node:3"), tag("node:1"), tag("node:3")]);
    assert_eq!(merged, vec![tag("node:1"), tag("node:3")]);
}

#[test]
fn merge_with_nothing_is_identity() {
    let existing = vec![tag("node:1"), tag("node:2")];
    assert_eq!(merge_tags(&existing, Vec::new()), existing);
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn entity_tag_roundtrips_through_parts(
        entity_type in "[a-z][a-z_]{0,20}",
        id in any::<u64>(),
    ) {
        let t = CacheTag::for_entity(&entity_type, EntityId::new(id));
        prop_assert_eq!(t.to_string(), format!("{entity_type}:{id}"));
        prop_assert_eq!(t.entity_parts(), Some((entity_type.as_str(), EntityId::new(id))));
    }

    #[test]
    fn merged_tags_are_unique(ids in prop::collection::vec(0u64..20, 0..40)) {
        let tags: Vec<CacheTag> = ids
            .iter()
            .map(|id| CacheTag::for_entity("node", EntityId::new(*id)))
            .collect();
        let merged = merge_tags(&[], tags.clone());
        let unique: std::collections::HashSet<_> = tags.iter().collect();
        prop_assert_eq!(merged.len(), unique.len());
    }
}
