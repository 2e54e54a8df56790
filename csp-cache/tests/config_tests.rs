use csp_cache::CollectorConfig;
use csp_types::Error;
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn defaults_follow_paragraphs_to_nodes() {
    let config = CollectorConfig::default();
    assert_eq!(config.paragraph_field_type, "entity_reference_revisions");
    assert_eq!(config.reference_field_type, "entity_reference");
    assert_eq!(config.target_entity_type, "node");
}

#[test]
fn empty_toml_is_default() {
    assert_eq!(CollectorConfig::from_toml_str("").unwrap(), CollectorConfig::default());
}

#[test]
fn partial_toml_fills_defaults() {
    let config = CollectorConfig::from_toml_str(r#"target_entity_type = "media""#).unwrap();
    assert_eq!(config.target_entity_type, "media");
    assert_eq!(config.paragraph_field_type, "entity_reference_revisions");
}

#[test]
fn full_toml_parses() {
    let config = CollectorConfig::from_toml_str(
        r#"
        paragraph_field_type = "block_reference"
        reference_field_type = "dynamic_entity_reference"
        target_entity_type = "node"
        "#,
    )
    .unwrap();
    assert_eq!(config.paragraph_field_type, "block_reference");
    assert_eq!(config.reference_field_type, "dynamic_entity_reference");
}

#[test]
fn malformed_toml_is_config_error() {
    let err = CollectorConfig::from_toml_str("target_entity_type = ").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn empty_value_is_rejected() {
    let err = CollectorConfig::from_toml_str(r#"reference_field_type = "  ""#).unwrap_err();
    assert!(matches!(err, Error::Config(ref msg) if msg.contains("reference_field_type")));
}

#[test]
fn trailing_whitespace_is_rejected() {
    let err = CollectorConfig::from_toml_str(r#"target_entity_type = "node ""#).unwrap_err();
    assert!(matches!(err, Error::Config(ref msg) if msg.contains("target_entity_type")));
}

#[test]
fn inner_whitespace_is_rejected() {
    assert!(CollectorConfig::from_toml_str(r#"paragraph_field_type = "entity reference""#).is_err());
}

#[test]
fn colon_is_rejected() {
    let err = CollectorConfig::from_toml_str(r#"target_entity_type = "node:page""#).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn load_from_whitespace_value_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"target_entity_type = "node ""#).unwrap();
    let config = CollectorConfig::load_from(file.path());
    assert_eq!(config.target_entity_type, "node");
}

// ── load_from ────────────────────────────────────────────────────

#[test]
fn load_from_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = CollectorConfig::load_from(&dir.path().join("csp-cache.toml"));
    assert_eq!(config, CollectorConfig::default());
}

#[test]
fn load_from_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"target_entity_type = "media""#).unwrap();
    let config = CollectorConfig::load_from(file.path());
    assert_eq!(config.target_entity_type, "media");
}

#[test]
fn load_from_bad_file_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "this is not toml = = =").unwrap();
    let config = CollectorConfig::load_from(file.path());
    assert_eq!(config, CollectorConfig::default());
}
