//! Collector configuration, read from a TOML file such as `csp-cache.toml`.
//!
//! ```toml
//! paragraph_field_type = "entity_reference_revisions"
//! reference_field_type = "entity_reference"
//! target_entity_type = "node"
//! ```

use csp_model::{entity_types, field_types};
use csp_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Which field types and entity type the collector follows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Field type embedding paragraphs on a node.
    pub paragraph_field_type: String,
    /// Field type referencing other entities from a paragraph.
    pub reference_field_type: String,
    /// Entity type whose references produce tags.
    pub target_entity_type: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            paragraph_field_type: field_types::ENTITY_REFERENCE_REVISIONS.to_string(),
            reference_field_type: field_types::ENTITY_REFERENCE.to_string(),
            target_entity_type: entity_types::NODE.to_string(),
        }
    }
}

impl CollectorConfig {
    /// Parses a config, filling unset keys with defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file, falling back to defaults when it is absent or
    /// cannot be used.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No collector config at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded collector config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse collector config {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read collector config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("paragraph_field_type", &self.paragraph_field_type),
            ("reference_field_type", &self.reference_field_type),
            ("target_entity_type", &self.target_entity_type),
        ] {
            if value.is_empty() {
                return Err(Error::Config(format!("{key} must not be empty")));
            }
            if value.chars().any(|c| c.is_whitespace() || c == ':') {
                return Err(Error::Config(format!(
                    "{key} must not contain whitespace or ':', got {value:?}"
                )));
            }
        }
        Ok(())
    }
}
