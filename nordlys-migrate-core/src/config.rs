//! Migration configuration
//!
//! All keys are optional; an empty file means the built-in defaults.
//! Accepted formats: TOML, YAML and JSON, chosen by file extension.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::components::LegacyComponent;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Unknown component in targets: {0}")]
    UnknownComponent(String),
}

/// Where a component's replacement is imported from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub module: String,
    pub name: String,
}

impl Target {
    pub fn new(module: &str, name: &str) -> Self {
        Target { module: module.to_string(), name: name.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct MigrationConfig {
    /// Module paths whose imports are migrated
    pub legacy_sources: Vec<String>,
    /// Module providing the layout container and `StyleSheet`
    pub layout_module: String,
    /// Layout container used for `Box` and for style wrappers
    pub container: String,
    /// Preferred binding for the generated stylesheet
    pub stylesheet_binding: String,
    /// Per-component target overrides, keyed by legacy component name
    pub targets: IndexMap<String, Target>,
    /// Exact module path redirects
    pub redirects: IndexMap<String, String>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        MigrationConfig {
            legacy_sources: vec!["native-base".to_string()],
            layout_module: "react-native".to_string(),
            container: "View".to_string(),
            stylesheet_binding: "styles".to_string(),
            targets: IndexMap::new(),
            redirects: IndexMap::new(),
        }
    }
}

impl MigrationConfig {
    /// Load from a `.toml`, `.yaml`/`.yml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::parse(&text, ext)
    }

    /// Parse config text in the format named by `ext`.
    pub fn parse(text: &str, ext: &str) -> Result<Self, ConfigError> {
        let config: MigrationConfig = match ext.to_lowercase().as_str() {
            "toml" => toml::from_str(text)?,
            "yaml" | "yml" => {
                if text.trim().is_empty() {
                    MigrationConfig::default()
                } else {
                    serde_yaml::from_str(text)?
                }
            }
            "json" => serde_json::from_str(text)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for name in self.targets.keys() {
            LegacyComponent::from_str(name).map_err(|_| ConfigError::UnknownComponent(name.clone()))?;
        }
        Ok(())
    }

    pub fn is_legacy_source(&self, module: &str) -> bool {
        self.legacy_sources.iter().any(|s| s == module)
    }

    /// Target for `component`, honouring overrides.
    pub fn target(&self, component: LegacyComponent) -> Target {
        if let Some(target) = self.targets.get(component.as_ref()) {
            return target.clone();
        }
        match component {
            LegacyComponent::Box => Target::new(&self.layout_module, &self.container),
            LegacyComponent::Pressable => Target::new(&self.layout_module, "Pressable"),
            other => {
                let (module, name) = other.default_target();
                Target::new(module, name)
            }
        }
    }

    /// Redirect for `module`, if configured.
    pub fn redirect(&self, module: &str) -> Option<&str> {
        self.redirects.get(module).map(|s| s.as_str())
    }
}
