//! Extraction configuration.

use std::fs;
use std::path::{Path, PathBuf};

use globset::Glob;
use jsonc_parser::ParseOptions;
use leafwalk_value::ObjectLayout;
use serde::{Deserialize, Serialize};

use crate::LeafwalkError;

/// Configuration for document discovery and extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LeafwalkConfig {
    /// File patterns to include.
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// File patterns to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// How JSON objects are represented when walked.
    #[serde(default)]
    pub object_layout: ObjectLayout,

    /// Number of loaded documents buffered ahead of the walker.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Whether to respect `.gitignore` files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Whether to include hidden files.
    #[serde(default)]
    pub include_hidden: bool,

    /// Maximum directory depth to traverse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Base directory for resolving relative paths.
    /// This is usually the directory containing the configuration file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_include() -> Vec<String> {
    vec!["**/*.json".to_string(), "**/*.jsonc".to_string()]
}

fn default_channel_capacity() -> usize {
    64
}

fn default_true() -> bool {
    true
}

impl LeafwalkConfig {
    /// Configuration file names, in lookup order.
    pub const CONFIG_FILES: [&'static str; 2] = [".leafwalk.jsonc", ".leafwalk.json"];

    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self {
            include: default_include(),
            exclude: Vec::new(),
            object_layout: ObjectLayout::default(),
            channel_capacity: default_channel_capacity(),
            respect_gitignore: true,
            include_hidden: false,
            max_depth: None,
            base_dir: None,
        }
    }

    /// Finds the first configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.as_ref().join(name))
            .find(|path| path.is_file())
    }

    /// Loads configuration from a file.
    ///
    /// Supports `.leafwalk.jsonc`, `.leafwalk.json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LeafwalkError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LeafwalkError::io(path, e))?;

        let mut config = Self::from_json(&content)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.base_dir = Some(parent.to_path_buf());
        }

        Ok(config)
    }

    /// Parses configuration from a JSON or JSONC string.
    pub fn from_json(json: &str) -> Result<Self, LeafwalkError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| LeafwalkError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        let config: Self = serde_json::from_value(value)
            .map_err(|e| LeafwalkError::config(format!("Invalid config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), LeafwalkError> {
        if self.channel_capacity == 0 {
            return Err(LeafwalkError::config(
                "Invalid config: channelCapacity must be at least 1",
            ));
        }

        for pattern in self.include.iter().chain(&self.exclude) {
            Glob::new(pattern).map_err(|e| {
                LeafwalkError::config(format!("Invalid config: pattern {:?}: {}", pattern, e))
            })?;
        }
        Ok(())
    }

    /// Renders this configuration as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, LeafwalkError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LeafwalkError::config(format!("Failed to serialize config: {}", e)))
    }

    /// Directory walked when no paths are given.
    pub fn root(&self) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Default for LeafwalkConfig {
    fn default() -> Self {
        Self::new()
    }
}
