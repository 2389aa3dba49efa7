// Copyright 2024-2026 statsd-otlp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration loading from environment variables and TOML files.
//!
//! Environment values are read from `STATSD_OTLP_*` variables with sensible
//! defaults. Invalid values fall back to defaults without crashing.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `STATSD_OTLP_EVENT_TITLE_ATTRIBUTE_KEY` | title | Key for the event title |
//! | `STATSD_OTLP_EVENT_CATEGORY_ATTRIBUTE_KEY` | category | Key reserved for the event category |
//! | `STATSD_OTLP_EVENT_PROPERTIES_ATTRIBUTE_KEY` | properties | Key for the nested properties group |
//! | `STATSD_OTLP_SCOPE_NAME` | statsd-otlp | Instrumentation scope name |
//! | `STATSD_OTLP_LOG_LEVEL` | info | Log filter directive |
//! | `STATSD_OTLP_LOG_FORMAT` | json | `json` or `pretty` |
//! | `STATSD_OTLP_LOG_FILE` | (stderr) | Append logs to this file |
//!
//! # TOML
//!
//! ```toml
//! scope_name = "statsd-otlp"
//!
//! [event]
//! title_attribute_key = "com.example.title"
//! properties_attribute_key = "com.example.properties"
//!
//! [resource]
//! "service.name" = "statsd"
//!
//! [log]
//! level = "statsd_otlp=debug"
//! format = "pretty"
//! file = "/var/log/statsd-otlp.log"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::otlp::{InstrumentationScope, Resource};
use crate::telemetry::{LogConfig, LogFormat};
use crate::transform::{
    AttributeKeys, DEFAULT_CATEGORY_ATTR_KEY, DEFAULT_PROPERTIES_ATTR_KEY, DEFAULT_TITLE_ATTR_KEY,
};

pub const DEFAULT_SCOPE_NAME: &str = "statsd-otlp";

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "STATSD_OTLP_CONFIG";

/// Effective configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub attribute_keys: AttributeKeys,
    pub scope_name: String,
    /// String attributes describing this producer, in key order.
    pub resource_attributes: BTreeMap<String, String>,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attribute_keys: AttributeKeys::default(),
            scope_name: DEFAULT_SCOPE_NAME.to_string(),
            resource_attributes: BTreeMap::new(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Resource built from the configured attributes.
    pub fn resource(&self) -> Resource {
        Resource::from_pairs(
            self.resource_attributes
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        )
    }

    /// Instrumentation scope named after the configured scope.
    pub fn scope(&self) -> InstrumentationScope {
        InstrumentationScope::new(self.scope_name.as_str(), env!("CARGO_PKG_VERSION"))
    }

    /// Overlay any `STATSD_OTLP_*` variables that are set.
    pub fn apply_env(&mut self) {
        if let Some(v) = non_empty_var("STATSD_OTLP_EVENT_TITLE_ATTRIBUTE_KEY") {
            self.attribute_keys.title = v;
        }
        if let Some(v) = non_empty_var("STATSD_OTLP_EVENT_CATEGORY_ATTRIBUTE_KEY") {
            self.attribute_keys.category = v;
        }
        if let Some(v) = non_empty_var("STATSD_OTLP_EVENT_PROPERTIES_ATTRIBUTE_KEY") {
            self.attribute_keys.properties = v;
        }
        if let Some(v) = non_empty_var("STATSD_OTLP_SCOPE_NAME") {
            self.scope_name = v;
        }
        if let Some(v) = non_empty_var("STATSD_OTLP_LOG_LEVEL") {
            self.log.level = v;
        }
        if let Some(format) =
            non_empty_var("STATSD_OTLP_LOG_FORMAT").and_then(|v| LogFormat::parse(&v))
        {
            self.log.format = format;
        }
        if let Some(v) = non_empty_var("STATSD_OTLP_LOG_FILE") {
            self.log.output_path = Some(PathBuf::from(v));
        }
    }

    /// Key/value lines for display.
    pub fn summary(&self) -> Vec<(String, String)> {
        let mut lines = vec![
            ("event.title_attribute_key".to_string(), self.attribute_keys.title.clone()),
            ("event.category_attribute_key".to_string(), self.attribute_keys.category.clone()),
            ("event.properties_attribute_key".to_string(), self.attribute_keys.properties.clone()),
            ("scope_name".to_string(), self.scope_name.clone()),
            ("log.level".to_string(), self.log.level.clone()),
            ("log.format".to_string(), self.log.format.as_str().to_string()),
        ];
        if let Some(path) = &self.log.output_path {
            lines.push(("log.file".to_string(), path.display().to_string()));
        }
        for (k, v) in &self.resource_attributes {
            lines.push((format!("resource.{}", k), v.clone()));
        }
        lines
    }
}

/// On-disk layout of the TOML config.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    scope_name: Option<String>,
    event: EventSection,
    resource: BTreeMap<String, String>,
    log: LogSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct EventSection {
    title_attribute_key: String,
    category_attribute_key: String,
    properties_attribute_key: String,
}

impl Default for EventSection {
    fn default() -> Self {
        Self {
            title_attribute_key: DEFAULT_TITLE_ATTR_KEY.to_string(),
            category_attribute_key: DEFAULT_CATEGORY_ATTR_KEY.to_string(),
            properties_attribute_key: DEFAULT_PROPERTIES_ATTR_KEY.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LogSection {
    level: Option<String>,
    format: Option<String>,
    file: Option<PathBuf>,
}

/// Read a non-empty environment variable.
fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Parse configuration from a TOML document.
///
/// Unknown log formats fall back to the default rather than failing.
pub fn from_toml_str(content: &str) -> Result<Config, ConfigError> {
    let file: FileConfig = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    let mut config = Config {
        attribute_keys: AttributeKeys {
            title: file.event.title_attribute_key,
            category: file.event.category_attribute_key,
            properties: file.event.properties_attribute_key,
        },
        resource_attributes: file.resource,
        ..Config::default()
    };
    if let Some(scope_name) = file.scope_name {
        config.scope_name = scope_name;
    }
    if let Some(level) = file.log.level {
        config.log.level = level;
    }
    if let Some(format) = file.log.format.as_deref().and_then(LogFormat::parse) {
        config.log.format = format;
    }
    config.log.output_path = file.log.file;
    Ok(config)
}

/// Load configuration from a TOML file.
pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;
    from_toml_str(&content)
}

/// Load configuration: the file named by `STATSD_OTLP_CONFIG` (if any),
/// then environment overrides.
pub fn load() -> Result<Config, ConfigError> {
    let mut config = match non_empty_var(CONFIG_PATH_ENV) {
        Some(path) => from_file(Path::new(&path))?,
        None => Config::default(),
    };
    config.apply_env();
    Ok(config)
}
