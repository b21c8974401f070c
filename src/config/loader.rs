// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::config::consts::{DEFAULT_TIME_TO_RELEASE, DEFAULT_TIME_UNIT_MS};
use crate::errors::{ConfigError, PizzaError};
use crate::observability::messages::config::{ConfigLoaded, ConfigRejected};
use crate::observability::messages::StructuredLog;
use crate::pizza::{OvenSettings, Pizza, PizzaSize};

/// Configuration for one pizzeria run.
///
/// Loaded from YAML or TOML; every field is optional and the defaults reproduce
/// the classic medium pizza order (including the misspelled `Peper` removal).
///
/// # Fields
/// * `size` - A preset name (`individual`, `medium`, `familiar`) or a raw integer size
/// * `oven` - Timing of the oven and the release window
/// * `release_on_finish` - Whether the cook takes the pizza out as soon as it is ready
/// * `steps` - Ingredient additions and removals, applied in order
///
/// # Example
/// ```yaml
/// size: medium
/// oven:
///   time_unit_ms: 100
///   time_to_release: 5
/// release_on_finish: true
/// steps:
///   - add: Tomato
///   - add: Mushrooms
///   - remove: Mushrooms
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PizzeriaConfig {
    pub size: SizeSetting,
    pub oven: OvenConfig,
    pub release_on_finish: bool,
    pub steps: Vec<Step>,
}

impl Default for PizzeriaConfig {
    fn default() -> Self {
        Self {
            size: SizeSetting::Preset(PizzaSize::Medium),
            oven: OvenConfig::default(),
            release_on_finish: true,
            steps: vec![
                Step::add("Tomato"),
                Step::add("Mushrooms"),
                Step::add("Scarmoza"),
                Step::add("Bone"),
                Step::remove("Bone"),
                Step::add("Pepper"),
                Step::remove("Peper"),
                Step::add("Onion"),
                Step::add("Pepperoni"),
                Step::add("Oregano"),
            ],
        }
    }
}

/// Pizza size as written in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SizeSetting {
    Preset(PizzaSize),
    Raw(i64),
}

impl SizeSetting {
    pub fn value(&self) -> i64 {
        match self {
            SizeSetting::Preset(size) => size.value(),
            SizeSetting::Raw(size) => *size,
        }
    }
}

/// Oven timing.
///
/// # Fields
/// * `time_unit_ms` - Milliseconds per time unit (defaults to 1)
/// * `time_to_release` - Time units between ready and charred (defaults to 5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OvenConfig {
    pub time_unit_ms: u64,
    pub time_to_release: i64,
}

impl Default for OvenConfig {
    fn default() -> Self {
        Self {
            time_unit_ms: DEFAULT_TIME_UNIT_MS,
            time_to_release: DEFAULT_TIME_TO_RELEASE,
        }
    }
}

impl From<&OvenConfig> for OvenSettings {
    fn from(oven: &OvenConfig) -> Self {
        OvenSettings {
            time_unit: Duration::from_millis(oven.time_unit_ms),
            time_to_release: oven.time_to_release,
        }
    }
}

/// One ingredient operation, written `{ add: X }` or `{ remove: X }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Add { add: String },
    Remove { remove: String },
}

impl Step {
    pub fn add(ingredient: &str) -> Self {
        Step::Add {
            add: ingredient.to_string(),
        }
    }

    pub fn remove(ingredient: &str) -> Self {
        Step::Remove {
            remove: ingredient.to_string(),
        }
    }

    pub fn apply(&self, pizza: &Pizza) -> Result<(), PizzaError> {
        match self {
            Step::Add { add } => pizza.add(add.as_str()).map(|_| ()),
            Step::Remove { remove } => pizza.remove(remove).map(|_| ()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Toml => "TOML",
        }
    }

    pub fn parse(&self, content: &str) -> Result<PizzeriaConfig, ConfigError> {
        let cfg: PizzeriaConfig = match self {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Ok(cfg)
    }
}

/// Load a config from a YAML or TOML file, picked by extension
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PizzeriaConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    format.parse(&content)
}

/// Load and validate a config file
///
/// Validation problems are collected and reported together.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<PizzeriaConfig, ConfigError> {
    let path = path.as_ref();
    let cfg = load_config(path)?;

    if let Err(problems) = crate::config::validate_config(&cfg) {
        ConfigRejected {
            path,
            problems: &problems,
        }
        .log();
        return Err(ConfigError::Invalid(problems));
    }

    ConfigLoaded {
        path,
        format: ConfigFormat::from_path(path).map_or("unknown", |format| format.as_str()),
        steps: cfg.steps.len(),
    }
    .log();

    Ok(cfg)
}
