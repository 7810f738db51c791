//! Scenario configuration with YAML schema and validation.
//!
//! A scenario file names a set of parameter overrides to apply to a
//! fresh session. Validation happens in two layers: schema validation
//! via serde/validator, then semantic validation (every override must
//! name a known parameter and fall within its declared bounds).
//!
//! ```yaml
//! schema_version: "1.0"
//! scenario:
//!   name: pilot-line
//!   description: 250 t/yr pilot line at winter utility rates
//! parameters:
//!   annual_production_tons: 250
//!   operational_days: 300
//!   utility_cost: 65000
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{LineError, LineResult};
use crate::session::LineSession;
use crate::store::ParameterStore;

/// Top-level scenario configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Scenario metadata.
    #[serde(default)]
    pub scenario: ScenarioMeta,

    /// Parameter overrides by name, applied in file order.
    ///
    /// When both sides of a linked pair appear, the later entry wins
    /// and rewrites its partner.
    #[serde(default)]
    pub parameters: IndexMap<String, f64>,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl ScenarioConfig {
    /// Load a scenario from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails,
    /// or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> LineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a scenario from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> LineResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Apply the overrides to a session, in file order.
    ///
    /// # Errors
    ///
    /// Fails on unknown names or out-of-bounds values; the session may
    /// retain overrides applied before the failing entry.
    pub fn apply(&self, session: &mut LineSession) -> LineResult<()> {
        for (name, value) in &self.parameters {
            session.set_by_name(name, *value)?;
        }
        Ok(())
    }

    /// Validate overrides beyond the schema: names must resolve and
    /// values must pass the catalog bounds.
    fn validate_semantic(&self) -> LineResult<()> {
        let mut scratch = ParameterStore::new();
        for (name, value) in &self.parameters {
            let param = name.parse().map_err(|_| {
                LineError::config(format!("unknown parameter '{name}' in scenario"))
            })?;
            scratch.set(param, *value).map_err(|e| {
                LineError::config(format!("invalid override for '{name}': {e}"))
            })?;
        }
        Ok(())
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            scenario: ScenarioMeta::default(),
            parameters: IndexMap::new(),
        }
    }
}

/// Scenario metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioMeta {
    /// Scenario name.
    #[serde(default)]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
}
