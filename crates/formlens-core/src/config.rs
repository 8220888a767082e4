//! Configuration for resolution passes.

use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};

/// What a resolution pass does when a key block cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the whole pass on the first unresolvable key.
    #[default]
    Strict,
    /// Skip the offending key, log it, and record it in the outcome.
    Lenient,
}

/// Configuration for a resolution pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Failure policy for unresolvable keys.
    pub failure_policy: FailurePolicy,
}

impl ResolveConfig {
    /// Configuration that aborts on the first unresolvable key.
    pub fn strict() -> Self {
        Self {
            failure_policy: FailurePolicy::Strict,
        }
    }

    /// Configuration that skips unresolvable keys and reports them.
    pub fn lenient() -> Self {
        Self {
            failure_policy: FailurePolicy::Lenient,
        }
    }

    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> FormResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| FormError::Configuration(e.to_string()))
            }
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| FormError::Configuration(e.to_string()))
            }
            Some("yaml" | "yml") => {
                serde_yaml::from_str(&content).map_err(|e| FormError::Configuration(e.to_string()))
            }
            _ => Err(FormError::Configuration(
                "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
            )),
        }
    }
}
