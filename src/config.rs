//! Lint configuration: rule severities and rule parameters.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::check::Severity;
use crate::data::yaml::read_yaml_file;
use crate::lint::{RuleId, RuleParams};
use crate::utils::get_env_var;

/// Configuration file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".commit-conventions.yaml";

/// Environment variable holding the `owner/name` of the repository, as set by
/// GitHub Actions.
pub const REPOSITORY_ENV_VAR: &str = "GITHUB_REPOSITORY";

/// Rule severities and parameters.
///
/// ```yaml
/// header-max-length: 72
/// repository: nblockchain/conventions
/// rules:
///   type-empty: disabled
///   body-leading-blank: 2
/// ```
///
/// Rules not listed under `rules` keep their default severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LintConfig {
    /// Numeric limits and the repository identifier.
    #[serde(flatten)]
    pub params: RuleParams,
    /// Severity overrides by rule name.
    pub rules: BTreeMap<RuleId, Severity>,
}

impl LintConfig {
    /// Returns the effective severity of a rule.
    pub fn severity(&self, rule: RuleId) -> Severity {
        self.rules
            .get(&rule)
            .copied()
            .unwrap_or_else(|| rule.default_severity())
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, [`CONFIG_FILE_NAME`] in the
    /// current directory is used if present, else the defaults. The
    /// repository falls back to [`REPOSITORY_ENV_VAR`] (or the same key in
    /// the settings file) when the configuration does not set it.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from_path(path)?,
            None if Path::new(CONFIG_FILE_NAME).exists() => {
                Self::load_from_path(CONFIG_FILE_NAME)?
            }
            None => {
                debug!("No {CONFIG_FILE_NAME} found, using defaults");
                Self::default()
            }
        };

        if config.params.repository.is_none() {
            config.params.repository = get_env_var(REPOSITORY_ENV_VAR).ok();
        }
        debug!(repository = ?config.params.repository, "Resolved repository");

        Ok(config)
    }

    /// Loads the configuration from a YAML file, without any fallbacks.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading lint configuration");
        read_yaml_file(path)
            .with_context(|| format!("Failed to load lint configuration: {}", path.display()))
    }

    /// Returns every rule with its effective severity, in evaluation order.
    pub fn effective_rules(&self) -> Vec<(RuleId, Severity)> {
        RuleId::ALL
            .into_iter()
            .map(|rule| (rule, self.severity(rule)))
            .collect()
    }
}
