//! @ai:module:intent Linter configuration loaded from TOML
//! @ai:module:layer infrastructure
//! @ai:module:public_api LintConfig, CONFIG_FILE
//! @ai:module:depends_on tags, rules, error

use crate::error::{Error, Result};
use crate::rules::{builtin_rules, RuleRegistry};
use crate::tags::{TagMatcher, Vocabulary, ALL_TAGS, BAD_TAGS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File looked up in the working directory when no config is given.
pub const CONFIG_FILE: &str = "todocheck.toml";

/// @ai:intent Tunable inputs: tag lists and rule codes to skip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
    #[serde(default = "default_bad_tags")]
    pub bad_tags: Vec<String>,
    #[serde(default)]
    pub ignore: Vec<u32>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            tags: default_tags(),
            bad_tags: default_bad_tags(),
            ignore: Vec::new(),
        }
    }
}

fn default_tags() -> Vec<String> {
    ALL_TAGS.iter().map(|t| t.to_string()).collect()
}

fn default_bad_tags() -> Vec<String> {
    BAD_TAGS.iter().map(|t| t.to_string()).collect()
}

impl LintConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = crate::checker::read_file(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// @ai:intent Use the explicit file, else `todocheck.toml` in `dir`, else defaults
    /// @ai:effects fs:read
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Self::load(&candidate);
        }
        tracing::debug!("No {} found, using defaults", CONFIG_FILE);
        Ok(Self::default())
    }

    pub fn vocabulary(&self) -> Result<Vocabulary> {
        Vocabulary::new(self.tags.clone(), self.bad_tags.clone())
    }

    /// @ai:intent Build the rule registry this configuration describes
    /// @ai:post ignored codes must name built-in rules
    /// @ai:effects pure
    pub fn registry(&self) -> Result<RuleRegistry> {
        let known: Vec<u32> = builtin_rules().iter().map(|rule| rule.code()).collect();
        if let Some(code) = self.ignore.iter().find(|code| !known.contains(code)) {
            return Err(Error::Config(format!("unknown rule code {} in ignore", code)));
        }
        let tags = TagMatcher::new(&self.vocabulary()?)?;
        Ok(RuleRegistry::new(tags, builtin_rules())?.without(&self.ignore))
    }
}
