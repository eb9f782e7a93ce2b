use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::filter::{PathFilter, PathFilterConfig};
use crate::table::{ReplacementRule, ReplacementTable};
use crate::RebrandError;

const BUILTIN_CONFIG: &str = include_str!("../config/void-to-syfer.toml");

/// On-disk TOML configuration: a path filter plus the ordered `[[rules]]` list.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RebrandConfig {
    #[serde(default)]
    pub filter: FilterSection,
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    #[serde(default)]
    pub skip_dirs: Vec<String>,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub exact_names: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    pub old: String,
    pub new: String,
    #[serde(default)]
    pub exclude_extensions: Vec<String>,
}

impl RebrandConfig {
    /// The Void to Syfer configuration shipped with the crate.
    pub fn builtin() -> Result<Self, RebrandError> {
        Self::from_toml_str(BUILTIN_CONFIG)
    }

    pub fn load(path: &Path) -> Result<Self, RebrandError> {
        debug!("Loading config: {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RebrandError> {
        toml::from_str(content).map_err(|e| RebrandError::Config {
            message: e.to_string(),
        })
    }

    pub fn replacement_table(&self) -> Result<ReplacementTable, RebrandError> {
        ReplacementTable::new(self.rules.iter().map(|entry| {
            ReplacementRule::new(&entry.old, &entry.new)
                .excluding(entry.exclude_extensions.iter().cloned())
        }))
    }

    pub fn path_filter(&self) -> Result<PathFilter, RebrandError> {
        let section = &self.filter;
        for (field, values) in [
            ("skip_dirs", &section.skip_dirs),
            ("extensions", &section.extensions),
            ("exact_names", &section.exact_names),
        ] {
            if values.iter().any(String::is_empty) {
                return Err(RebrandError::Config {
                    message: format!("filter.{} contains an empty entry", field),
                });
            }
        }

        Ok(PathFilter::new(PathFilterConfig {
            skip_dir_names: section.skip_dirs.iter().cloned().collect(),
            allowed_extensions: section.extensions.iter().cloned().collect(),
            allowed_exact_names: section.exact_names.iter().cloned().collect(),
        }))
    }
}
