use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFilterConfig {
    pub skip_dir_names: BTreeSet<String>,
    pub allowed_extensions: BTreeSet<String>,
    pub allowed_exact_names: BTreeSet<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    config: PathFilterConfig,
}

impl PathFilter {
    pub fn new(config: PathFilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PathFilterConfig {
        &self.config
    }

    /// Matches on the directory's base name only.
    pub fn is_directory_eligible(&self, name: &str) -> bool {
        !self.config.skip_dir_names.contains(name)
    }

    pub fn is_file_eligible(&self, name: &str) -> bool {
        self.config
            .allowed_extensions
            .iter()
            .any(|ext| name.ends_with(ext.as_str()))
            || self.config.allowed_exact_names.contains(name)
    }
}
