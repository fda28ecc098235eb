//! Content factory for loading aggregation inputs from a data directory.

use std::path::{Path, PathBuf};

use effect_core::{AggregationConfig, RuleTable, SchemaEffect};

use crate::loaders::{ConfigLoader, EffectLoader, LoadResult, RuleTableLoader};

/// Content factory that loads aggregation content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml          (optional)
/// ├── standard_rules.ron
/// └── sample_effects.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const RULES_FILE: &'static str = "standard_rules.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory for the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::DATA_DIR)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load configuration from `config.toml`, or the default if the file does
    /// not exist.
    pub fn load_config(&self) -> LoadResult<AggregationConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(AggregationConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load and validate the rule table from `standard_rules.ron`.
    pub fn load_rules(&self, config: &AggregationConfig) -> LoadResult<RuleTable> {
        let path = self.data_dir.join(Self::RULES_FILE);
        RuleTableLoader::load(&path, config)
    }

    /// Load an effect fixture relative to the data directory.
    pub fn load_effects(&self, file_name: impl AsRef<Path>) -> LoadResult<Vec<SchemaEffect>> {
        let path = self.data_dir.join(file_name);
        EffectLoader::load(&path)
    }
}
