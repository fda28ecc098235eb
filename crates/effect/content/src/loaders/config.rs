//! Aggregation configuration loader.

use std::path::Path;

use effect_core::AggregationConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for aggregation configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`AggregationConfig::default`].
    pub fn load(path: &Path) -> LoadResult<AggregationConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<AggregationConfig> {
        let config: AggregationConfig = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), AggregationConfig::default());
    }

    #[test]
    fn reads_deny_lints() {
        let config = ConfigLoader::parse("deny_lints = true").unwrap();
        assert!(config.deny_lints);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(ConfigLoader::parse("deny_lints = \"yes\"").is_err());
    }
}
