//! Utility functions for xtask commands

use std::path::{Path, PathBuf};

use anyhow::Result;
use effect_content::{ConfigLoader, RuleTableLoader};
use effect_core::{AggregationConfig, RuleTable};
use tracing::info;

/// Environment variable naming the default rule table file.
pub const RULES_PATH_ENV: &str = "EFFECT_RULES_PATH";

/// Rule table file to use: the explicit path, else `EFFECT_RULES_PATH`.
///
/// `None` means the built-in table.
pub fn resolve_rules_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| std::env::var_os(RULES_PATH_ENV).map(PathBuf::from))
}

/// Load configuration from `path`, or the default configuration.
pub fn load_config(path: Option<&Path>) -> Result<AggregationConfig> {
    match path {
        Some(path) => ConfigLoader::load(path),
        None => Ok(AggregationConfig::default()),
    }
}

/// Load the rule table at `path`, or clone the built-in table.
///
/// The built-in table is revalidated against `config` so that `deny_lints`
/// applies to it as well.
pub fn load_rules(path: Option<&Path>, config: &AggregationConfig) -> Result<RuleTable> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading rule table");
            RuleTableLoader::load(path, config)
        }
        None => {
            info!("using built-in rule table");
            let table = RuleTable::with_config(RuleTable::standard().to_spec().rules, config)?;
            Ok(table)
        }
    }
}
