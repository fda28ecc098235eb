//! Collapse rule table loader.

use std::path::Path;

use effect_core::{AggregationConfig, RuleTable, RuleTableSpec};

use crate::loaders::{LoadResult, read_file};

/// Loader for collapse rule tables from RON files.
///
/// File format:
/// ```ron
/// (
///     rules: [
///         (
///             base: [StandardAbsorption, StrikeAbsorption, SlashAbsorption, PierceAbsorption],
///             effective: PhysicalAbsorption,
///         ),
///     ],
/// )
/// ```
///
/// Rules are applied in file order.
pub struct RuleTableLoader;

impl RuleTableLoader {
    /// Load and validate a rule table from a RON file.
    ///
    /// Unknown attribute names fail deserialization; malformed rules fail
    /// validation. Lints are fatal only if `config.deny_lints` is set.
    pub fn load(path: &Path, config: &AggregationConfig) -> LoadResult<RuleTable> {
        let content = read_file(path)?;
        Self::parse(&content, config)
            .map_err(|e| anyhow::anyhow!("Failed to load rule table {}: {}", path.display(), e))
    }

    /// Parse and validate a rule table from RON text.
    pub fn parse(content: &str, config: &AggregationConfig) -> LoadResult<RuleTable> {
        let spec = Self::parse_spec(content)?;
        let table = RuleTable::with_config(spec.rules, config)?;
        Ok(table)
    }

    /// Parse the authoring form without validating it.
    pub fn parse_spec(content: &str) -> LoadResult<RuleTableSpec> {
        let spec: RuleTableSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rule table RON: {}", e))?;
        Ok(spec)
    }
}
