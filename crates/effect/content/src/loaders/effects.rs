//! Effect record fixture loader.
//!
//! Fixtures hold records that were already resolved by the parameter-table
//! parser. They feed tooling and tests; raw parameter tables are not read here.

use std::path::Path;

use effect_core::SchemaEffect;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Effect fixture structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectCatalog {
    pub effects: Vec<SchemaEffect>,
}

/// Loader for effect fixtures from RON files.
pub struct EffectLoader;

impl EffectLoader {
    /// Load effect records from a RON file, in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<SchemaEffect>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load effects {}: {}", path.display(), e))
    }

    /// Parse effect records from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<SchemaEffect>> {
        let catalog: EffectCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse effect catalog RON: {}", e))?;

        Ok(catalog.effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use effect_core::{AttributeName, EffectModel, Trigger};

    #[test]
    fn optional_fields_default() {
        let effects = EffectLoader::parse(
            "(effects: [(attribute: MaxHp, values: (model: Additive, magnitude: 50.0))])",
        )
        .unwrap();

        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].attribute, AttributeName::MaxHp);
        assert_eq!(effects[0].values.model, EffectModel::Additive);
        assert_eq!(effects[0].values.duration, None);
        assert_eq!(effects[0].values.trigger, Trigger::Always);
    }

    #[test]
    fn reads_full_payload() {
        let effects = EffectLoader::parse(
            "(effects: [(
                attribute: BleedResistance,
                values: (
                    model: Multiplicative,
                    magnitude: 1.5,
                    duration: Some(20.0),
                    trigger: HpBelowPercent(30),
                ),
            )])",
        )
        .unwrap();

        let values = &effects[0].values;
        assert_eq!(values.duration, Some(20.0));
        assert_eq!(values.trigger, Trigger::HpBelowPercent(30));
    }
}
