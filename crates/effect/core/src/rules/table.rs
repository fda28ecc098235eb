//! Ordered, validated rule tables.

use std::sync::LazyLock;

use tracing::warn;

use crate::attribute::AttributeName::{self, *};
use crate::config::AggregationConfig;
use crate::error::{RuleLint, RuleTableError};

use super::validate::{check_rule, lint_rules};
use super::{CollapseRule, CollapseRuleSpec};

/// Built-in rules. ORDER IS SIGNIFICANT: the third rule of each family
/// consumes what the first two produce.
const STANDARD_RULES: &[(&[AttributeName], AttributeName)] = &[
    (
        &[
            StandardAbsorption,
            StrikeAbsorption,
            SlashAbsorption,
            PierceAbsorption,
        ],
        PhysicalAbsorption,
    ),
    (
        &[
            MagicAbsorption,
            FireAbsorption,
            LightningAbsorption,
            HolyAbsorption,
        ],
        ElementalAbsorption,
    ),
    (&[PhysicalAbsorption, ElementalAbsorption], Absorption),
    (
        &[
            StandardAttackPower,
            StrikeAttackPower,
            SlashAttackPower,
            PierceAttackPower,
        ],
        PhysicalAttackPower,
    ),
    (
        &[
            MagicAttackPower,
            FireAttackPower,
            LightningAttackPower,
            HolyAttackPower,
        ],
        ElementalAttackPower,
    ),
    (&[PhysicalAttackPower, ElementalAttackPower], AttackPower),
];

static STANDARD_TABLE: LazyLock<RuleTable> = LazyLock::new(|| {
    let rules: Vec<CollapseRule> = STANDARD_RULES
        .iter()
        .map(|(base, effective)| CollapseRule::new(base.iter().copied().collect(), *effective))
        .collect();
    RuleTable::assemble(rules)
});

/// File form of a rule table: `(rules: [(base: [...], effective: ...), ...])`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleTableSpec {
    pub rules: Vec<CollapseRuleSpec>,
}

/// Ordered list of collapse rules that passed validation.
///
/// Construction is the only place configuration errors surface. Once built,
/// a table is immutable and can be shared freely between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<CollapseRule>,
    lints: Vec<RuleLint>,
}

impl RuleTable {
    /// Validates `specs` with the default configuration (lints are logged,
    /// not fatal).
    pub fn new(specs: Vec<CollapseRuleSpec>) -> Result<Self, RuleTableError> {
        Self::with_config(specs, &AggregationConfig::default())
    }

    /// Validates `specs`, promoting lints to errors when `config.deny_lints`
    /// is set.
    pub fn with_config(
        specs: Vec<CollapseRuleSpec>,
        config: &AggregationConfig,
    ) -> Result<Self, RuleTableError> {
        let rules = specs
            .iter()
            .enumerate()
            .map(|(index, spec)| check_rule(index, spec))
            .collect::<Result<Vec<_>, _>>()?;

        let table = Self::assemble(rules);

        if config.deny_lints {
            if let Some(lint) = table.lints.first() {
                return Err(RuleTableError::LintDenied { lint: lint.clone() });
            }
        }

        for lint in &table.lints {
            warn!(code = lint.error_code(), "{lint}");
        }

        Ok(table)
    }

    /// The built-in absorption and attack-power rules.
    pub fn standard() -> &'static RuleTable {
        &STANDARD_TABLE
    }

    /// Table with no rules; aggregation then only deduplicates.
    pub fn empty() -> Self {
        Self::assemble(Vec::new())
    }

    fn assemble(rules: Vec<CollapseRule>) -> Self {
        let lints = lint_rules(&rules);
        Self { rules, lints }
    }

    pub fn rules(&self) -> &[CollapseRule] {
        &self.rules
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollapseRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Lints found while building the table.
    pub fn lints(&self) -> &[RuleLint] {
        &self.lints
    }

    /// Authoring form of the table, in rule order.
    pub fn to_spec(&self) -> RuleTableSpec {
        RuleTableSpec {
            rules: self.rules.iter().map(CollapseRule::to_spec).collect(),
        }
    }
}

impl TryFrom<RuleTableSpec> for RuleTable {
    type Error = RuleTableError;

    fn try_from(spec: RuleTableSpec) -> Result<Self, Self::Error> {
        Self::new(spec.rules)
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a CollapseRule;
    type IntoIter = std::slice::Iter<'a, CollapseRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
