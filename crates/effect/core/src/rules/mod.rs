//! Collapse rules.
//!
//! A [`CollapseRule`] says: when a group's attribute set contains every
//! member of `base`, replace exactly those members with `effective`. Rules
//! live in an ordered [`RuleTable`]; later rules may consume attributes that
//! earlier rules produced, so order is part of the configuration.

mod table;
mod validate;

pub use table::{RuleTable, RuleTableSpec};

use crate::attribute::{AttributeName, AttributeSet};

/// A validated set-rewrite step.
///
/// `base` has at least two members and never contains `effective`, so every
/// firing shrinks the attribute set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CollapseRule {
    base: AttributeSet,
    effective: AttributeName,
}

impl CollapseRule {
    pub(crate) fn new(base: AttributeSet, effective: AttributeName) -> Self {
        Self { base, effective }
    }

    pub fn base(&self) -> &AttributeSet {
        &self.base
    }

    pub fn effective(&self) -> AttributeName {
        self.effective
    }

    /// Returns true if every base member is present in `attributes`.
    pub fn fires_on(&self, attributes: &AttributeSet) -> bool {
        self.base.is_subset(attributes)
    }

    /// Rewrites `attributes` if the rule fires. Returns whether it fired.
    pub fn apply(&self, attributes: &mut AttributeSet) -> bool {
        if !self.fires_on(attributes) {
            return false;
        }
        attributes.retain(|attribute| !self.base.contains(attribute));
        attributes.insert(self.effective);
        true
    }

    pub fn to_spec(&self) -> CollapseRuleSpec {
        CollapseRuleSpec {
            base: self.base.iter().copied().collect(),
            effective: self.effective,
        }
    }
}

/// Authoring form of a rule, as written in rule-table files.
///
/// `base` is a list so that duplicated entries can be reported instead of
/// silently merged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollapseRuleSpec {
    pub base: Vec<AttributeName>,
    pub effective: AttributeName,
}

impl CollapseRuleSpec {
    pub fn new(base: impl IntoIterator<Item = AttributeName>, effective: AttributeName) -> Self {
        Self {
            base: base.into_iter().collect(),
            effective,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AttributeName::*;

    fn physical_rule() -> CollapseRule {
        CollapseRule::new(
            [
                StandardAbsorption,
                StrikeAbsorption,
                SlashAbsorption,
                PierceAbsorption,
            ]
            .into(),
            PhysicalAbsorption,
        )
    }

    #[test]
    fn fires_only_on_superset() {
        let rule = physical_rule();
        let partial: AttributeSet = [StandardAbsorption, StrikeAbsorption, SlashAbsorption].into();
        assert!(!rule.fires_on(&partial));

        let superset: AttributeSet = [
            StandardAbsorption,
            StrikeAbsorption,
            SlashAbsorption,
            PierceAbsorption,
            MaxHp,
        ]
        .into();
        assert!(rule.fires_on(&superset));
    }

    #[test]
    fn apply_replaces_exactly_base() {
        let rule = physical_rule();
        let mut attributes: AttributeSet = [
            StandardAbsorption,
            StrikeAbsorption,
            SlashAbsorption,
            PierceAbsorption,
            Poise,
        ]
        .into();

        assert!(rule.apply(&mut attributes));
        assert_eq!(attributes, [PhysicalAbsorption, Poise].into());
    }

    #[test]
    fn apply_without_match_leaves_set_untouched() {
        let rule = physical_rule();
        let mut attributes: AttributeSet = [StandardAbsorption, PierceAbsorption].into();
        let before = attributes.clone();

        assert!(!rule.apply(&mut attributes));
        assert_eq!(attributes, before);
    }

    #[test]
    fn spec_lists_base_in_declaration_order() {
        let spec = physical_rule().to_spec();
        assert_eq!(
            spec.base,
            vec![
                StandardAbsorption,
                StrikeAbsorption,
                SlashAbsorption,
                PierceAbsorption
            ]
        );
        assert_eq!(spec.effective, PhysicalAbsorption);
    }
}
