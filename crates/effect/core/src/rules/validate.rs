//! Rule-table validation.
//!
//! Hard checks turn authoring specs into [`CollapseRule`]s. Lints inspect the
//! ordered list as a whole and never reject it on their own.

use crate::attribute::AttributeSet;
use crate::error::{RuleLint, RuleTableError};

use super::{CollapseRule, CollapseRuleSpec};

/// Validates a single spec at position `index`.
pub(super) fn check_rule(
    index: usize,
    spec: &CollapseRuleSpec,
) -> Result<CollapseRule, RuleTableError> {
    if spec.base.is_empty() {
        return Err(RuleTableError::EmptyBase { rule: index });
    }

    let mut base = AttributeSet::new();
    for &attribute in &spec.base {
        if !base.insert(attribute) {
            return Err(RuleTableError::DuplicateBaseAttribute {
                rule: index,
                attribute,
            });
        }
    }

    if let [attribute] = spec.base[..] {
        return Err(RuleTableError::SingletonBase {
            rule: index,
            attribute,
        });
    }

    if base.contains(&spec.effective) {
        return Err(RuleTableError::EffectiveInBase {
            rule: index,
            attribute: spec.effective,
        });
    }

    Ok(CollapseRule::new(base, spec.effective))
}

/// Collects lints for an already validated, ordered rule list.
pub(super) fn lint_rules(rules: &[CollapseRule]) -> Vec<RuleLint> {
    let mut lints = Vec::new();

    for (index, rule) in rules.iter().enumerate() {
        for &attribute in rule.base() {
            let mut producers = rules
                .iter()
                .enumerate()
                .filter(|(_, other)| other.effective() == attribute)
                .map(|(producer, _)| producer);

            match producers.next() {
                Some(first) if first > index => lints.push(RuleLint::ProducedLater {
                    rule: index,
                    attribute,
                    producer: first,
                }),
                _ => {}
            }
        }
    }

    for (first, earlier) in rules.iter().enumerate() {
        for (offset, later) in rules[first + 1..].iter().enumerate() {
            if let Some(&attribute) = earlier.base().intersection(later.base()).next() {
                lints.push(RuleLint::OverlappingBase {
                    first,
                    second: first + 1 + offset,
                    attribute,
                });
            }
        }
    }

    lints
}
