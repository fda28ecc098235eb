//! Collapse stage: one ordered pass of the rule table over an attribute set.

use crate::attribute::AttributeSet;
use crate::rules::RuleTable;

/// Applies every rule of `table` exactly once, in table order, and returns
/// how many fired.
///
/// A rule sees the set as left by the rules before it, so an earlier collapse
/// can enable a later one. The pass is never repeated.
pub fn collapse_attributes(attributes: &mut AttributeSet, table: &RuleTable) -> usize {
    let mut fired = 0;
    for rule in table {
        if rule.apply(attributes) {
            fired += 1;
        }
    }
    fired
}
