//! Effect aggregation pipeline.
//!
//! ```text
//! records ─► group by signature ─► collapse each attribute set ─► expand ─► records
//! ```
//!
//! Each stage is exposed on its own ([`group_effects`], [`collapse_attributes`],
//! [`expand_groups`]); [`Aggregator`] runs them in sequence against one
//! [`RuleTable`].

mod collapse;
mod expand;
mod group;

pub use collapse::collapse_attributes;
pub use expand::expand_groups;
pub use group::{EffectGroup, EffectGroups, group_effects};

use tracing::{debug, trace};

use crate::record::EffectRecord;
use crate::rules::RuleTable;

/// Counters describing one aggregation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregationReport {
    /// Records handed in.
    pub input: usize,
    /// Distinct value signatures.
    pub groups: usize,
    /// Records handed out.
    pub output: usize,
    /// Rule firings summed over all groups.
    pub rules_fired: usize,
}

impl AggregationReport {
    /// Records removed by deduplication and collapsing. Zero for reports
    /// assembled by hand with `output > input`.
    pub fn collapsed(&self) -> usize {
        self.input.saturating_sub(self.output)
    }
}

/// Runs the aggregation pipeline against a fixed rule table.
#[derive(Clone, Copy, Debug)]
pub struct Aggregator<'r> {
    rules: &'r RuleTable,
}

impl Default for Aggregator<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'r> Aggregator<'r> {
    pub fn new(rules: &'r RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'r RuleTable {
        self.rules
    }

    /// Collapses `effects` into their canonical form.
    ///
    /// The input is left untouched; every output record is a fresh clone of a
    /// group representative.
    pub fn aggregate<E: EffectRecord + Clone>(&self, effects: &[E]) -> Vec<E> {
        self.aggregate_with_report(effects).0
    }

    /// Same as [`Self::aggregate`], also returning run counters.
    pub fn aggregate_with_report<E: EffectRecord + Clone>(
        &self,
        effects: &[E],
    ) -> (Vec<E>, AggregationReport) {
        let mut groups = group_effects(effects);
        let mut rules_fired = 0;

        for (signature, group) in groups.iter_mut() {
            let fired = collapse_attributes(&mut group.attributes, self.rules);
            if fired > 0 {
                trace!(
                    signature = %signature.digest(),
                    fired,
                    remaining = ?group.attributes,
                    "collapsed effect group"
                );
            }
            rules_fired += fired;
        }

        let report_groups = groups.len();
        let output = expand_groups(groups);

        let report = AggregationReport {
            input: effects.len(),
            groups: report_groups,
            output: output.len(),
            rules_fired,
        };
        debug!(
            input = report.input,
            groups = report.groups,
            output = report.output,
            rules_fired = report.rules_fired,
            "aggregated effects"
        );

        (output, report)
    }
}

impl Aggregator<'static> {
    /// Aggregator bound to [`RuleTable::standard`].
    pub fn standard() -> Self {
        Self::new(RuleTable::standard())
    }
}

/// Aggregates `effects` with the built-in rule table.
pub fn aggregate_effects<E: EffectRecord + Clone>(effects: &[E]) -> Vec<E> {
    Aggregator::standard().aggregate(effects)
}
