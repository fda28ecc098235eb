//! Canonical aggregation of per-attribute effect records.
//!
//! `effect-core` takes effect records that were already resolved to an
//! [`AttributeName`] and a value payload, groups them by value signature, and
//! collapses attribute sets that a [`RuleTable`] says can be expressed by a
//! single effective attribute. Four identical directional absorptions become
//! one physical absorption; if the elemental absorptions match as well, the
//! pair collapses further into plain absorption.
//!
//! The crate is pure and synchronous. Loading rule tables and fixtures from
//! disk lives in `effect-content`.
pub mod aggregate;
pub mod attribute;
pub mod config;
pub mod error;
pub mod record;
pub mod rules;
pub mod signature;

pub use aggregate::{
    AggregationReport, Aggregator, EffectGroup, EffectGroups, aggregate_effects,
    collapse_attributes, expand_groups, group_effects,
};
pub use attribute::{AttributeFamily, AttributeName, AttributeSet};
pub use config::AggregationConfig;
pub use error::{ErrorSeverity, RuleLint, RuleTableError};
pub use record::{EffectModel, EffectRecord, EffectValues, SchemaEffect, Trigger};
pub use rules::{CollapseRule, CollapseRuleSpec, RuleTable, RuleTableSpec};
pub use signature::{SignatureSource, SignatureWriter, ValueSignature};
