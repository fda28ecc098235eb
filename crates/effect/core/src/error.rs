//! Rule-table validation errors and lints.
//!
//! The aggregation path is total and never fails. Everything that can go
//! wrong is a property of the rule table and is reported once, when the table
//! is built, either as a hard [`RuleTableError`] or as a [`RuleLint`].
//!
//! Rule indices in messages are zero-based positions in the declared list.

use crate::attribute::AttributeName;

/// Severity of a rule-table finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Suspicious but well-defined configuration. The table is still usable.
    Warning,

    /// Malformed configuration. The table is rejected.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Non-fatal finding about a rule table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleLint {
    /// A base member is the effective attribute of this or a later rule and of
    /// no earlier rule. Within one pass it can only come from input records.
    #[error(
        "rule #{rule}: base attribute `{attribute}` is only produced by rule #{producer} or later"
    )]
    ProducedLater {
        rule: usize,
        attribute: AttributeName,
        producer: usize,
    },

    /// Two rules share a base member, so their relative order decides which
    /// one can fire on a group containing both bases.
    #[error("rules #{first} and #{second} both consume `{attribute}`; their order is significant")]
    OverlappingBase {
        first: usize,
        second: usize,
        attribute: AttributeName,
    },
}

impl RuleLint {
    pub const fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Warning
    }

    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ProducedLater { .. } => "RULE_PRODUCED_LATER",
            Self::OverlappingBase { .. } => "RULE_OVERLAPPING_BASE",
        }
    }
}

/// Fatal rule-table configuration error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleTableError {
    #[error("rule #{rule}: base set is empty")]
    EmptyBase { rule: usize },

    /// A one-member base only renames an attribute and never shrinks a group.
    #[error("rule #{rule}: base `{attribute}` has a single member")]
    SingletonBase {
        rule: usize,
        attribute: AttributeName,
    },

    #[error("rule #{rule}: base lists `{attribute}` more than once")]
    DuplicateBaseAttribute {
        rule: usize,
        attribute: AttributeName,
    },

    #[error("rule #{rule}: effective attribute `{attribute}` is also part of its base")]
    EffectiveInBase {
        rule: usize,
        attribute: AttributeName,
    },

    #[error("lint denied by configuration: {lint}")]
    LintDenied { lint: RuleLint },
}

impl RuleTableError {
    pub const fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyBase { .. } => "RULE_EMPTY_BASE",
            Self::SingletonBase { .. } => "RULE_SINGLETON_BASE",
            Self::DuplicateBaseAttribute { .. } => "RULE_DUPLICATE_BASE_ATTRIBUTE",
            Self::EffectiveInBase { .. } => "RULE_EFFECTIVE_IN_BASE",
            Self::LintDenied { .. } => "RULE_LINT_DENIED",
        }
    }

    /// Index of the offending rule, when the error concerns a single rule.
    pub const fn rule(&self) -> Option<usize> {
        match self {
            Self::EmptyBase { rule }
            | Self::SingletonBase { rule, .. }
            | Self::DuplicateBaseAttribute { rule, .. }
            | Self::EffectiveInBase { rule, .. } => Some(*rule),
            Self::LintDenied { .. } => None,
        }
    }
}
