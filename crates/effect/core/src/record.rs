//! Effect records.
//!
//! An effect record is one attribute's contribution to a logical effect
//! definition. The aggregator only sees records through [`EffectRecord`]:
//! which attribute they carry, the signature of their values, and how to
//! re-tag them with another attribute.

use crate::attribute::AttributeName;
use crate::signature::{SignatureSource, SignatureWriter, ValueSignature};

/// View of an effect record used by the aggregator.
///
/// # Contract
///
/// - [`signature`](Self::signature) depends on the value payload only, never
///   on the attribute. Two records with equal signatures are interchangeable
///   templates.
/// - [`clone_as`](Self::clone_as) returns a record with identical values and
///   the given attribute.
pub trait EffectRecord: Sized {
    fn attribute(&self) -> AttributeName;

    fn signature(&self) -> ValueSignature;

    fn clone_as(&self, attribute: AttributeName) -> Self;
}

/// How an effect's magnitude combines with the base value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EffectModel {
    /// Added to the base value.
    #[default]
    Additive,
    /// Multiplies the base value (1.0 = unchanged).
    Multiplicative,
}

/// Condition under which an effect applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    #[default]
    Always,
    OnHit,
    OnCriticalHit,
    OnKill,
    /// Active while current HP is below the given percentage of maximum.
    HpBelowPercent(u8),
    WhileTwoHanding,
    WhileGuarding,
}

impl SignatureSource for Trigger {
    fn write_signature(&self, writer: &mut SignatureWriter) {
        match *self {
            Trigger::Always => writer.write_u8(0),
            Trigger::OnHit => writer.write_u8(1),
            Trigger::OnCriticalHit => writer.write_u8(2),
            Trigger::OnKill => writer.write_u8(3),
            Trigger::HpBelowPercent(percent) => {
                writer.write_u8(4);
                writer.write_u8(percent);
            }
            Trigger::WhileTwoHanding => writer.write_u8(5),
            Trigger::WhileGuarding => writer.write_u8(6),
        }
    }
}

impl SignatureSource for EffectModel {
    fn write_signature(&self, writer: &mut SignatureWriter) {
        writer.write_u8(match self {
            EffectModel::Additive => 0,
            EffectModel::Multiplicative => 1,
        });
    }
}

/// Value payload of a [`SchemaEffect`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectValues {
    pub model: EffectModel,
    pub magnitude: f32,
    /// Duration in seconds; `None` for permanent effects.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub trigger: Trigger,
}

impl EffectValues {
    /// Permanent, always-on additive effect.
    pub fn additive(magnitude: f32) -> Self {
        Self {
            model: EffectModel::Additive,
            magnitude,
            duration: None,
            trigger: Trigger::Always,
        }
    }

    /// Permanent, always-on multiplicative effect.
    pub fn multiplicative(magnitude: f32) -> Self {
        Self {
            model: EffectModel::Multiplicative,
            ..Self::additive(magnitude)
        }
    }

    #[must_use]
    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.duration = Some(seconds);
        self
    }

    #[must_use]
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }
}

impl SignatureSource for EffectValues {
    fn write_signature(&self, writer: &mut SignatureWriter) {
        writer.write(&self.model);
        writer.write_f32(self.magnitude);
        writer.write(&self.duration);
        writer.write(&self.trigger);
    }
}

/// Effect record produced by the parameter-table parser.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemaEffect {
    pub attribute: AttributeName,
    pub values: EffectValues,
}

impl SchemaEffect {
    pub fn new(attribute: AttributeName, values: EffectValues) -> Self {
        Self { attribute, values }
    }
}

impl EffectRecord for SchemaEffect {
    fn attribute(&self) -> AttributeName {
        self.attribute
    }

    fn signature(&self) -> ValueSignature {
        self.values.signature()
    }

    fn clone_as(&self, attribute: AttributeName) -> Self {
        Self {
            attribute,
            values: self.values.clone(),
        }
    }
}
