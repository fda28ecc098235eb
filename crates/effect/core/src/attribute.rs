//! Attribute universe.
//!
//! Every effect record is tagged with exactly one [`AttributeName`]. The set of
//! names is closed: upstream parsers resolve raw parameter columns into these
//! variants, and the external name lookup renders them for humans.
//!
//! Ordering follows declaration order only. Collapsed attribute sets iterate in
//! that order, which keeps aggregated output deterministic.

use std::collections::BTreeSet;

/// A set of attribute identifiers, iterated in declaration order.
///
/// Attribute membership is a set, never a multiset: the same attribute seen
/// twice with equal values contributes a single entry.
pub type AttributeSet = BTreeSet<AttributeName>;

/// Identifier of the quantity an effect record contributes to.
///
/// Data files (RON fixtures and rule tables) spell attributes by variant
/// name, e.g. `PhysicalAbsorption`. The `snake_case` string forms from
/// `Display`/`FromStr` are the keys for the external display-name lookup and
/// for log output; serde never sees them.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttributeName {
    // ===== damage absorption =====
    StandardAbsorption,
    StrikeAbsorption,
    SlashAbsorption,
    PierceAbsorption,
    /// Standard, strike, slash and pierce absorption with one shared value.
    PhysicalAbsorption,
    MagicAbsorption,
    FireAbsorption,
    LightningAbsorption,
    HolyAbsorption,
    /// Magic, fire, lightning and holy absorption with one shared value.
    ElementalAbsorption,
    /// Physical and elemental absorption with one shared value.
    Absorption,

    // ===== attack power =====
    StandardAttackPower,
    StrikeAttackPower,
    SlashAttackPower,
    PierceAttackPower,
    /// Standard, strike, slash and pierce attack power with one shared value.
    PhysicalAttackPower,
    MagicAttackPower,
    FireAttackPower,
    LightningAttackPower,
    HolyAttackPower,
    /// Magic, fire, lightning and holy attack power with one shared value.
    ElementalAttackPower,
    /// Physical and elemental attack power with one shared value.
    AttackPower,

    // ===== resources and utility =====
    MaxHp,
    MaxFp,
    MaxStamina,
    HpRestoration,
    FpRestoration,
    StaminaRecoverySpeed,
    Poise,
    EquipLoad,
    Discovery,

    // ===== status resistances =====
    PoisonResistance,
    RotResistance,
    BleedResistance,
    FrostResistance,
    SleepResistance,
    MadnessResistance,
    DeathResistance,
}

/// Coarse grouping of attributes, used for reporting and lint messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttributeFamily {
    Absorption,
    AttackPower,
    Other,
}

impl AttributeName {
    /// Returns the family this attribute belongs to.
    pub const fn family(self) -> AttributeFamily {
        use AttributeName::*;
        match self {
            StandardAbsorption | StrikeAbsorption | SlashAbsorption | PierceAbsorption
            | PhysicalAbsorption | MagicAbsorption | FireAbsorption | LightningAbsorption
            | HolyAbsorption | ElementalAbsorption | Absorption => AttributeFamily::Absorption,

            StandardAttackPower | StrikeAttackPower | SlashAttackPower | PierceAttackPower
            | PhysicalAttackPower | MagicAttackPower | FireAttackPower | LightningAttackPower
            | HolyAttackPower | ElementalAttackPower | AttackPower => AttributeFamily::AttackPower,

            _ => AttributeFamily::Other,
        }
    }

    /// Returns true for higher-level attributes that stand in for a group of
    /// more specific ones.
    pub const fn is_aggregate(self) -> bool {
        use AttributeName::*;
        matches!(
            self,
            PhysicalAbsorption
                | ElementalAbsorption
                | Absorption
                | PhysicalAttackPower
                | ElementalAttackPower
                | AttackPower
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ordering_follows_declaration() {
        assert!(AttributeName::StandardAbsorption < AttributeName::PierceAbsorption);
        assert!(AttributeName::PierceAbsorption < AttributeName::PhysicalAbsorption);
        assert!(AttributeName::Absorption < AttributeName::StandardAttackPower);

        let declared: Vec<_> = AttributeName::iter().collect();
        let mut sorted = declared.clone();
        sorted.sort();
        assert_eq!(declared, sorted);
    }

    #[test]
    fn identifiers_round_trip_through_strings() {
        for attribute in AttributeName::iter() {
            let text = attribute.to_string();
            assert_eq!(text.parse::<AttributeName>().unwrap(), attribute);
        }
        assert_eq!(
            "PHYSICAL_ABSORPTION".parse::<AttributeName>().unwrap(),
            AttributeName::PhysicalAbsorption
        );
        assert!("frost_absorption".parse::<AttributeName>().is_err());
    }

    #[test]
    fn aggregate_attributes_belong_to_damage_families() {
        for attribute in AttributeName::iter().filter(|a| a.is_aggregate()) {
            assert_ne!(attribute.family(), AttributeFamily::Other, "{attribute}");
        }
        assert_eq!(AttributeName::Poise.family(), AttributeFamily::Other);
        assert_eq!(
            AttributeName::HolyAttackPower.family(),
            AttributeFamily::AttackPower
        );
    }
}
