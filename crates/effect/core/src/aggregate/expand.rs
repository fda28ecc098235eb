//! Expansion stage: flatten groups back into records.

use crate::record::EffectRecord;

use super::group::EffectGroups;

/// Emits one record per remaining attribute of every group, cloned from the
/// group's representative.
///
/// Groups are visited in signature order and attributes in declaration order.
pub fn expand_groups<E: EffectRecord>(groups: EffectGroups<E>) -> Vec<E> {
    let mut effects = Vec::with_capacity(groups.attribute_count());

    for (_, group) in groups {
        effects.extend(
            group
                .attributes
                .iter()
                .map(|&attribute| group.representative.clone_as(attribute)),
        );
    }

    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::group::group_effects;
    use crate::attribute::AttributeName::*;
    use crate::record::{EffectValues, SchemaEffect};

    #[test]
    fn expands_every_attribute_with_group_values() {
        let shared = EffectValues::multiplicative(1.2).with_duration(30.0);
        let effects = vec![
            SchemaEffect::new(HolyAttackPower, shared.clone()),
            SchemaEffect::new(FireAttackPower, shared.clone()),
        ];

        let expanded = expand_groups(group_effects(&effects));
        assert_eq!(
            expanded,
            vec![
                SchemaEffect::new(FireAttackPower, shared.clone()),
                SchemaEffect::new(HolyAttackPower, shared),
            ]
        );
    }

    #[test]
    fn empty_groups_expand_to_nothing() {
        assert!(expand_groups(group_effects::<SchemaEffect>(&[])).is_empty());
    }
}
