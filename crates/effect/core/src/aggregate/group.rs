//! Grouping stage: partition records by value signature.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::attribute::AttributeSet;
use crate::record::EffectRecord;
use crate::signature::ValueSignature;

/// Records that share one value signature.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectGroup<E> {
    /// Every attribute seen with this signature.
    pub attributes: AttributeSet,
    /// Template for re-expansion. Any member works: values are identical.
    pub representative: E,
}

impl<E: EffectRecord> EffectGroup<E> {
    pub fn from_effect(effect: &E) -> Self
    where
        E: Clone,
    {
        Self {
            attributes: AttributeSet::from([effect.attribute()]),
            representative: effect.clone(),
        }
    }
}

/// Signature-keyed partition of a record sequence.
///
/// Iteration follows signature order, so the same multiset of records always
/// yields the same group sequence regardless of input order.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectGroups<E> {
    groups: BTreeMap<ValueSignature, EffectGroup<E>>,
}

impl<E> Default for EffectGroups<E> {
    fn default() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }
}

impl<E> EffectGroups<E> {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, signature: &ValueSignature) -> Option<&EffectGroup<E>> {
        self.groups.get(signature)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ValueSignature, EffectGroup<E>> {
        self.groups.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, ValueSignature, EffectGroup<E>> {
        self.groups.iter_mut()
    }

    /// Total attribute entries over all groups.
    pub fn attribute_count(&self) -> usize {
        self.groups.values().map(|group| group.attributes.len()).sum()
    }
}

impl<E> IntoIterator for EffectGroups<E> {
    type Item = (ValueSignature, EffectGroup<E>);
    type IntoIter = btree_map::IntoIter<ValueSignature, EffectGroup<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Partitions `effects` so that two records share a group iff their
/// signatures are equal. The first record of each group is its
/// representative.
pub fn group_effects<E: EffectRecord + Clone>(effects: &[E]) -> EffectGroups<E> {
    let mut groups: BTreeMap<ValueSignature, EffectGroup<E>> = BTreeMap::new();

    for effect in effects {
        match groups.entry(effect.signature()) {
            btree_map::Entry::Occupied(mut entry) => {
                entry.get_mut().attributes.insert(effect.attribute());
            }
            btree_map::Entry::Vacant(entry) => {
                entry.insert(EffectGroup::from_effect(effect));
            }
        }
    }

    EffectGroups { groups }
}
