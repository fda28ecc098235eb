use effect_core::{
    AggregationConfig, Aggregator, AttributeName, CollapseRuleSpec, EffectValues, RuleTable,
    SchemaEffect, Trigger, aggregate_effects,
};
use AttributeName::*;

const DIRECTIONAL_ABSORPTION: [AttributeName; 4] = [
    StandardAbsorption,
    StrikeAbsorption,
    SlashAbsorption,
    PierceAbsorption,
];

const ELEMENTAL_ABSORPTION: [AttributeName; 4] = [
    MagicAbsorption,
    FireAbsorption,
    LightningAbsorption,
    HolyAbsorption,
];

fn tagged(attributes: &[AttributeName], values: &EffectValues) -> Vec<SchemaEffect> {
    attributes
        .iter()
        .map(|&attribute| SchemaEffect::new(attribute, values.clone()))
        .collect()
}

fn sorted(mut effects: Vec<SchemaEffect>) -> Vec<SchemaEffect> {
    effects.sort_by(|a, b| {
        a.attribute
            .cmp(&b.attribute)
            .then(a.values.magnitude.total_cmp(&b.values.magnitude))
    });
    effects
}

#[test]
fn physical_and_elemental_groups_stay_separate() {
    let physical = EffectValues::multiplicative(0.9);
    let elemental = EffectValues::multiplicative(0.8);

    let mut effects = tagged(&DIRECTIONAL_ABSORPTION, &physical);
    effects.extend(tagged(&ELEMENTAL_ABSORPTION, &elemental));

    let aggregated = sorted(aggregate_effects(&effects));
    assert_eq!(
        aggregated,
        vec![
            SchemaEffect::new(PhysicalAbsorption, physical),
            SchemaEffect::new(ElementalAbsorption, elemental),
        ]
    );
    assert!(aggregated.iter().all(|effect| effect.attribute != Absorption));
}

#[test]
fn matching_physical_and_elemental_collapse_to_absorption() {
    let shared = EffectValues::multiplicative(0.85).with_duration(60.0);

    let mut effects = tagged(&ELEMENTAL_ABSORPTION, &shared);
    effects.extend(tagged(&DIRECTIONAL_ABSORPTION, &shared));

    assert_eq!(
        aggregate_effects(&effects),
        vec![SchemaEffect::new(Absorption, shared)]
    );
}

#[test]
fn incomplete_directional_set_passes_through() {
    let values = EffectValues::multiplicative(0.9);
    let effects = tagged(&[StandardAbsorption, StrikeAbsorption, SlashAbsorption], &values);

    assert_eq!(sorted(aggregate_effects(&effects)), effects);
}

#[test]
fn empty_input_yields_empty_output() {
    let (aggregated, report) = Aggregator::standard().aggregate_with_report::<SchemaEffect>(&[]);
    assert!(aggregated.is_empty());
    assert_eq!(report.input, 0);
    assert_eq!(report.groups, 0);
    assert_eq!(report.output, 0);
}

#[test]
fn differing_trigger_prevents_collapse() {
    let always = EffectValues::additive(10.0);
    let on_hit = EffectValues::additive(10.0).with_trigger(Trigger::OnHit);

    let mut effects = tagged(&DIRECTIONAL_ABSORPTION[..3], &always);
    effects.push(SchemaEffect::new(PierceAbsorption, on_hit.clone()));

    let aggregated = aggregate_effects(&effects);
    assert_eq!(aggregated.len(), 4);
    assert!(aggregated.contains(&SchemaEffect::new(PierceAbsorption, on_hit)));
}

#[test]
fn mixed_families_collapse_independently() {
    let absorption = EffectValues::multiplicative(0.9);
    let attack = EffectValues::multiplicative(1.15);
    let hp = EffectValues::additive(200.0);

    let mut effects = tagged(&DIRECTIONAL_ABSORPTION, &absorption);
    effects.extend(tagged(
        &[
            MagicAttackPower,
            FireAttackPower,
            LightningAttackPower,
            HolyAttackPower,
        ],
        &attack,
    ));
    effects.push(SchemaEffect::new(MaxHp, hp.clone()));

    let aggregated = sorted(aggregate_effects(&effects));
    assert_eq!(
        aggregated,
        vec![
            SchemaEffect::new(PhysicalAbsorption, absorption),
            SchemaEffect::new(ElementalAttackPower, attack),
            SchemaEffect::new(MaxHp, hp),
        ]
    );
}

#[test]
fn rule_order_is_load_bearing() {
    let physical_rule = CollapseRuleSpec::new(DIRECTIONAL_ABSORPTION, PhysicalAbsorption);
    let elemental_rule = CollapseRuleSpec::new(ELEMENTAL_ABSORPTION, ElementalAbsorption);
    let absorption_rule =
        CollapseRuleSpec::new([PhysicalAbsorption, ElementalAbsorption], Absorption);

    let declared = RuleTable::new(vec![
        physical_rule.clone(),
        elemental_rule.clone(),
        absorption_rule.clone(),
    ])
    .unwrap();
    let reordered = RuleTable::new(vec![absorption_rule, physical_rule, elemental_rule]).unwrap();
    assert!(!reordered.lints().is_empty());

    let shared = EffectValues::multiplicative(0.75);
    let mut effects = tagged(&DIRECTIONAL_ABSORPTION, &shared);
    effects.extend(tagged(&ELEMENTAL_ABSORPTION, &shared));

    let in_order = Aggregator::new(&declared).aggregate(&effects);
    let out_of_order = Aggregator::new(&reordered).aggregate(&effects);

    assert_eq!(in_order, vec![SchemaEffect::new(Absorption, shared.clone())]);
    assert_eq!(
        out_of_order,
        vec![
            SchemaEffect::new(PhysicalAbsorption, shared.clone()),
            SchemaEffect::new(ElementalAbsorption, shared),
        ]
    );
}

#[test]
fn strict_config_rejects_reordered_table() {
    let specs = vec![
        CollapseRuleSpec::new([PhysicalAbsorption, ElementalAbsorption], Absorption),
        CollapseRuleSpec::new(DIRECTIONAL_ABSORPTION, PhysicalAbsorption),
    ];
    assert!(RuleTable::with_config(specs, &AggregationConfig::strict()).is_err());
}
