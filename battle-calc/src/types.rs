use std::sync::LazyLock;

use battle_data::Type;

use crate::{
    common::Output,
    damage::DamageContext,
    hooks,
};

/// Pairs of types the attacking type is super effective against.
static SUPER_EFFECTIVE_PAIRS: [(Type, Type); 52] = [
    (Type::Fire, Type::Grass),
    (Type::Fire, Type::Ice),
    (Type::Fire, Type::Bug),
    (Type::Fire, Type::Steel),
    (Type::Water, Type::Fire),
    (Type::Water, Type::Ground),
    (Type::Water, Type::Rock),
    (Type::Electric, Type::Water),
    (Type::Electric, Type::Flying),
    (Type::Grass, Type::Water),
    (Type::Grass, Type::Ground),
    (Type::Grass, Type::Rock),
    (Type::Ice, Type::Grass),
    (Type::Ice, Type::Ground),
    (Type::Ice, Type::Flying),
    (Type::Ice, Type::Dragon),
    (Type::Fighting, Type::Normal),
    (Type::Fighting, Type::Ice),
    (Type::Fighting, Type::Rock),
    (Type::Fighting, Type::Dark),
    (Type::Fighting, Type::Steel),
    (Type::Poison, Type::Grass),
    (Type::Poison, Type::Fairy),
    (Type::Ground, Type::Fire),
    (Type::Ground, Type::Electric),
    (Type::Ground, Type::Poison),
    (Type::Ground, Type::Rock),
    (Type::Ground, Type::Steel),
    (Type::Flying, Type::Electric),
    (Type::Flying, Type::Grass),
    (Type::Flying, Type::Fighting),
    (Type::Flying, Type::Bug),
    (Type::Psychic, Type::Fighting),
    (Type::Psychic, Type::Poison),
    (Type::Bug, Type::Grass),
    (Type::Bug, Type::Psychic),
    (Type::Bug, Type::Dark),
    (Type::Rock, Type::Fire),
    (Type::Rock, Type::Ice),
    (Type::Rock, Type::Flying),
    (Type::Rock, Type::Bug),
    (Type::Ghost, Type::Psychic),
    (Type::Ghost, Type::Ghost),
    (Type::Dragon, Type::Dragon),
    (Type::Dark, Type::Psychic),
    (Type::Dark, Type::Ghost),
    (Type::Steel, Type::Ice),
    (Type::Steel, Type::Rock),
    (Type::Steel, Type::Fairy),
    (Type::Fairy, Type::Fighting),
    (Type::Fairy, Type::Dragon),
    (Type::Fairy, Type::Dark),
];

/// Pairs of types the attacking type is resisted by.
static NOT_VERY_EFFECTIVE_PAIRS: [(Type, Type); 58] = [
    (Type::Fire, Type::Fire),
    (Type::Fire, Type::Water),
    (Type::Fire, Type::Rock),
    (Type::Fire, Type::Dragon),
    (Type::Water, Type::Water),
    (Type::Water, Type::Grass),
    (Type::Water, Type::Dragon),
    (Type::Electric, Type::Electric),
    (Type::Electric, Type::Grass),
    (Type::Electric, Type::Dragon),
    (Type::Grass, Type::Fire),
    (Type::Grass, Type::Grass),
    (Type::Grass, Type::Poison),
    (Type::Grass, Type::Flying),
    (Type::Grass, Type::Bug),
    (Type::Grass, Type::Dragon),
    (Type::Grass, Type::Steel),
    (Type::Ice, Type::Fire),
    (Type::Ice, Type::Water),
    (Type::Ice, Type::Ice),
    (Type::Ice, Type::Steel),
    (Type::Fighting, Type::Poison),
    (Type::Fighting, Type::Flying),
    (Type::Fighting, Type::Psychic),
    (Type::Fighting, Type::Bug),
    (Type::Fighting, Type::Fairy),
    (Type::Poison, Type::Poison),
    (Type::Poison, Type::Ground),
    (Type::Poison, Type::Rock),
    (Type::Poison, Type::Ghost),
    (Type::Ground, Type::Grass),
    (Type::Ground, Type::Bug),
    (Type::Flying, Type::Rock),
    (Type::Flying, Type::Steel),
    (Type::Psychic, Type::Psychic),
    (Type::Psychic, Type::Steel),
    (Type::Bug, Type::Fire),
    (Type::Bug, Type::Fighting),
    (Type::Bug, Type::Poison),
    (Type::Bug, Type::Flying),
    (Type::Bug, Type::Ghost),
    (Type::Bug, Type::Steel),
    (Type::Bug, Type::Fairy),
    (Type::Rock, Type::Fighting),
    (Type::Rock, Type::Ground),
    (Type::Rock, Type::Steel),
    (Type::Ghost, Type::Dark),
    (Type::Dragon, Type::Steel),
    (Type::Dark, Type::Fighting),
    (Type::Dark, Type::Dark),
    (Type::Dark, Type::Fairy),
    (Type::Steel, Type::Fire),
    (Type::Steel, Type::Water),
    (Type::Steel, Type::Electric),
    (Type::Steel, Type::Steel),
    (Type::Fairy, Type::Fire),
    (Type::Fairy, Type::Poison),
    (Type::Fairy, Type::Steel),
];

/// Pairs of types the attacking type has no effect on.
///
/// Applied last, so a pair listed here wins over the other tables.
static NO_EFFECT_PAIRS: [(Type, Type); 8] = [
    (Type::Normal, Type::Ghost),
    (Type::Electric, Type::Ground),
    (Type::Fighting, Type::Ghost),
    (Type::Poison, Type::Steel),
    (Type::Ground, Type::Flying),
    (Type::Psychic, Type::Dark),
    (Type::Ghost, Type::Normal),
    (Type::Fairy, Type::Dragon),
];

static TYPE_CHART: LazyLock<[[f64; 19]; 19]> = LazyLock::new(|| {
    let mut chart = [[1.0; 19]; 19];
    for (attacking, defending) in SUPER_EFFECTIVE_PAIRS {
        chart[attacking.chart_index()][defending.chart_index()] = 2.0;
    }
    for (attacking, defending) in NOT_VERY_EFFECTIVE_PAIRS {
        chart[attacking.chart_index()][defending.chart_index()] = 0.5;
    }
    for (attacking, defending) in NO_EFFECT_PAIRS {
        chart[attacking.chart_index()][defending.chart_index()] = 0.0;
    }
    chart
});

/// The type chart multiplier for a single attacking type against a single defending type.
pub fn type_multiplier(attacking: Type, defending: Type) -> f64 {
    TYPE_CHART[attacking.chart_index()][defending.chart_index()]
}

/// The defender's active type set.
///
/// Terastallization replaces the type set with the single tera type, unless the tera type is
/// Stellar, which preserves the original types.
pub(crate) fn defending_types(context: &DamageContext) -> Vec<Type> {
    if let Some(tera_type) = context.defender.tera_type
        && tera_type != Type::Stellar
    {
        return Vec::from([tera_type]);
    }
    context.defender_species_data.types()
}

/// Type effectiveness of the move against the defender, including move, ability, and item
/// overrides.
pub(crate) fn type_effectiveness(context: &DamageContext) -> Output<f64> {
    effectiveness_for_type(context, context.attacking_type())
}

/// Type effectiveness of the move's own record type, ignoring any caller type override.
///
/// Used by effects that re-check effectiveness mid-calculation.
pub(crate) fn record_type_effectiveness(context: &DamageContext) -> f64 {
    *effectiveness_for_type(context, context.move_data.primary_type).value()
}

pub(crate) fn effectiveness_for_type(context: &DamageContext, attacking_type: Type) -> Output<f64> {
    let defending_types = defending_types(context);
    let mut effectiveness = Output::<f64>::from(1.0);
    for defending_type in &defending_types {
        effectiveness.mul(
            type_multiplier(attacking_type, *defending_type),
            format!("{attacking_type} vs {defending_type}"),
        );
    }

    if let Some(forced) = context.move_data.force_super_effective_against
        && defending_types.contains(&forced)
    {
        if *effectiveness.value() == 1.0 {
            effectiveness.set(
                2.0,
                format!("{} is always super effective against {forced}", context.mov.name),
            );
        } else {
            effectiveness.mul(
                2.0,
                format!("{} is always super effective against {forced}", context.mov.name),
            );
        }
    }

    if let Some(compound_types) = &context.move_data.compound_types {
        let mut combined = 1.0;
        for compound_type in compound_types {
            let mut single = 1.0;
            for defending_type in &defending_types {
                single *= type_multiplier(*compound_type, *defending_type);
            }
            combined *= single;
        }
        effectiveness.set(
            combined,
            format!("{} hits with each of its types at once", context.mov.name),
        );
    }

    if let Some(ability) = &context.defender.ability
        && let Some(hook) =
            hooks::MODIFY_TYPE_EFFECTIVENESS_HOOKS.get(format!("ability:{ability}").as_str())
    {
        hook(context, attacking_type, &mut effectiveness);
    }
    if let Some(item) = &context.defender.item
        && let Some(hook) =
            hooks::MODIFY_TYPE_EFFECTIVENESS_HOOKS.get(format!("item:{item}").as_str())
    {
        hook(context, attacking_type, &mut effectiveness);
    }

    effectiveness
}

/// Same-type attack bonus for the move.
pub(crate) fn stab_modifier(context: &DamageContext) -> Output<f64> {
    let attacking_type = context.attacking_type();
    let original_types = context.attacker_species_data.types();

    if let Some(tera_type) = context.attacker.tera_type {
        if tera_type == Type::Stellar {
            if original_types.contains(&attacking_type) {
                return Output::start(1.2, "stellar tera same-type bonus");
            }
            return Output::from(1.0);
        }
        if attacking_type == tera_type {
            return Output::start(2.0, "tera same-type bonus");
        }
        if original_types.contains(&attacking_type) {
            return Output::start(1.5, "same-type bonus");
        }
        return Output::from(1.0);
    }

    if original_types.contains(&attacking_type) {
        return Output::start(1.5, "same-type bonus");
    }
    Output::from(1.0)
}
