use anyhow::Result;
use battle_data::{
    Boost,
    DataStore,
    Stat,
    StatTable,
    Status,
    Type,
};
use indexmap::IndexMap;

use crate::{
    common::Output,
    damage::DamageContext,
    error::Error,
    hooks,
    state::Weather,
};

/// The multiplier applied by a stat stage.
///
/// Positive stages scale the stat by `(2 + stage) / 2`, negative stages by `2 / (2 - stage)`.
pub fn stage_multiplier(stage: i8) -> f64 {
    let stage = stage.clamp(-6, 6);
    if stage >= 0 {
        (2.0 + f64::from(stage)) / 2.0
    } else {
        2.0 / (2.0 - f64::from(stage))
    }
}

pub(crate) fn hook_tier(
    context: &DamageContext,
    registry: &IndexMap<&str, hooks::ModifyStat>,
    owner: Option<&String>,
    prefix: &str,
) -> Output<f64> {
    let mut tier = Output::<f64>::from(1.0);
    if let Some(name) = owner
        && let Some(hook) = registry.get(format!("{prefix}:{name}").as_str())
    {
        hook(context, &mut tier);
    }
    tier
}

// Each modifier tier multiplies out on its own before touching the stat, so the stat sees one
// multiplication per tier, in a fixed order.
pub(crate) fn apply_tier(value: &mut Output<f64>, tier: Output<f64>) {
    if !tier.description().is_empty() {
        value.mul(*tier.value(), tier.description().join("; "));
    }
}

/// Resolves the attacker's effective attacking stat for the move.
pub(crate) fn resolve_attack_stat(context: &DamageContext) -> Result<Output<f64>> {
    let (stat, boost) = if context.move_data.is_physical() {
        (Stat::Atk, Boost::Atk)
    } else {
        (Stat::SpAtk, Boost::SpAtk)
    };

    let mut value = Output::<f64>::from(f64::from(context.attacker.stats.get(stat)));
    let stage = context.attacker.boosts.get(boost);
    if stage != 0 {
        value.mul(stage_multiplier(stage), format!("{stat} stage {stage:+}"));
    }
    let mut value = value.map(f64::trunc, "truncate");

    apply_tier(
        &mut value,
        hook_tier(
            context,
            &hooks::ATTACK_ABILITY_HOOKS,
            context.attacker.ability.as_ref(),
            "ability",
        ),
    );

    let mut item_tier = Output::<f64>::from(1.0);
    if let Some(item) = &context.attacker.item {
        if let Some(hook) = hooks::ATTACK_ITEM_HOOKS.get(format!("item:{item}").as_str()) {
            hook(context, &mut item_tier);
        }
        // Consumable type boosters (gems) boost power instead.
        if let Some(item_data) = context.data.get_item_by_name(item)?
            && !item_data.is_consumable
            && item_data.boost_type == Some(context.move_data.primary_type)
        {
            item_tier.mul(1.2, item.as_str());
        }
    }
    apply_tier(&mut value, item_tier);

    let mut status_tier = Output::<f64>::from(1.0);
    if context.attacker.status == Status::Burn
        && context.move_data.is_physical()
        && !context.attacker.has_ability(["Guts"])
    {
        status_tier.mul(0.5, "Burn");
    }
    apply_tier(&mut value, status_tier);

    apply_tier(
        &mut value,
        hook_tier(
            context,
            &hooks::ATTACK_DISASTER_HOOKS,
            context.defender.ability.as_ref(),
            "ability",
        ),
    );

    let mut value = value.map(f64::trunc, "truncate");
    if *value.value() < 1.0 {
        value.set(1.0, "minimum");
    }
    Ok(value)
}

/// Resolves the defender's effective defending stat for the move.
pub(crate) fn resolve_defense_stat(context: &DamageContext) -> Result<Output<f64>> {
    let (stat, boost) = if context.move_data.is_physical() {
        (Stat::Def, Boost::Def)
    } else {
        (Stat::SpDef, Boost::SpDef)
    };

    let mut value = Output::<f64>::from(f64::from(context.defender.stats.get(stat)));
    let stage = context.defender.boosts.get(boost);
    if stage != 0 {
        value.mul(stage_multiplier(stage), format!("{stat} stage {stage:+}"));
    }
    let mut value = value.map(f64::trunc, "truncate");

    apply_tier(
        &mut value,
        hook_tier(
            context,
            &hooks::DEFENSE_ABILITY_HOOKS,
            context.defender.ability.as_ref(),
            "ability",
        ),
    );
    apply_tier(
        &mut value,
        hook_tier(
            context,
            &hooks::DEFENSE_ITEM_HOOKS,
            context.defender.item.as_ref(),
            "item",
        ),
    );

    let mut wall_tier = Output::<f64>::from(1.0);
    if context.move_data.is_physical() && context.field.reflect {
        wall_tier.mul(2.0, "Reflect");
    } else if context.move_data.is_special() && context.field.light_screen {
        wall_tier.mul(2.0, "Light Screen");
    } else if context.field.aurora_veil {
        wall_tier.mul(2.0, "Aurora Veil");
    }
    apply_tier(&mut value, wall_tier);

    let mut other_tier = Output::<f64>::from(1.0);
    if context.field.has_weather([Weather::Sandstorm])
        && context.defender_species_data.has_type(Type::Rock)
        && context.move_data.is_special()
    {
        other_tier.mul(1.5, "Sandstorm");
    }
    apply_tier(&mut value, other_tier);

    apply_tier(
        &mut value,
        hook_tier(
            context,
            &hooks::DEFENSE_DISASTER_HOOKS,
            context.attacker.ability.as_ref(),
            "ability",
        ),
    );

    let mut value = value.map(f64::trunc, "truncate");
    if *value.value() < 1.0 {
        value.set(1.0, "minimum");
    }
    Ok(value)
}

fn core_stat(base: u16, iv: u16, ev: u16, level: u64) -> u64 {
    (2 * u64::from(base) + u64::from(iv) + u64::from(ev) / 4) * level / 100
}

/// Derives a full table of effective stats from base stats, level, nature, IVs, and EVs.
///
/// IVs default to 31 and EVs default to 0 when not given. An unrecognized nature name applies no
/// modifier.
pub fn derive_stats(
    data: &dyn DataStore,
    species: &str,
    level: u64,
    nature: &str,
    ivs: Option<&StatTable>,
    evs: Option<&StatTable>,
) -> Result<StatTable> {
    let species_data = data
        .get_species_by_name(species)?
        .ok_or_else(|| Error::UnknownSpecies(species.to_owned()))?;
    let default_ivs = StatTable {
        hp: 31,
        atk: 31,
        def: 31,
        spa: 31,
        spd: 31,
        spe: 31,
    };
    let ivs = ivs.unwrap_or(&default_ivs);
    let default_evs = StatTable::default();
    let evs = evs.unwrap_or(&default_evs);
    let modifiers = data.get_nature_modifiers(nature);

    let mut stats = StatTable::default();
    for (index, (stat, base)) in species_data.base_stats.entries().enumerate() {
        let core = core_stat(base, ivs.get(stat), evs.get(stat), level);
        let value = match stat {
            Stat::HP => core + level + 10,
            _ => ((core + 5) as f64 * modifiers[index]).trunc() as u64,
        };
        stats.set(stat, value as u16);
    }
    Ok(stats)
}
