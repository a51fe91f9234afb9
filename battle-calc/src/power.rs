use anyhow::Result;
use battle_data::{
    MoveFlag,
    Type,
};

use crate::{
    common::Output,
    damage::DamageContext,
    hooks,
    state::{
        Terrain,
        Weather,
    },
    stats::{
        apply_tier,
        hook_tier,
    },
};

/// Power of a weight-scaled move, or 0 if the move does not scale with weight.
///
/// A target with no recorded weight yields 0, which leaves the move's own base power in place.
fn weight_based_power(context: &DamageContext) -> f64 {
    if context.move_data.has_flag(MoveFlag::WeightPower) {
        let weight = context.defender_species_data.weight;
        if weight <= 0.0 {
            0.0
        } else if weight <= 10.0 {
            20.0
        } else if weight <= 25.0 {
            40.0
        } else if weight <= 50.0 {
            60.0
        } else if weight <= 100.0 {
            80.0
        } else if weight <= 200.0 {
            100.0
        } else {
            120.0
        }
    } else if context.move_data.has_flag(MoveFlag::WeightRatioPower) {
        let defender_weight = context.defender_species_data.weight;
        if defender_weight <= 0.0 {
            return 0.0;
        }
        let ratio = context.attacker_species_data.weight / defender_weight;
        if ratio >= 5.0 {
            120.0
        } else if ratio >= 4.0 {
            100.0
        } else if ratio >= 3.0 {
            80.0
        } else if ratio >= 2.0 {
            60.0
        } else {
            40.0
        }
    } else {
        0.0
    }
}

/// Resolves the move's effective power.
///
/// A non-positive result means the move cannot deal damage.
pub(crate) fn resolve_power(context: &DamageContext) -> Result<Output<f64>> {
    let mut value = Output::<f64>::from(f64::from(context.move_data.base_power));

    let weight_power = weight_based_power(context);
    if weight_power > 0.0 {
        value.set(weight_power, "target weight");
    }
    if *value.value() <= 0.0 {
        return Ok(value);
    }

    if context.mov.power_multiplier != 1.0 {
        value.mul(context.mov.power_multiplier, "power multiplier");
    }

    let move_type = context.move_data.primary_type;
    match move_type {
        Type::Fire => {
            if context.field.has_weather([Weather::Sun]) {
                value.mul(1.5, "Sun");
            } else if context.field.has_weather([Weather::Rain]) {
                value.mul(0.5, "Rain");
            }
        }
        Type::Water => {
            if context.field.has_weather([Weather::Rain]) {
                value.mul(1.5, "Rain");
            } else if context.field.has_weather([Weather::Sun]) {
                value.mul(0.5, "Sun");
            }
        }
        _ => (),
    }

    if context.field.has_terrain([Terrain::Electric]) && move_type == Type::Electric {
        value.mul(1.3, "Electric Terrain");
    } else if context.field.has_terrain([Terrain::Grassy]) && move_type == Type::Grass {
        value.mul(1.3, "Grassy Terrain");
    } else if context.field.has_terrain([Terrain::Psychic]) && move_type == Type::Psychic {
        value.mul(1.3, "Psychic Terrain");
    } else if context.field.has_terrain([Terrain::Misty]) && move_type == Type::Fairy {
        value.mul(1.3, "Misty Terrain");
    }

    apply_tier(
        &mut value,
        hook_tier(
            context,
            &hooks::POWER_ABILITY_HOOKS,
            context.attacker.ability.as_ref(),
            "ability",
        ),
    );

    let mut item_tier = Output::<f64>::from(1.0);
    if let Some(item) = &context.attacker.item {
        if let Some(hook) = hooks::POWER_ITEM_HOOKS.get(format!("item:{item}").as_str()) {
            hook(context, &mut item_tier);
        }
        // Consumable type boosters (gems).
        if let Some(item_data) = context.data.get_item_by_name(item)?
            && item_data.is_consumable
            && item_data.boost_type == Some(move_type)
        {
            item_tier.mul(1.3, item.as_str());
        }
    }
    apply_tier(&mut value, item_tier);

    let mut situation_tier = Output::<f64>::from(1.0);
    if let Some(hook) = hooks::POWER_MOVE_HOOKS.get(format!("move:{}", context.mov.name).as_str())
    {
        hook(context, &mut situation_tier);
    }
    apply_tier(&mut value, situation_tier);

    let mut value = value.map(f64::trunc, "truncate");
    if *value.value() < 1.0 {
        value.set(1.0, "minimum");
    }
    Ok(value)
}
