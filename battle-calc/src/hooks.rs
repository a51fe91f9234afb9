use std::sync::LazyLock;

use battle_data::{
    Gender,
    MoveFlag,
    Stat,
    Status,
    Type,
};
use indexmap::IndexMap;

use crate::{
    common::Output,
    damage::DamageContext,
    state::{
        Terrain,
        Weather,
    },
    types,
};

// Dynamic extensions to the damage calculator, keyed by the effect that grants them.
//
// Each registry covers one modifier tier. The tier runner looks up the single key granted by the
// relevant combatant ("ability:Name", "item:Name", or "move:Name") rather than iterating, so a
// combatant can only ever trigger one hook per registry.

/// Modifies type effectiveness after the chart lookup.
pub(crate) type ModifyTypeEffectiveness = fn(&DamageContext, Type, &mut Output<f64>);
/// Modifies an offensive or defensive stat tier.
pub(crate) type ModifyStat = fn(&DamageContext, &mut Output<f64>);
/// Modifies the move power tier.
pub(crate) type ModifyBasePower = fn(&DamageContext, &mut Output<f64>);
/// Modifies the final damage multiplier.
pub(crate) type ModifyFinalDamage = fn(&DamageContext, &mut Output<f64>);

macro_rules! type_absorbing_ability {
    ( $name:literal, $typ:expr ) => {
        (|_: &DamageContext, attacking_type: Type, effectiveness: &mut Output<f64>| {
            if attacking_type == $typ {
                effectiveness.set(0.0, $name);
            }
        }) as _
    };
}

macro_rules! low_hp_type_boosting_ability {
    ( $name:literal, $typ:expr ) => {
        (|context: &DamageContext, value: &mut Output<f64>| {
            if context.move_data.primary_type == $typ && context.attacker.hp_fraction <= 1.0 / 3.0
            {
                value.mul(1.5, $name);
            }
        }) as _
    };
}

macro_rules! normal_type_skin_ability {
    ( $name:literal ) => {
        (|context: &DamageContext, value: &mut Output<f64>| {
            if context.move_data.primary_type == Type::Normal {
                value.mul(1.2, $name);
            }
        }) as _
    };
}

macro_rules! full_hp_guarding_ability {
    ( $name:literal ) => {
        (|context: &DamageContext, value: &mut Output<f64>| {
            if context.defender.hp_fraction >= 1.0 {
                value.mul(2.0, $name);
            }
        }) as _
    };
}

macro_rules! type_powering_ability {
    ( $name:literal, $typ:expr, $mult:expr ) => {
        (|context: &DamageContext, value: &mut Output<f64>| {
            if context.move_data.primary_type == $typ {
                value.mul($mult, $name);
            }
        }) as _
    };
}

macro_rules! flag_powering_ability {
    ( $name:literal, $flag:expr, $mult:expr ) => {
        (|context: &DamageContext, value: &mut Output<f64>| {
            if context.move_data.has_flag($flag) {
                value.mul($mult, $name);
            }
        }) as _
    };
}

macro_rules! super_effective_dampening_ability {
    ( $name:literal ) => {
        (|context: &DamageContext, value: &mut Output<f64>| {
            if types::record_type_effectiveness(context) > 1.0 {
                value.mul(0.75, $name);
            }
        }) as _
    };
}

pub(crate) static MODIFY_TYPE_EFFECTIVENESS_HOOKS: LazyLock<
    IndexMap<&str, ModifyTypeEffectiveness>,
> = LazyLock::new(|| {
    IndexMap::from_iter([
        (
            "ability:Levitate",
            type_absorbing_ability!("Levitate", Type::Ground),
        ),
        (
            "ability:Volt Absorb",
            type_absorbing_ability!("Volt Absorb", Type::Electric),
        ),
        (
            "ability:Motor Drive",
            type_absorbing_ability!("Motor Drive", Type::Electric),
        ),
        (
            "ability:Flash Fire",
            type_absorbing_ability!("Flash Fire", Type::Fire),
        ),
        (
            "ability:Sap Sipper",
            type_absorbing_ability!("Sap Sipper", Type::Grass),
        ),
        (
            "ability:Storm Drain",
            type_absorbing_ability!("Storm Drain", Type::Water),
        ),
        (
            "ability:Filter",
            (|_: &DamageContext, _: Type, effectiveness: &mut Output<f64>| {
                if *effectiveness.value() > 1.0 {
                    effectiveness.mul(0.75, "Filter");
                }
            }) as _,
        ),
        (
            "ability:Heatproof",
            (|_: &DamageContext, attacking_type: Type, effectiveness: &mut Output<f64>| {
                if attacking_type == Type::Fire {
                    effectiveness.mul(0.5, "Heatproof");
                }
            }) as _,
        ),
        (
            "ability:Thick Fat",
            (|_: &DamageContext, attacking_type: Type, effectiveness: &mut Output<f64>| {
                if attacking_type == Type::Fire || attacking_type == Type::Ice {
                    effectiveness.mul(0.5, "Thick Fat");
                }
            }) as _,
        ),
        (
            "item:Ring Target",
            (|_: &DamageContext, _: Type, effectiveness: &mut Output<f64>| {
                if *effectiveness.value() == 0.0 {
                    effectiveness.set(1.0, "Ring Target");
                }
            }) as _,
        ),
    ])
});

pub(crate) static ATTACK_ABILITY_HOOKS: LazyLock<IndexMap<&str, ModifyStat>> =
    LazyLock::new(|| {
        IndexMap::from_iter([
            (
                "ability:Huge Power",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.is_physical() {
                        value.mul(2.0, "Huge Power");
                    }
                }) as _,
            ),
            (
                "ability:Pure Power",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.is_physical() {
                        value.mul(2.0, "Pure Power");
                    }
                }) as _,
            ),
            (
                "ability:Guts",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.is_physical() && context.attacker.status.is_afflicted() {
                        value.mul(1.5, "Guts");
                    }
                }) as _,
            ),
            (
                "ability:Solar Power",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.is_special() && context.field.has_weather([Weather::Sun])
                    {
                        value.mul(1.5, "Solar Power");
                    }
                }) as _,
            ),
            (
                "ability:Hustle",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.is_physical() {
                        value.mul(1.5, "Hustle");
                    }
                }) as _,
            ),
            (
                "ability:Blaze",
                low_hp_type_boosting_ability!("Blaze", Type::Fire),
            ),
            (
                "ability:Overgrow",
                low_hp_type_boosting_ability!("Overgrow", Type::Grass),
            ),
            (
                "ability:Torrent",
                low_hp_type_boosting_ability!("Torrent", Type::Water),
            ),
            (
                "ability:Swarm",
                low_hp_type_boosting_ability!("Swarm", Type::Bug),
            ),
            (
                "ability:Orichalcum Pulse",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.field.has_weather([Weather::Sun]) {
                        value.mul(5461.0 / 4096.0, "Orichalcum Pulse");
                    }
                }) as _,
            ),
            (
                "ability:Hadron Engine",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if !context.move_data.is_physical()
                        && context.field.has_terrain([Terrain::Electric])
                    {
                        value.mul(5461.0 / 4096.0, "Hadron Engine");
                    }
                }) as _,
            ),
            (
                "ability:Quark Drive",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.field.has_terrain([Terrain::Electric])
                        && let Some(stat) = context.attacker.paradox_stat
                        && ((context.move_data.is_physical() && stat == Stat::Atk)
                            || (!context.move_data.is_physical() && stat == Stat::SpAtk))
                    {
                        value.mul(1.3, "Quark Drive");
                    }
                }) as _,
            ),
            (
                "ability:Protosynthesis",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.field.has_weather([Weather::Sun])
                        && let Some(stat) = context.attacker.paradox_stat
                        && ((context.move_data.is_physical() && stat == Stat::Atk)
                            || (!context.move_data.is_physical() && stat == Stat::SpAtk))
                    {
                        value.mul(1.3, "Protosynthesis");
                    }
                }) as _,
            ),
            (
                "ability:Water Bubble",
                type_powering_ability!("Water Bubble", Type::Water, 2.0),
            ),
            (
                "ability:Gorilla Tactics",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.is_physical() {
                        value.mul(1.5, "Gorilla Tactics");
                    }
                }) as _,
            ),
            ("ability:Pixilate", normal_type_skin_ability!("Pixilate")),
            ("ability:Aerilate", normal_type_skin_ability!("Aerilate")),
            ("ability:Galvanize", normal_type_skin_ability!("Galvanize")),
            (
                "ability:Refrigerate",
                normal_type_skin_ability!("Refrigerate"),
            ),
        ])
    });

pub(crate) static DEFENSE_ABILITY_HOOKS: LazyLock<IndexMap<&str, ModifyStat>> =
    LazyLock::new(|| {
        IndexMap::from_iter([
            (
                "ability:Fur Coat",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.is_physical() {
                        value.mul(2.0, "Fur Coat");
                    }
                }) as _,
            ),
            (
                "ability:Multiscale",
                full_hp_guarding_ability!("Multiscale"),
            ),
            (
                "ability:Shadow Shield",
                full_hp_guarding_ability!("Shadow Shield"),
            ),
            (
                "ability:Marvel Scale",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.is_physical() && context.defender.status.is_afflicted() {
                        value.mul(1.5, "Marvel Scale");
                    }
                }) as _,
            ),
            (
                "ability:Quark Drive",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.field.has_terrain([Terrain::Electric])
                        && let Some(stat) = context.defender.paradox_stat
                        && ((context.move_data.is_physical() && stat == Stat::Def)
                            || (!context.move_data.is_physical() && stat == Stat::SpDef))
                    {
                        value.mul(1.3, "Quark Drive");
                    }
                }) as _,
            ),
            (
                "ability:Protosynthesis",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.field.has_weather([Weather::Sun])
                        && let Some(stat) = context.defender.paradox_stat
                        && ((context.move_data.is_physical() && stat == Stat::Def)
                            || (!context.move_data.is_physical() && stat == Stat::SpDef))
                    {
                        value.mul(1.3, "Protosynthesis");
                    }
                }) as _,
            ),
            (
                "ability:Thick Fat",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.primary_type == Type::Fire
                        || context.move_data.primary_type == Type::Ice
                    {
                        value.mul(2.0, "Thick Fat");
                    }
                }) as _,
            ),
            (
                "ability:Heatproof",
                type_powering_ability!("Heatproof", Type::Fire, 2.0),
            ),
            (
                "ability:Ice Scales",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if !context.move_data.is_physical() {
                        value.mul(2.0, "Ice Scales");
                    }
                }) as _,
            ),
            (
                "ability:Phantom Guard",
                full_hp_guarding_ability!("Phantom Guard"),
            ),
            (
                "ability:Fluffy",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.has_flag(MoveFlag::Contact) {
                        value.mul(2.0, "Fluffy");
                    } else if context.move_data.primary_type == Type::Fire {
                        value.mul(0.5, "Fluffy");
                    }
                }) as _,
            ),
            (
                "ability:Dry Skin",
                type_powering_ability!("Dry Skin", Type::Fire, 0.8),
            ),
        ])
    });

pub(crate) static ATTACK_ITEM_HOOKS: LazyLock<IndexMap<&str, ModifyStat>> = LazyLock::new(|| {
    IndexMap::from_iter([
        (
            "item:Choice Band",
            (|context: &DamageContext, value: &mut Output<f64>| {
                if context.move_data.is_physical() {
                    value.mul(1.5, "Choice Band");
                }
            }) as _,
        ),
        (
            "item:Choice Specs",
            (|context: &DamageContext, value: &mut Output<f64>| {
                if context.move_data.is_special() {
                    value.mul(1.5, "Choice Specs");
                }
            }) as _,
        ),
    ])
});

pub(crate) static DEFENSE_ITEM_HOOKS: LazyLock<IndexMap<&str, ModifyStat>> = LazyLock::new(|| {
    IndexMap::from_iter([
        (
            "item:Eviolite",
            (|_: &DamageContext, value: &mut Output<f64>| {
                value.mul(1.5, "Eviolite");
            }) as _,
        ),
        (
            "item:Assault Vest",
            (|context: &DamageContext, value: &mut Output<f64>| {
                if context.move_data.is_special() {
                    value.mul(1.5, "Assault Vest");
                }
            }) as _,
        ),
        (
            "item:Metal Powder",
            (|context: &DamageContext, value: &mut Output<f64>| {
                if context.defender.species == "Ditto" && context.move_data.is_physical() {
                    value.mul(2.0, "Metal Powder");
                }
            }) as _,
        ),
    ])
});

// Disaster abilities belong to the opposite combatant: the registries below are keyed by the
// opponent's ability and reduce this combatant's stat.

pub(crate) static ATTACK_DISASTER_HOOKS: LazyLock<IndexMap<&str, ModifyStat>> =
    LazyLock::new(|| {
        IndexMap::from_iter([
            (
                "ability:Vessel of Ruin",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if !context.move_data.is_physical() {
                        value.mul(3072.0 / 4096.0, "Vessel of Ruin");
                    }
                }) as _,
            ),
            (
                "ability:Tablets of Ruin",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.is_physical() {
                        value.mul(3072.0 / 4096.0, "Tablets of Ruin");
                    }
                }) as _,
            ),
        ])
    });

pub(crate) static DEFENSE_DISASTER_HOOKS: LazyLock<IndexMap<&str, ModifyStat>> =
    LazyLock::new(|| {
        IndexMap::from_iter([
            (
                "ability:Sword of Ruin",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.is_physical() {
                        value.mul(3072.0 / 4096.0, "Sword of Ruin");
                    }
                }) as _,
            ),
            (
                "ability:Beads of Ruin",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if !context.move_data.is_physical() {
                        value.mul(3072.0 / 4096.0, "Beads of Ruin");
                    }
                }) as _,
            ),
        ])
    });

pub(crate) static POWER_ABILITY_HOOKS: LazyLock<IndexMap<&str, ModifyBasePower>> =
    LazyLock::new(|| {
        IndexMap::from_iter([
            (
                "ability:Adaptability",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context
                        .attacker_species_data
                        .has_type(context.move_data.primary_type)
                    {
                        value.mul(4.0 / 3.0, "Adaptability");
                    }
                }) as _,
            ),
            (
                "ability:Technician",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.base_power <= 60 {
                        value.mul(1.5, "Technician");
                    }
                }) as _,
            ),
            (
                "ability:Sand Force",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.field.has_weather([Weather::Sandstorm])
                        && matches!(
                            context.move_data.primary_type,
                            Type::Ground | Type::Rock | Type::Steel
                        )
                    {
                        value.mul(1.3, "Sand Force");
                    }
                }) as _,
            ),
            (
                "ability:Rocky Payload",
                type_powering_ability!("Rocky Payload", Type::Rock, 1.5),
            ),
            (
                "ability:Transistor",
                type_powering_ability!("Transistor", Type::Electric, 1.3),
            ),
            (
                "ability:Dragon's Maw",
                type_powering_ability!("Dragon's Maw", Type::Dragon, 1.5),
            ),
            (
                "ability:Steelworker",
                type_powering_ability!("Steelworker", Type::Steel, 1.5),
            ),
            (
                "ability:Punk Rock",
                flag_powering_ability!("Punk Rock", MoveFlag::Sound, 1.3),
            ),
            (
                "ability:Toxic Boost",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.is_physical()
                        && context.attacker.status == Status::Poison
                    {
                        value.mul(1.5, "Toxic Boost");
                    }
                }) as _,
            ),
            (
                "ability:Flare Boost",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.is_special()
                        && context.attacker.status == Status::Burn
                    {
                        value.mul(1.5, "Flare Boost");
                    }
                }) as _,
            ),
            (
                "ability:Sheer Force",
                flag_powering_ability!("Sheer Force", MoveFlag::AdditionalEffect, 1.3),
            ),
            (
                "ability:Analytic",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.attacker.moves_last {
                        value.mul(1.3, "Analytic");
                    }
                }) as _,
            ),
            (
                "ability:Rivalry",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if let (Some(attacker), Some(defender)) =
                        (context.attacker.gender, context.defender.gender)
                    {
                        if attacker == defender {
                            value.mul(1.25, "Rivalry");
                        } else if attacker != Gender::Unknown && defender != Gender::Unknown {
                            value.mul(0.75, "Rivalry");
                        }
                    }
                }) as _,
            ),
            (
                "ability:Supreme Overlord",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.attacker.fainted_teammates > 0 {
                        let count = context.attacker.fainted_teammates.min(5);
                        value.mul(1.0 + f64::from(count) * 0.1, "Supreme Overlord");
                    }
                }) as _,
            ),
            (
                "ability:Screw Fin",
                flag_powering_ability!("Screw Fin", MoveFlag::Spin, 1.5),
            ),
            (
                "ability:Strong Jaw",
                flag_powering_ability!("Strong Jaw", MoveFlag::Bite, 1.5),
            ),
            (
                "ability:Mega Launcher",
                flag_powering_ability!("Mega Launcher", MoveFlag::Wave, 1.5),
            ),
            (
                "ability:Tough Claws",
                flag_powering_ability!("Tough Claws", MoveFlag::Contact, 1.3),
            ),
            (
                "ability:Iron Fist",
                flag_powering_ability!("Iron Fist", MoveFlag::Punch, 1.2),
            ),
            (
                "ability:Sharpness",
                flag_powering_ability!("Sharpness", MoveFlag::Slicing, 1.5),
            ),
            (
                "ability:Normalize",
                (|_: &DamageContext, value: &mut Output<f64>| {
                    value.mul(1.2, "Normalize");
                }) as _,
            ),
            (
                "ability:Flash Fire",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.move_data.primary_type == Type::Fire && context.attacker.flash_fire
                    {
                        value.mul(1.5, "Flash Fire");
                    }
                }) as _,
            ),
        ])
    });

pub(crate) static POWER_ITEM_HOOKS: LazyLock<IndexMap<&str, ModifyBasePower>> =
    LazyLock::new(|| {
        IndexMap::from_iter([(
            "item:Life Orb",
            (|_: &DamageContext, value: &mut Output<f64>| {
                value.mul(1.3, "Life Orb");
            }) as _,
        )])
    });

pub(crate) static POWER_MOVE_HOOKS: LazyLock<IndexMap<&str, ModifyBasePower>> =
    LazyLock::new(|| {
        IndexMap::from_iter([
            (
                "move:Weather Ball",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if !context.field.has_weather([Weather::None]) {
                        value.mul(2.0, "Weather Ball");
                    }
                }) as _,
            ),
            (
                "move:Collision Course",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if types::record_type_effectiveness(context) > 1.0 {
                        value.mul(5461.0 / 4096.0, "Collision Course");
                    }
                }) as _,
            ),
            (
                "move:Electro Drift",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if types::record_type_effectiveness(context) > 1.0 {
                        value.mul(5461.0 / 4096.0, "Electro Drift");
                    }
                }) as _,
            ),
        ])
    });

pub(crate) static FINAL_DAMAGE_ATTACKER_HOOKS: LazyLock<IndexMap<&str, ModifyFinalDamage>> =
    LazyLock::new(|| {
        IndexMap::from_iter([
            (
                "ability:Sniper",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    if context.mov.crit {
                        value.mul(1.5, "Sniper");
                    }
                }) as _,
            ),
            (
                "ability:Tinted Lens",
                (|context: &DamageContext, value: &mut Output<f64>| {
                    let effectiveness = types::record_type_effectiveness(context);
                    if effectiveness < 1.0 && effectiveness > 0.0 {
                        value.mul(1.0 / effectiveness, "Tinted Lens");
                    }
                }) as _,
            ),
        ])
    });

pub(crate) static FINAL_DAMAGE_DEFENDER_HOOKS: LazyLock<IndexMap<&str, ModifyFinalDamage>> =
    LazyLock::new(|| {
        IndexMap::from_iter([
            (
                "ability:Solid Rock",
                super_effective_dampening_ability!("Solid Rock"),
            ),
            (
                "ability:Filter",
                super_effective_dampening_ability!("Filter"),
            ),
            (
                "ability:Prism Armor",
                super_effective_dampening_ability!("Prism Armor"),
            ),
        ])
    });
