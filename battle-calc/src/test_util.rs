use std::sync::LazyLock;

use ahash::HashSet;
use battle_data::{
    ItemData,
    MoveCategory,
    MoveData,
    MoveFlag,
    SpeciesData,
    StatTable,
    StaticDataStore,
    Type,
};

use crate::{
    damage::{
        DamageCalculatorInput,
        DamageContext,
    },
    state::{
        Combatant,
        Field,
        MoveInput,
    },
};

fn species(
    name: &str,
    primary_type: Type,
    secondary_type: Option<Type>,
    base_stats: [u16; 6],
    weight: f64,
) -> SpeciesData {
    SpeciesData {
        name: name.to_owned(),
        primary_type,
        secondary_type,
        abilities: Vec::new(),
        base_stats: StatTable {
            hp: base_stats[0],
            atk: base_stats[1],
            def: base_stats[2],
            spa: base_stats[3],
            spd: base_stats[4],
            spe: base_stats[5],
        },
        weight,
    }
}

fn mov(
    name: &str,
    primary_type: Type,
    category: MoveCategory,
    base_power: u32,
    flags: &[MoveFlag],
) -> MoveData {
    MoveData {
        name: name.to_owned(),
        primary_type,
        category,
        base_power,
        accuracy: 100,
        pp: 10,
        flags: HashSet::from_iter(flags.iter().copied()),
        force_super_effective_against: None,
        compound_types: None,
    }
}

/// A small data store with enough species, moves, and items to exercise the calculator.
pub(crate) fn data() -> StaticDataStore {
    let species_records = [
        species("Pikachu", Type::Electric, None, [35, 55, 40, 50, 50, 90], 6.0),
        species(
            "Gyarados",
            Type::Water,
            Some(Type::Flying),
            [95, 125, 79, 60, 100, 81],
            235.0,
        ),
        species("Glaceon", Type::Ice, None, [65, 60, 110, 130, 95, 65], 25.9),
        species("Machamp", Type::Fighting, None, [90, 130, 80, 65, 85, 55], 130.0),
        species("Snorlax", Type::Normal, None, [160, 110, 65, 65, 110, 30], 460.0),
        species(
            "Gengar",
            Type::Ghost,
            Some(Type::Poison),
            [60, 65, 60, 130, 75, 110],
            40.5,
        ),
        species(
            "Charizard",
            Type::Fire,
            Some(Type::Flying),
            [78, 84, 78, 109, 85, 100],
            90.5,
        ),
        species("Ditto", Type::Normal, None, [48, 48, 48, 48, 48, 48], 4.0),
        species(
            "Tyranitar",
            Type::Rock,
            Some(Type::Dark),
            [100, 134, 110, 95, 100, 61],
            202.0,
        ),
    ];

    let mut freeze_dry = mov("Freeze-Dry", Type::Ice, MoveCategory::Special, 70, &[]);
    freeze_dry.force_super_effective_against = Some(Type::Water);
    let mut flying_press = mov(
        "Flying Press",
        Type::Fighting,
        MoveCategory::Physical,
        100,
        &[MoveFlag::Contact],
    );
    flying_press.compound_types = Some(Vec::from([Type::Fighting, Type::Flying]));

    let move_records = [
        mov("Thunderbolt", Type::Electric, MoveCategory::Special, 90, &[]),
        freeze_dry,
        flying_press,
        mov(
            "Body Slam",
            Type::Normal,
            MoveCategory::Physical,
            85,
            &[MoveFlag::Contact],
        ),
        mov(
            "Ice Punch",
            Type::Ice,
            MoveCategory::Physical,
            75,
            &[MoveFlag::Contact, MoveFlag::Punch],
        ),
        mov(
            "Grass Knot",
            Type::Grass,
            MoveCategory::Special,
            0,
            &[MoveFlag::WeightPower],
        ),
        mov(
            "Heavy Slam",
            Type::Steel,
            MoveCategory::Physical,
            0,
            &[MoveFlag::Contact, MoveFlag::WeightRatioPower],
        ),
        mov("Weather Ball", Type::Normal, MoveCategory::Special, 50, &[]),
        mov("Flamethrower", Type::Fire, MoveCategory::Special, 90, &[]),
        mov("Swords Dance", Type::Normal, MoveCategory::Status, 0, &[]),
        mov(
            "Collision Course",
            Type::Fighting,
            MoveCategory::Physical,
            100,
            &[MoveFlag::Contact],
        ),
    ];

    let item_records = [
        ItemData {
            name: "Magnet".to_owned(),
            boost_type: Some(Type::Electric),
            power_modifier: 1.0,
            ..Default::default()
        },
        ItemData {
            name: "Electric Gem".to_owned(),
            boost_type: Some(Type::Electric),
            power_modifier: 1.0,
            is_consumable: true,
            ..Default::default()
        },
        ItemData {
            name: "Life Orb".to_owned(),
            power_modifier: 1.0,
            ..Default::default()
        },
        ItemData {
            name: "Ring Target".to_owned(),
            power_modifier: 1.0,
            ..Default::default()
        },
    ];

    StaticDataStore::from_records(species_records, move_records, item_records)
}

static DATA: LazyLock<StaticDataStore> = LazyLock::new(data);

/// Builds a full damage context over the shared test data store, with a default field.
pub(crate) fn context(
    attacker: Combatant,
    defender: Combatant,
    mov: MoveInput,
) -> DamageContext<'static> {
    DamageCalculatorInput {
        data: &*DATA,
        field: Field::default(),
        attacker,
        defender,
        mov,
    }
    .try_into()
    .unwrap()
}
