use battle_data::{
    BoostTable,
    Gender,
    Stat,
    StatTable,
    Status,
    Type,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Weather active on the field.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Weather {
    #[string = "None"]
    #[default]
    None,
    #[string = "Sun"]
    Sun,
    #[string = "Rain"]
    Rain,
    #[string = "Sandstorm"]
    Sandstorm,
    #[string = "Snow"]
    Snow,
}

/// Terrain active on the field.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Terrain {
    #[string = "None"]
    #[default]
    None,
    #[string = "Electric Terrain"]
    #[alias = "Electric"]
    Electric,
    #[string = "Grassy Terrain"]
    #[alias = "Grassy"]
    Grassy,
    #[string = "Psychic Terrain"]
    #[alias = "Psychic"]
    Psychic,
    #[string = "Misty Terrain"]
    #[alias = "Misty"]
    Misty,
}

/// State of the battlefield, shared by both combatants.
///
/// Screens protect the defending side.
#[derive(Debug, Default, Clone)]
pub struct Field {
    pub weather: Weather,
    pub terrain: Terrain,
    pub trick_room: bool,
    pub gravity: bool,
    pub magic_room: bool,
    pub wonder_room: bool,
    pub reflect: bool,
    pub light_screen: bool,
    pub aurora_veil: bool,
    pub tailwind: bool,
}

impl Field {
    pub fn has_weather<I>(&self, iter: I) -> bool
    where
        I: IntoIterator<Item = Weather>,
    {
        iter.into_iter().any(|val| val == self.weather)
    }

    pub fn has_terrain<I>(&self, iter: I) -> bool
    where
        I: IntoIterator<Item = Terrain>,
    {
        iter.into_iter().any(|val| val == self.terrain)
    }
}

/// State of a single combatant.
///
/// Stats are effective values, already resolved from base stats, level, nature, IVs, and EVs.
/// [`crate::stats::derive_stats`] produces them for a freshly-constructed combatant.
#[derive(Debug, Default, Clone)]
pub struct Combatant {
    pub species: String,
    pub level: u64,
    pub stats: StatTable,
    pub ability: Option<String>,
    pub item: Option<String>,
    pub gender: Option<Gender>,
    pub status: Status,
    pub boosts: BoostTable,
    /// Terastallized type, if the combatant is terastallized.
    pub tera_type: Option<Type>,
    /// Remaining HP, as a fraction of max HP.
    pub hp_fraction: f64,
    /// The stat boosted by a paradox ability (Protosynthesis, Quark Drive).
    pub paradox_stat: Option<Stat>,
    /// Fainted teammates, for Supreme Overlord.
    pub fainted_teammates: u8,
    /// Does the combatant move after its opponent this turn?
    pub moves_last: bool,
    /// Has Flash Fire been activated by an incoming Fire move?
    pub flash_fire: bool,
}

impl Combatant {
    pub fn new<S>(species: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            species: species.into(),
            level: 50,
            hp_fraction: 1.0,
            ..Default::default()
        }
    }

    pub fn has_ability<I, S>(&self, iter: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(ability) = &self.ability {
            iter.into_iter().any(|val| val.as_ref() == ability)
        } else {
            false
        }
    }

    pub fn has_item<I, S>(&self, iter: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(item) = &self.item {
            iter.into_iter().any(|val| val.as_ref() == item)
        } else {
            false
        }
    }

    pub fn is_terastallized(&self) -> bool {
        self.tera_type.is_some()
    }
}

/// A single use of a move by the attacker.
#[derive(Debug, Clone)]
pub struct MoveInput {
    pub name: String,
    /// Overrides the move's own type, for type-changing effects.
    pub type_override: Option<Type>,
    pub crit: bool,
    pub power_multiplier: f64,
}

impl MoveInput {
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn is_named<I, S>(&self, iter: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        iter.into_iter().any(|val| val.as_ref() == self.name)
    }
}

impl Default for MoveInput {
    fn default() -> Self {
        Self {
            name: String::default(),
            type_override: None,
            crit: false,
            power_multiplier: 1.0,
        }
    }
}

#[cfg(test)]
mod state_test {
    use crate::state::{
        Combatant,
        Field,
        MoveInput,
        Terrain,
        Weather,
    };

    #[test]
    fn matches_weather_and_terrain() {
        let field = Field {
            weather: Weather::Rain,
            terrain: Terrain::Grassy,
            ..Default::default()
        };
        assert!(field.has_weather([Weather::Rain]));
        assert!(!field.has_weather([Weather::Sun, Weather::Sandstorm]));
        assert!(field.has_terrain([Terrain::Grassy, Terrain::Misty]));
    }

    #[test]
    fn matches_ability_and_item() {
        let mut combatant = Combatant::new("Snorlax");
        assert!(!combatant.has_ability(["Thick Fat"]));

        combatant.ability = Some("Thick Fat".to_owned());
        combatant.item = Some("Leftovers".to_owned());
        assert!(combatant.has_ability(["Thick Fat", "Immunity"]));
        assert!(!combatant.has_ability(["Gluttony"]));
        assert!(combatant.has_item(["Leftovers"]));
    }

    #[test]
    fn move_input_defaults_to_neutral_multiplier() {
        let mov = MoveInput::new("Thunderbolt");
        assert_eq!(mov.power_multiplier, 1.0);
        assert!(!mov.crit);
        assert!(mov.is_named(["Thunderbolt"]));
        assert!(!mov.is_named(["Thunder"]));
    }
}
