use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Stat;

/// A boostable stat.
///
/// HP cannot be boosted, but accuracy and evasion can.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Boost {
    #[string = "atk"]
    Atk,
    #[string = "def"]
    Def,
    #[string = "spa"]
    SpAtk,
    #[string = "spd"]
    SpDef,
    #[string = "spe"]
    Spe,
    #[string = "acc"]
    Accuracy,
    #[string = "eva"]
    Evasion,
}

impl TryFrom<Stat> for Boost {
    type Error = anyhow::Error;

    fn try_from(value: Stat) -> Result<Self, Self::Error> {
        match value {
            Stat::HP => Err(anyhow::Error::msg("hp cannot be boosted")),
            Stat::Atk => Ok(Self::Atk),
            Stat::Def => Ok(Self::Def),
            Stat::SpAtk => Ok(Self::SpAtk),
            Stat::SpDef => Ok(Self::SpDef),
            Stat::Spe => Ok(Self::Spe),
        }
    }
}

/// A table of stat stage boosts, each in the range [-6, 6].
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoostTable {
    #[serde(default)]
    pub atk: i8,
    #[serde(default)]
    pub def: i8,
    #[serde(default)]
    pub spa: i8,
    #[serde(default)]
    pub spd: i8,
    #[serde(default)]
    pub spe: i8,
    #[serde(default)]
    pub acc: i8,
    #[serde(default)]
    pub eva: i8,
}

impl BoostTable {
    /// Returns the stage for the given boost, clamped to [-6, 6].
    pub fn get(&self, boost: Boost) -> i8 {
        let value = match boost {
            Boost::Atk => self.atk,
            Boost::Def => self.def,
            Boost::SpAtk => self.spa,
            Boost::SpDef => self.spd,
            Boost::Spe => self.spe,
            Boost::Accuracy => self.acc,
            Boost::Evasion => self.eva,
        };
        value.clamp(-6, 6)
    }

    /// Sets the stage for the given boost.
    pub fn set(&mut self, boost: Boost, value: i8) {
        let entry = match boost {
            Boost::Atk => &mut self.atk,
            Boost::Def => &mut self.def,
            Boost::SpAtk => &mut self.spa,
            Boost::SpDef => &mut self.spd,
            Boost::Spe => &mut self.spe,
            Boost::Accuracy => &mut self.acc,
            Boost::Evasion => &mut self.eva,
        };
        *entry = value;
    }

    /// Are all stages within the declared [-6, 6] bounds?
    pub fn in_bounds(&self) -> bool {
        [
            self.atk, self.def, self.spa, self.spd, self.spe, self.acc, self.eva,
        ]
        .into_iter()
        .all(|value| (-6..=6).contains(&value))
    }
}
