use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Stat;

/// The nature of a combatant, which boosts one stat by 10% and drops another by 10%.
///
/// Natures whose boosted and dropped stats are equal are neutral.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Nature {
    #[string = "Hardy"]
    #[default]
    Hardy,
    #[string = "Lonely"]
    Lonely,
    #[string = "Brave"]
    Brave,
    #[string = "Adamant"]
    Adamant,
    #[string = "Naughty"]
    Naughty,
    #[string = "Bold"]
    Bold,
    #[string = "Docile"]
    Docile,
    #[string = "Relaxed"]
    Relaxed,
    #[string = "Impish"]
    Impish,
    #[string = "Lax"]
    Lax,
    #[string = "Timid"]
    Timid,
    #[string = "Hasty"]
    Hasty,
    #[string = "Serious"]
    Serious,
    #[string = "Jolly"]
    Jolly,
    #[string = "Naive"]
    Naive,
    #[string = "Modest"]
    Modest,
    #[string = "Mild"]
    Mild,
    #[string = "Quiet"]
    Quiet,
    #[string = "Bashful"]
    Bashful,
    #[string = "Rash"]
    Rash,
    #[string = "Calm"]
    Calm,
    #[string = "Gentle"]
    Gentle,
    #[string = "Sassy"]
    Sassy,
    #[string = "Careful"]
    Careful,
    #[string = "Quirky"]
    Quirky,
}

impl Nature {
    /// Looks up a nature by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Hardy" => Some(Self::Hardy),
            "Lonely" => Some(Self::Lonely),
            "Brave" => Some(Self::Brave),
            "Adamant" => Some(Self::Adamant),
            "Naughty" => Some(Self::Naughty),
            "Bold" => Some(Self::Bold),
            "Docile" => Some(Self::Docile),
            "Relaxed" => Some(Self::Relaxed),
            "Impish" => Some(Self::Impish),
            "Lax" => Some(Self::Lax),
            "Timid" => Some(Self::Timid),
            "Hasty" => Some(Self::Hasty),
            "Serious" => Some(Self::Serious),
            "Jolly" => Some(Self::Jolly),
            "Naive" => Some(Self::Naive),
            "Modest" => Some(Self::Modest),
            "Mild" => Some(Self::Mild),
            "Quiet" => Some(Self::Quiet),
            "Bashful" => Some(Self::Bashful),
            "Rash" => Some(Self::Rash),
            "Calm" => Some(Self::Calm),
            "Gentle" => Some(Self::Gentle),
            "Sassy" => Some(Self::Sassy),
            "Careful" => Some(Self::Careful),
            "Quirky" => Some(Self::Quirky),
            _ => None,
        }
    }

    /// The stat boosted by this nature.
    pub fn boosts(&self) -> Stat {
        match self {
            Self::Hardy | Self::Lonely | Self::Brave | Self::Adamant | Self::Naughty => Stat::Atk,
            Self::Bold | Self::Docile | Self::Relaxed | Self::Impish | Self::Lax => Stat::Def,
            Self::Timid | Self::Hasty | Self::Serious | Self::Jolly | Self::Naive => Stat::Spe,
            Self::Modest | Self::Mild | Self::Quiet | Self::Bashful | Self::Rash => Stat::SpAtk,
            Self::Calm | Self::Gentle | Self::Sassy | Self::Careful | Self::Quirky => Stat::SpDef,
        }
    }

    /// The stat dropped by this nature.
    pub fn drops(&self) -> Stat {
        match self {
            Self::Hardy | Self::Bold | Self::Timid | Self::Modest | Self::Calm => Stat::Atk,
            Self::Lonely | Self::Docile | Self::Hasty | Self::Mild | Self::Gentle => Stat::Def,
            Self::Brave | Self::Relaxed | Self::Serious | Self::Quiet | Self::Sassy => Stat::Spe,
            Self::Adamant | Self::Impish | Self::Jolly | Self::Bashful | Self::Careful => {
                Stat::SpAtk
            }
            Self::Naughty | Self::Lax | Self::Naive | Self::Rash | Self::Quirky => Stat::SpDef,
        }
    }

    /// The per-stat multiplier vector, in canonical stat order.
    pub fn modifiers(&self) -> [f64; 6] {
        let mut modifiers = [1.0; 6];
        if self.boosts() != self.drops() {
            modifiers[stat_index(self.boosts())] = 1.1;
            modifiers[stat_index(self.drops())] = 0.9;
        }
        modifiers
    }
}

fn stat_index(stat: Stat) -> usize {
    match stat {
        Stat::HP => 0,
        Stat::Atk => 1,
        Stat::Def => 2,
        Stat::SpAtk => 3,
        Stat::SpDef => 4,
        Stat::Spe => 5,
    }
}
