use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The type of a species or move, which determines its weaknesses and resistances.
///
/// [`Type::Stellar`] only exists as a terastallization target; no species or move naturally has
/// it, and it takes and deals neutral damage on the type chart.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Electric"]
    Electric,
    #[string = "Grass"]
    Grass,
    #[string = "Ice"]
    Ice,
    #[string = "Fighting"]
    Fighting,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Flying"]
    Flying,
    #[string = "Psychic"]
    Psychic,
    #[string = "Bug"]
    Bug,
    #[string = "Rock"]
    Rock,
    #[string = "Ghost"]
    Ghost,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Steel"]
    Steel,
    #[string = "Fairy"]
    Fairy,
    #[string = "Stellar"]
    Stellar,
}

impl Type {
    /// All types, in type chart order.
    pub const ALL: [Type; 19] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
        Type::Stellar,
    ];

    /// The row/column index of this type in the type chart.
    pub fn chart_index(&self) -> usize {
        *self as usize
    }
}
