use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The category of a move, which determines the stats used for damage calculations.
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
pub enum MoveCategory {
    /// Damage dealt with Atk against Def.
    #[string = "Physical"]
    Physical,
    /// Damage dealt with SpAtk against SpDef.
    #[string = "Special"]
    Special,
    /// No damage dealt.
    #[string = "Status"]
    #[default]
    Status,
}
