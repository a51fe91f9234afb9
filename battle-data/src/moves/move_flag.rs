use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Move flags, which categorize moves for rule predicates (such as ability power boosts or
/// special power formulas).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum MoveFlag {
    /// Makes contact.
    #[string = "Contact"]
    Contact,
    /// A sound move.
    #[string = "Sound"]
    Sound,
    /// A bite move.
    #[string = "Bite"]
    Bite,
    /// A punch move.
    #[string = "Punch"]
    Punch,
    /// A slicing move.
    #[string = "Slicing"]
    Slicing,
    /// A spinning move.
    #[string = "Spin"]
    Spin,
    /// An aura or pulse move.
    #[string = "Wave"]
    Wave,
    /// A wind move.
    #[string = "Wind"]
    Wind,
    /// Has an additional effect beyond dealing damage.
    #[string = "AdditionalEffect"]
    AdditionalEffect,
    /// Power is read off a table keyed by defender weight.
    #[string = "WeightPower"]
    WeightPower,
    /// Power is read off a table keyed by the attacker-to-defender weight ratio.
    #[string = "WeightRatioPower"]
    WeightRatioPower,
}

#[cfg(test)]
mod move_flag_test {
    use crate::{
        MoveFlag,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(MoveFlag::Contact, "Contact");
        test_string_serialization(MoveFlag::WeightRatioPower, "WeightRatioPower");
    }

    #[test]
    fn deserializes_lowercase() {
        test_string_deserialization("bite", MoveFlag::Bite);
    }
}
