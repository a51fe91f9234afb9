use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A persistent status ailment on a combatant.
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
pub enum Status {
    #[string = "None"]
    #[default]
    None,
    #[string = "Poison"]
    #[alias = "PSN"]
    Poison,
    #[string = "Paralysis"]
    #[alias = "PAR"]
    Paralysis,
    #[string = "Burn"]
    #[alias = "BRN"]
    Burn,
    #[string = "Sleep"]
    #[alias = "SLP"]
    Sleep,
    #[string = "Freeze"]
    #[alias = "FRZ"]
    Freeze,
}

impl Status {
    /// Is any status ailment active?
    pub fn is_afflicted(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod status_test {
    use crate::{
        Status,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(Status::Burn, "Burn");
        test_string_serialization(Status::None, "None");
    }

    #[test]
    fn deserializes_abbreviation() {
        test_string_deserialization("BRN", Status::Burn);
        test_string_deserialization("PSN", Status::Poison);
    }

    #[test]
    fn afflicted_for_everything_but_none() {
        assert!(!Status::None.is_afflicted());
        assert!(Status::Sleep.is_afflicted());
    }
}
