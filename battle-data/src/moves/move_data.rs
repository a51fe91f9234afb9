use ahash::HashSet;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    MoveCategory,
    MoveFlag,
    Type,
};

/// Data about a particular move.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move type.
    pub primary_type: Type,
    /// Move category.
    pub category: MoveCategory,
    /// Base power.
    #[serde(default)]
    pub base_power: u32,
    /// Base accuracy, as a percentage.
    #[serde(default)]
    pub accuracy: u8,
    /// Total power points.
    #[serde(default)]
    pub pp: u8,
    /// Move flags.
    #[serde(default)]
    pub flags: HashSet<MoveFlag>,
    /// Type this move is always super effective against, regardless of the type chart.
    pub force_super_effective_against: Option<Type>,
    /// Types used for effectiveness in place of the move's own type.
    ///
    /// The effectiveness of each listed type is multiplied together.
    pub compound_types: Option<Vec<Type>>,
}

impl MoveData {
    /// Does the move have the given flag?
    pub fn has_flag(&self, flag: MoveFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn is_physical(&self) -> bool {
        self.category == MoveCategory::Physical
    }

    pub fn is_special(&self) -> bool {
        self.category == MoveCategory::Special
    }

    pub fn is_status(&self) -> bool {
        self.category == MoveCategory::Status
    }
}
