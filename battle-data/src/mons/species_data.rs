use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    StatTable,
    Type,
};

/// Data about a particular species.
///
/// Species data is common to all combatants of a given species. Data about a specific combatant
/// (such as its nature, effective stats, or battle conditions) does not belong here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesData {
    /// Name of the species.
    pub name: String,
    /// The primary type of the species.
    pub primary_type: Type,
    /// The secondary type of the species, if it exists.
    pub secondary_type: Option<Type>,
    /// Abilities.
    pub abilities: Vec<String>,
    /// Base stats.
    pub base_stats: StatTable,
    /// Weight in kilograms (kg).
    #[serde(default)]
    pub weight: f64,
}

impl SpeciesData {
    /// The full type set of the species.
    pub fn types(&self) -> Vec<Type> {
        let mut types = Vec::from_iter([self.primary_type]);
        if let Some(secondary) = self.secondary_type {
            types.push(secondary);
        }
        types
    }

    /// Does the species have the given type?
    pub fn has_type(&self, typ: Type) -> bool {
        self.primary_type == typ || self.secondary_type == Some(typ)
    }
}
