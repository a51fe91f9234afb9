use anyhow::Result;

use crate::{
    ItemData,
    MoveData,
    Nature,
    SpeciesData,
};

/// Collection of tables for all static reference data, keyed by name.
///
/// This trait can be implemented for different data sources, such as an external database or
/// disk. Implementations must be immutable once shared: the damage calculator assumes reads are
/// safe from any number of threads with no synchronization of its own.
pub trait DataStore: Send + Sync {
    /// Gets a species by name.
    fn get_species_by_name(&self, name: &str) -> Result<Option<SpeciesData>>;

    /// Gets a move by name.
    fn get_move_by_name(&self, name: &str) -> Result<Option<MoveData>>;

    /// Gets an item by name.
    fn get_item_by_name(&self, name: &str) -> Result<Option<ItemData>>;

    /// Gets the per-stat nature multiplier vector, in canonical stat order.
    ///
    /// Unknown nature names are neutral.
    fn get_nature_modifiers(&self, name: &str) -> [f64; 6] {
        Nature::from_name(name)
            .map(|nature| nature.modifiers())
            .unwrap_or([1.0; 6])
    }
}
