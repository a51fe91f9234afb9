use std::{
    fs::File,
    path::Path,
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};
use serde::de::DeserializeOwned;

use crate::{
    DataStore,
    ItemData,
    MoveData,
    SpeciesData,
};

/// An implementation of [`DataStore`] that holds all reference tables in memory.
///
/// Tables can be filled directly from records or read from a directory of JSON files.
pub struct StaticDataStore {
    pub species: HashMap<String, SpeciesData>,
    pub moves: HashMap<String, MoveData>,
    pub items: HashMap<String, ItemData>,
}

impl StaticDataStore {
    /// Species file name.
    pub const SPECIES_FILE: &str = "species.json";
    /// Moves file name.
    pub const MOVES_FILE: &str = "moves.json";
    /// Items file name.
    pub const ITEMS_FILE: &str = "items.json";

    /// Creates an empty [`StaticDataStore`].
    pub fn new() -> Self {
        Self {
            species: HashMap::default(),
            moves: HashMap::default(),
            items: HashMap::default(),
        }
    }

    /// Creates a new instance of [`StaticDataStore`] from in-memory records, keyed by name.
    pub fn from_records<S, M, I>(species: S, moves: M, items: I) -> Self
    where
        S: IntoIterator<Item = SpeciesData>,
        M: IntoIterator<Item = MoveData>,
        I: IntoIterator<Item = ItemData>,
    {
        let mut store = Self::new();
        store.species.extend(
            species
                .into_iter()
                .map(|species| (species.name.clone(), species)),
        );
        store
            .moves
            .extend(moves.into_iter().map(|mov| (mov.name.clone(), mov)));
        store
            .items
            .extend(items.into_iter().map(|item| (item.name.clone(), item)));
        store
    }

    /// Creates a new instance of [`StaticDataStore`] that reads all tables from JSON files in the
    /// given root directory.
    pub fn new_from_path(root: &str) -> Result<Self> {
        if !Path::new(root).is_dir() {
            return Err(Error::msg(format!(
                "Root directory for StaticDataStore ({root}) does not exist",
            )));
        }
        let mut store = Self::new();
        store.species = Self::read_table(root, Self::SPECIES_FILE)?;
        store.moves = Self::read_table(root, Self::MOVES_FILE)?;
        store.items = Self::read_table(root, Self::ITEMS_FILE)?;
        Ok(store)
    }

    fn read_table<T: DeserializeOwned>(root: &str, file: &str) -> Result<HashMap<String, T>> {
        serde_json::from_reader(
            File::open(Path::new(root).join(file)).context(format!("failed to read {file}"))?,
        )
        .context(format!("failed to parse {file}"))
    }

    /// All species names in the store, sorted.
    pub fn supported_species(&self) -> Vec<String> {
        let mut names = self.species.keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }

    /// All move names in the store, sorted.
    pub fn supported_moves(&self) -> Vec<String> {
        let mut names = self.moves.keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }
}

impl Default for StaticDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStore for StaticDataStore {
    fn get_species_by_name(&self, name: &str) -> Result<Option<SpeciesData>> {
        Ok(self.species.get(name).cloned())
    }

    fn get_move_by_name(&self, name: &str) -> Result<Option<MoveData>> {
        Ok(self.moves.get(name).cloned())
    }

    fn get_item_by_name(&self, name: &str) -> Result<Option<ItemData>> {
        Ok(self.items.get(name).cloned())
    }
}
