mod gender;
mod nature;
mod species_data;
mod stat;
mod status;
mod r#type;

pub use gender::Gender;
pub use nature::Nature;
pub use species_data::SpeciesData;
pub use stat::{
    Stat,
    StatTable,
    StatTableEntries,
};
pub use status::Status;
pub use r#type::Type;
