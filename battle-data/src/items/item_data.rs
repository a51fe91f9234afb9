use serde::{
    Deserialize,
    Serialize,
};

use crate::Type;

/// Data about a particular held item.
///
/// Items can affect stat calculations and move power calculations.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ItemData {
    /// Name of the item.
    pub name: String,
    /// Type of move boosted by holding this item.
    pub boost_type: Option<Type>,
    /// Type of incoming move resisted by holding this item.
    pub resist_type: Option<Type>,
    /// Generic power modifier applied by the item.
    #[serde(default = "default_power_modifier")]
    pub power_modifier: f64,
    /// Power of Fling when holding this item.
    #[serde(default)]
    pub fling_power: u32,
    /// Is the item consumed on use?
    #[serde(default)]
    pub is_consumable: bool,
}

fn default_power_modifier() -> f64 {
    1.0
}
