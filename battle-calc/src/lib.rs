extern crate alloc;

pub mod common;
pub mod damage;
pub mod error;
pub(crate) mod hooks;
pub mod power;
pub mod state;
pub mod stats;
pub mod types;

#[cfg(test)]
pub(crate) mod test_util;
