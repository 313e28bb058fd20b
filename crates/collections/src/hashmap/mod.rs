use std::collections::TryReserveError;

use thiserror::Error;

mod config;
mod hash_table;
mod probe;
mod slot;

pub use config::{
    ConfigError, DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR, DEFAULT_PRIMARY_MULTIPLIER,
    DEFAULT_SECONDARY_MULTIPLIER, HashTableConfig, MAX_LOAD, MIN_LOAD, ShrinkPolicy,
};
pub use hash_table::{Dump, HashTable, Iter, TableInfo};
pub use slot::Entry;

#[derive(Error, Debug)]
pub enum HashTableError {
    #[error("Couldnt allocate {capacity} slots: {source}")]
    Allocation {
        capacity: usize,
        source: TryReserveError,
    },
    #[error("Growing a table of {capacity} slots overflows usize")]
    CapacityOverflow { capacity: usize },
    /// Every probed slot was occupied by another key
    #[error("No free slot left after probing all {capacity} slots")]
    TableFull { capacity: usize },
    #[error("Invalid table config: {0}")]
    Config(#[from] ConfigError),
}
