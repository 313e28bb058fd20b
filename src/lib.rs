//! Driver exercising the double hashing [`HashTable`](collections::HashTable)
//! with randomly generated keys

pub mod config;
pub mod scenario;
pub mod words;

use collections::HashTableError;
use thiserror::Error;

pub use config::{DriverConfig, Scenario};
pub use scenario::run;

#[derive(Debug, Error)]
pub enum DriverError {
    /// Derived IO error
    #[error("Io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid word length range {min}..={max}, expected 1 <= min <= max")]
    InvalidWordLength { min: usize, max: usize },

    /// The table could not grow
    #[error("Table error: {0}")]
    Table(#[from] HashTableError),
}
