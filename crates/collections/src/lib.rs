//! String keyed hash table using open addressing with double hashing

pub mod hashmap;
pub mod primes;

mod macros;

pub use hashmap::{Entry, HashTable, HashTableConfig, HashTableError, ShrinkPolicy};
