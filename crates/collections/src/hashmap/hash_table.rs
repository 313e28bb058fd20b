use std::fmt;

use log::{debug, trace};

use super::HashTableError;
use super::config::{DEFAULT_CAPACITY, HashTableConfig, MAX_LOAD, MIN_LOAD, ShrinkPolicy};
use super::probe::Probe;
use super::slot::{Entry, Slot};
use crate::{entry, primes::next_prime};

/// String to string map using open addressing with double hashing
///
/// The capacity is always prime, which together with a step in
/// `1..capacity` makes every probe sequence cover the whole table.
#[derive(Debug)]
pub struct HashTable {
    slots: Vec<Slot>,
    size: usize,
    tombstones: usize,
    config: HashTableConfig,
}

#[derive(Debug)]
pub struct Iter<'a> {
    slots: std::slice::Iter<'a, Slot>,
    remaining: usize,
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HashTable {
    /// Creates an empty table with the default config (53 slots)
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty table with at least `cap` slots,
    /// rounded up to the next prime
    ///
    /// # Panics
    ///
    /// Panics if no prime `>= cap` fits in a `usize`
    pub fn with_capacity(cap: usize) -> Self {
        let Some(cap) = next_prime(cap) else {
            panic!("capacity overflow: no prime >= {cap}");
        };
        Self {
            slots: (0..cap).map(|_| Slot::Empty).collect(),
            size: 0,
            tombstones: 0,
            config: HashTableConfig::default().with_initial_capacity(cap),
        }
    }

    pub fn with_config(config: HashTableConfig) -> Result<Self, HashTableError> {
        config.validate()?;
        let cap = next_prime(config.initial_capacity).ok_or(HashTableError::CapacityOverflow {
            capacity: config.initial_capacity,
        })?;
        let slots = Self::alloc_slots(cap)?;

        Ok(Self {
            slots,
            size: 0,
            tombstones: 0,
            config,
        })
    }

    /// Returns the number of entries in the table
    pub fn len(&self) -> usize {
        self.size
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of slots left behind by removals
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    pub fn load_factor(&self) -> f32 {
        self.size as f32 / self.capacity() as f32
    }

    pub fn config(&self) -> &HashTableConfig {
        &self.config
    }

    /// Inserts a key-value pair, returning the previous value (if there was any)
    ///
    /// # Panics
    ///
    /// Panics if the table has to grow and the allocation fails,
    /// the same way `Vec` does. See [`HashTable::try_insert`].
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
        match self.try_insert(key, value) {
            Ok(old) => old,
            Err(e) => panic!("HashTable::insert failed: {e}"),
        }
    }

    /// Same as [`HashTable::insert`] but reports a failed resize instead of panicking.
    /// On error the table is left as it was.
    pub fn try_insert<K: Into<String>, V: Into<String>>(
        &mut self,
        key: K,
        value: V,
    ) -> Result<Option<String>, HashTableError> {
        self.try_resize()?;

        let entry = entry!(key, value);
        let i = self
            .insertion_index(&entry.key)
            .ok_or(HashTableError::TableFull {
                capacity: self.capacity(),
            })?;

        match &mut self.slots[i] {
            Slot::Occupied(e) => {
                trace!(target: "insert", "update {:?} at {}", e.key, i);
                Ok(Some(std::mem::replace(&mut e.value, entry.value)))
            }
            slot => {
                if *slot == Slot::Tombstone {
                    self.tombstones -= 1;
                }
                trace!(target: "insert", "new {:?} at {}", entry.key, i);
                *slot = Slot::Occupied(entry);
                self.size += 1;

                Ok(None)
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.find_index(key)
            .and_then(|i| self.slots[i].entry())
            .map(Entry::value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_index(key).is_some()
    }

    /// Removes `key`, returning whether it was present
    pub fn remove(&mut self, key: &str) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes `key` and hands its entry back
    pub fn remove_entry(&mut self, key: &str) -> Option<Entry> {
        let i = self.find_index(key)?;
        let entry = self.slots[i].bury()?;
        self.size -= 1;
        self.tombstones += 1;
        trace!(target: "remove", "{:?} at {}", key, i);

        Some(entry)
    }

    /// Drops every entry, keeping the capacity
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = Slot::Empty);
        self.size = 0;
        self.tombstones = 0;
    }

    /// Drops the table with all of its entries
    pub fn destroy(self) {
        debug!(target: "destroy", "releasing {} entries, {} slots", self.size, self.capacity());
    }

    // [diagnostics]

    pub fn info(&self) -> TableInfo {
        TableInfo {
            capacity: self.capacity(),
            size: self.size,
            tombstones: self.tombstones,
        }
    }

    pub fn dump(&self) -> Dump<'_> {
        Dump(self)
    }

    // [adapters]

    /// Iterates over the entries in slot order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.size,
        }
    }

    // [private]

    fn probe(&self, key: &str) -> Probe {
        Probe::new(key, &self.config, self.capacity())
    }

    /// Index of the slot holding `key`
    ///
    /// Tombstones are skipped, the first empty slot ends the search.
    fn find_index(&self, key: &str) -> Option<usize> {
        self.probe(key)
            .take_while(|&i| self.slots[i] != Slot::Empty)
            .find(|&i| self.slots[i].entry().is_some_and(|e| e.key == key))
    }

    /// Index where `key` should be written: its own slot if present,
    /// otherwise the first tombstone on its path or the empty slot ending it
    fn insertion_index(&self, key: &str) -> Option<usize> {
        let mut first_tombstone = None;
        for i in self.probe(key) {
            match &self.slots[i] {
                Slot::Occupied(e) if e.key == key => return Some(i),
                Slot::Occupied(_) => {}
                Slot::Tombstone => {
                    first_tombstone.get_or_insert(i);
                }
                Slot::Empty => return Some(first_tombstone.unwrap_or(i)),
            }
        }

        first_tombstone
    }

    /// Checks the load and grows, purges or shrinks the table
    ///
    /// Tombstones count towards the growth trigger. When they make up
    /// most of it the table is rehashed at the same capacity instead.
    fn try_resize(&mut self) -> Result<(), HashTableError> {
        let cap = self.capacity();
        let occupancy = (self.size + self.tombstones) as f32 / cap as f32;
        let load = self.load_factor();

        if occupancy > MAX_LOAD {
            if load > MAX_LOAD / 2.0 {
                let new_cap = self.grown_capacity()?;
                self.rehash(new_cap)
            } else {
                self.rehash(cap)
            }
        } else if load < MIN_LOAD && self.config.shrink == ShrinkPolicy::Rehash {
            // a prime below `cap` always exists here, `cap` itself is the fallback
            let new_cap = next_prime(self.config.initial_capacity.max(cap / 2)).unwrap_or(cap);
            if new_cap < cap {
                self.rehash(new_cap)
            } else {
                Ok(())
            }
        } else {
            Ok(())
        }
    }

    /// `next_prime(capacity + growth_factor * capacity)`, growing by at least one slot
    fn grown_capacity(&self) -> Result<usize, HashTableError> {
        let cap = self.capacity();
        let increase = ((cap as f64 * self.config.growth_factor as f64) as usize).max(1);

        cap.checked_add(increase)
            .and_then(next_prime)
            .ok_or(HashTableError::CapacityOverflow { capacity: cap })
    }

    /// Moves every entry into a fresh array of `new_cap` slots,
    /// recomputing its position and dropping all tombstones
    ///
    /// `new_cap` must be prime. The new array is allocated before the old
    /// one is touched, so a failed allocation leaves the table intact.
    fn rehash(&mut self, new_cap: usize) -> Result<(), HashTableError> {
        if self.size > new_cap {
            return Err(HashTableError::TableFull { capacity: new_cap });
        }

        let mut slots = Self::alloc_slots(new_cap)?;
        let old_cap = self.capacity();
        let purged = self.tombstones;

        for slot in std::mem::take(&mut self.slots) {
            let Slot::Occupied(entry) = slot else {
                continue;
            };
            let Some(i) = Probe::new(&entry.key, &self.config, new_cap)
                .find(|&i| slots[i] == Slot::Empty)
            else {
                unreachable!("probe covers all {new_cap} slots and size <= capacity");
            };
            slots[i] = Slot::Occupied(entry);
        }

        self.slots = slots;
        self.tombstones = 0;
        debug!(
            target: "resize",
            "capacity {} -> {}, size: {}, purged {} tombstones",
            old_cap, new_cap, self.size, purged
        );

        Ok(())
    }

    fn alloc_slots(cap: usize) -> Result<Vec<Slot>, HashTableError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(cap)
            .map_err(|source| HashTableError::Allocation {
                capacity: cap,
                source,
            })?;
        slots.resize_with(cap, Slot::default);

        Ok(slots)
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.slots.find_map(Slot::entry)?;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> IntoIterator for &'a HashTable {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Capacity, size and load of a table at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableInfo {
    pub capacity: usize,
    pub size: usize,
    pub tombstones: usize,
}

impl TableInfo {
    pub fn load_percent(&self) -> f32 {
        (self.size as f32 / self.capacity as f32) * 100.0
    }
}

impl fmt::Display for TableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Capacity {}, size: {}, {:.3}%",
            self.capacity,
            self.size,
            self.load_percent()
        )
    }
}

/// Every occupied slot with its index, framed by the table info
pub struct Dump<'a>(&'a HashTable);

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================")?;
        writeln!(f, "{}", self.0.info())?;
        for (i, slot) in self.0.slots.iter().enumerate() {
            if let Some(e) = slot.entry() {
                writeln!(f, "    at {} => '{}': '{}',", i, e.key, e.value)?;
            }
        }
        writeln!(f, "================")
    }
}
