//! Polynomial string hashing and the double hashing probe sequence

use super::config::HashTableConfig;

/// `(Σ a^(n-1-i) * c[i]) mod m` over the bytes of `key`
///
/// Evaluated with Horner's method, reducing at every step,
/// so long keys never overflow.
pub(crate) fn poly_hash(key: &str, multiplier: u64, modulus: usize) -> usize {
    debug_assert!(modulus > 0);
    let m = modulus as u128;
    let a = multiplier as u128 % m;

    key.bytes().fold(0u128, |h, c| (h * a + c as u128) % m) as usize
}

/// Slot indices visited for one key, attempt `0, 1, 2, ..`
///
/// `index(i) = (h1 + i * step) mod capacity`, where `h1` is the primary hash
/// and `step = h2 + 1` with the secondary hash taken mod `capacity - 1`.
/// The step is therefore in `1..capacity`, and for a prime capacity the
/// sequence is a permutation of all slots. It ends after `capacity` attempts.
#[derive(Debug, Clone)]
pub(crate) struct Probe {
    index: usize,
    step: usize,
    capacity: usize,
    remaining: usize,
}

impl Probe {
    pub(crate) fn new(key: &str, config: &HashTableConfig, capacity: usize) -> Self {
        debug_assert!(capacity >= 2);
        let (primary, secondary) = config.multipliers();

        Self {
            index: poly_hash(key, primary, capacity),
            step: poly_hash(key, secondary, capacity - 1) + 1,
            capacity,
            remaining: capacity,
        }
    }
}

impl Iterator for Probe {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.index;
        // both are below capacity, a single subtraction wraps
        self.index += self.step;
        if self.index >= self.capacity {
            self.index -= self.capacity;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Probe {}
