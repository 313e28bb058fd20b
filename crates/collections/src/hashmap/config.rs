use thiserror::Error;

use crate::primes::is_prime;

pub const DEFAULT_CAPACITY: usize = 53;
pub const DEFAULT_PRIMARY_MULTIPLIER: u64 = 151;
pub const DEFAULT_SECONDARY_MULTIPLIER: u64 = 163;
pub const DEFAULT_GROWTH_FACTOR: f32 = 0.7;

/// Load above which an insert grows (or purges) the table
pub const MAX_LOAD: f32 = 0.7;
/// Load below which an insert may shrink the table, see [`ShrinkPolicy`]
pub const MIN_LOAD: f32 = 0.1;

/// What happens when the load factor drops below [`MIN_LOAD`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShrinkPolicy {
    /// Capacity never shrinks
    #[default]
    Disabled,
    /// Halve the capacity (never below the initial one) and rehash
    Rehash,
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("initial capacity must be at least 2, got: {0}")]
    CapacityTooSmall(usize),
    #[error("hash multipliers must differ, both are {0}")]
    SameMultipliers(u64),
    #[error("hash multiplier {0} is not a prime above 128")]
    InvalidMultiplier(u64),
    #[error("growth factor must be a positive finite number, got: {0}")]
    InvalidGrowthFactor(f32),
}

/// Immutable configuration owned by a [`HashTable`](super::HashTable)
#[derive(Debug, Clone, PartialEq)]
pub struct HashTableConfig {
    pub(crate) initial_capacity: usize,
    pub(crate) primary_multiplier: u64,
    pub(crate) secondary_multiplier: u64,
    pub(crate) growth_factor: f32,
    pub(crate) shrink: ShrinkPolicy,
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            primary_multiplier: DEFAULT_PRIMARY_MULTIPLIER,
            secondary_multiplier: DEFAULT_SECONDARY_MULTIPLIER,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            shrink: ShrinkPolicy::Disabled,
        }
    }
}

impl HashTableConfig {
    pub fn with_initial_capacity(mut self, cap: usize) -> Self {
        self.initial_capacity = cap;
        self
    }

    /// Sets the multipliers of the primary and secondary hash functions
    pub fn with_multipliers(mut self, primary: u64, secondary: u64) -> Self {
        self.primary_multiplier = primary;
        self.secondary_multiplier = secondary;
        self
    }

    /// Growing adds `factor * capacity` slots, rounded up to a prime
    pub fn with_growth_factor(mut self, factor: f32) -> Self {
        self.growth_factor = factor;
        self
    }

    pub fn with_shrink_policy(mut self, shrink: ShrinkPolicy) -> Self {
        self.shrink = shrink;
        self
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn multipliers(&self) -> (u64, u64) {
        (self.primary_multiplier, self.secondary_multiplier)
    }

    pub fn shrink_policy(&self) -> ShrinkPolicy {
        self.shrink
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity < 2 {
            return Err(ConfigError::CapacityTooSmall(self.initial_capacity));
        }

        if self.primary_multiplier == self.secondary_multiplier {
            return Err(ConfigError::SameMultipliers(self.primary_multiplier));
        }

        for m in [self.primary_multiplier, self.secondary_multiplier] {
            let prime = usize::try_from(m)
                .ok()
                .is_some_and(|m| matches!(is_prime(m), Ok(true)));
            if m <= 128 || !prime {
                return Err(ConfigError::InvalidMultiplier(m));
            }
        }

        // written so NaN fails too
        if !(self.growth_factor.is_finite() && self.growth_factor > 0.0) {
            return Err(ConfigError::InvalidGrowthFactor(self.growth_factor));
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{ConfigError, HashTableConfig, ShrinkPolicy};

    #[test]
    fn default_is_valid() {
        let c = HashTableConfig::default();
        assert_eq!(c.validate(), Ok(()));
        assert_eq!(c.initial_capacity(), 53);
        assert_eq!(c.multipliers(), (151, 163));
        assert_eq!(c.shrink_policy(), ShrinkPolicy::Disabled);
    }

    #[test]
    fn rejects_bad_multipliers() {
        let c = HashTableConfig::default().with_multipliers(151, 151);
        assert_eq!(c.validate(), Err(ConfigError::SameMultipliers(151)));

        let c = HashTableConfig::default().with_multipliers(127, 163);
        assert_eq!(c.validate(), Err(ConfigError::InvalidMultiplier(127)));

        let c = HashTableConfig::default().with_multipliers(131, 150);
        assert_eq!(c.validate(), Err(ConfigError::InvalidMultiplier(150)));

        let c = HashTableConfig::default().with_multipliers(131, 137);
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_capacity_and_growth() {
        let c = HashTableConfig::default().with_initial_capacity(1);
        assert_eq!(c.validate(), Err(ConfigError::CapacityTooSmall(1)));

        let c = HashTableConfig::default().with_growth_factor(0.0);
        assert_eq!(c.validate(), Err(ConfigError::InvalidGrowthFactor(0.0)));

        let c = HashTableConfig::default().with_growth_factor(f32::INFINITY);
        assert!(matches!(c.validate(), Err(ConfigError::InvalidGrowthFactor(_))));

        let c = HashTableConfig::default().with_growth_factor(f32::NAN);
        assert!(matches!(c.validate(), Err(ConfigError::InvalidGrowthFactor(_))));
    }
}
