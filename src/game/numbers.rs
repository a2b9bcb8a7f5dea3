use std::fmt;

use log::{debug, warn};

use crate::engine::constants::NUMBER_COUNT;
use crate::game::errors::GameError;
use crate::game::pools::pool_multiplicity;

pub const TARGET_MIN: u64 = 101;
pub const TARGET_MAX: u64 = 999;

/// Six tiles that could have been drawn from the pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceNumbers {
    values: [u64; NUMBER_COUNT],
}

impl SourceNumbers {
    /// # Errors
    ///
    /// Returns an error if a value is in neither pool or appears more often
    /// than the pools hold it.
    pub fn new(values: [u64; NUMBER_COUNT]) -> Result<Self, GameError> {
        debug!("Validating tiles {:?}", values);

        for &value in &values {
            let available = pool_multiplicity(value);
            if available == 0 {
                warn!("Tile {} is not in either pool", value);
                return Err(GameError::NotInPool(value));
            }

            let count = values.iter().filter(|&&v| v == value).count();
            if count > available {
                warn!("Tile {} used {} times", value, count);
                return Err(GameError::PoolExhausted {
                    value,
                    count,
                    available,
                });
            }
        }

        Ok(Self { values })
    }

    /// # Errors
    ///
    /// Returns an error unless exactly six pool-legal values are given.
    pub fn from_slice(values: &[u64]) -> Result<Self, GameError> {
        let values: [u64; NUMBER_COUNT] = values
            .try_into()
            .map_err(|_| GameError::WrongNumberCount(values.len()))?;
        Self::new(values)
    }

    pub fn values(&self) -> &[u64; NUMBER_COUNT] {
        &self.values
    }
}

impl fmt::Display for SourceNumbers {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rendered: Vec<String> = self.values.iter().map(u64::to_string).collect();
        write!(f, "{}", rendered.join(" "))
    }
}

/// The number to reach, within `TARGET_MIN..=TARGET_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target(u64);

impl Target {
    /// # Errors
    ///
    /// Returns an error if the value is outside `101..=999`.
    pub fn new(value: i64) -> Result<Self, GameError> {
        match u64::try_from(value) {
            Ok(v) if (TARGET_MIN..=TARGET_MAX).contains(&v) => Ok(Self(v)),
            _ => {
                warn!("Target {} out of range", value);
                Err(GameError::TargetOutOfRange(value))
            }
        }
    }

    /// Wrap a value the sampler drew from the target range.
    pub(crate) fn from_drawn(value: u64) -> Self {
        Self(value.clamp(TARGET_MIN, TARGET_MAX))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
