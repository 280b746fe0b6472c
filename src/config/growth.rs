//! Amortized growth policy for [`DynArray`](crate::containers::DynArray).

use super::{Config, parse_env_var};
use crate::error::{DynSeqError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Capacity growth policy used when `push`/`insert` find the buffer full.
///
/// Growth starts at `initial_capacity`, doubles while the capacity is below
/// `growth_threshold`, then grows by `capacity / tail_growth_divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Capacity allocated by the first growth of an empty buffer
    pub initial_capacity: usize,
    /// Capacity at which doubling switches to fractional growth
    pub growth_threshold: usize,
    /// Divisor for fractional growth past the threshold
    pub tail_growth_divisor: usize,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 4,
            growth_threshold: 256,
            tail_growth_divisor: 4,
        }
    }
}

impl GrowthConfig {
    /// Capacity to grow to from `current`.
    ///
    /// Always strictly larger than `current` unless `current` is `usize::MAX`.
    #[inline]
    pub fn next_capacity(&self, current: usize) -> usize {
        if current == 0 {
            return self.initial_capacity.max(1);
        }

        if current < self.growth_threshold {
            return current.saturating_mul(2);
        }

        current.saturating_add((current / self.tail_growth_divisor).max(1))
    }
}

impl Config for GrowthConfig {
    fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(DynSeqError::configuration(
                "initial_capacity must be greater than 0",
            ));
        }
        if self.tail_growth_divisor == 0 {
            return Err(DynSeqError::configuration(
                "tail_growth_divisor must be greater than 0",
            ));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.initial_capacity = parse_env_var(
            &format!("{}GROWTH_INITIAL_CAPACITY", prefix),
            config.initial_capacity,
        );
        config.growth_threshold =
            parse_env_var(&format!("{}GROWTH_THRESHOLD", prefix), config.growth_threshold);
        config.tail_growth_divisor = parse_env_var(
            &format!("{}GROWTH_TAIL_DIVISOR", prefix),
            config.tail_growth_divisor,
        );
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            initial_capacity: 16,
            growth_threshold: 4096,
            tail_growth_divisor: 2,
        }
    }

    fn memory_preset() -> Self {
        Self {
            initial_capacity: 1,
            growth_threshold: 64,
            tail_growth_divisor: 8,
        }
    }

    fn realtime_preset() -> Self {
        Self {
            initial_capacity: 64,
            growth_threshold: 1024,
            tail_growth_divisor: 2,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            DynSeqError::configuration(format!("Failed to serialize growth config: {}", e))
        })?;
        std::fs::write(path, serialized).map_err(|e| {
            DynSeqError::configuration(format!("Failed to write growth config file: {}", e))
        })?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DynSeqError::configuration(format!("Failed to read growth config file: {}", e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            DynSeqError::configuration(format!("Failed to parse growth config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
