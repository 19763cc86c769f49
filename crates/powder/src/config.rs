//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Side length of the default square grid.
pub const DEFAULT_SIZE: usize = 5;

/// Static configuration for a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    /// Lifetime particle quota; `None` means one particle per cell.
    pub budget: Option<usize>,
    /// Optional RNG seed for reproducible worlds.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            budget: None,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Square grid of `size` × `size` with a fixed seed.
    #[must_use]
    pub fn seeded(size: usize, seed: u64) -> Self {
        Self {
            width: size,
            height: size,
            budget: None,
            seed: Some(seed),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidConfig("grid dimensions must be positive"));
        }
        // Coordinates are i32 so neighbour offsets can go negative.
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(ConfigError::InvalidConfig("grid dimensions must fit in i32"));
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::InvalidConfig("grid cell count overflows usize"));
        }
        Ok(())
    }

    /// Effective particle quota.
    #[must_use]
    pub fn budget(&self) -> usize {
        self.budget.unwrap_or(self.width * self.height)
    }
}
