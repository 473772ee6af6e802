//! World configuration, deserialisable from the driver's JSON settings.

use serde::{Deserialize, Serialize};

use crate::cell::Species;
use crate::error::WorldError;
use crate::particle::Motion;

pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;
pub const DEFAULT_DESTROY_DELAY_SECONDS: f32 = 4.0;
pub const DEFAULT_SEED: u64 = 0x5EED_5A9D;

/// Side of the square covered by one batch spawn.
pub const DEFAULT_BATCH_SIZE: i32 = 20;
/// Share of cells left empty by one batch spawn.
pub const DEFAULT_EMPTY_FRACTION: f64 = 0.9;

/// What spawn operations place on the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brush {
    pub species: Species,
    pub motion: Motion,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            species: Species::Sand,
            motion: Motion::Gravity,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldConfig {
    pub width: i32,
    pub height: i32,
    #[serde(default = "default_ticks_per_second")]
    pub ticks_per_second: u32,
    /// Non-positive or non-finite disables expiry.
    #[serde(default = "default_destroy_delay_seconds")]
    pub destroy_delay_seconds: f32,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub brush: Brush,
}

fn default_ticks_per_second() -> u32 {
    DEFAULT_TICKS_PER_SECOND
}

fn default_destroy_delay_seconds() -> f32 {
    DEFAULT_DESTROY_DELAY_SECONDS
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl WorldConfig {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            destroy_delay_seconds: DEFAULT_DESTROY_DELAY_SECONDS,
            seed: DEFAULT_SEED,
            brush: Brush::default(),
        }
    }

    #[must_use]
    pub fn with_ticks_per_second(mut self, ticks_per_second: u32) -> Self {
        self.ticks_per_second = ticks_per_second;
        self
    }

    #[must_use]
    pub fn with_destroy_delay_seconds(mut self, seconds: f32) -> Self {
        self.destroy_delay_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_brush(mut self, brush: Brush) -> Self {
        self.brush = brush;
        self
    }

    pub fn validate(&self) -> Result<(), WorldError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(WorldError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.ticks_per_second == 0 {
            return Err(WorldError::InvalidTickRate(self.ticks_per_second));
        }
        Ok(())
    }

    /// Lifetime in ticks given to gravity particles, at least one tick.
    #[must_use]
    pub fn destroy_delay_ticks(&self) -> Option<u32> {
        let seconds = self.destroy_delay_seconds;
        if !seconds.is_finite() || seconds <= 0.0 {
            return None;
        }
        let ticks = (f64::from(seconds) * f64::from(self.ticks_per_second)).round();
        Some((ticks.min(f64::from(u32::MAX)) as u32).max(1))
    }
}
