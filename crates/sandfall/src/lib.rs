//! Falling sand cellular automaton engine.

pub mod api;
pub mod cell;
pub mod config;
pub mod elements;
pub mod error;
pub mod particle;
pub mod wasm;
pub mod world;

use cell::Species;

pub use config::{Brush, WorldConfig};
pub use error::WorldError;
pub use particle::{Lifecycle, Motion, Particle};
pub use wasm::Universe;
pub use world::{TickStats, World};

/// Direct-address occupancy table. Out-of-bounds reads return Empty, writes are no-ops.
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Species>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Species::Empty; width * height],
        }
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Grid plus the virtual floor row directly beneath it.
    #[must_use]
    pub fn within_floor(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) <= self.height
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Species {
        if self.in_bounds(x, y) {
            self.cells[self.index(x, y)]
        } else {
            Species::Empty
        }
    }

    pub fn set(&mut self, x: i32, y: i32, species: Species) {
        if self.in_bounds(x, y) {
            let i = self.index(x, y);
            self.cells[i] = species;
        }
    }

    #[must_use]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_empty()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|s| !s.is_empty()).count()
    }

    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }
}
