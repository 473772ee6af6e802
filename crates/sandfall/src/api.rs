//! Relative-offset API for particle movement rules.

use crate::cell::Species;
use crate::Grid;

/// View of the grid centred on one particle.
///
/// `move_by` keeps the occupancy table in sync with the particle position,
/// so later particles in the same tick observe the move.
#[derive(Debug)]
pub struct ParticleApi<'a> {
    pub grid: &'a mut Grid,
    pub x: i32,
    pub y: i32,
    pub species: Species,
}

impl<'a> ParticleApi<'a> {
    pub fn new(grid: &'a mut Grid, x: i32, y: i32, species: Species) -> Self {
        Self { grid, x, y, species }
    }

    #[must_use]
    pub fn is_empty(&self, dx: i32, dy: i32) -> bool {
        self.grid.is_empty(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    #[must_use]
    pub fn in_bounds(&self, dx: i32, dy: i32) -> bool {
        self.grid.in_bounds(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    #[must_use]
    pub fn within_floor(&self, dx: i32, dy: i32) -> bool {
        self.grid.within_floor(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// In bounds and unoccupied.
    #[must_use]
    pub fn is_open(&self, dx: i32, dy: i32) -> bool {
        self.in_bounds(dx, dy) && self.is_empty(dx, dy)
    }

    /// Relocate the particle. Returns false (and leaves everything untouched)
    /// when the target is out of bounds.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> bool {
        if !self.in_bounds(dx, dy) {
            return false;
        }
        if dx == 0 && dy == 0 {
            return true;
        }
        self.grid.set(self.x, self.y, Species::Empty);
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
        self.grid.set(self.x, self.y, self.species);
        true
    }
}
