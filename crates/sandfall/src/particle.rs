//! Particle state and per-tick lifecycle.

use serde::{Deserialize, Serialize};

use crate::api::ParticleApi;
use crate::cell::Species;
use crate::elements;
use crate::Grid;

/// Movement rule a particle follows.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Motion {
    /// Fall one row per tick, sliding diagonally around obstacles.
    #[default]
    Gravity,
    /// Slide along a constant per-tick velocity until blocked. Never expires.
    Ballistic { vx: i32, vy: i32 },
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Lifecycle {
    #[default]
    Alive,
    /// Terminal. The world drops the particle at the end of the tick.
    Removed,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Particle {
    pub x: i32,
    pub y: i32,
    pub species: Species,
    pub motion: Motion,
    /// Ticks survived.
    pub age: u32,
    /// `None` never expires.
    pub max_age: Option<u32>,
    pub state: Lifecycle,
}

impl Particle {
    #[must_use]
    pub fn new(x: i32, y: i32, species: Species, motion: Motion, max_age: Option<u32>) -> Self {
        let max_age = match motion {
            Motion::Gravity => max_age,
            Motion::Ballistic { .. } => None,
        };
        Self {
            x,
            y,
            species,
            motion,
            age: 0,
            max_age,
            state: Lifecycle::Alive,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.state == Lifecycle::Alive
    }

    #[must_use]
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Move, then age, then check expiry. Returns true when the particle moved.
    ///
    /// The particle must currently be registered in `grid` at its position.
    pub fn step(&mut self, grid: &mut Grid) -> bool {
        if !self.is_alive() {
            return false;
        }
        let mut api = ParticleApi::new(grid, self.x, self.y, self.species);
        let moved = elements::update_particle(self.motion, &mut api);
        self.x = api.x;
        self.y = api.y;

        self.age = self.age.saturating_add(1);
        if self.max_age.is_some_and(|max| self.age >= max) {
            self.state = Lifecycle::Removed;
        }
        moved
    }
}
