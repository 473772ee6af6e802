//! Particle arena, spawning and the tick driver.

use std::ops::Range;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::cell::Species;
use crate::config::{Brush, WorldConfig, DEFAULT_BATCH_SIZE, DEFAULT_EMPTY_FRACTION};
use crate::error::WorldError;
use crate::particle::Particle;
use crate::Grid;

/// Counters for one call to [`World::tick`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TickStats {
    pub moved: usize,
    pub expired: usize,
}

/// Owns every live particle and the occupancy grid they share.
///
/// Particles are updated in insertion order and in place: a particle later in
/// the pass sees the moves made earlier in the same tick. Expired particles
/// keep their cell until the pass ends, then are compacted out together.
#[derive(Debug)]
pub struct World {
    grid: Grid,
    particles: Vec<Particle>,
    brush: Brush,
    ticks_per_second: u32,
    destroy_delay_ticks: Option<u32>,
    rng: SmallRng,
    tick_count: u64,
}

impl World {
    /// Build a world with the default seed and a sand/gravity brush.
    pub fn new(
        width: i32,
        height: i32,
        ticks_per_second: u32,
        destroy_delay_seconds: f32,
    ) -> Result<Self, WorldError> {
        Self::from_config(
            WorldConfig::new(width, height)
                .with_ticks_per_second(ticks_per_second)
                .with_destroy_delay_seconds(destroy_delay_seconds),
        )
    }

    pub fn from_config(config: WorldConfig) -> Result<Self, WorldError> {
        config.validate()?;
        let destroy_delay_ticks = config.destroy_delay_ticks();
        debug!(
            width = config.width,
            height = config.height,
            ticks_per_second = config.ticks_per_second,
            ?destroy_delay_ticks,
            seed = config.seed,
            "creating world"
        );
        Ok(Self {
            grid: Grid::new(config.width as usize, config.height as usize),
            particles: Vec::new(),
            brush: config.brush,
            ticks_per_second: config.ticks_per_second,
            destroy_delay_ticks,
            rng: SmallRng::seed_from_u64(config.seed),
            tick_count: 0,
        })
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.grid.width as i32
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.grid.height as i32
    }

    #[must_use]
    pub fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }

    /// Lifetime given to newly spawned gravity particles.
    #[must_use]
    pub fn destroy_delay_ticks(&self) -> Option<u32> {
        self.destroy_delay_ticks
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.grid.in_bounds(x, y)
    }

    /// True when no live particle sits on `(x, y)`. Cells outside the grid are empty.
    #[must_use]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.grid.is_empty(x, y)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Positions of live particles in update order.
    pub fn iter_particles(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.particles.iter().map(Particle::position)
    }

    /// Place one particle with `brush` if the cell is in bounds and empty.
    pub fn spawn(&mut self, x: i32, y: i32, brush: Brush) -> bool {
        if !self.grid.in_bounds(x, y) || !self.grid.is_empty(x, y) {
            return false;
        }
        self.grid.set(x, y, brush.species);
        self.particles.push(Particle::new(
            x,
            y,
            brush.species,
            brush.motion,
            self.destroy_delay_ticks,
        ));
        true
    }

    /// Place one particle with the current brush.
    pub fn spawn_single(&mut self, x: i32, y: i32) -> bool {
        self.spawn(x, y, self.brush)
    }

    /// Scatter particles over a `size`-sided square centred on `(cx, cy)`.
    ///
    /// Each empty cell of the square, clipped to the grid, receives a particle
    /// with probability `1 - empty_fraction`. Returns how many were spawned.
    pub fn spawn_batch(&mut self, cx: i32, cy: i32, size: i32, empty_fraction: f64) -> usize {
        if size <= 0 {
            return 0;
        }
        let empty_fraction = empty_fraction.clamp(0.0, 1.0);
        let half = size / 2;
        let xs = clip(cx.saturating_sub(half), size, self.grid.width);
        let ys = clip(cy.saturating_sub(half), size, self.grid.height);

        let mut spawned = 0;
        for x in xs.clone() {
            for y in ys.clone() {
                if self.rng.random::<f64>() >= empty_fraction && self.spawn_single(x, y) {
                    spawned += 1;
                }
            }
        }
        debug!(cx, cy, size, ?xs, ?ys, spawned, "batch spawn");
        spawned
    }

    /// [`World::spawn_batch`] with a 20-cell square and 90% empty space.
    pub fn spawn_batch_default(&mut self, cx: i32, cy: i32) -> usize {
        self.spawn_batch(cx, cy, DEFAULT_BATCH_SIZE, DEFAULT_EMPTY_FRACTION)
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) -> TickStats {
        let mut stats = TickStats::default();
        for particle in &mut self.particles {
            if particle.step(&mut self.grid) {
                stats.moved += 1;
            }
        }

        let before = self.particles.len();
        let grid = &mut self.grid;
        self.particles.retain(|p| {
            if p.is_alive() {
                return true;
            }
            grid.set(p.x, p.y, Species::Empty);
            false
        });
        stats.expired = before - self.particles.len();
        self.tick_count += 1;

        trace!(
            tick = self.tick_count,
            moved = stats.moved,
            expired = stats.expired,
            live = self.particles.len(),
            "tick"
        );
        stats
    }
}

/// `[start, start + len)` intersected with `[0, extent)`.
fn clip(start: i32, len: i32, extent: usize) -> Range<i32> {
    let lo = start.max(0);
    let hi = start.saturating_add(len).min(extent as i32);
    lo..hi.max(lo)
}
