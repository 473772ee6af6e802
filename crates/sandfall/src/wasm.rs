//! Browser-facing wrapper around [`World`].
//!
//! The driver owns the canvas and the input loop. It forwards pointer events
//! in pixel coordinates, calls `tick` once per frame and reads back either
//! particle positions or the species byte per cell for drawing.

use wasm_bindgen::prelude::*;

use crate::cell::Species;
use crate::config::{Brush, WorldConfig};
use crate::particle::Motion;
use crate::World;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    world: World,
    scale: i32,
}

#[wasm_bindgen]
impl Universe {
    /// `scale` is the number of screen pixels per cell along each axis.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: i32,
        height: i32,
        scale: i32,
        ticks_per_second: u32,
        destroy_delay_seconds: f32,
    ) -> Result<Universe, JsError> {
        let world = World::new(width, height, ticks_per_second, destroy_delay_seconds)?;
        Ok(Self::wrap(world, scale))
    }

    /// Build from the driver's JSON settings (see [`WorldConfig`]).
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str, scale: i32) -> Result<Universe, JsError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        Ok(Self::wrap(World::from_config(config)?, scale))
    }

    pub fn tick(&mut self) -> usize {
        self.world.tick().moved
    }

    /// Click mode: scatter a default batch around the pointer.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, px: i32, py: i32) -> usize {
        let (x, y) = self.to_cell(px, py);
        self.world.spawn_batch_default(x, y)
    }

    /// Hold mode: drop a single grain under the pointer.
    #[wasm_bindgen(js_name = pointerHeld)]
    pub fn pointer_held(&mut self, px: i32, py: i32) -> bool {
        let (x, y) = self.to_cell(px, py);
        self.world.spawn_single(x, y)
    }

    #[wasm_bindgen(js_name = useGravity)]
    pub fn use_gravity(&mut self) {
        self.set_motion(Motion::Gravity);
    }

    #[wasm_bindgen(js_name = useBallistic)]
    pub fn use_ballistic(&mut self, vx: i32, vy: i32) {
        self.set_motion(Motion::Ballistic { vx, vy });
    }

    /// Unknown or empty species leave the brush unchanged.
    #[wasm_bindgen(js_name = setSpecies)]
    pub fn set_species(&mut self, species: u8) -> bool {
        match Species::from_u8(species) {
            Some(species) if !species.is_empty() => {
                self.world.set_brush(Brush {
                    species,
                    ..self.world.brush()
                });
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.world.width()
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.world.height()
    }

    #[wasm_bindgen(js_name = particleCount)]
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.world.particle_count()
    }

    /// Flat `[x0, y0, x1, y1, ...]` in update order.
    #[must_use]
    pub fn positions(&self) -> Vec<i32> {
        self.world
            .iter_particles()
            .flat_map(|(x, y)| [x, y])
            .collect()
    }

    /// Row-major species bytes, one per cell.
    #[must_use]
    pub fn cells(&self) -> Vec<u8> {
        self.world.grid().cells.iter().map(|s| *s as u8).collect()
    }
}

impl Universe {
    fn wrap(world: World, scale: i32) -> Self {
        Self {
            world,
            scale: scale.max(1),
        }
    }

    fn to_cell(&self, px: i32, py: i32) -> (i32, i32) {
        (px.div_euclid(self.scale), py.div_euclid(self.scale))
    }

    fn set_motion(&mut self, motion: Motion) {
        self.world.set_brush(Brush {
            motion,
            ..self.world.brush()
        });
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }
}
