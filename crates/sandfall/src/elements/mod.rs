//! Per-motion update functions dispatched from the tick loop.

mod ballistic;
mod gravity;
mod settle_test;

use crate::api::ParticleApi;
use crate::particle::Motion;

/// Dispatch to the movement rule for `motion`. Returns true when the particle moved.
pub fn update_particle(motion: Motion, api: &mut ParticleApi) -> bool {
    match motion {
        Motion::Gravity => gravity::update_gravity(api),
        Motion::Ballistic { vx, vy } => ballistic::update_ballistic(api, vx, vy),
    }
}
