//! Gravity rule: fall straight down, else down-left, else down-right.
//!
//! A candidate cell `(x + dx, y + 1)` is taken only when it is empty and the
//! cell beneath it lies within the floor boundary. The lookahead keeps grains
//! from stepping into a column they could never leave.

use crate::api::ParticleApi;

/// Candidate columns in priority order. Left is checked before right.
const CANDIDATES: [i32; 3] = [0, -1, 1];

/// Returns true when the particle moved.
pub fn update_gravity(api: &mut ParticleApi) -> bool {
    for dx in CANDIDATES {
        if api.is_empty(dx, 1) && api.within_floor(dx, 2) {
            return api.move_by(dx, 1);
        }
    }
    false
}
