//! Ballistic rule: slide along a constant velocity vector until blocked.
//!
//! The path toward `(x + vx, y + vy)` is walked one cell at a time along the
//! major axis, interpolating the minor axis. The particle keeps advancing
//! while the next path cell is in bounds and empty, and stops on the last
//! reachable cell or on the destination.

use crate::api::ParticleApi;

/// Integer division rounding half away from zero. `d` must be positive.
fn round_div(n: i128, d: i128) -> i128 {
    if n >= 0 {
        (2 * n + d) / (2 * d)
    } else {
        -((-2 * n + d) / (2 * d))
    }
}

/// Offsets of every cell on the path, excluding the start.
///
/// Computed in wide integers so any `i32` velocity is safe; offsets beyond
/// `i32` saturate, which the walk treats as out of bounds.
pub fn path(vx: i32, vy: i32) -> impl Iterator<Item = (i32, i32)> {
    let steps = vx.unsigned_abs().max(vy.unsigned_abs());
    let (vx, vy, d) = (i128::from(vx), i128::from(vy), i128::from(steps));
    (1..=steps).map(move |i| {
        let i = i128::from(i);
        (
            saturate(round_div(vx * i, d)),
            saturate(round_div(vy * i, d)),
        )
    })
}

fn saturate(v: i128) -> i32 {
    v.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32
}

/// Returns true when the particle moved.
pub fn update_ballistic(api: &mut ParticleApi, vx: i32, vy: i32) -> bool {
    let mut reached = (0, 0);
    for (dx, dy) in path(vx, vy) {
        if !api.is_open(dx, dy) {
            break;
        }
        reached = (dx, dy);
    }
    if reached == (0, 0) {
        return false;
    }
    api.move_by(reached.0, reached.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Species;
    use crate::Grid;
    use proptest::prelude::*;

    fn step(grid: &mut Grid, x: i32, y: i32, vx: i32, vy: i32) -> (i32, i32) {
        grid.set(x, y, Species::Sand);
        let mut api = ParticleApi::new(grid, x, y, Species::Sand);
        update_ballistic(&mut api, vx, vy);
        (api.x, api.y)
    }

    #[test]
    fn round_div_rounds_half_away_from_zero() {
        assert_eq!(round_div(1, 2), 1);
        assert_eq!(round_div(-1, 2), -1);
        assert_eq!(round_div(4, 3), 1);
        assert_eq!(round_div(5, 3), 2);
        assert_eq!(round_div(-5, 3), -2);
    }

    #[test]
    fn path_follows_slope_along_x() {
        let cells: Vec<_> = path(4, 2).collect();
        assert_eq!(cells, vec![(1, 1), (2, 1), (3, 2), (4, 2)]);
    }

    #[test]
    fn path_degenerate_axes() {
        assert_eq!(path(0, 3).collect::<Vec<_>>(), vec![(0, 1), (0, 2), (0, 3)]);
        assert_eq!(path(-2, 0).collect::<Vec<_>>(), vec![(-1, 0), (-2, 0)]);
        assert_eq!(path(0, 0).count(), 0);
    }

    #[test]
    fn path_steep_slope_visits_every_row() {
        let cells: Vec<_> = path(1, 4).collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells.last(), Some(&(1, 4)));
        for (i, (_, dy)) in cells.iter().enumerate() {
            assert_eq!(*dy, i as i32 + 1);
        }
    }

    #[test]
    fn reaches_destination_when_clear() {
        let mut grid = Grid::new(20, 20);
        assert_eq!(step(&mut grid, 2, 2, 3, 3), (5, 5));
        assert!(grid.is_empty(2, 2));
    }

    #[test]
    fn stops_before_obstacle() {
        let mut grid = Grid::new(20, 20);
        grid.set(2, 6, Species::Salt);
        assert_eq!(step(&mut grid, 2, 2, 0, 5), (2, 5));
    }

    #[test]
    fn stops_at_edge() {
        let mut grid = Grid::new(10, 10);
        assert_eq!(step(&mut grid, 5, 7, 0, 5), (5, 9));
        assert_eq!(step(&mut grid, 8, 0, 4, 0), (9, 0));
    }

    #[test]
    fn blocked_first_cell_does_not_move() {
        let mut grid = Grid::new(10, 10);
        grid.set(4, 5, Species::Salt);
        assert_eq!(step(&mut grid, 4, 4, 0, 1), (4, 4));
        assert_eq!(grid.get(4, 4), Species::Sand);
    }

    #[test]
    fn extreme_velocities_stop_at_the_edge() {
        let mut grid = Grid::new(10, 10);
        assert_eq!(step(&mut grid, 2, 2, i32::MIN, 0), (0, 2));
        let mut grid = Grid::new(10, 10);
        assert_eq!(step(&mut grid, 2, 2, 1 << 30, 3), (9, 2));
        let mut grid = Grid::new(10, 10);
        assert_eq!(step(&mut grid, 2, 2, i32::MAX, i32::MIN), (4, 0));
        let mut grid = Grid::new(10, 10);
        assert_eq!(step(&mut grid, 4, 4, 0, i32::MAX), (4, 9));
    }

    #[test]
    fn path_offsets_saturate_instead_of_overflowing() {
        assert_eq!(path(i32::MIN, 0).next(), Some((-1, 0)));
        assert_eq!(path(i32::MAX, i32::MIN).next(), Some((1, -1)));
        assert_eq!(saturate(i128::MAX), i32::MAX);
        assert_eq!(saturate(i128::MIN), i32::MIN);
        let first = path(1 << 30, 3).next();
        assert_eq!(first, Some((1, 0)));
    }

    #[test]
    fn zero_velocity_never_moves() {
        let mut grid = Grid::new(10, 10);
        assert_eq!(step(&mut grid, 4, 4, 0, 0), (4, 4));
    }

    proptest! {
        #[test]
        fn prop_ballistic_never_enters_occupied_or_leaves_grid(
            x in 0i32..16,
            y in 0i32..16,
            vx in -8i32..8,
            vy in -8i32..8,
            blockers in proptest::collection::vec((0i32..16, 0i32..16), 0..30),
        ) {
            let mut grid = Grid::new(16, 16);
            for (bx, by) in &blockers {
                grid.set(*bx, *by, Species::Salt);
            }
            prop_assume!(grid.is_empty(x, y));
            let (nx, ny) = step(&mut grid, x, y, vx, vy);
            prop_assert!(grid.in_bounds(nx, ny));
            prop_assert!(!blockers.contains(&(nx, ny)) || (nx, ny) == (x, y));
            prop_assert_eq!(grid.get(nx, ny), Species::Sand);
        }
    }
}
