//! Regression tests: poured grains come to rest in a stable pile.

#[cfg(test)]
mod tests {
    use crate::cell::Species;
    use crate::config::{Brush, WorldConfig};
    use crate::particle::Motion;
    use crate::World;

    /// Helper: print the grid for debugging.
    fn dump(world: &World) {
        let grid = world.grid();
        for y in 0..world.height() {
            let row: String = (0..world.width())
                .map(|x| match grid.get(x, y) {
                    Species::Empty => '.',
                    Species::Sand => 'S',
                    Species::Salt => '*',
                })
                .collect();
            eprintln!("y={y:2}: {row}");
        }
    }

    /// A grain is at rest when none of its three candidate moves apply.
    fn is_supported(world: &World, x: i32, y: i32) -> bool {
        if y == world.height() - 1 {
            return true;
        }
        (-1..=1).all(|dx| !world.in_bounds(x + dx, y + 1) || !world.is_empty(x + dx, y + 1))
    }

    fn pour(world: &mut World, x: i32, grains: usize, settle_ticks: usize) {
        for _ in 0..grains {
            world.spawn_single(x, 0);
            world.tick();
        }
        for _ in 0..settle_ticks {
            world.tick();
        }
    }

    #[test]
    fn poured_sand_forms_a_resting_pile() {
        let mut world = World::new(21, 20, 60, 0.0).unwrap();
        pour(&mut world, 10, 40, 200);

        eprintln!("\n--- Pile ---");
        dump(&world);

        assert_eq!(world.particle_count(), 40, "grains must be conserved");
        let stats = world.tick();
        assert_eq!(stats.moved, 0, "pile still moving");
        for (x, y) in world.iter_particles() {
            assert!(is_supported(&world, x, y), "grain at ({x}, {y}) is floating");
        }
    }

    #[test]
    fn pile_against_wall_stays_inside_grid() {
        let mut world = World::new(8, 12, 60, 0.0).unwrap();
        pour(&mut world, 0, 30, 200);

        dump(&world);

        assert_eq!(world.particle_count(), 30);
        assert_eq!(world.tick().moved, 0);
        for (x, y) in world.iter_particles() {
            assert!(world.in_bounds(x, y));
            assert!(is_supported(&world, x, y), "grain at ({x}, {y}) is floating");
        }
    }

    #[test]
    fn mixed_species_share_the_pile() {
        let mut world = World::new(15, 15, 60, 0.0).unwrap();
        for i in 0..30 {
            let species = if i % 2 == 0 { Species::Sand } else { Species::Salt };
            world.spawn(7, 0, Brush { species, motion: Motion::Gravity });
            world.tick();
        }
        for _ in 0..100 {
            world.tick();
        }
        let sand = world.particles().iter().filter(|p| p.species == Species::Sand).count();
        let salt = world.particles().iter().filter(|p| p.species == Species::Salt).count();
        assert_eq!((sand, salt), (15, 15));
        assert_eq!(world.tick().moved, 0);
    }

    #[test]
    fn batch_spawned_grains_all_expire_together() {
        let config = WorldConfig::new(50, 50)
            .with_ticks_per_second(10)
            .with_destroy_delay_seconds(2.0);
        let mut world = World::from_config(config).unwrap();
        let spawned = world.spawn_batch(25, 10, 20, 0.5);
        assert!(spawned > 0);

        for _ in 0..19 {
            world.tick();
        }
        assert_eq!(world.particle_count(), spawned);
        let stats = world.tick();
        assert_eq!(stats.expired, spawned);
        assert_eq!(world.grid().occupied(), 0);
    }
}
