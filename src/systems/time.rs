//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, before the schedule runs.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the frame delta in seconds; negative values are clamped to zero
/// so the clock never runs backwards.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let dt = dt.max(0.0);
    wt.elapsed += dt;
    wt.delta = dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_elapsed() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        update_world_time(&mut world, 0.016);
        update_world_time(&mut world, 0.02);
        let wt = world.resource::<WorldTime>();
        assert!((wt.elapsed - 0.036).abs() < 1e-6);
        assert!((wt.delta - 0.02).abs() < 1e-6);
    }

    #[test]
    fn negative_delta_is_clamped() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        update_world_time(&mut world, -0.5);
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.elapsed, 0.0);
        assert_eq!(wt.delta, 0.0);
    }
}
