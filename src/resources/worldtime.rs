//! Simulation clock resource.
//!
//! One tick per rendered frame; `elapsed` is monotonic session time and
//! `delta` is the time since the previous tick, never negative. Written by
//! [`update_world_time`](crate::systems::time::update_world_time) before the
//! schedule runs.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    /// Seconds since simulation start.
    pub elapsed: f32,
    /// Seconds since the previous tick.
    pub delta: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let time = WorldTime::default();
        assert_eq!(time.elapsed, 0.0);
        assert_eq!(time.delta, 0.0);
    }
}
