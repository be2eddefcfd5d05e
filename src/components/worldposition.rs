//! World-space position component.
//!
//! The simulation works on the island plane: `x`/`z` are the planar
//! coordinates and `y` is the ground-relative height (the walk bob for the
//! character, a fixed base offset for props). The render system converts to
//! raylib vectors at the boundary; nothing in the simulation depends on
//! raylib types.

use bevy_ecs::prelude::Component;

/// Plain 3D vector value type used throughout the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared distance on the island plane, ignoring `y`.
    pub fn distance_sq_xz(&self, x: f32, z: f32) -> f32 {
        let dx = self.x - x;
        let dz = self.z - z;
        dx * dx + dz * dz
    }
}

/// Position of an entity in world space.
#[derive(Component, Clone, Copy, Debug)]
pub struct WorldPosition {
    pub pos: Vec3,
}

impl WorldPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
        }
    }
}
