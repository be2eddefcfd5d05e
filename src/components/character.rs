//! Player avatar component.
//!
//! [`Character`] marks the controllable entity and carries the pose state
//! that is not a raw position: the heading (yaw, radians) and whether the
//! avatar moved this frame. Both are written only by
//! [`character_controller`](crate::systems::character::character_controller);
//! the render and animation systems read them.

use bevy_ecs::prelude::Component;

/// Controllable avatar state.
#[derive(Component, Clone, Copy, Debug)]
pub struct Character {
    /// Yaw in radians; 0 faces +Z, wrapped to (-PI, PI].
    pub heading: f32,
    /// True when the movement intent was nonzero this frame.
    pub moving: bool,
}

impl Default for Character {
    fn default() -> Self {
        Self::new()
    }
}

impl Character {
    pub fn new() -> Self {
        Self {
            heading: 0.0,
            moving: false,
        }
    }
}
