//! Current window dimensions.
//!
//! Refreshed every frame at the bottom of the main loop so overlay layout
//! and the virtual joystick hit test track live resizes.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl WindowSize {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}
