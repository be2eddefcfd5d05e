//! Smoothed third-person camera state.
//!
//! Holds the camera's current position and look-at point; the
//! [`camera_follow`](crate::systems::camera::camera_follow) system eases both
//! toward their per-frame targets. The render system builds the raylib
//! `Camera3D` from this resource, so the simulation side stays free of
//! windowing types.

use bevy_ecs::prelude::Resource;

use crate::components::worldposition::Vec3;

#[derive(Resource, Clone, Copy, Debug)]
pub struct CameraFollow {
    /// Current eased camera position.
    pub position: Vec3,
    /// Current look-at point, slightly above the avatar.
    pub look_at: Vec3,
    /// Height the camera aims to hold above the ground plane.
    pub target_height: f32,
    /// Distance the camera aims to trail behind the avatar along +Z.
    pub target_distance: f32,
    /// Fraction of the remaining gap covered each frame, per axis.
    pub lerp_factor: f32,
}

impl CameraFollow {
    pub fn new(target_height: f32, target_distance: f32, lerp_factor: f32) -> Self {
        Self {
            position: Vec3::new(0.0, target_height, target_distance + 2.0),
            look_at: Vec3::ZERO,
            target_height,
            target_distance,
            lerp_factor,
        }
    }
}

impl Default for CameraFollow {
    fn default() -> Self {
        Self::new(12.0, 8.0, 0.05)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_above_and_behind_origin() {
        let camera = CameraFollow::default();
        assert_eq!(camera.position, Vec3::new(0.0, 12.0, 10.0));
        assert_eq!(camera.look_at, Vec3::ZERO);
    }
}
