//! Camera follow system.
//!
//! Eases the camera toward a point above and behind the avatar, one fixed
//! fraction of the remaining distance per axis per frame, and aims slightly
//! above the avatar's feet. The trailing offset is fixed in world space, so
//! the island is always viewed from the same side.

use bevy_ecs::prelude::*;

use crate::components::character::Character;
use crate::components::worldposition::WorldPosition;
use crate::resources::camerafollow::CameraFollow;

pub fn camera_follow(
    query: Query<&WorldPosition, With<Character>>,
    mut camera: ResMut<CameraFollow>,
) {
    let Ok(position) = query.single() else {
        return;
    };

    let target_x = position.pos.x;
    let target_y = camera.target_height;
    let target_z = position.pos.z + camera.target_distance;

    let t = camera.lerp_factor;
    camera.position.x += (target_x - camera.position.x) * t;
    camera.position.y += (target_y - camera.position.y) * t;
    camera.position.z += (target_z - camera.position.z) * t;

    camera.look_at.x = position.pos.x;
    camera.look_at.y = position.pos.y + 0.5;
    camera.look_at.z = position.pos.z;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_five_percent_per_frame() {
        let mut world = World::new();
        world.insert_resource(CameraFollow::default());
        world.spawn((WorldPosition::new(4.0, 0.0, 0.0), Character::default()));
        let mut schedule = Schedule::default();
        schedule.add_systems(camera_follow);
        schedule.run(&mut world);

        let camera = world.resource::<CameraFollow>();
        // Start (0, 12, 10), target (4, 12, 8); one frame covers 5%.
        assert!((camera.position.x - 0.2).abs() < 1e-6);
        assert!((camera.position.y - 12.0).abs() < 1e-6);
        assert!((camera.position.z - 9.9).abs() < 1e-6);
        assert_eq!(camera.look_at.x, 4.0);
        assert_eq!(camera.look_at.y, 0.5);
        assert_eq!(camera.look_at.z, 0.0);
    }
}
