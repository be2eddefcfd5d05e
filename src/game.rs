//! World setup.
//!
//! Spawns the avatar, lays out the camp and the scattered island props,
//! registers their obstacle circles and loads the station set. Everything
//! here runs once before the main loop.

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::character::Character;
use crate::components::decor::{Decor, DecorKind};
use crate::components::limbswing::LimbSwing;
use crate::components::worldposition::WorldPosition;
use crate::resources::camerafollow::CameraFollow;
use crate::resources::gameconfig::GameConfig;
use crate::resources::joystick::VirtualJoystick;
use crate::resources::obstacles::{Obstacle, ObstacleRegistry};
use crate::resources::stations::StationRegistry;

const STATIONS_PATH: &str = "./assets/stations.json";

const TREE_COUNT: usize = 10;
const ROCK_COUNT: usize = 15;
const GRASS_COUNT: usize = 80;

/// Keep-out distance around stations and the spawn point; props landing
/// closer than this stay visible but do not block movement.
const CLEAR_APPROACH: f32 = 2.5;

/// Build the island world: avatar, camp, scattered props and stations.
pub fn build_world(world: &mut World, config: &GameConfig) {
    world.spawn((
        WorldPosition::new(0.0, 0.0, 0.0),
        Character::new(),
        LimbSwing::default(),
    ));

    let stations = match StationRegistry::from_json_file(STATIONS_PATH) {
        Ok(registry) => registry,
        Err(e) => {
            warn!("{}; using built-in station layout", e);
            StationRegistry::island_default()
        }
    };

    let mut obstacles = ObstacleRegistry::default();
    let radius = config.island_radius;

    // Camp props sit by the spawn and always block movement.
    world.spawn((WorldPosition::new(-1.5, 0.0, 0.0), Decor::new(DecorKind::Tent)));
    obstacles.push(Obstacle::new(-1.5, 0.0, 0.8));
    world.spawn((
        WorldPosition::new(1.5, -0.05, -0.5),
        Decor::new(DecorKind::Bonfire),
    ));
    obstacles.push(Obstacle::new(1.5, -0.5, 0.7));

    let blocks_approach = |x: f32, z: f32| {
        let near_spawn = x * x + z * z < CLEAR_APPROACH * CLEAR_APPROACH;
        let near_station = stations.iter().any(|s| {
            let dx = x - s.x;
            let dz = z - s.z;
            dx * dx + dz * dz < CLEAR_APPROACH * CLEAR_APPROACH
        });
        near_spawn || near_station
    };

    for _ in 0..TREE_COUNT {
        let angle = fastrand::f32() * std::f32::consts::TAU;
        let dist = 3.0 + fastrand::f32() * (radius - 5.0);
        let (x, z) = (angle.sin() * dist, angle.cos() * dist);
        let scale = 0.8 + fastrand::f32() * 0.5;
        world.spawn((
            WorldPosition::new(x, 0.0, z),
            Decor::new(DecorKind::Tree)
                .with_scale(scale)
                .with_spin(fastrand::f32() * std::f32::consts::TAU),
        ));
        if !blocks_approach(x, z) {
            obstacles.push(Obstacle::new(x, z, 0.3 * scale));
        }
    }

    for _ in 0..ROCK_COUNT {
        let angle = fastrand::f32() * std::f32::consts::TAU;
        let dist = (radius - 3.0) + fastrand::f32() * 2.0;
        let (x, z) = (angle.sin() * dist, angle.cos() * dist);
        let scale = 0.6 + fastrand::f32() * 0.8;
        world.spawn((
            WorldPosition::new(x, 0.0, z),
            Decor::new(DecorKind::Rock)
                .with_scale(scale)
                .with_spin(fastrand::f32() * std::f32::consts::TAU),
        ));
        if !blocks_approach(x, z) {
            obstacles.push(Obstacle::new(x, z, 0.25 * scale));
        }
    }

    // Grass is pure decoration, no obstacle circles.
    for _ in 0..GRASS_COUNT {
        let angle = fastrand::f32() * std::f32::consts::TAU;
        let dist = fastrand::f32() * radius;
        world.spawn((
            WorldPosition::new(angle.sin() * dist, 0.0, angle.cos() * dist),
            Decor::new(DecorKind::GrassBlade).with_scale(0.7 + fastrand::f32() * 0.6),
        ));
    }

    world.insert_resource(obstacles);
    world.insert_resource(stations);
    world.insert_resource(CameraFollow::new(
        config.camera_height,
        config.camera_distance,
        config.camera_lerp,
    ));
    world.insert_resource(VirtualJoystick::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_world_spawns_avatar_and_props() {
        let mut world = World::new();
        let config = GameConfig::default();
        build_world(&mut world, &config);

        let mut characters = world.query::<(&Character, &WorldPosition)>();
        let (_, position) = characters.single(&world).unwrap();
        assert_eq!(position.pos.x, 0.0);
        assert_eq!(position.pos.z, 0.0);

        let mut props = world.query::<&Decor>();
        let count = props.iter(&world).count();
        assert_eq!(count, 2 + TREE_COUNT + ROCK_COUNT + GRASS_COUNT);

        let obstacles = world.resource::<ObstacleRegistry>();
        // Camp props always register; scattered ones may be skipped.
        assert!(obstacles.len() >= 2);
        assert!(!world.resource::<StationRegistry>().is_empty());

        // The walk clip is owned by startup model loading, not world build.
        assert!(world
            .get_resource::<crate::resources::walkclip::WalkClip>()
            .is_none());
    }

    #[test]
    fn scattered_props_stay_on_the_island() {
        let mut world = World::new();
        let config = GameConfig::default();
        build_world(&mut world, &config);

        let mut props = world.query::<(&WorldPosition, &Decor)>();
        for (position, _) in props.iter(&world) {
            let dist = (position.pos.x * position.pos.x + position.pos.z * position.pos.z).sqrt();
            assert!(dist <= config.island_radius + 1e-3);
        }
    }

    #[test]
    fn spawn_point_is_clear_of_obstacles() {
        let mut world = World::new();
        let config = GameConfig::default();
        build_world(&mut world, &config);
        let obstacles = world.resource::<ObstacleRegistry>();
        assert!(!obstacles.collides(0.0, 0.0, config.character_radius));
    }
}
