//! Simulation tick integration tests for movement, boundary, stations, and camera.

use std::sync::{Arc, Mutex};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use islewalk::components::character::Character;
use islewalk::components::limbswing::LimbSwing;
use islewalk::components::worldposition::WorldPosition;
use islewalk::events::station::{InteractionEvent, StationEnterEvent, StationExitEvent};
use islewalk::resources::camerafollow::CameraFollow;
use islewalk::resources::gameconfig::GameConfig;
use islewalk::resources::input::InputState;
use islewalk::resources::obstacles::{Obstacle, ObstacleRegistry};
use islewalk::resources::stations::{StationDescriptor, StationKind, StationRegistry};
use islewalk::resources::worldtime::WorldTime;
use islewalk::systems::animation::walk_animation;
use islewalk::systems::camera::camera_follow;
use islewalk::systems::character::character_controller;
use islewalk::systems::labels::label_fade;
use islewalk::systems::stations::station_proximity;
use islewalk::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;
const FRAME: f32 = 1.0 / 60.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
    });
    world.insert_resource(GameConfig::default());
    world.insert_resource(ObstacleRegistry::default());
    world.insert_resource(StationRegistry::island_default());
    world.insert_resource(InputState::default());
    world.insert_resource(CameraFollow::default());
    world.insert_resource(islewalk::resources::walkclip::WalkClip::default());
    world
}

fn spawn_avatar(world: &mut World, x: f32, z: f32) -> Entity {
    world
        .spawn((WorldPosition::new(x, 0.0, z), Character::new(), LimbSwing::default()))
        .id()
}

fn tick_controller(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(character_controller);
    schedule.run(world);
}

fn tick_stations(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(station_proximity);
    schedule.run(world);
}

fn tick_camera(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_follow);
    schedule.run(world);
}

fn tick_animation(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(walk_animation);
    schedule.run(world);
}

fn tick_labels(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(label_fade);
    schedule.run(world);
}

fn press_forward(world: &mut World) {
    world.resource_mut::<InputState>().forward.active = true;
}

#[test]
fn one_second_forward_covers_move_speed() {
    let mut world = make_world(FRAME);
    let avatar = spawn_avatar(&mut world, 0.0, 3.0);
    press_forward(&mut world);

    for _ in 0..60 {
        update_world_time(&mut world, FRAME);
        tick_controller(&mut world);
    }

    let pos = world.get::<WorldPosition>(avatar).unwrap();
    assert!((pos.pos.z - (3.0 - 5.0)).abs() < 1e-3);
    assert!(approx_eq(pos.pos.x, 0.0));
}

#[test]
fn avatar_never_leaves_the_island() {
    let mut world = make_world(FRAME);
    let avatar = spawn_avatar(&mut world, 0.0, 0.0);
    press_forward(&mut world);
    world.resource_mut::<InputState>().right.active = true;

    let radius = world.resource::<GameConfig>().island_radius;
    for _ in 0..600 {
        tick_controller(&mut world);
        let pos = world.get::<WorldPosition>(avatar).unwrap();
        let dist = (pos.pos.x * pos.pos.x + pos.pos.z * pos.pos.z).sqrt();
        assert!(dist <= radius + 1e-3);
    }

    // After ten seconds of pushing, the avatar rides the boundary.
    let pos = world.get::<WorldPosition>(avatar).unwrap();
    let dist = (pos.pos.x * pos.pos.x + pos.pos.z * pos.pos.z).sqrt();
    assert!((dist - radius).abs() < 1e-3);
}

#[test]
fn diagonal_is_no_faster_than_straight() {
    let mut world = make_world(FRAME);
    let avatar = spawn_avatar(&mut world, 0.0, 0.0);
    press_forward(&mut world);
    world.resource_mut::<InputState>().right.active = true;

    for _ in 0..60 {
        tick_controller(&mut world);
    }

    let pos = world.get::<WorldPosition>(avatar).unwrap();
    let dist = (pos.pos.x * pos.pos.x + pos.pos.z * pos.pos.z).sqrt();
    assert!((dist - 5.0).abs() < 1e-3);
}

#[test]
fn obstacle_blocks_the_whole_move() {
    let mut world = make_world(FRAME);
    let avatar = spawn_avatar(&mut world, 0.0, 3.0);
    world
        .resource_mut::<ObstacleRegistry>()
        .push(Obstacle::new(0.0, 1.0, 0.5));
    press_forward(&mut world);

    for _ in 0..120 {
        tick_controller(&mut world);
    }

    // Stops short of the circle plus the avatar's clearance.
    let pos = world.get::<WorldPosition>(avatar).unwrap();
    assert!(pos.pos.z >= 1.0 + 0.5 + 0.3 - EPSILON);
    // The heading keeps easing toward the blocked direction.
    let character = world.get::<Character>(avatar).unwrap();
    assert!((character.heading - std::f32::consts::PI).abs() < 1e-2);
}

#[test]
fn heading_turns_toward_travel_direction() {
    let mut world = make_world(FRAME);
    let avatar = spawn_avatar(&mut world, 0.0, 0.0);
    world.resource_mut::<InputState>().right.active = true;

    for _ in 0..60 {
        tick_controller(&mut world);
    }

    let character = world.get::<Character>(avatar).unwrap();
    assert!((character.heading - std::f32::consts::FRAC_PI_2).abs() < 1e-2);
    assert!(character.moving);
}

#[test]
fn heading_holds_still_at_rest() {
    let mut world = make_world(FRAME);
    let avatar = spawn_avatar(&mut world, 0.0, 0.0);
    {
        let mut character = world.get_mut::<Character>(avatar).unwrap();
        character.heading = 1.25;
    }

    for _ in 0..10 {
        tick_controller(&mut world);
    }

    let character = world.get::<Character>(avatar).unwrap();
    assert!(approx_eq(character.heading, 1.25));
    assert!(!character.moving);
}

#[test]
fn station_activates_on_crossing_its_circle() {
    let mut world = make_world(FRAME);
    // Info station sits at (0, -0.25) with radius 2.5.
    let avatar = spawn_avatar(&mut world, 0.0, -3.0);

    let entered = Arc::new(Mutex::new(Vec::new()));
    let seen = entered.clone();
    world.add_observer(move |trigger: On<StationEnterEvent>| {
        seen.lock().unwrap().push(trigger.event().index);
    });

    // 2.75 away: still outside the circle.
    tick_stations(&mut world);
    assert_eq!(world.resource::<StationRegistry>().active_index(), None);
    assert!(entered.lock().unwrap().is_empty());

    // Step inside: activation on the crossing frame.
    world.get_mut::<WorldPosition>(avatar).unwrap().pos.z = -2.0;
    tick_stations(&mut world);
    assert_eq!(world.resource::<StationRegistry>().active_index(), Some(0));
    assert_eq!(*entered.lock().unwrap(), vec![0]);

    // Still inside: no second enter event.
    tick_stations(&mut world);
    assert_eq!(*entered.lock().unwrap(), vec![0]);
}

#[test]
fn leaving_the_circle_deactivates() {
    let mut world = make_world(FRAME);
    let avatar = spawn_avatar(&mut world, 0.0, -1.0);

    let exited = Arc::new(Mutex::new(0usize));
    let seen = exited.clone();
    world.add_observer(move |_trigger: On<StationExitEvent>| {
        *seen.lock().unwrap() += 1;
    });

    tick_stations(&mut world);
    assert!(world.resource::<StationRegistry>().active_index().is_some());

    world.get_mut::<WorldPosition>(avatar).unwrap().pos.z = -6.0;
    tick_stations(&mut world);
    assert_eq!(world.resource::<StationRegistry>().active_index(), None);
    assert_eq!(*exited.lock().unwrap(), 1);
}

#[test]
fn overlapping_circles_prefer_the_later_station() {
    let mut world = make_world(FRAME);
    let station = |kind, x: f32| StationDescriptor {
        kind,
        title: String::new(),
        icon: String::new(),
        blurb: String::new(),
        x,
        z: 0.0,
        activation_radius: 2.5,
    };
    world.insert_resource(StationRegistry::new(vec![
        station(StationKind::Work, 0.0),
        station(StationKind::About, 3.0),
    ]));
    spawn_avatar(&mut world, 1.5, 0.0);

    tick_stations(&mut world);
    let registry = world.resource::<StationRegistry>();
    assert_eq!(registry.active_index(), Some(1));
    assert_eq!(registry.active().unwrap().kind, StationKind::About);
}

#[test]
fn interact_fires_once_per_press() {
    let mut world = make_world(FRAME);
    spawn_avatar(&mut world, 0.0, -1.0);

    let interactions = Arc::new(Mutex::new(Vec::new()));
    let seen = interactions.clone();
    world.add_observer(move |trigger: On<InteractionEvent>| {
        seen.lock().unwrap().push(trigger.event().kind);
    });

    tick_stations(&mut world); // activate the info station
    world.resource_mut::<InputState>().interact.just_pressed = true;
    tick_stations(&mut world);
    assert_eq!(*interactions.lock().unwrap(), vec![StationKind::Info]);

    // Edge was consumed; holding the key adds nothing.
    tick_stations(&mut world);
    assert_eq!(interactions.lock().unwrap().len(), 1);
    assert!(!world.resource::<InputState>().interact.just_pressed);
}

#[test]
fn interact_away_from_stations_is_ignored() {
    let mut world = make_world(FRAME);
    spawn_avatar(&mut world, 6.0, -6.0);

    let fired = Arc::new(Mutex::new(false));
    let seen = fired.clone();
    world.add_observer(move |_trigger: On<InteractionEvent>| {
        *seen.lock().unwrap() = true;
    });

    world.resource_mut::<InputState>().interact.just_pressed = true;
    tick_stations(&mut world);
    assert!(!*fired.lock().unwrap());
    // The edge is still consumed so it cannot fire later.
    assert!(!world.resource::<InputState>().interact.just_pressed);
}

#[test]
fn active_label_fades_in_over_time() {
    let mut world = make_world(FRAME);
    spawn_avatar(&mut world, 0.0, -1.0);

    tick_stations(&mut world);
    assert_eq!(world.resource::<StationRegistry>().label_opacity(0), 0.0);

    // Half the 0.4 second fade-in.
    for _ in 0..12 {
        tick_labels(&mut world);
    }
    let half = world.resource::<StationRegistry>().label_opacity(0);
    assert!(half > 0.4 && half < 0.6);

    for _ in 0..20 {
        tick_labels(&mut world);
    }
    assert!(approx_eq(
        world.resource::<StationRegistry>().label_opacity(0),
        1.0
    ));
}

#[test]
fn camera_eases_toward_the_avatar() {
    let mut world = make_world(FRAME);
    spawn_avatar(&mut world, 4.0, 0.0);

    tick_camera(&mut world);
    let camera = world.resource::<CameraFollow>();
    // One frame covers 5% of the gap on each axis.
    assert!(approx_eq(camera.position.x, 0.2));
    assert!(approx_eq(camera.position.y, 12.0));
    assert!(approx_eq(camera.position.z, 9.9));
    assert!(approx_eq(camera.look_at.x, 4.0));
    assert!(approx_eq(camera.look_at.y, 0.5));

    // The camera closes most of the gap within a few seconds.
    for _ in 0..300 {
        tick_camera(&mut world);
    }
    let camera = world.resource::<CameraFollow>();
    assert!((camera.position.x - 4.0).abs() < 0.01);
    assert!((camera.position.z - 8.0).abs() < 0.01);
}

#[test]
fn walk_cycle_returns_to_rest() {
    let mut world = make_world(FRAME);
    let avatar = spawn_avatar(&mut world, 0.0, 3.0);
    press_forward(&mut world);

    for _ in 0..10 {
        tick_controller(&mut world);
        tick_animation(&mut world);
    }
    let swing = world.get::<LimbSwing>(avatar).unwrap();
    assert!(swing.leg.abs() > 0.0);

    world.resource_mut::<InputState>().forward.active = false;
    tick_controller(&mut world);
    tick_animation(&mut world);

    let swing = world.get::<LimbSwing>(avatar).unwrap();
    let pos = world.get::<WorldPosition>(avatar).unwrap();
    assert_eq!(swing.leg, 0.0);
    assert_eq!(swing.arm, 0.0);
    assert_eq!(pos.pos.y, 0.0);
}
