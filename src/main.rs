//! Islewalk main entry point.
//!
//! An interactive 3D island scene built with:
//! - **raylib** for windowing and graphics
//! - **bevy_ecs** for entity-component-system architecture
//!
//! The avatar walks a circular island dotted with content stations; walking
//! into a station's activation circle raises its floating label, and the
//! interact key opens the matching content panel.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world and resources
//! 2. Build the island: avatar, camp, scattered props, stations
//! 3. Register observers and systems
//! 4. Run the main loop:
//!    - Update input, movement, animation, station proximity, camera
//!    - Render the island and the overlay layer
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::events::input::back_action_observer;
use crate::events::station::{open_panel_observer, station_enter_observer, station_exit_observer};
use crate::events::switchdebug::switch_debug_observer;
use crate::events::switchfullscreen::switch_fullscreen_observer;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::modelstore::ModelStore;
use crate::resources::stations::StationRegistry;
use crate::resources::walkclip::WalkClip;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::walk_animation;
use crate::systems::camera::camera_follow;
use crate::systems::character::character_controller;
use crate::systems::gameconfig::apply_gameconfig_changes;
use crate::systems::input::update_input_state;
use crate::systems::joystick::virtual_joystick;
use crate::systems::labels::label_fade;
use crate::systems::render::render_system;
use crate::systems::stations::station_proximity;
use crate::systems::time::update_world_time;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

const CHARACTER_MODEL_PATH: &str = "./assets/models/character.glb";

/// Islewalk
#[derive(Parser)]
#[command(version, about = "A walkable island scene with interactive stations")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start in fullscreen mode, overriding the config file.
    #[arg(long)]
    fullscreen: bool,

    /// Print the station set as JSON and exit.
    #[arg(long)]
    dump_stations: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: dump the station layout and quit (no window needed)
    if cli.dump_stations {
        let registry = StationRegistry::from_json_file("./assets/stations.json")
            .unwrap_or_else(|_| StationRegistry::island_default());
        let stations: Vec<_> = registry.iter().collect();
        match serde_json::to_string_pretty(&stations) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing stations: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    // --------------- Raylib window ---------------
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    if cli.fullscreen {
        config.fullscreen = true;
    }

    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Islewalk")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit; ESC closes panels instead
    rl.set_exit_key(None);

    // --------------- Character model ---------------
    let mut models = ModelStore::empty();
    let mut clip = WalkClip::default();
    match rl.load_model(&thread, CHARACTER_MODEL_PATH) {
        Ok(model) => {
            models.character = Some(model);
            match rl.load_model_animations(&thread, CHARACTER_MODEL_PATH) {
                Ok(animations) if !animations.is_empty() => {
                    clip.available = true;
                    clip.frame_count = animations[0].frameCount;
                    models.animations = animations;
                }
                _ => log::info!("Character model has no animations; using procedural walk"),
            }
        }
        Err(_) => log::info!("No character model found; using placeholder rig"),
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(WindowSize::new(
        rl.get_screen_width(),
        rl.get_screen_height(),
    ));

    game::build_world(&mut world, &config);
    world.insert_resource(clip);
    world.insert_resource(config);
    world.insert_non_send_resource(models);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.add_observer(switch_debug_observer);
    world.add_observer(switch_fullscreen_observer);
    world.add_observer(back_action_observer);
    world.add_observer(station_enter_observer);
    world.add_observer(station_exit_observer);
    world.add_observer(open_panel_observer);
    // Ensure observers are registered before any system triggers events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(apply_gameconfig_changes); // Must run early to apply config before other systems
    update.add_systems(update_input_state.after(apply_gameconfig_changes));
    update.add_systems(virtual_joystick.after(update_input_state));
    update.add_systems(character_controller.after(virtual_joystick));
    update.add_systems(walk_animation.after(character_controller));
    update.add_systems(station_proximity.after(character_controller));
    update.add_systems(label_fade.after(station_proximity));
    update.add_systems(camera_follow.after(character_controller));
    update.add_systems(
        render_system
            .after(walk_animation)
            .after(label_fade)
            .after(camera_follow),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().has_flag("quit_game")
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }
}
