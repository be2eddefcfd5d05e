//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! fullscreen = false
//! vsync = true
//! target_fps = 60
//!
//! [simulation]
//! island_radius = 13.0
//! move_speed = 5.0
//! character_radius = 0.3
//!
//! [camera]
//! height = 12.0
//! distance = 8.0
//! lerp = 0.05
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_ISLAND_RADIUS: f32 = 13.0;
const DEFAULT_MOVE_SPEED: f32 = 5.0;
const DEFAULT_CHARACTER_RADIUS: f32 = 0.3;
const DEFAULT_CAMERA_HEIGHT: f32 = 12.0;
const DEFAULT_CAMERA_DISTANCE: f32 = 8.0;
const DEFAULT_CAMERA_LERP: f32 = 0.05;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings plus the island and camera tuning values. On first
/// insertion into the ECS world, the [`apply_gameconfig_changes`] system
/// applies the window-level settings.
///
/// [`apply_gameconfig_changes`]: crate::systems::gameconfig::apply_gameconfig_changes
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Walkable island radius; the avatar centre never leaves this circle.
    pub island_radius: f32,
    /// Avatar speed in units per second.
    pub move_speed: f32,
    /// Avatar body radius used as clearance against obstacles.
    pub character_radius: f32,
    /// Camera height above the ground plane.
    pub camera_height: f32,
    /// Camera distance behind the avatar along +Z.
    pub camera_distance: f32,
    /// Per-frame fraction the camera moves toward its target.
    pub camera_lerp: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            island_radius: DEFAULT_ISLAND_RADIUS,
            move_speed: DEFAULT_MOVE_SPEED,
            character_radius: DEFAULT_CHARACTER_RADIUS,
            camera_height: DEFAULT_CAMERA_HEIGHT,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            camera_lerp: DEFAULT_CAMERA_LERP,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [simulation] section
        if let Some(radius) = config.getfloat("simulation", "island_radius").ok().flatten() {
            self.island_radius = radius as f32;
        }
        if let Some(speed) = config.getfloat("simulation", "move_speed").ok().flatten() {
            self.move_speed = speed as f32;
        }
        if let Some(radius) = config
            .getfloat("simulation", "character_radius")
            .ok()
            .flatten()
        {
            self.character_radius = radius as f32;
        }

        // [camera] section
        if let Some(height) = config.getfloat("camera", "height").ok().flatten() {
            self.camera_height = height as f32;
        }
        if let Some(distance) = config.getfloat("camera", "distance").ok().flatten() {
            self.camera_distance = distance as f32;
        }
        if let Some(lerp) = config.getfloat("camera", "lerp").ok().flatten() {
            self.camera_lerp = lerp as f32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, fullscreen={}, island_radius={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.fullscreen,
            self.island_radius
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        // [simulation] section
        config.set(
            "simulation",
            "island_radius",
            Some(self.island_radius.to_string()),
        );
        config.set("simulation", "move_speed", Some(self.move_speed.to_string()));
        config.set(
            "simulation",
            "character_radius",
            Some(self.character_radius.to_string()),
        );

        // [camera] section
        config.set("camera", "height", Some(self.camera_height.to_string()));
        config.set("camera", "distance", Some(self.camera_distance.to_string()));
        config.set("camera", "lerp", Some(self.camera_lerp.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
