//! Game configuration change detection system.
//!
//! Monitors [`GameConfig`] for changes and applies the window-level settings
//! to the running game: target FPS, vsync, and fullscreen via the toggle
//! event when the config disagrees with the window state.
//!
//! [`GameConfig`]: crate::resources::gameconfig::GameConfig

use bevy_ecs::prelude::*;
use log::info;
use raylib::ffi;

use crate::events::switchfullscreen::SwitchFullScreenEvent;
use crate::resources::fullscreen::FullScreen;
use crate::resources::gameconfig::GameConfig;

pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    fullscreen: Option<Res<FullScreen>>,
    mut commands: Commands,
) {
    let Some(config) = maybe_config else {
        return;
    };

    if config.is_changed() || config.is_added() {
        // Synchronize fullscreen state between config and window
        let is_fullscreen = fullscreen.is_some();
        if config.fullscreen != is_fullscreen {
            info!(
                "Fullscreen mismatch: config={}, window={} - triggering toggle",
                config.fullscreen, is_fullscreen
            );
            commands.trigger(SwitchFullScreenEvent {});
        }

        // Apply vsync setting
        unsafe {
            if config.vsync {
                ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            } else {
                ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            }
        }

        // Apply target FPS
        rl.set_target_fps(config.target_fps);

        info!("GameConfig changes applied.");
    }
}
