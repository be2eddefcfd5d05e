//! Debug overlay marker resource.
//!
//! Presence of [`DebugMode`] in the world enables the on-screen debug
//! overlay (FPS, avatar position and heading, nearest station). Toggled by
//! the [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent)
//! observer inserting or removing the resource.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct DebugMode {}
