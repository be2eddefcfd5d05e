//! Fullscreen marker resource.
//!
//! Present while the window is borderless-fullscreen; the
//! [`SwitchFullScreenEvent`](crate::events::switchfullscreen::SwitchFullScreenEvent)
//! observer inserts and removes it alongside the actual window toggle.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct FullScreen {}
