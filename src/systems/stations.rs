//! Station proximity system.
//!
//! Compares the avatar position against every station's activation circle
//! and keeps the registry's single active slot in sync, firing enter/exit
//! events on transitions. Also turns the interact key edge into an
//! [`InteractionEvent`] while a station is active, consuming the edge so it
//! fires once per press.

use bevy_ecs::prelude::*;

use crate::components::character::Character;
use crate::components::worldposition::WorldPosition;
use crate::events::station::{InteractionEvent, StationEnterEvent, StationExitEvent};
use crate::resources::input::InputState;
use crate::resources::stations::StationRegistry;

pub fn station_proximity(
    query: Query<&WorldPosition, With<Character>>,
    mut registry: ResMut<StationRegistry>,
    mut input: ResMut<InputState>,
    mut commands: Commands,
) {
    let Ok(position) = query.single() else {
        return;
    };

    let qualifying = registry.qualifying(position.pos.x, position.pos.z);
    if qualifying != registry.active_index() {
        if let Some(prev) = registry.active_index()
            && let Some(station) = registry.get(prev)
        {
            commands.trigger(StationExitEvent {
                index: prev,
                kind: station.kind,
            });
        }
        registry.set_active(qualifying);
        if let Some(next) = qualifying
            && let Some(station) = registry.get(next)
        {
            commands.trigger(StationEnterEvent {
                index: next,
                kind: station.kind,
            });
        }
    }

    if input.interact.just_pressed {
        if let Some(station) = registry.active() {
            commands.trigger(InteractionEvent {
                kind: station.kind,
            });
        }
        // One interaction per press, even if the schedule reruns.
        input.interact.just_pressed = false;
    }
}
