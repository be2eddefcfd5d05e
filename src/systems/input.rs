//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - Input events are emitted for the back edge plus the debug and
//!   fullscreen toggles; the interact edge is consumed directly from the
//!   resource by the station proximity system.
use bevy_ecs::prelude::*;

use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::events::switchfullscreen::SwitchFullScreenEvent;
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let poll = |state: &mut BoolState| {
        state.active = rl.is_key_down(state.key_binding) || rl.is_key_down(state.alt_binding);
        state.just_pressed =
            rl.is_key_pressed(state.key_binding) || rl.is_key_pressed(state.alt_binding);
        state.just_released =
            rl.is_key_released(state.key_binding) || rl.is_key_released(state.alt_binding);
    };

    // Movement keys
    poll(&mut input.forward);
    poll(&mut input.backward);
    poll(&mut input.left);
    poll(&mut input.right);
    // Action keys
    poll(&mut input.interact);
    poll(&mut input.back);
    poll(&mut input.debug_toggle);
    poll(&mut input.fullscreen_toggle);

    // Emit events on the action edges; the interact edge stays in the
    // resource and is consumed by the station proximity system.
    if input.debug_toggle.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.fullscreen_toggle.just_pressed {
        commands.trigger(SwitchFullScreenEvent {});
    }
    if input.back.just_pressed {
        commands.trigger(InputEvent {
            action: InputAction::Back,
            pressed: true,
        });
    }
    if input.back.just_released {
        commands.trigger(InputEvent {
            action: InputAction::Back,
            pressed: false,
        });
    }
}
