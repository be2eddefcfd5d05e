//! Input action events.
//!
//! This module defines [`InputEvent`], triggered when gameplay-relevant
//! input actions occur (press or release), and the observer that handles the
//! back action: Escape closes the open content panel, or asks the game to
//! quit when nothing is open.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::worldsignals::WorldSignals;

/// Enumeration of logical input actions.
///
/// These abstract the physical keys into gameplay-meaningful actions.
/// Interact is absent on purpose: its edge lives in
/// [`InputState`](crate::resources::input::InputState) and is consumed by
/// the station proximity system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Back/cancel action (default: Escape).
    Back,
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}

/// Observer handling the back action.
///
/// - With a panel open: close it.
/// - Otherwise: raise the `quit_game` flag for the main loop.
pub fn back_action_observer(trigger: On<InputEvent>, mut signals: ResMut<WorldSignals>) {
    let event = trigger.event();
    if event.action != InputAction::Back || !event.pressed {
        return;
    }
    if let Some(panel) = signals.remove_string("panel") {
        info!("Closed panel: {}", panel);
    } else {
        info!("Quit requested");
        signals.set_flag("quit_game");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_closes_panel_before_quitting() {
        let mut world = World::new();
        let mut signals = WorldSignals::default();
        signals.set_string("panel", "about");
        world.insert_resource(signals);
        world.add_observer(back_action_observer);

        world.trigger(InputEvent {
            action: InputAction::Back,
            pressed: true,
        });
        let signals = world.resource::<WorldSignals>();
        assert!(signals.get_string("panel").is_none());
        assert!(!signals.has_flag("quit_game"));

        world.trigger(InputEvent {
            action: InputAction::Back,
            pressed: true,
        });
        assert!(world.resource::<WorldSignals>().has_flag("quit_game"));
    }

    #[test]
    fn back_release_is_ignored() {
        let mut world = World::new();
        world.insert_resource(WorldSignals::default());
        world.add_observer(back_action_observer);
        world.trigger(InputEvent {
            action: InputAction::Back,
            pressed: false,
        });
        assert!(!world.resource::<WorldSignals>().has_flag("quit_game"));
    }
}
