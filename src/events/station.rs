//! Station events and their observers.
//!
//! The proximity system fires [`StationEnterEvent`] and [`StationExitEvent`]
//! on activation transitions and [`InteractionEvent`] when the interact key
//! is pressed at an active station. Observers translate them into world
//! signals: entering the info sign shows the controls hint, interacting
//! opens the matching content panel.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::stations::StationKind;
use crate::resources::worldsignals::WorldSignals;

/// A station just became the active one.
#[derive(Event, Debug, Clone, Copy)]
pub struct StationEnterEvent {
    pub index: usize,
    pub kind: StationKind,
}

/// The previously active station was deactivated.
#[derive(Event, Debug, Clone, Copy)]
pub struct StationExitEvent {
    pub index: usize,
    pub kind: StationKind,
}

/// The interact key was pressed while a station was active.
#[derive(Event, Debug, Clone, Copy)]
pub struct InteractionEvent {
    pub kind: StationKind,
}

/// Show the controls hint while standing at the info sign.
pub fn station_enter_observer(trigger: On<StationEnterEvent>, mut signals: ResMut<WorldSignals>) {
    let event = trigger.event();
    info!("Entered station {} ({})", event.index, event.kind.as_str());
    if event.kind == StationKind::Info {
        signals.set_flag("controls_hint");
    }
}

/// Hide the controls hint when leaving the info sign.
pub fn station_exit_observer(trigger: On<StationExitEvent>, mut signals: ResMut<WorldSignals>) {
    let event = trigger.event();
    info!("Left station {} ({})", event.index, event.kind.as_str());
    if event.kind == StationKind::Info {
        signals.clear_flag("controls_hint");
    }
}

/// Open the content panel for the interacted station.
pub fn open_panel_observer(trigger: On<InteractionEvent>, mut signals: ResMut<WorldSignals>) {
    let kind = trigger.event().kind;
    info!("Opening panel: {}", kind.as_str());
    signals.set_string("panel", kind.as_str());
}
