//! Station label fade system.
//!
//! Steps every floating label's opacity toward its target once per frame.
//! The targets themselves are set by
//! [`StationRegistry::set_active`](crate::resources::stations::StationRegistry::set_active).

use bevy_ecs::prelude::*;

use crate::resources::stations::StationRegistry;
use crate::resources::worldtime::WorldTime;

pub fn label_fade(mut registry: ResMut<StationRegistry>, time: Res<WorldTime>) {
    registry.advance_labels(time.delta);
}
