//! Procedural walk-cycle pose.
//!
//! When no skeletal walk clip is available, the placeholder rig is animated
//! by an oscillator seeded with accumulated walk-phase time. The render
//! system applies the angles to the placeholder limbs.

use bevy_ecs::prelude::Component;

/// Oscillator state and the limb pose derived from it.
///
/// `leg` and `arm` are swing angles in radians; `bob` is the vertical hop
/// written to the avatar's `y`. All return to zero at rest.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct LimbSwing {
    /// Accumulated walk-phase time; only advances while moving.
    pub phase: f32,
    pub leg: f32,
    pub arm: f32,
    pub bob: f32,
}
