//! Per-frame input resource.
//!
//! Captures the directional intent, interact/back actions and the analog
//! joystick pair that the simulation cares about, and exposes them via the
//! [`InputState`] resource. Defaults bind WASD with the arrow keys as
//! alternates, Space/Enter for interact and Escape for back.
//!
//! The resource is written by the input systems at the top of the frame and
//! read-only to the character controller. The interact `just_pressed` edge
//! is consumed by the station proximity system once used.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean action state with a primary and an alternate keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the action is held this frame.
    pub active: bool,
    /// Whether the action was pressed this frame (one-shot edge).
    pub just_pressed: bool,
    /// Whether the action was released this frame.
    pub just_released: bool,

    pub key_binding: KeyboardKey,
    pub alt_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound(key_binding: KeyboardKey, alt_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
            alt_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL, KeyboardKey::KEY_NULL)
    }
}

/// Analog pair from the on-screen joystick, both axes in [-1, 1].
///
/// `x` is right-positive, `y` is down/backward-positive so it adds directly
/// onto the discrete backward axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoystickState {
    pub active: bool,
    pub x: f32,
    pub y: f32,
}

/// Resource capturing the per-frame input snapshot relevant to the island.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub forward: BoolState,
    pub backward: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    /// Interact with the active station (Space/Enter).
    pub interact: BoolState,
    /// Close the open panel, quit when nothing is open (Escape).
    pub back: BoolState,
    pub debug_toggle: BoolState,
    pub fullscreen_toggle: BoolState,
    pub joystick: JoystickState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            forward: BoolState::bound(KeyboardKey::KEY_W, KeyboardKey::KEY_UP),
            backward: BoolState::bound(KeyboardKey::KEY_S, KeyboardKey::KEY_DOWN),
            left: BoolState::bound(KeyboardKey::KEY_A, KeyboardKey::KEY_LEFT),
            right: BoolState::bound(KeyboardKey::KEY_D, KeyboardKey::KEY_RIGHT),
            interact: BoolState::bound(KeyboardKey::KEY_SPACE, KeyboardKey::KEY_ENTER),
            back: BoolState::bound(KeyboardKey::KEY_ESCAPE, KeyboardKey::KEY_NULL),
            debug_toggle: BoolState::bound(KeyboardKey::KEY_F11, KeyboardKey::KEY_NULL),
            fullscreen_toggle: BoolState::bound(KeyboardKey::KEY_F10, KeyboardKey::KEY_NULL),
            joystick: JoystickState::default(),
        }
    }
}
