//! Virtual joystick system.
//!
//! Mirrors a pointer drag on the left half of the window into the
//! analog axes of [`InputState`]. The stick is clamped to the joystick's
//! radius and the normalized offset is written every frame while the drag
//! lasts; on release both the overlay state and the axes reset.
//!
//! [`InputState`]: crate::resources::input::InputState
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::resources::input::InputState;
use crate::resources::joystick::VirtualJoystick;
use crate::resources::windowsize::WindowSize;

pub fn virtual_joystick(
    mut joystick: ResMut<VirtualJoystick>,
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    window: Res<WindowSize>,
) {
    let mouse = rl.get_mouse_position();

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
        && mouse.x < window.w as f32 * 0.5
    {
        joystick.active = true;
        joystick.base_x = mouse.x;
        joystick.base_y = mouse.y;
        joystick.stick_x = mouse.x;
        joystick.stick_y = mouse.y;
    }

    if joystick.active && rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
        let dx = mouse.x - joystick.base_x;
        let dy = mouse.y - joystick.base_y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist > joystick.max_distance {
            let angle = dy.atan2(dx);
            joystick.stick_x = joystick.base_x + angle.cos() * joystick.max_distance;
            joystick.stick_y = joystick.base_y + angle.sin() * joystick.max_distance;
        } else {
            joystick.stick_x = mouse.x;
            joystick.stick_y = mouse.y;
        }
    }

    if joystick.active && rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        joystick.active = false;
        joystick.stick_x = joystick.base_x;
        joystick.stick_y = joystick.base_y;
    }

    let (x, y) = joystick.axes();
    input.joystick.active = joystick.active;
    input.joystick.x = x;
    input.joystick.y = y;
}
