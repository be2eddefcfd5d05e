//! On-screen virtual joystick state.
//!
//! A press on the left half of the window anchors a joystick base
//! under the pointer; dragging moves the stick within a clamped radius and
//! the normalized offset feeds the analog axes of
//! [`InputState`](crate::resources::input::InputState). Releasing resets
//! everything, so there is no drift at rest.

use bevy_ecs::prelude::Resource;

const DEFAULT_MAX_DISTANCE: f32 = 50.0;

#[derive(Resource, Debug, Clone, Copy)]
pub struct VirtualJoystick {
    /// Whether a drag is in progress.
    pub active: bool,
    /// Screen position of the base, set on press.
    pub base_x: f32,
    pub base_y: f32,
    /// Screen position of the stick, clamped to `max_distance` of the base.
    pub stick_x: f32,
    pub stick_y: f32,
    /// Clamp radius in pixels; also the normalization divisor.
    pub max_distance: f32,
}

impl Default for VirtualJoystick {
    fn default() -> Self {
        Self {
            active: false,
            base_x: 0.0,
            base_y: 0.0,
            stick_x: 0.0,
            stick_y: 0.0,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl VirtualJoystick {
    /// Normalized stick offset, each axis in `[-1, 1]`.
    pub fn axes(&self) -> (f32, f32) {
        if !self.active {
            return (0.0, 0.0);
        }
        (
            (self.stick_x - self.base_x) / self.max_distance,
            (self.stick_y - self.base_y) / self.max_distance,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_stick_reports_zero() {
        let mut joystick = VirtualJoystick::default();
        joystick.stick_x = 25.0;
        assert_eq!(joystick.axes(), (0.0, 0.0));
    }

    #[test]
    fn axes_normalize_by_clamp_radius() {
        let joystick = VirtualJoystick {
            active: true,
            base_x: 100.0,
            base_y: 100.0,
            stick_x: 125.0,
            stick_y: 50.0,
            max_distance: 50.0,
        };
        let (x, y) = joystick.axes();
        assert!((x - 0.5).abs() < 1e-6);
        assert!((y + 1.0).abs() < 1e-6);
    }
}
