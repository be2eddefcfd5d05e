//! Character movement system.
//!
//! Turns the per-frame input snapshot into a movement intent, integrates it
//! against the clock and resolves the result against the island boundary and
//! the obstacle registry. Also eases the avatar's heading toward the travel
//! direction so the model turns instead of snapping.

use bevy_ecs::prelude::*;

use crate::components::character::Character;
use crate::components::worldposition::WorldPosition;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::obstacles::ObstacleRegistry;
use crate::resources::worldtime::WorldTime;

/// Fraction of the remaining turn applied each frame.
const HEADING_LERP: f32 = 0.2;

/// Raw movement intent from keys and joystick, x right, z toward camera.
pub fn intent(input: &InputState) -> (f32, f32) {
    let mut x = 0.0;
    let mut z = 0.0;
    if input.forward.active {
        z -= 1.0;
    }
    if input.backward.active {
        z += 1.0;
    }
    if input.left.active {
        x -= 1.0;
    }
    if input.right.active {
        x += 1.0;
    }
    x += input.joystick.x;
    z += input.joystick.y;
    (x, z)
}

/// Normalize an intent so diagonals are not faster than straight lines.
///
/// Single-axis intent passes through untouched, keeping the joystick's
/// partial deflections as slower movement.
pub fn normalize_intent(x: f32, z: f32) -> (f32, f32) {
    if x != 0.0 && z != 0.0 {
        let len = (x * x + z * z).sqrt();
        (x / len, z / len)
    } else {
        (x, z)
    }
}

/// Interpolate between two angles along the shortest arc.
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    let mut diff = to - from;
    while diff > std::f32::consts::PI {
        diff -= std::f32::consts::TAU;
    }
    while diff < -std::f32::consts::PI {
        diff += std::f32::consts::TAU;
    }
    from + diff * t
}

/// Integrate movement intent, keeping the avatar on the island and out of
/// the registered obstacle circles.
pub fn character_controller(
    mut query: Query<(&mut WorldPosition, &mut Character)>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    obstacles: Res<ObstacleRegistry>,
    config: Res<GameConfig>,
) {
    let Ok((mut position, mut character)) = query.single_mut() else {
        return;
    };

    let (ix, iz) = intent(&input);
    character.moving = ix != 0.0 || iz != 0.0;
    if !character.moving {
        return;
    }

    let (nx, nz) = normalize_intent(ix, iz);
    let step = config.move_speed * time.delta;
    let cx = position.pos.x + nx * step;
    let cz = position.pos.z + nz * step;

    let dist = (cx * cx + cz * cz).sqrt();
    if dist <= config.island_radius {
        if !obstacles.collides(cx, cz, config.character_radius) {
            position.pos.x = cx;
            position.pos.z = cz;
        }
    } else {
        // Slide along the boundary instead of stopping dead at it.
        let angle = cx.atan2(cz);
        position.pos.x = angle.sin() * config.island_radius;
        position.pos.z = angle.cos() * config.island_radius;
    }

    let target_heading = nx.atan2(nz);
    character.heading = lerp_angle(character.heading, target_heading, HEADING_LERP);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-5;

    #[test]
    fn diagonal_intent_is_unit_length() {
        let (x, z) = normalize_intent(1.0, -1.0);
        assert!(((x * x + z * z).sqrt() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn single_axis_intent_passes_through() {
        assert_eq!(normalize_intent(0.0, -1.0), (0.0, -1.0));
        assert_eq!(normalize_intent(0.35, 0.0), (0.35, 0.0));
    }

    #[test]
    fn lerp_angle_takes_shortest_arc() {
        // From just below +pi to just above -pi is a tiny step across the
        // seam, not a near-full turn.
        let result = lerp_angle(PI - 0.1, -PI + 0.1, 0.5);
        assert!((result.abs() - PI).abs() < 0.11);

        let quarter = lerp_angle(0.0, FRAC_PI_2, 0.5);
        assert!((quarter - FRAC_PI_2 * 0.5).abs() < EPSILON);
    }

    #[test]
    fn lerp_angle_converges() {
        let mut heading = 0.0;
        for _ in 0..60 {
            heading = lerp_angle(heading, PI * 0.75, 0.2);
        }
        assert!((heading - PI * 0.75).abs() < 1e-3);
    }

    #[test]
    fn opposed_keys_cancel() {
        let mut input = InputState::default();
        input.forward.active = true;
        input.backward.active = true;
        assert_eq!(intent(&input), (0.0, 0.0));
    }

    #[test]
    fn joystick_adds_to_keys() {
        let mut input = InputState::default();
        input.forward.active = true;
        input.joystick.x = 0.5;
        let (x, z) = intent(&input);
        assert_eq!((x, z), (0.5, -1.0));
    }
}
