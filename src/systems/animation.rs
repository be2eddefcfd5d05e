//! Walk animation system.
//!
//! Two paths share one system: when the loaded model carries a walk clip the
//! clip playback state advances while the avatar moves, otherwise a
//! procedural oscillator swings the placeholder limbs and bobs the body.
//! Both return to the rest pose when movement stops.

use bevy_ecs::prelude::*;

use crate::components::character::Character;
use crate::components::limbswing::LimbSwing;
use crate::components::worldposition::WorldPosition;
use crate::resources::walkclip::WalkClip;
use crate::resources::worldtime::WorldTime;

/// Walk-phase advance per second of movement.
const PHASE_SPEED: f32 = 8.0;
/// Peak leg swing in radians.
const LEG_SWING: f32 = 0.4;
/// Arms counter-swing at half amplitude.
const ARM_RATIO: f32 = -0.5;
/// Peak vertical hop in world units.
const BOB_HEIGHT: f32 = 0.05;

pub fn walk_animation(
    mut query: Query<(&Character, &mut LimbSwing, &mut WorldPosition)>,
    time: Res<WorldTime>,
    mut clip: ResMut<WalkClip>,
) {
    let Ok((character, mut swing, mut position)) = query.single_mut() else {
        return;
    };

    if clip.available {
        if character.moving {
            clip.playing = true;
            clip.advance(time.delta);
        } else if clip.playing {
            clip.reset();
        }
        return;
    }

    if character.moving {
        swing.phase += time.delta * PHASE_SPEED;
        swing.leg = swing.phase.sin() * LEG_SWING;
        swing.arm = swing.leg * ARM_RATIO;
        swing.bob = (swing.phase * 2.0).sin().abs() * BOB_HEIGHT;
    } else {
        swing.leg = 0.0;
        swing.arm = 0.0;
        swing.bob = 0.0;
    }
    position.pos.y = swing.bob;
}
