//! Skeletal walk-clip playback state.
//!
//! When the character model ships with a walk animation, this resource
//! drives its frame advance; otherwise `available` stays false and the
//! procedural oscillator in
//! [`walk_animation`](crate::systems::animation::walk_animation) takes over.
//! Kept free of raylib types so the animation system stays headless.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy)]
pub struct WalkClip {
    /// Whether a clip was found on the loaded model.
    pub available: bool,
    /// Whether the clip should advance this frame.
    pub playing: bool,
    /// Clip sample rate in frames per second.
    pub fps: f32,
    /// Total frames in the clip.
    pub frame_count: i32,
    /// Current frame index, wrapped into `[0, frame_count)`.
    pub frame: i32,
    /// Accumulated time inside the current frame.
    pub frame_time: f32,
}

impl Default for WalkClip {
    fn default() -> Self {
        Self {
            available: false,
            playing: false,
            fps: 30.0,
            frame_count: 0,
            frame: 0,
            frame_time: 0.0,
        }
    }
}

impl WalkClip {
    /// Advance the clip by `delta` seconds, wrapping at the end.
    pub fn advance(&mut self, delta: f32) {
        if !self.playing || self.frame_count <= 0 {
            return;
        }
        self.frame_time += delta;
        let frame_len = 1.0 / self.fps;
        while self.frame_time >= frame_len {
            self.frame_time -= frame_len;
            self.frame = (self.frame + 1) % self.frame_count;
        }
    }

    /// Stop playback and rewind to the first frame.
    pub fn reset(&mut self) {
        self.playing = false;
        self.frame = 0;
        self.frame_time = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_at_clip_end() {
        let mut clip = WalkClip {
            available: true,
            playing: true,
            fps: 30.0,
            frame_count: 10,
            ..Default::default()
        };
        clip.advance(0.5); // 15 frames at 30 fps
        assert_eq!(clip.frame, 5);
    }

    #[test]
    fn stopped_clip_does_not_advance() {
        let mut clip = WalkClip {
            available: true,
            frame_count: 10,
            ..Default::default()
        };
        clip.advance(1.0);
        assert_eq!(clip.frame, 0);
    }
}
