//! ECS systems.
//!
//! Submodules overview
//! - [`time`] – writes the per-frame clock before the schedule runs
//! - [`input`] – polls raylib keyboard state into [`InputState`]
//! - [`joystick`] – pointer-driven virtual joystick
//! - [`character`] – movement intent, boundary clamp, obstacle rejection
//! - [`animation`] – walk clip playback or procedural limb swing
//! - [`stations`] – proximity activation and interaction edge
//! - [`labels`] – station label fade stepping
//! - [`camera`] – smoothed third-person follow
//! - [`gameconfig`] – applies config changes to the live window
//! - [`render`] – draws the frame, called outside the schedule
//!
//! [`InputState`]: crate::resources::input::InputState

pub mod animation;
pub mod camera;
pub mod character;
pub mod gameconfig;
pub mod input;
pub mod joystick;
pub mod labels;
pub mod render;
pub mod stations;
pub mod time;
