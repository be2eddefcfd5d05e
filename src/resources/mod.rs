//! ECS resources.
//!
//! Submodules overview
//! - [`input`] – per-frame keyboard and joystick snapshot
//! - [`joystick`] – on-screen virtual joystick state (pointer driven)
//! - [`worldtime`] – elapsed/delta simulation clock
//! - [`gameconfig`] – INI-backed window and simulation settings
//! - [`obstacles`] – flat registry of circular exclusion zones
//! - [`stations`] – station descriptors, activation state and label fades
//! - [`camerafollow`] – smoothed third-person camera state
//! - [`worldsignals`] – global string/flag signals (open panel, quit)
//! - [`modelstore`] – optional character model loaded from disk (non-send)
//! - [`walkclip`] – skeletal walk-clip playback state
//! - [`debugmode`] – marker enabling the debug overlay
//! - [`fullscreen`] – marker tracking fullscreen state
//! - [`windowsize`] – current window dimensions

pub mod camerafollow;
pub mod debugmode;
pub mod fullscreen;
pub mod gameconfig;
pub mod input;
pub mod joystick;
pub mod modelstore;
pub mod obstacles;
pub mod stations;
pub mod walkclip;
pub mod windowsize;
pub mod worldsignals;
pub mod worldtime;
