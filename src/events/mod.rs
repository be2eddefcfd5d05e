//! ECS events and their observers.
//!
//! Submodules overview
//! - [`input`] – logical input action press/release events
//! - [`station`] – station enter/exit and interaction events
//! - [`switchdebug`] – debug overlay toggle
//! - [`switchfullscreen`] – fullscreen toggle

pub mod input;
pub mod station;
pub mod switchdebug;
pub mod switchfullscreen;
