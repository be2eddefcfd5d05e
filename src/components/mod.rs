//! ECS components.
//!
//! Submodules overview
//! - [`worldposition`] – plain 3D position value type and component
//! - [`character`] – player avatar state (heading, moving flag)
//! - [`limbswing`] – procedural walk-cycle pose for the placeholder rig
//! - [`decor`] – decorative island geometry (trees, rocks, camp props)

pub mod character;
pub mod decor;
pub mod limbswing;
pub mod worldposition;
